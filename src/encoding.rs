use std::error::Error;
use std::path::Path;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Text encoding of the target file, detected from its byte-order mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileEncoding {
    Utf8,
    Utf8Bom,
    Utf16Le,
    Utf16Be,
}

impl FileEncoding {
    pub fn from_name(name: &str) -> Result<Self, Box<dyn Error>> {
        match name.to_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "utf-8-bom" | "utf8-bom" => Ok(Self::Utf8Bom),
            "utf-16le" | "utf16le" => Ok(Self::Utf16Le),
            "utf-16be" | "utf16be" => Ok(Self::Utf16Be),
            other => Err(format!("Unsupported encoding name: {}", other).into()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf8Bom => "utf-8-bom",
            Self::Utf16Le => "utf-16le",
            Self::Utf16Be => "utf-16be",
        }
    }
}

/// Picks an encoding from the leading byte-order mark, falling back to
/// `default` when none is present.
pub fn detect(bytes: &[u8], default: FileEncoding) -> FileEncoding {
    if bytes.starts_with(&UTF8_BOM) {
        FileEncoding::Utf8Bom
    } else if bytes.starts_with(&UTF16_LE_BOM) {
        FileEncoding::Utf16Le
    } else if bytes.starts_with(&UTF16_BE_BOM) {
        FileEncoding::Utf16Be
    } else {
        default
    }
}

fn decode(bytes: &[u8], encoding: FileEncoding) -> Result<String, Box<dyn Error>> {
    match encoding {
        FileEncoding::Utf8 | FileEncoding::Utf8Bom => {
            let body = bytes.strip_prefix(&UTF8_BOM[..]).unwrap_or(bytes);
            Ok(String::from_utf8(body.to_vec())
                .map_err(|e| format!("File is not valid UTF-8: {}", e))?)
        }
        FileEncoding::Utf16Le | FileEncoding::Utf16Be => {
            // The BOM is only present when the encoding was detected from
            // one; a BOM-less file read under a UTF-16 fallback keeps all
            // its bytes.
            let bom = if encoding == FileEncoding::Utf16Le {
                &UTF16_LE_BOM
            } else {
                &UTF16_BE_BOM
            };
            let body = bytes.strip_prefix(&bom[..]).unwrap_or(bytes);
            if body.len() % 2 != 0 {
                return Err("UTF-16 file has an odd number of bytes".into());
            }
            let units: Vec<u16> = body
                .chunks_exact(2)
                .map(|pair| {
                    if encoding == FileEncoding::Utf16Le {
                        u16::from_le_bytes([pair[0], pair[1]])
                    } else {
                        u16::from_be_bytes([pair[0], pair[1]])
                    }
                })
                .collect();
            Ok(String::from_utf16(&units)
                .map_err(|e| format!("File is not valid UTF-16: {}", e))?)
        }
    }
}

fn encode(text: &str, encoding: FileEncoding) -> Vec<u8> {
    match encoding {
        FileEncoding::Utf8 => text.as_bytes().to_vec(),
        FileEncoding::Utf8Bom => {
            let mut bytes = UTF8_BOM.to_vec();
            bytes.extend_from_slice(text.as_bytes());
            bytes
        }
        FileEncoding::Utf16Le => {
            let mut bytes = UTF16_LE_BOM.to_vec();
            for unit in text.encode_utf16() {
                bytes.extend_from_slice(&unit.to_le_bytes());
            }
            bytes
        }
        FileEncoding::Utf16Be => {
            let mut bytes = UTF16_BE_BOM.to_vec();
            for unit in text.encode_utf16() {
                bytes.extend_from_slice(&unit.to_be_bytes());
            }
            bytes
        }
    }
}

/// Splits decoded text into lines on `\r\n`, `\n` or `\r`. A trailing
/// terminator does not produce a final empty line.
fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\n' => lines.push(std::mem::take(&mut current)),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Reads all lines of `path`, detecting the encoding from the leading
/// byte-order mark and falling back to `default` when there is none.
pub fn read_lines<P: AsRef<Path>>(
    path: P,
    default: FileEncoding,
) -> Result<(Vec<String>, FileEncoding), Box<dyn Error>> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).map_err(|e| format!("Failed to read file {:?}: {}", path, e))?;

    let encoding = detect(&bytes, default);
    let text = decode(&bytes, encoding)?;

    Ok((split_lines(&text), encoding))
}

/// Writes `lines` back to `path` with the same encoding the file was read
/// with, terminating every line.
pub fn write_lines<P: AsRef<Path>>(
    path: P,
    lines: &[String],
    encoding: FileEncoding,
) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    let mut text = String::new();
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }

    std::fs::write(path, encode(&text, encoding))
        .map_err(|e| format!("Failed to write file {:?}: {}", path, e))?;

    Ok(())
}
