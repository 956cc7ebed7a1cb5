/// A located attribute declaration on a single line.
///
/// `start` is the byte offset of the attribute name, `end` is the byte offset
/// of the closing `")]` token. The payload is the exact text between the
/// opening `("` and the closing token, outer quotes excluded.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeMatch {
    pub payload: String,
    pub start: usize,
    pub end: usize,
}

const ASSEMBLY_MARKER: &str = "[assembly: ";
const END_TOKEN: &str = "\")]";

/// Locates an attribute declaration for `name` on a single line.
///
/// Matching is purely lexical: the trimmed line must start with
/// `[assembly: `, then the literal `name("` and a later `")]` must appear in
/// order. No C# parsing happens here, so the tokens will also match inside a
/// misleading context such as a string literal elsewhere on the line.
pub fn locate(line: &str, name: &str) -> Option<AttributeMatch> {
    let trimmed = line.trim_start();
    if !trimmed.starts_with(ASSEMBLY_MARKER) {
        return None;
    }

    let start_token = format!("{}(\"", name);
    let start = line.find(&start_token)?;

    let payload_start = start + start_token.len();
    let end_rel = line[payload_start..].find(END_TOKEN)?;
    let end = payload_start + end_rel;

    Some(AttributeMatch {
        payload: line[payload_start..end].to_string(),
        start,
        end,
    })
}

/// Rebuilds the line with `new_payload` substituted into a previous match.
///
/// Everything before the attribute name and after the closing token is kept
/// byte for byte.
pub fn replace_payload(line: &str, name: &str, m: &AttributeMatch, new_payload: &str) -> String {
    format!(
        "{}{}(\"{}{}{}",
        &line[..m.start],
        name,
        new_payload,
        END_TOKEN,
        &line[m.end + END_TOKEN.len()..]
    )
}
