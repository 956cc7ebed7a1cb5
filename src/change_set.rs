use chrono::Utc;

use crate::assembly_version;
use crate::attribute_matcher;

pub const FILE_VERSION_ATTRIBUTE: &str = "AssemblyFileVersion";
pub const INFORMATIONAL_VERSION_ATTRIBUTE: &str = "AssemblyInformationalVersion";
pub const METADATA_ATTRIBUTE: &str = "AssemblyMetadata";
pub const COMMIT_DATE_KEY: &str = "Commit Date";

const ATTRIBUTE_SUFFIX: &str = "Attribute";

#[derive(Debug, Clone, PartialEq)]
pub enum ChangeKind {
    Version,
    CommitDate,
}

/// One unit of work: find-and-update, or else create, a single attribute
/// declaration. `new_line` is set at most once, the first time a line
/// matches; a consumed change never matches again.
#[derive(Debug)]
pub struct Change {
    pub attribute_name: String,
    pub kind: ChangeKind,
    pub new_line: Option<String>,
}

impl Change {
    pub fn version(attribute_name: &str) -> Self {
        Self {
            attribute_name: attribute_name.to_string(),
            kind: ChangeKind::Version,
            new_line: None,
        }
    }

    pub fn commit_date() -> Self {
        Self {
            attribute_name: METADATA_ATTRIBUTE.to_string(),
            kind: ChangeKind::CommitDate,
            new_line: None,
        }
    }

    pub fn is_consumed(&self) -> bool {
        self.new_line.is_some()
    }

    /// Tries to rewrite `line` for this change, first under the bare
    /// attribute name, then under the `Attribute`-suffixed variant. On
    /// success records the rewritten line and returns it.
    pub fn update_line(&mut self, line: &str) -> Option<String> {
        if self.is_consumed() {
            return None;
        }

        let bare = self.attribute_name.clone();
        let suffixed = format!("{}{}", self.attribute_name, ATTRIBUTE_SUFFIX);

        for name in [bare, suffixed] {
            if let Some(new_line) = self.rewrite_with_name(line, &name) {
                self.new_line = Some(new_line.clone());
                return Some(new_line);
            }
        }

        None
    }

    fn rewrite_with_name(&self, line: &str, name: &str) -> Option<String> {
        let m = attribute_matcher::locate(line, name)?;
        let new_payload = self.compute_replacement(&m.payload)?;
        let new_line = attribute_matcher::replace_payload(line, name, &m, &new_payload);

        // A version rewrite that changes nothing textually is not a change.
        // Commit dates always get a fresh timestamp and always count.
        if self.kind == ChangeKind::Version && new_line == line {
            return None;
        }

        Some(new_line)
    }

    fn compute_replacement(&self, payload: &str) -> Option<String> {
        match self.kind {
            ChangeKind::Version => Some(assembly_version::next_payload(payload)),
            ChangeKind::CommitDate => {
                if !payload.starts_with(COMMIT_DATE_KEY) {
                    return None;
                }
                Some(format!("{}\", \"{}", COMMIT_DATE_KEY, rfc1123_now()))
            }
        }
    }

    /// The brand-new declaration appended when no existing line matched.
    pub fn create_line(&self) -> String {
        match self.kind {
            ChangeKind::Version => format!("[assembly: {}(\"1.0.0.0\")]", self.attribute_name),
            ChangeKind::CommitDate => format!(
                "[assembly: {}(\"{}\", \"{}\")]",
                self.attribute_name,
                COMMIT_DATE_KEY,
                rfc1123_now()
            ),
        }
    }
}

/// A changed or appended line, for the run summary.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ChangedLine {
    pub attribute: String,
    pub line: String,
}

#[derive(Debug)]
pub struct ChangeSetOutcome {
    pub lines: Vec<String>,
    pub updated: Vec<ChangedLine>,
    pub appended: Vec<ChangedLine>,
    pub changed: bool,
}

/// An ordered collection of changes, applied once over a file's lines.
pub struct ChangeSet {
    changes: Vec<Change>,
}

impl ChangeSet {
    pub fn new(changes: Vec<Change>) -> Self {
        Self { changes }
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Runs every change over `lines` in one pass.
    ///
    /// Each line is offered to every still-unconsumed change in insertion
    /// order, always against the original line text. Every match pushes that
    /// change's rewritten line, so a line containing more than one matchable
    /// token is emitted once per matching change. Lines nobody claimed pass
    /// through untouched. Changes left unconsumed after the scan append
    /// their creation line at the end.
    pub fn apply(&mut self, lines: &[String]) -> ChangeSetOutcome {
        let mut new_lines = Vec::with_capacity(lines.len());
        let mut updated = Vec::new();
        let mut appended = Vec::new();
        let mut changed = false;

        for line in lines {
            let mut matched = false;
            for change in self.changes.iter_mut() {
                if let Some(new_line) = change.update_line(line) {
                    new_lines.push(new_line.clone());
                    updated.push(ChangedLine {
                        attribute: change.attribute_name.clone(),
                        line: new_line,
                    });
                    changed = true;
                    matched = true;
                }
            }

            if !matched {
                new_lines.push(line.clone());
            }
        }

        for change in self.changes.iter_mut().filter(|c| !c.is_consumed()) {
            let line = change.create_line();
            new_lines.push(line.clone());
            appended.push(ChangedLine {
                attribute: change.attribute_name.clone(),
                line: line.clone(),
            });
            change.new_line = Some(line);
            changed = true;
        }

        ChangeSetOutcome {
            lines: new_lines,
            updated,
            appended,
            changed,
        }
    }
}

pub fn rfc1123_now() -> String {
    Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
