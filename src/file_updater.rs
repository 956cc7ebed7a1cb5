use std::error::Error;
use std::path::Path;

use crate::change_set::{ChangeSet, ChangeSetOutcome};
use crate::encoding::{self, FileEncoding};

/// Reads the target file, runs the change set over its lines once, and
/// writes the file back with the encoding it was read with. The write only
/// happens when at least one line was rewritten or appended.
pub fn update_file<P: AsRef<Path>>(
    path: P,
    change_set: &mut ChangeSet,
    default_encoding: FileEncoding,
) -> std::result::Result<ChangeSetOutcome, Box<dyn Error>> {
    let path = path.as_ref();
    let (lines, detected) = encoding::read_lines(path, default_encoding)?;

    let outcome = change_set.apply(&lines);

    if outcome.changed {
        encoding::write_lines(path, &outcome.lines, detected)?;
        println!(
            "📝 Updated {:?} ({} encoding)",
            path,
            detected.name()
        );
    } else {
        println!("⚠️  No changes needed for {:?}", path);
    }

    Ok(outcome)
}
