use serde::Serialize;

use crate::change_set::ChangedLine;

#[derive(Serialize)]
pub struct UpdateOutput {
    pub path: String,
    pub changed: bool,
    pub updated: Vec<ChangedLine>,
    pub appended: Vec<ChangedLine>,
}

pub fn output_results(output: UpdateOutput) -> std::result::Result<(), Box<dyn std::error::Error>> {
    for change in &output.updated {
        println!("✏️  {} => '{}'", change.attribute, change.line);
    }
    for change in &output.appended {
        println!("➕ {} => '{}'", change.attribute, change.line);
    }

    if !output.changed {
        println!("ℹ️ No attributes were updated");
    }

    // Also output as JSON for debugging
    println!("📊 Result: {}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
