pub mod assembly_version;
pub mod attribute_matcher;
pub mod change_set;
pub mod cli;
pub mod config;
pub mod encoding;
pub mod file_updater;
pub mod output;

use crate::change_set::{
    Change, ChangeSet, FILE_VERSION_ATTRIBUTE, INFORMATIONAL_VERSION_ATTRIBUTE,
};
use crate::cli::Args;
use crate::config::Config;
use crate::file_updater::update_file;
use crate::output::UpdateOutput;

pub struct UpdateApplication {
    config: Config,
    args: Args,
}

impl UpdateApplication {
    pub fn new(args: Args, config: Config) -> Self {
        Self { config, args }
    }

    pub fn run(&self) -> std::result::Result<UpdateOutput, Box<dyn std::error::Error>> {
        let changes = self.build_changes();

        // Nothing requested means nothing to do: print usage, touch no file.
        if changes.is_empty() {
            Args::print_help();
            return Ok(UpdateOutput {
                path: self.args.path.to_string_lossy().to_string(),
                changed: false,
                updated: vec![],
                appended: vec![],
            });
        }

        let default_encoding = self.config.fallback_encoding()?;

        println!("🔄 Updating {:?}", self.args.path);
        let mut change_set = ChangeSet::new(changes);
        let outcome = update_file(&self.args.path, &mut change_set, default_encoding)?;

        Ok(UpdateOutput {
            path: self.args.path.to_string_lossy().to_string(),
            changed: outcome.changed,
            updated: outcome.updated,
            appended: outcome.appended,
        })
    }

    /// The requested changes, in a fixed order: file version, informational
    /// version, commit date. CLI flags override the configuration.
    fn build_changes(&self) -> Vec<Change> {
        let mut changes = Vec::new();

        if enabled(self.args.file_version, self.config.attributes.file_version) {
            changes.push(Change::version(FILE_VERSION_ATTRIBUTE));
        }
        if enabled(
            self.args.informational_version,
            self.config.attributes.informational_version,
        ) {
            changes.push(Change::version(INFORMATIONAL_VERSION_ATTRIBUTE));
        }
        if enabled(self.args.commit_date, self.config.attributes.commit_date) {
            changes.push(Change::commit_date());
        }

        changes
    }
}

fn enabled(cli_override: Option<bool>, config_value: Option<bool>) -> bool {
    cli_override.unwrap_or_else(|| config_value.unwrap_or(true))
}

// Factory function for easier testing and dependency injection
pub fn create_update_application(
) -> std::result::Result<UpdateApplication, Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = Config::load(&args.config_file)
        .map_err(|e| format!("Failed to load config from {:?}: {}", args.config_file, e))?;

    Ok(UpdateApplication::new(args, config))
}
