use std::env;
use std::path::PathBuf;

#[derive(Debug)]
pub struct Args {
    pub path: PathBuf,
    pub config_file: PathBuf,
    pub file_version: Option<bool>,
    pub informational_version: Option<bool>,
    pub commit_date: Option<bool>,
}

impl Args {
    pub fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut path = None;
        let mut config_file = PathBuf::from(".update-assembly-info.toml");
        let mut file_version = None;
        let mut informational_version = None;
        let mut commit_date = None;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config-file" => {
                    if i + 1 < args.len() {
                        config_file = PathBuf::from(&args[i + 1]);
                        i += 2;
                    } else {
                        eprintln!("Error: --config-file requires a value");
                        std::process::exit(1);
                    }
                }
                "--no-file-version" => {
                    file_version = Some(false);
                    i += 1;
                }
                "--no-informational-version" => {
                    informational_version = Some(false);
                    i += 1;
                }
                "--no-commit-date" => {
                    commit_date = Some(false);
                    i += 1;
                }
                "--help" | "-h" => {
                    Self::print_help();
                    std::process::exit(0);
                }
                arg if arg.starts_with("--") => {
                    eprintln!("Error: Unknown argument: {}", arg);
                    eprintln!("Use --help for usage information");
                    std::process::exit(1);
                }
                arg => {
                    path = Some(PathBuf::from(arg));
                    i += 1;
                }
            }
        }

        // No file path means there is nothing to update.
        let path = match path {
            Some(path) => path,
            None => {
                Self::print_help();
                std::process::exit(0);
            }
        };

        Self {
            path,
            config_file,
            file_version,
            informational_version,
            commit_date,
        }
    }

    pub fn print_help() {
        println!("update-assembly-info <file path>");
        println!("Updates the AssemblyFileVersion, AssemblyInformationalVersion and commit date attributes in an AssemblyInfo-style file");
        println!();
        println!("OPTIONS:");
        println!("    --config-file <FILE>           Path to the configuration file [default: .update-assembly-info.toml]");
        println!("    --no-file-version              Do not update the AssemblyFileVersion attribute");
        println!("    --no-informational-version     Do not update the AssemblyInformationalVersion attribute");
        println!("    --no-commit-date               Do not update the Commit Date metadata attribute");
        println!("    --help, -h                     Print help information");
        println!();
        println!("EXAMPLE:");
        println!();
        println!("    update-assembly-info AssemblyInfo.cs");
        println!();
        println!("    Increments the version attributes and refreshes the commit date in AssemblyInfo.cs,");
        println!("    appending any attribute that is missing.");
    }
}
