use std::error::Error;
use update_assembly_info::{create_update_application, output::output_results};

fn main() {
    // Errors are printed, not propagated: the process always exits normally.
    if let Err(e) = real_main() {
        println!("❌ {}", e);
    }
}

fn real_main() -> Result<(), Box<dyn Error>> {
    println!("update-assembly-info - assembly version and commit date updater");
    println!();

    let app = create_update_application()?;
    let result = app.run()?;
    output_results(result)?;
    Ok(())
}
