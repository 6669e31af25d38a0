use coursebook_core::error::CoursebookError;
use coursebook_core::setup;

pub fn run(check: bool) -> Result<(), CoursebookError> {
    setup::write_instructions(&mut std::io::stdout().lock())?;

    if check {
        println!();
        for tool in setup::probe_tools() {
            let status = if tool.found { "found" } else { "missing" };
            println!("  {:<10} {}", tool.name, status);
        }
    }

    Ok(())
}
