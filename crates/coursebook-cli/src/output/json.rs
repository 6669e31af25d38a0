use coursebook_core::error::CoursebookError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), CoursebookError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
