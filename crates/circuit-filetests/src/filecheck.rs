//! Filecheck directive parsing and matching using the filecheck crate

use filecheck::{Checker, CheckerBuilder, NO_VARIABLES};

/// Build a filechecker from expected text containing directives
pub fn build_filechecker(expected_text: &str) -> Result<Checker, String> {
    let mut builder = CheckerBuilder::new();
    for line in expected_text.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }
        let found = builder
            .directive(line)
            .map_err(|e| format!("bad filecheck directive '{}': {}", line, e))?;
        if !found {
            return Err(format!("not a filecheck directive: '{}'", line));
        }
    }
    Ok(builder.finish())
}

/// Match actual output against filecheck directives
pub fn match_filecheck(actual: &str, expected_text: &str) -> Result<(), String> {
    let checker = build_filechecker(expected_text)?;
    if checker
        .check(actual, NO_VARIABLES)
        .map_err(|e| format!("filecheck error: {}", e))?
    {
        return Ok(());
    }
    let (_, explain) = checker
        .explain(actual, NO_VARIABLES)
        .map_err(|e| format!("filecheck explain failed: {}", e))?;
    Err(format!("filecheck failed:\n{}", explain))
}

/// Panic with the explanation and the actual dump if matching fails.
pub fn assert_filecheck(actual: &str, expected_text: &str) {
    if let Err(message) = match_filecheck(actual, expected_text) {
        panic!("{}\n\nActual:\n{}", message, actual);
    }
}
