// src/prompt.rs
// Blocking stdin prompts for the interactive flow.

use std::io::{self, Write};

/// Print `msg` (no newline), read one trimmed line.
pub fn line(msg: &str) -> io::Result<String> {
    print!("{msg}");
    io::stdout().flush()?;
    let mut buf = s!();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

/// Enter-to-continue gate. Input is discarded.
pub fn pause(msg: &str) -> io::Result<()> {
    line(msg).map(|_| ())
}

/// Numeric-or-blank prompt: digits parse to a cap, anything else means
/// "no cap" (take everything on the page).
pub fn count_or_all(msg: &str) -> io::Result<Option<usize>> {
    let v = line(msg)?;
    if !v.is_empty() && v.chars().all(|c| c.is_ascii_digit()) {
        return Ok(v.parse().ok());
    }
    Ok(None)
}

pub fn confirm(msg: &str) -> io::Result<bool> {
    Ok(line(msg)?.eq_ignore_ascii_case("y"))
}
