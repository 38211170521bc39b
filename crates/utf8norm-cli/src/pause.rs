//! Optional confirmation before the process exits

use std::io::{self, BufRead, Write};

const PROMPT: &str = "Press Enter to continue...";

/// Print a prompt and block until a line (or EOF) is read
///
/// # Errors
/// Returns an error if writing the prompt or reading input fails.
pub fn wait_for_confirmation<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    write!(output, "{PROMPT}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

/// Wait for Enter on the terminal
pub fn pause() {
    let stdin = io::stdin();
    if let Err(e) = wait_for_confirmation(&mut stdin.lock(), &mut io::stderr()) {
        tracing::debug!("Pause interrupted: {}", e);
    }
}
