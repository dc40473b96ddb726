//! Minimal stdin prompting for `denom init`.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

/// Ask one question, falling back to `default` on an empty answer
/// (including EOF).
pub fn ask(question: &str, default: &str) -> Result<String> {
    print!("{question} ({default}): ");
    std::io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read answer")?;
    let answer = line.trim();
    Ok(if answer.is_empty() {
        default.to_owned()
    } else {
        answer.to_owned()
    })
}

/// Yes/no confirmation, defaulting to no.
pub fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N]: ");
    std::io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read answer")?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
