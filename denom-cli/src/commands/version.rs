//! `denom version` — binary target and version line.

use anyhow::Result;

use denom_runtime::installer::platform_target;

/// `denom-<target>` on the first line, `version@<version>` on the second.
pub fn version_string() -> Result<String> {
    let target = platform_target()?;
    Ok(format!(
        "denom-{target}\nversion@{}",
        env!("CARGO_PKG_VERSION")
    ))
}

pub fn run() -> Result<()> {
    println!("{}", version_string()?);
    Ok(())
}
