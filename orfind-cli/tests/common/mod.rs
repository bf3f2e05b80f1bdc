#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;

/// Path of a fixture under `tests/data`
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// Orfind command with logging left at the CLI defaults
pub fn orfind() -> Command {
    let mut cmd = Command::cargo_bin("orfind").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Runs the Orfind CLI on a fixture and returns its stdout
pub fn run_orfind(input_file: &str, args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let output = orfind()
        .arg("-i")
        .arg(fixture(input_file))
        .args(args)
        .output()?;

    if !output.status.success() {
        return Err(format!(
            "orfind failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )
        .into());
    }
    Ok(String::from_utf8(output.stdout)?)
}
