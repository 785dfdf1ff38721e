use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::JqError;

fn jq_args(filter: &str, use_color: bool) -> [&str; 2] {
    [if use_color { "-C" } else { "-M" }, filter]
}

/// Pipe JSON through `jq` and return its stdout
pub(crate) fn filter_json(json: &str, filter: &str, use_color: bool) -> Result<String, JqError> {
    log::debug!("running jq {filter:?}");
    let mut child = Command::new("jq")
        .args(jq_args(filter, use_color))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => JqError::NotFound,
            _ => JqError::Spawn(e),
        })?;

    // Dropping stdin at the end of this block closes the pipe so jq sees EOF
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(json.as_bytes()).map_err(JqError::Stdin)?;
    }

    let output = child.wait_with_output().map_err(JqError::Wait)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(JqError::Filter(stderr.trim().to_string()));
    }
    String::from_utf8(output.stdout).map_err(JqError::Utf8)
}
