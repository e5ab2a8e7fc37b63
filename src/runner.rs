use std::path::PathBuf;
use std::process::Command;

use anyhow::Context;

/// Extract an exit code from a process status, mapping signals to 128+N on Unix.
fn exit_code_from_status(status: std::process::ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        status
            .code()
            .unwrap_or_else(|| status.signal().map_or(1, |s| 128 + s))
    }
    #[cfg(not(unix))]
    {
        status.code().unwrap_or(1)
    }
}

/// Spawn the command template with `files` appended as trailing arguments
/// and block until it terminates.
///
/// Exactly one process is spawned; stdin/stdout/stderr are inherited so the
/// child's output streams to the user in real time. A child that runs and
/// exits non-zero is not an error here; its exit code is returned as-is.
///
/// # Errors
///
/// Returns an error if the template is empty or the process cannot be
/// spawned (e.g. the program does not exist or is not executable).
pub fn invoke(template: &[String], files: &[PathBuf]) -> anyhow::Result<i32> {
    let (program, leading_args) = template
        .split_first()
        .ok_or_else(|| anyhow::anyhow!("empty command"))?;

    let status = Command::new(program)
        .args(leading_args)
        .args(files)
        .status()
        .with_context(|| format!("failed to run {program}"))?;

    Ok(exit_code_from_status(status))
}
