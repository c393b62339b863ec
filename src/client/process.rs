use crate::error::ClientError;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Maximum stderr kept in an error message.
const MAX_STDERR_BYTES: usize = 4096;

/// Run `program args...` to completion within `timeout` and return its stdout.
///
/// A non-zero exit becomes [`ClientError::CommandFailed`] carrying the
/// trimmed stderr. The child is killed if the timeout elapses.
pub(crate) async fn run(
    program: &str,
    args: &[&str],
    timeout: Duration,
) -> Result<String, ClientError> {
    let rendered = render(program, args);
    debug!(command = %rendered, "spawning");

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let output = match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(source)) => {
            return Err(ClientError::Spawn {
                program: program.to_string(),
                source,
            });
        }
        Err(_) => {
            return Err(ClientError::Timeout {
                command: rendered,
                timeout,
            });
        }
    };

    if !output.status.success() {
        let mut stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if stderr.len() > MAX_STDERR_BYTES {
            stderr.truncate(stderr.floor_char_boundary(MAX_STDERR_BYTES));
            stderr.push_str("... [truncated]");
        }
        return Err(ClientError::CommandFailed {
            command: rendered,
            status: output.status.to_string(),
            stderr,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn render(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
