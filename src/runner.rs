//! Shell command execution.
//!
//! Provides the capability the menu tree uses to resolve command-origin
//! text lines: run a command line to completion and hand back whatever it
//! printed. The [`CommandRunner`] trait is the seam; [`ShellRunner`] is the
//! default implementation backed by the platform shell.

use std::process::{Command, Stdio};

/// Runs a command line and captures its output as text.
///
/// Implementations are synchronous and never fail: execution problems
/// (nonzero exit, missing binary) are reported inside the returned text,
/// not as errors. The menu tree treats that text as opaque.
pub trait CommandRunner {
    /// Run `command_line` to completion and return its captured output.
    fn run(&self, command_line: &str) -> String;
}

/// Default [`CommandRunner`] backed by the platform shell.
///
/// The command line is handed verbatim to `sh -c` (`cmd /C` on Windows), so
/// shell metacharacters in it behave as they would at a prompt. Standard
/// output and standard error are both captured and merged, and one trailing
/// newline is stripped. The call blocks until the command exits; no timeout
/// is applied and output is buffered in memory without bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command_line: &str) -> String {
        debug!("running {command_line:?}");

        let output = if cfg!(target_os = "windows") {
            Command::new("cmd")
                .args(["/C", command_line])
                .stdin(Stdio::null())
                .output()
        } else {
            Command::new("sh")
                .args(["-c", command_line])
                .stdin(Stdio::null())
                .output()
        };

        match output {
            Ok(output) => {
                let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
                text.push_str(&String::from_utf8_lossy(&output.stderr));
                if text.ends_with('\n') {
                    text.pop();
                    if text.ends_with('\r') {
                        text.pop();
                    }
                }
                text
            }
            Err(e) => {
                warn!("failed to spawn shell for {command_line:?}: {e}");
                e.to_string()
            }
        }
    }
}
