//! Child-process invocation for the launcher.
//!
//! Everything the launcher asks of the outside world goes through
//! [`CommandRunner`], so the bootstrap decision table can be exercised
//! without a Node.js toolchain on the host.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// A command to run, with just the knobs the launcher needs.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.args.push(arg.to_string());
        self
    }

    pub fn args<'a>(mut self, args: impl IntoIterator<Item = &'a str>) -> Self {
        self.args.extend(args.into_iter().map(String::from));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Why an external command failed.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("{program}: executable not found on PATH")]
    NotFound { program: String },

    #[error("`{command}` exited with status {code}")]
    Exit { command: String, code: i32 },

    #[error("`{command}`: {source}")]
    Io {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Blocking command execution seam.
pub trait CommandRunner {
    /// Run to completion with inherited stdio. `Ok(())` iff exit code 0.
    fn status(&self, cmd: &CommandSpec) -> Result<(), ExecError>;

    /// Run with captured stdout, stderr discarded. `Ok(stdout)` iff exit code 0.
    fn capture(&self, cmd: &CommandSpec) -> Result<String, ExecError>;
}

/// Runs commands on the real system via `std::process`.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn status(&self, cmd: &CommandSpec) -> Result<(), ExecError> {
        let status = configure(cmd)
            .status()
            .map_err(|e| map_spawn_error(e, cmd))?;
        check_exit(status.code(), status.success(), cmd)
    }

    fn capture(&self, cmd: &CommandSpec) -> Result<String, ExecError> {
        let output = configure(cmd)
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| map_spawn_error(e, cmd))?;
        check_exit(output.status.code(), output.status.success(), cmd)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn configure(cmd: &CommandSpec) -> Command {
    let mut command = Command::new(&cmd.program);
    command.args(&cmd.args);
    if let Some(dir) = &cmd.current_dir {
        command.current_dir(dir);
    }
    command
}

fn check_exit(code: Option<i32>, success: bool, cmd: &CommandSpec) -> Result<(), ExecError> {
    if success {
        Ok(())
    } else {
        Err(ExecError::Exit {
            command: cmd.to_string(),
            code: code.unwrap_or(-1),
        })
    }
}

fn map_spawn_error(err: io::Error, cmd: &CommandSpec) -> ExecError {
    if err.kind() == io::ErrorKind::NotFound {
        ExecError::NotFound {
            program: cmd.program.clone(),
        }
    } else {
        ExecError::Io {
            command: cmd.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display() {
        let spec = CommandSpec::new("npm").args(["install", "--production"]);
        assert_eq!(spec.to_string(), "npm install --production");
    }

    #[test]
    fn test_status_success() {
        let spec = CommandSpec::new("sh").args(["-c", "exit 0"]);
        assert!(SystemRunner.status(&spec).is_ok());
    }

    #[test]
    fn test_status_nonzero_exit() {
        let spec = CommandSpec::new("sh").args(["-c", "exit 3"]);
        match SystemRunner.status(&spec) {
            Err(ExecError::Exit { code, .. }) => assert_eq!(code, 3),
            other => panic!("expected Exit error, got {:?}", other),
        }
    }

    #[test]
    fn test_status_not_found() {
        let spec = CommandSpec::new("definitely-not-a-real-program-0451");
        match SystemRunner.status(&spec) {
            Err(ExecError::NotFound { program }) => {
                assert_eq!(program, "definitely-not-a-real-program-0451");
            }
            other => panic!("expected NotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_capture_stdout() {
        let spec = CommandSpec::new("sh").args(["-c", "echo hello"]);
        let out = SystemRunner.capture(&spec).unwrap();
        assert_eq!(out.trim(), "hello");
    }

    #[test]
    fn test_error_text_is_classified() {
        let not_found = ExecError::NotFound {
            program: "node".to_string(),
        };
        assert!(not_found.to_string().contains("not found on PATH"));

        let exit = ExecError::Exit {
            command: "node --version".to_string(),
            code: 1,
        };
        assert!(exit.to_string().contains("exited with status 1"));
    }
}
