//! Node.js environment bootstrap.
//!
//! Prepares the runtime the agent server needs before handoff: probes for a
//! `node` executable and installs production dependencies when the local
//! `node_modules` directory is missing. Failures here are logged and
//! suppressed, never fatal - the runtime may be reachable through mechanisms
//! the probe does not exercise, and a truly broken environment surfaces with
//! a better error once the agent actually needs it.

use colored::Colorize;

use crate::config::Config;
use crate::exec::{CommandRunner, CommandSpec, ExecError};

/// Outcome of the `node --version` availability probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeProbe {
    Available,
    /// Probe failed; holds the classified error text.
    Unavailable(String),
}

/// Outcome of the dependency install step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// `node_modules` already present, install suppressed
    Present,
    Installed,
    /// Install ran and failed; holds the classified error text.
    Failed(String),
    /// Probe failed, install never attempted
    Skipped,
}

/// What the bootstrap did, for display and for tests.
#[derive(Debug, Clone)]
pub struct BootstrapReport {
    pub node: NodeProbe,
    pub install: InstallOutcome,
}

impl BootstrapReport {
    /// True when nothing went wrong.
    pub fn clean(&self) -> bool {
        self.node == NodeProbe::Available && !matches!(self.install, InstallOutcome::Failed(_))
    }
}

/// Bootstrapper for the Node.js environment.
pub struct Bootstrap<'a> {
    runner: &'a dyn CommandRunner,
    config: &'a Config,
}

impl<'a> Bootstrap<'a> {
    pub fn new(runner: &'a dyn CommandRunner, config: &'a Config) -> Self {
        Self { runner, config }
    }

    /// Prepare the Node.js environment.
    ///
    /// Never fails: problems are logged, recorded in the report, and startup
    /// continues regardless.
    pub fn prepare(&self) -> BootstrapReport {
        println!("Setting up Node.js environment...");

        if let Err(err) = self.probe_node() {
            print_diagnostic(&err);
            return BootstrapReport {
                node: NodeProbe::Unavailable(err.to_string()),
                install: InstallOutcome::Skipped,
            };
        }
        println!("  {} Node.js is available", "✓".green());

        let install = if self.config.node_modules().exists() {
            InstallOutcome::Present
        } else {
            println!("Installing Node.js dependencies...");
            match self.install_dependencies() {
                Ok(()) => {
                    println!("  {} Dependencies installed", "✓".green());
                    InstallOutcome::Installed
                }
                Err(err) => {
                    print_diagnostic(&err);
                    InstallOutcome::Failed(err.to_string())
                }
            }
        };

        BootstrapReport {
            node: NodeProbe::Available,
            install,
        }
    }

    /// Availability probe. The version output is shown, never parsed.
    fn probe_node(&self) -> Result<(), ExecError> {
        self.runner.status(
            &CommandSpec::new("node")
                .arg("--version")
                .current_dir(&self.config.workdir),
        )
    }

    fn install_dependencies(&self) -> Result<(), ExecError> {
        self.runner.status(
            &CommandSpec::new("npm")
                .args(["install", "--production"])
                .current_dir(&self.config.workdir),
        )
    }
}

fn print_diagnostic(err: &ExecError) {
    println!(
        "  {} Error setting up Node.js: {}",
        "⚠️".yellow(),
        err
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_report() {
        let report = BootstrapReport {
            node: NodeProbe::Available,
            install: InstallOutcome::Present,
        };
        assert!(report.clean());
    }

    #[test]
    fn test_failed_install_is_not_clean() {
        let report = BootstrapReport {
            node: NodeProbe::Available,
            install: InstallOutcome::Failed("npm exited with status 1".to_string()),
        };
        assert!(!report.clean());
    }

    #[test]
    fn test_unavailable_node_is_not_clean() {
        let report = BootstrapReport {
            node: NodeProbe::Unavailable("node: executable not found on PATH".to_string()),
            install: InstallOutcome::Skipped,
        };
        assert!(!report.clean());
    }
}
