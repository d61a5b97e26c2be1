//! Application handoff boundary.
//!
//! The agent framework is opaque to the launcher: an application exposes a
//! constructor taking a name and a zero-argument blocking run method,
//! nothing more.

use anyhow::Result;

use crate::config::SERVER_ENTRY;
use crate::exec::{CommandRunner, CommandSpec, SystemRunner};

/// An agent application the launcher can hand control to.
pub trait Application {
    fn name(&self) -> &str;

    /// Run the application to completion. Blocks until the run loop exits;
    /// errors propagate unmodified to the caller.
    fn run(&self) -> Result<()>;
}

static SYSTEM_RUNNER: SystemRunner = SystemRunner;

/// The MCP agent application, hosted by the Node.js runtime.
pub struct McpApp<'a> {
    name: String,
    runner: &'a dyn CommandRunner,
}

impl McpApp<'static> {
    /// Construct the application. Performs no I/O - nothing starts until
    /// [`Application::run`] is called.
    pub fn new(name: &str) -> Self {
        Self::with_runner(name, &SYSTEM_RUNNER)
    }
}

impl<'a> McpApp<'a> {
    pub fn with_runner(name: &str, runner: &'a dyn CommandRunner) -> McpApp<'a> {
        McpApp {
            name: name.to_string(),
            runner,
        }
    }
}

impl Application for McpApp<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self) -> Result<()> {
        // Hand control to the agent server in the ambient working directory.
        // The run loop owns the process from here; stdio is inherited because
        // the MCP transport rides on it.
        self.runner
            .status(&CommandSpec::new("node").arg(SERVER_ENTRY))?;
        Ok(())
    }
}
