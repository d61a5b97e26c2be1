//! Run command - bootstrap the environment, then hand off to the agent.
//!
//! This is the default when no subcommand is given. Bootstrap problems are
//! advisory and never block the handoff; an error from the run loop
//! propagates to the process boundary.

use anyhow::Result;

use disasterscout::app::{Application, McpApp};
use disasterscout::bootstrap::Bootstrap;
use disasterscout::config::{Config, APP_NAME};
use disasterscout::exec::SystemRunner;

pub fn execute() -> Result<()> {
    let config = Config::load()?;
    let runner = SystemRunner;

    Bootstrap::new(&runner, &config).prepare();

    let app = McpApp::new(APP_NAME);
    app.run()
}
