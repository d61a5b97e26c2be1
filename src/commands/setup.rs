//! Setup command - prepare the Node.js environment without starting the agent.

use anyhow::Result;
use colored::Colorize;

use disasterscout::bootstrap::Bootstrap;
use disasterscout::config::Config;
use disasterscout::exec::SystemRunner;

pub fn execute() -> Result<()> {
    let config = Config::load()?;
    let runner = SystemRunner;

    let report = Bootstrap::new(&runner, &config).prepare();

    if report.clean() {
        println!("\n{} Environment ready", "✓".green().bold());
    } else {
        println!(
            "\n{} Environment prepared with warnings - the agent may fail at startup",
            "⚠️".yellow()
        );
    }

    Ok(())
}
