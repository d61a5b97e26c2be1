use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::path::Path;

use crate::config::SERVER_ENTRY;
use crate::exec::{CommandRunner, CommandSpec};

/// Snapshot of the runtime environment the agent server depends on.
#[derive(Debug, Serialize, Deserialize)]
pub struct Environment {
    pub os: String,
    pub arch: String,
    pub current_dir: String,
    pub tools: BTreeMap<String, ToolInfo>,
    /// The agent refuses to start without MONGO_URI; the value is never recorded.
    pub mongo_uri_set: bool,
    pub dotenv_present: bool,
    pub node_modules_present: bool,
    pub server_entry_present: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToolInfo {
    pub available: bool,
    pub version: Option<String>,
    pub path: Option<String>,
}

impl Environment {
    /// Detect the tools and working-directory facts the agent needs.
    pub fn detect(runner: &dyn CommandRunner, workdir: &Path) -> Self {
        let mut tools = BTreeMap::new();
        for tool in ["node", "npm", "npx", "git"] {
            tools.insert(tool.to_string(), detect_tool(runner, tool));
        }

        Environment {
            os: env::consts::OS.to_string(),
            arch: env::consts::ARCH.to_string(),
            current_dir: workdir.display().to_string(),
            tools,
            mongo_uri_set: env::var("MONGO_URI").is_ok(),
            dotenv_present: workdir.join(".env").exists(),
            node_modules_present: workdir.join("node_modules").exists(),
            server_entry_present: workdir.join(SERVER_ENTRY).exists(),
        }
    }

    pub fn tool_available(&self, name: &str) -> bool {
        self.tools.get(name).is_some_and(|t| t.available)
    }
}

fn detect_tool(runner: &dyn CommandRunner, name: &str) -> ToolInfo {
    let mut info = ToolInfo {
        available: false,
        version: None,
        path: None,
    };

    if let Ok(path) = which::which(name) {
        info.available = true;
        info.path = Some(path.display().to_string());

        // First line only; npm prints a bare version, node prints "vX.Y.Z"
        if let Ok(output) = runner.capture(&CommandSpec::new(name).arg("--version")) {
            let line = output.lines().next().unwrap_or("").trim();
            if !line.is_empty() {
                info.version = Some(line.to_string());
            }
        }
    }

    info
}
