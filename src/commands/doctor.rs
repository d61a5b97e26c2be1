//! Doctor command - report on the runtime environment the agent needs.

use anyhow::Result;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use disasterscout::config::{Config, SERVER_ENTRY};
use disasterscout::environment::Environment;
use disasterscout::exec::SystemRunner;

#[derive(Serialize, Deserialize)]
struct HealthCheck {
    status: String, // "healthy", "warning", "critical"
    environment: Environment,
    recommendations: Vec<String>,
}

pub fn execute(json_output: bool) -> Result<i32> {
    let config = Config::load()?;
    let runner = SystemRunner;

    if !json_output {
        println!("🏥 Checking agent environment...");
    }

    let environment = Environment::detect(&runner, &config.workdir);
    let health = analyze(environment);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&health)?);
    } else {
        display(&health);
    }

    let exit_code = match health.status.as_str() {
        "healthy" => 0,
        "warning" => 2,
        _ => 3,
    };
    Ok(exit_code)
}

fn analyze(environment: Environment) -> HealthCheck {
    let mut recommendations = Vec::new();
    let mut warnings = 0usize;
    let mut critical = false;

    if !environment.tool_available("node") {
        critical = true;
        recommendations.push(format!("Install Node.js: {}", install_hint("node")));
    }
    if !environment.tool_available("npm") {
        warnings += 1;
        recommendations.push(format!("Install npm: {}", install_hint("npm")));
    }
    if !environment.node_modules_present {
        warnings += 1;
        recommendations.push("Install dependencies: npm install --production".to_string());
    }
    if !environment.server_entry_present {
        warnings += 1;
        recommendations.push(format!("Build the agent server: {} is missing", SERVER_ENTRY));
    }
    if !environment.mongo_uri_set && !environment.dotenv_present {
        warnings += 1;
        recommendations
            .push("Set MONGO_URI (the agent refuses to start without it)".to_string());
    }

    let status = if critical {
        "critical"
    } else if warnings > 0 {
        "warning"
    } else {
        "healthy"
    };

    HealthCheck {
        status: status.to_string(),
        environment,
        recommendations,
    }
}

fn install_hint(tool: &str) -> &'static str {
    match tool {
        "node" | "npm" => "https://nodejs.org, or brew install node / apt install nodejs npm",
        "git" => "brew install git (macOS) or apt install git (Linux)",
        _ => "Check your package manager",
    }
}

fn display(health: &HealthCheck) {
    println!("\nRuntime Tools:");
    for (name, info) in &health.environment.tools {
        let status = if info.available {
            format!(
                "{} {}",
                "✓".green().bold(),
                info.version.as_deref().unwrap_or("installed").dimmed()
            )
        } else {
            format!("{} not installed", "✗".red().bold())
        };
        println!("   {:<6} {}", name, status);
    }

    println!("\nAgent Package:");
    println!("   {:<15}{}", "node_modules:", flag(health.environment.node_modules_present));
    println!(
        "   {:<15}{}",
        format!("{}:", SERVER_ENTRY),
        flag(health.environment.server_entry_present)
    );
    println!("   {:<15}{}", ".env:", flag(health.environment.dotenv_present));
    println!(
        "   {:<15}{}",
        "MONGO_URI:",
        if health.environment.mongo_uri_set {
            "set".green()
        } else {
            "not set".yellow()
        }
    );

    if !health.recommendations.is_empty() {
        println!("\nRecommendations:");
        for (i, rec) in health.recommendations.iter().enumerate() {
            println!("   {}. {}", i + 1, rec);
        }
    }

    match health.status.as_str() {
        "healthy" => println!("\n{} Environment healthy", "✓".green().bold()),
        "warning" => println!("\n{} Environment has warnings", "⚠️".yellow()),
        _ => println!("\n{} Environment cannot run the agent", "✗".red().bold()),
    }
}

fn flag(present: bool) -> colored::ColoredString {
    if present {
        "present".green()
    } else {
        "missing".yellow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use disasterscout::environment::ToolInfo;
    use std::collections::BTreeMap;

    fn env_with(node: bool, npm: bool) -> Environment {
        let mut tools = BTreeMap::new();
        for (name, available) in [("node", node), ("npm", npm), ("npx", true), ("git", true)] {
            tools.insert(
                name.to_string(),
                ToolInfo {
                    available,
                    version: available.then(|| "v20.11.0".to_string()),
                    path: available.then(|| format!("/usr/bin/{}", name)),
                },
            );
        }
        Environment {
            os: "linux".to_string(),
            arch: "x86_64".to_string(),
            current_dir: "/srv/agent".to_string(),
            tools,
            mongo_uri_set: true,
            dotenv_present: true,
            node_modules_present: true,
            server_entry_present: true,
        }
    }

    #[test]
    fn test_all_present_is_healthy() {
        let health = analyze(env_with(true, true));
        assert_eq!(health.status, "healthy");
        assert!(health.recommendations.is_empty());
    }

    #[test]
    fn test_missing_node_is_critical() {
        let health = analyze(env_with(false, true));
        assert_eq!(health.status, "critical");
        assert!(health.recommendations.iter().any(|r| r.contains("Node.js")));
    }

    #[test]
    fn test_missing_deps_is_warning() {
        let mut environment = env_with(true, true);
        environment.node_modules_present = false;
        let health = analyze(environment);
        assert_eq!(health.status, "warning");
        assert!(health
            .recommendations
            .iter()
            .any(|r| r.contains("npm install --production")));
    }

    #[test]
    fn test_missing_mongo_uri_is_warning() {
        let mut environment = env_with(true, true);
        environment.mongo_uri_set = false;
        environment.dotenv_present = false;
        let health = analyze(environment);
        assert_eq!(health.status, "warning");
        assert!(health.recommendations.iter().any(|r| r.contains("MONGO_URI")));
    }
}
