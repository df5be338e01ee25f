//! Configuration management commands.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use hxlab_config::{ConfigLoader, Paths};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Toml,
    Json,
}

/// Show the effective configuration.
pub fn show(project: &str, format: OutputFormat) -> Result<()> {
    let project_path = Path::new(project);

    let config = ConfigLoader::new()
        .with_project_dir(project_path)
        .load()
        .context("Failed to load configuration")?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        OutputFormat::Toml => {
            let toml_str = config.to_toml()?;
            println!("{toml_str}");
        }
        OutputFormat::Text => {
            println!("hxlab Configuration");
            println!("===================\n");

            println!("Sources:");
            println!(
                "  Project: {}",
                Paths::project_config_file(project_path).display()
            );
            println!(
                "  Local:   {}",
                Paths::local_config_file(project_path).display()
            );
            if let Ok(user) = Paths::new().user_config_file() {
                println!("  User:    {}", user.display());
            }
            println!();

            println!("Server:");
            println!("  Host: {}", config.server.host);
            println!("  Port: {}", config.server.port);
            println!();

            println!("Addressing:");
            println!("  Mode: {}", config.addressing.mode);
            println!("  Public base URL: {}", config.addressing.public_base_url);
            println!();

            println!("Exercises:");
            println!("  Submit delay: {}ms", config.exercises.submit_delay_ms);
            println!("  Poll interval: {}s", config.exercises.poll_interval_secs);
        }
    }

    Ok(())
}
