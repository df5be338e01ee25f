//! Serve command - runs the exercise server.

use anyhow::{Context, Result};
use hxlab_config::{AddressingMode, ConfigLoader, HxlabConfig};

/// Flags that override the loaded configuration.
pub struct ServeArgs {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub public: bool,
    pub base_url: Option<String>,
    pub project: String,
}

impl ServeArgs {
    fn apply(&self, config: &mut HxlabConfig) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if self.public {
            config.addressing.mode = AddressingMode::Public;
        }
        if let Some(base_url) = &self.base_url {
            config.addressing.public_base_url.clone_from(base_url);
        }
    }
}

pub fn run(args: &ServeArgs) -> Result<()> {
    let mut config = ConfigLoader::new()
        .with_project_dir(&args.project)
        .load()
        .context("Failed to load configuration")?;
    args.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    println!();
    println!("hxlab - htmx exercises");
    println!();
    println!(
        "  Listening on:   http://{}:{}",
        config.server.host, config.server.port
    );
    println!("  Addressing:     {}", config.addressing.mode);
    if config.addressing.mode == AddressingMode::Public {
        println!("  Public origin:  {}", config.addressing.public_base_url);
    }
    println!();
    println!("Press Ctrl+C to stop.");
    println!();

    let runtime = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
    runtime.block_on(hxlab::run_server(config))?;

    println!();
    println!("Server stopped gracefully.");

    Ok(())
}
