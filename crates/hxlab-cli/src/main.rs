//! hxlab command line.
//!
//! Serves the htmx exercises, where every interaction is answered with a
//! server-rendered HTML fragment.
//!
//! # Quick Start
//!
//! ```bash
//! # Serve with relative addresses on port 8080
//! hxlab serve
//!
//! # Serve behind a public origin
//! hxlab serve --public --base-url https://htmx.example.org
//!
//! # Print one fragment
//! hxlab render contact --variant edit
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::config::OutputFormat;
use commands::render::{FragmentKind, VariantArg};

/// hxlab - htmx exercises served as HTML fragments.
#[derive(Parser)]
#[command(name = "hxlab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Start the exercise server.
    Serve {
        /// Address to bind to (overrides server.host).
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides server.port and PORT).
        #[arg(short, long)]
        port: Option<u16>,

        /// Embed absolute addresses under the public base URL.
        #[arg(long)]
        public: bool,

        /// Public base URL (overrides addressing.public_base_url).
        #[arg(long)]
        base_url: Option<String>,

        /// Project directory containing hxlab.toml.
        #[arg(long, default_value = ".")]
        project: String,
    },

    /// Configuration commands.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Print a single fragment without starting the server.
    Render {
        /// Fragment family.
        #[arg(value_enum)]
        fragment: FragmentKind,

        /// Variant (active or reset; display or edit for contact).
        #[arg(short, long, value_enum)]
        variant: Option<VariantArg>,

        /// Embed absolute addresses under the public base URL.
        #[arg(long)]
        public: bool,

        /// Public base URL used with --public.
        #[arg(long, default_value = hxlab_config::DEFAULT_PUBLIC_BASE_URL)]
        base_url: String,

        /// Text for the echo and form fragments.
        #[arg(short, long, default_value = "")]
        input: String,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration.
    Show {
        /// Project directory.
        #[arg(long, default_value = ".")]
        project: String,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Serve {
            host,
            port,
            public,
            base_url,
            project,
        } => commands::serve::run(&commands::serve::ServeArgs {
            host,
            port,
            public,
            base_url,
            project,
        }),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show { project, format } => commands::config::show(&project, format),
        },
        Commands::Render {
            fragment,
            variant,
            public,
            base_url,
            input,
        } => commands::render::run(fragment, variant, public.then_some(base_url.as_str()), &input),
    }
}

/// Filter from `RUST_LOG`, or INFO when it is unset, blank or unparseable.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            log_filter(Some(String::new())).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }

    #[test]
    fn test_bare_level_is_honoured() {
        assert_eq!(
            log_filter(Some("debug".to_string())).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            log_filter(Some("warn".to_string())).max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }

    #[test]
    fn test_scoped_directives_are_kept() {
        assert_eq!(
            log_filter(Some("hxlab=trace".to_string())).max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }
}
