//! Modish command line interface
//!
//! ```bash
//! # Resolve modifier props into a style payload
//! modish resolve paddingL-10 row centerV bg-grey10
//!
//! # Same, through the overrides of a component from modish.toml
//! modish resolve --config . --component Text --options text h1 marginT=s2
//!
//! # Alpha blending
//! modish rgba '#FF5500' 0.5
//!
//! # Dump the active tokens
//! modish tokens --scheme dark
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{OptionsPreset, ResolveArgs};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "modish")]
#[command(version)]
#[command(about = "Resolve modifier props and inspect Modish theme tokens")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Theme configuration file, or a directory containing modish.toml
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Scheme mode: default, light, or dark
    #[arg(long, short, global = true)]
    scheme: Option<String>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve props (`key` or `key=value`) into a style payload
    Resolve {
        /// Apply the theme overrides registered for this component
        #[arg(long)]
        component: Option<String>,

        /// Which modifier categories to extract
        #[arg(long, short, value_enum, default_value = "default")]
        options: OptionsPreset,

        /// Props, e.g. `paddingL-10` or `paddingT=s2`
        props: Vec<String>,
    },

    /// Add alpha to a color: `HEX OPACITY` or `R G B OPACITY`
    Rgba {
        #[arg(num_args = 2..=4, allow_negative_numbers = true)]
        args: Vec<String>,
    },

    /// Print the active tokens as JSON
    Tokens,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let theme = commands::load_theme(cli.config.as_deref(), cli.scheme.as_deref())?;

    let output = match cli.command {
        Commands::Resolve {
            component,
            options,
            props,
        } => commands::resolve(
            &theme,
            &ResolveArgs {
                component,
                options,
                props,
            },
        )?,
        Commands::Rgba { args } => commands::rgba(&theme, &args)?,
        Commands::Tokens => commands::tokens(&theme),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
