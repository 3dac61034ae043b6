//! shop-cart CLI - Terminal front end for the storefront.
//!
//! # Usage
//!
//! ```bash
//! # Render the seeded storefront
//! shop-cart show
//!
//! # Apply commands, then render
//! shop-cart run "fav 3" "add 3" "dec 2"
//!
//! # Replay a YAML or JSON command script
//! shop-cart replay session.yaml --json
//!
//! # Read commands from stdin
//! shop-cart repl
//! ```
//!
//! # Commands
//!
//! - `show` - Render the storefront
//! - `run` - Apply text-form commands and render
//! - `replay` - Apply a command script and render
//! - `repl` - Interactive prompt
//!
//! Rendered output goes to stdout, logs to stderr (`RUST_LOG` controls the level).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shop_cart_storefront::{Session, StorefrontConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "shop-cart")]
#[command(author, version, about = "shop-cart storefront in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Render as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Start with the favorites-only filter on
    #[arg(long, global = true, overrides_with = "no_favorites_only")]
    favorites_only: bool,

    /// Start with the favorites-only filter off
    #[arg(long, global = true, overrides_with = "favorites_only")]
    no_favorites_only: bool,

    /// Start with an empty cart instead of the seed cart
    #[arg(long, global = true, overrides_with = "seed_cart")]
    empty_cart: bool,

    /// Start with the seed cart
    #[arg(long, global = true, overrides_with = "empty_cart")]
    seed_cart: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the storefront
    Show,
    /// Apply commands (e.g. "add 2", "dec 5", "filter on") and render
    Run {
        /// Commands in text form, applied in order
        #[arg(required = true)]
        commands: Vec<String>,
    },
    /// Apply a YAML or JSON command script and render
    Replay {
        /// Path to the script
        file: PathBuf,
    },
    /// Read commands from stdin, rendering after each one
    Repl,
}

impl Cli {
    /// Apply command-line switches over the environment config. The last of
    /// each on/off pair wins; an absent pair leaves the config as loaded.
    fn apply_overrides(&self, config: &mut StorefrontConfig) {
        if let Some(on) = switch(self.favorites_only, self.no_favorites_only) {
            config.favorites_only = on;
        }
        if let Some(on) = switch(self.seed_cart, self.empty_cart) {
            config.seed_cart = on;
        }
    }
}

const fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn init_tracing(json: bool) {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shop_cart_storefront=info,shop_cart_cli=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = StorefrontConfig::from_env()?;
    cli.apply_overrides(&mut config);

    let mut session = Session::seeded(&config);
    let format = commands::render::Format::from_json_flag(cli.json);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Show => {}
        Commands::Run { commands: lines } => {
            commands::script::run_lines(&mut session, lines.as_slice())?;
        }
        Commands::Replay { file } => commands::script::replay_file(&mut session, &file)?,
        Commands::Repl => {
            let stdin = std::io::stdin();
            return commands::repl::run(&mut session, stdin.lock(), &mut out, format);
        }
    }

    commands::render::write_view(&mut out, &session.view(), format)?;
    out.flush()?;
    Ok(())
}
