//! sage-defs CLI
//!
//! Command-line interface for inspecting SAGE game asset-type definitions.

mod commands;
mod error;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use sage_defs_lib::{AssetKind, DefinitionContext};

pub(crate) use error::CliError;

#[derive(Parser)]
#[command(name = "sage-defs")]
#[command(about = "Inspect SAGE game asset-type definitions", long_about = None)]
struct Cli {
    /// Tool root containing the Games folder (defaults to the configured root)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Only print warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the games in the game manifest
    Games,

    /// Load a game's definitions and print a summary
    Load {
        /// Game id from the manifest (omit to load the empty "None" definition)
        game: Option<String>,
    },

    /// Print the inheritance tree of a game's asset types
    Tree {
        /// Game id from the manifest
        game: String,

        /// Namespace to print: plain or game
        #[arg(short, long, default_value = "plain")]
        kind: AssetKind,

        /// Only print the subtree rooted at this asset type
        #[arg(long)]
        root_type: Option<String>,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the settings file, tool root and registry entries
    Show,

    /// Print the settings file path
    Path,

    /// Save the tool root in the settings file
    SetRoot {
        /// Directory containing the Games folder
        dir: PathBuf,
    },

    /// Remove the saved tool root
    ClearRoot,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    let result = match cli.command {
        Commands::Games => {
            let ctx = DefinitionContext::from_settings(cli.root);
            commands::games::run_games(&ctx)
        }
        Commands::Load { game } => {
            let ctx = DefinitionContext::from_settings(cli.root);
            commands::load::run_load(&ctx, game.as_deref(), cli.quiet)
        }
        Commands::Tree {
            game,
            kind,
            root_type,
        } => {
            let ctx = DefinitionContext::from_settings(cli.root);
            commands::tree::run_tree(&ctx, &game, kind, root_type.as_deref())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(cli.root),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::SetRoot { dir } => commands::config::run_config_set_root(&dir),
            ConfigAction::ClearRoot => commands::config::run_config_clear_root(),
        },
    };

    if let Err(e) = result {
        eprintln!(
            "{} {}",
            "Error:".if_supports_color(Stderr, |t| t.red()),
            e
        );
        std::process::exit(1);
    }
}

/// Route `log` output to the terminal: plain lines for `info`, prefixed
/// lines for everything else. `RUST_LOG` overrides the default level.
fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "[{}] {}", level, record.args()),
        })
        .init();
}

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
