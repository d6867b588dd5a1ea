//! entrypoint for tailor-cli

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use clap::{Parser, Subcommand};
use tailor::{
    telemetry::tracing::{self, Level, subscriber::filter::LevelFilter},
    utils::info,
};

pub mod cmd;
use self::cmd::{resolve, view_name};

pub mod trace;
pub mod utils;

#[derive(Debug, Parser)]
#[command(name = "tailor")]
#[command(bin_name = "tailor")]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(long, global = true)]
    /// log in json format (to stderr)
    json_logs: bool,

    #[command(subcommand)]
    cmds: CliCommands,
}

#[derive(Debug, Subcommand)]
enum CliCommands {
    ViewName(view_name::CliCommandViewName),
    Resolve(resolve::CliCommandResolve),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    #[allow(clippy::exit)]
    if let Err(err) = trace::init_tracing(LevelFilter::from_level(Level::INFO), cli.json_logs) {
        eprintln!("🚩 failed to init tracing: {err}");
        std::process::exit(1);
    }
    tracing::debug!(name = info::NAME, version = info::VERSION, "cli started");

    #[allow(clippy::exit)]
    if let Err(err) = match cli.cmds {
        CliCommands::ViewName(cfg) => view_name::run(cfg).await,
        CliCommands::Resolve(cfg) => resolve::run(cfg).await,
    } {
        eprintln!("🚩 exit with error: {err}");
        std::process::exit(1);
    }
}
