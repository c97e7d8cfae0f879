// crates/ltable-cli/src/main.rs

use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "ltable-cli")]
#[command(about = "Light-table fixture generator for dancer costume firmware", long_about = None)]
pub struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a show and print it as JSON on stdout
    Gen(cmd::gen::GenArgs),

    /// Pack one lighting command into a firmware record
    Encode(cmd::encode::EncodeArgs),

    /// Split a packed firmware record back into its fields
    Inspect(cmd::inspect::InspectArgs),

    /// Print the firmware test palette packed for a variant
    Palette(cmd::palette::PaletteArgs),
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    // stdout carries the JSON document; logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.cmd {
        Commands::Gen(args) => cmd::gen::run(args),
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Palette(args) => cmd::palette::run(args),
    }
}
