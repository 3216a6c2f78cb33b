mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{check, normalize, templates, CheckArgs, NormalizeArgs, TemplatesArgs};

/// Sasta Templates CLI - snippet tooling for the component playground
#[derive(Parser, Debug)]
#[command(name = "sasta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize a snippet file into an evaluable unit
    Normalize(NormalizeArgs),

    /// Check snippet files for normalization diagnostics
    Check(CheckArgs),

    /// List or show the built-in snippet templates
    Templates(TemplatesArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Normalize(args) => normalize(args),
        Command::Check(args) => check(args),
        Command::Templates(args) => templates(args),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
