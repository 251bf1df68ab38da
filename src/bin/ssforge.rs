use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::IoParameters;
use commands::{assign, info};

#[derive(Parser, Debug)]
#[command(
    name = "ssforge",
    about = "A command-line tool for assigning protein secondary structure from backbone hydrogen bonds.",
    version,
    author,
    arg_required_else_help = true
)]
struct Cli {
    /// Input PDB file path. When omitted, stdin is used.
    #[arg(short, long, value_name = "FILE", global = true)]
    input: Option<PathBuf>,
    /// Output file path. When omitted, stdout is used.
    #[arg(short, long, value_name = "FILE", global = true)]
    output: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assign secondary structure to one chain and write the per-residue report.
    Assign(assign::AssignArgs),
    /// Summarize chains without writing to the output stream.
    Info(info::InfoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(commands::verbosity_filter(cli.verbose))
        .parse_default_env()
        .init();

    let io_params = IoParameters {
        input: cli.input.clone(),
        output: cli.output.clone(),
    };

    match cli.command {
        Command::Assign(args) => {
            let mut structure = commands::load_input(&io_params)?;
            assign::run(&mut structure, &args, &io_params)?;
        }
        Command::Info(args) => {
            let structure = commands::load_input(&io_params)?;
            info::run(&structure, &args)?;
        }
    }

    Ok(())
}
