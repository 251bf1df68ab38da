use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use log::info;

use ss_forge::Structure;
use ss_forge::io::{ReportHeader, write_assignment_json, write_assignment_text};
use ss_forge::ops::{AssignConfig, assign_secondary_structure, place_amide_hydrogens};

use crate::commands::{IoParameters, run_with_spinner, save_output, select_chain};

/// Report formats supported by `assign`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Header block followed by one `id name code` line per residue.
    #[default]
    #[value(name = "text")]
    Text,
    /// `{ "chain": ..., "residues": [...] }` document.
    #[value(name = "json")]
    Json,
}

/// Assigns secondary structure to one chain.
#[derive(Debug, Args)]
pub struct AssignArgs {
    /// Identifier of the chain to analyze.
    #[arg(short, long, value_name = "ID")]
    pub chain: String,
    /// Place missing backbone amide hydrogens before scanning for bonds.
    #[arg(long = "add-hydrogens")]
    pub add_hydrogens: bool,
    /// TOML file overriding the energy model parameters.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Label both bonds of a matched 5-turn pair as pi helix.
    #[arg(long = "pi-helix-pairs")]
    pub pi_helix_pairs: bool,
    /// Report format.
    #[arg(long = "out-format", value_enum, default_value_t = ReportFormat::Text)]
    pub out_format: ReportFormat,
    /// Omit the provenance and legend header from text reports.
    #[arg(long = "no-header")]
    pub no_header: bool,
}

/// Runs the assignment pipeline on the selected chain and writes the report.
pub fn run(structure: &mut Structure, args: &AssignArgs, io_params: &IoParameters) -> Result<()> {
    let config = load_config(args)?;

    select_chain(structure, &args.chain)?;
    if args.add_hydrogens {
        if let Some(chain) = structure.chain_mut(&args.chain) {
            let placed = place_amide_hydrogens(chain);
            info!("Placed {placed} amide hydrogens on chain '{}'", args.chain);
        }
    }
    let chain = select_chain(structure, &args.chain)?;

    let assignment = run_with_spinner("Assigning secondary structure", || {
        assign_secondary_structure(chain, &config)
            .with_context(|| format!("Failed to assign chain '{}'", args.chain))
    })?;

    let header = ReportHeader::new(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        io_params.input_label(),
    );

    save_output(io_params, |writer| {
        match args.out_format {
            ReportFormat::Text => {
                let header = (!args.no_header).then_some(&header);
                write_assignment_text(writer, &assignment, header)?
            }
            ReportFormat::Json => write_assignment_json(writer, &assignment)?,
        }
        Ok(())
    })
}

fn load_config(args: &AssignArgs) -> Result<AssignConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            AssignConfig::from_toml_str(&content)
                .with_context(|| format!("Invalid config file {}", path.display()))?
        }
        None => AssignConfig::default(),
    };

    if args.pi_helix_pairs {
        config.pi_helix_pairs = true;
    }
    Ok(config)
}
