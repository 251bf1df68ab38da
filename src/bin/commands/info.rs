use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;
use prettytable::{Table, format, row};

use ss_forge::ops::{AssignConfig, assign_secondary_structure};
use ss_forge::{Assignment, SecondaryStructure, Structure};

use crate::commands::{run_with_spinner, select_chain};

/// Report-only command that summarizes chains and, optionally, one chain's composition.
#[derive(Debug, Default, Args)]
pub struct InfoArgs {
    /// Chain whose secondary-structure composition should be reported.
    #[arg(short, long, value_name = "ID")]
    pub chain: Option<String>,
}

/// Computes and prints structure statistics to stderr.
pub fn run(structure: &Structure, args: &InfoArgs) -> Result<()> {
    let reports = collect_chain_reports(structure);

    let assignment = match &args.chain {
        Some(chain_id) => {
            let chain = select_chain(structure, chain_id)?;
            let assignment = run_with_spinner("Assigning secondary structure", || {
                assign_secondary_structure(chain, &AssignConfig::default())
                    .with_context(|| format!("Failed to assign chain '{chain_id}'"))
            })?;
            Some((chain.sequence(), assignment))
        }
        None => None,
    };

    print_tables(&reports, assignment.as_ref())
}

fn collect_chain_reports(structure: &Structure) -> Vec<ChainReport> {
    structure
        .iter_chains()
        .map(|chain| ChainReport {
            id: chain.id.to_string(),
            residues: chain.residue_count(),
            standard: chain.iter_residues().filter(|r| r.is_standard()).count(),
            atoms: chain.iter_atoms().count(),
            span: chain
                .index_span()
                .map(|(lo, hi)| format!("{lo}..{hi}"))
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

fn print_tables(
    reports: &[ChainReport],
    assignment: Option<&(String, Assignment)>,
) -> Result<()> {
    let mut stderr = io::stderr().lock();

    print_boxed_label(&mut stderr, "SS-Forge Structure Report")?;
    writeln!(&mut stderr)?;

    let mut chain_table = Table::new();
    print_boxed_label(&mut stderr, "Chain Breakdown")?;
    chain_table.set_format(*format::consts::FORMAT_BOX_CHARS);
    chain_table.set_titles(row!["Chain", "Residues", "Amino Acids", "Atoms", "Numbering"]);
    for report in reports {
        chain_table.add_row(row![
            report.id,
            report.residues,
            report.standard,
            report.atoms,
            report.span
        ]);
    }
    chain_table
        .print(&mut stderr)
        .context("Failed to render chain summary")?;

    if let Some((sequence, assignment)) = assignment {
        writeln!(&mut stderr)?;
        print_boxed_label(
            &mut stderr,
            &format!("Chain {} Composition", assignment.chain_id),
        )?;

        let segments = assignment.segments();
        let mut composition_table = Table::new();
        composition_table.set_format(*format::consts::FORMAT_BOX_CHARS);
        composition_table.set_titles(row!["Code", "Structure", "Residues", "Share", "Segments"]);
        for ss in SecondaryStructure::ALL {
            let segment_count = segments.iter().filter(|s| s.structure == ss).count();
            composition_table.add_row(row![
                ss.code(),
                ss.name(),
                assignment.count(ss),
                format!("{:.1}%", assignment.fraction(ss) * 100.0),
                segment_count
            ]);
        }
        composition_table
            .print(&mut stderr)
            .context("Failed to render composition summary")?;
        writeln!(&mut stderr, "{sequence}")?;
        writeln!(&mut stderr, "{}", assignment.labels())?;
    }

    Ok(())
}

fn print_boxed_label<W: Write>(writer: &mut W, title: &str) -> io::Result<()> {
    let inner = format!(" {title} ");
    let width = inner.chars().count();
    writeln!(writer, "╭{}╮", "─".repeat(width))?;
    writeln!(writer, "│{}│", inner)?;
    writeln!(writer, "╰{}╯", "─".repeat(width))?;
    Ok(())
}

#[derive(Debug)]
struct ChainReport {
    id: String,
    residues: usize,
    standard: usize,
    atoms: usize,
    span: String,
}
