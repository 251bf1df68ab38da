use std::fs::File;
use std::io::{self as stdio, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use indicatif::{ProgressBar, ProgressStyle};
use is_terminal::IsTerminal;

use ss_forge::io::{IoContext, read_pdb_structure};
use ss_forge::{Chain, Structure};

pub mod assign;
pub mod info;

/// Aggregated IO parameters shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct IoParameters {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl IoParameters {
    /// Human-readable name of the input source, used in report headers.
    pub fn input_label(&self) -> String {
        match &self.input {
            Some(path) => path.display().to_string(),
            None => "stdin".to_string(),
        }
    }
}

/// Loads a PDB structure from the configured input source.
pub fn load_input(params: &IoParameters) -> Result<Structure> {
    let io_context = IoContext::new_default();

    if let Some(path) = &params.input {
        let file = File::open(path)
            .with_context(|| format!("Failed to open input file {}", path.display()))?;
        let reader = BufReader::new(file);
        read_pdb_structure(reader, &io_context)
            .with_context(|| format!("Failed to parse PDB input from {}", path.display()))
    } else {
        let stdin = stdio::stdin();
        if stdin.is_terminal() {
            bail!(
                "No --input provided and stdin is a TTY. Provide -i/--input or pipe a PDB file into ssforge."
            );
        }
        let reader = BufReader::new(stdin.lock());
        read_pdb_structure(reader, &io_context).context("Failed to parse PDB input from stdin")
    }
}

/// Looks up a chain by identifier, listing the available chains on failure.
pub fn select_chain<'a>(structure: &'a Structure, chain_id: &str) -> Result<&'a Chain> {
    structure.chain(chain_id).ok_or_else(|| {
        let available = structure.chain_ids();
        if available.is_empty() {
            anyhow!("Chain '{chain_id}' not found: the input contains no chains")
        } else {
            anyhow!(
                "Chain '{chain_id}' not found. Available chains: {}",
                available.join(", ")
            )
        }
    })
}

/// Streams a report to the configured output file or stdout.
pub fn save_output<F>(params: &IoParameters, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    match &params.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write(&mut writer)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            writer.flush().context("Failed to flush output writer")?
        }
        None => {
            let stdout = stdio::stdout();
            let handle = stdout.lock();
            let mut writer = BufWriter::new(handle);
            write(&mut writer).context("Failed to write output to stdout")?;
            writer.flush().context("Failed to flush stdout")?;
        }
    }
    Ok(())
}

/// Wraps long-running operations with a spinner rendered to stderr.
pub fn run_with_spinner<T, F>(message: &str, work: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(message.to_string());

    let result = work();

    match &result {
        Ok(_) => spinner.finish_with_message(format!("{} ✓", message)),
        Err(_) => spinner.abandon_with_message(format!("{} ✗", message)),
    }

    result
}

/// Returns the `log` level implied by the number of `-v` flags.
pub fn verbosity_filter(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}
