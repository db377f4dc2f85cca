//! Argument parsing and command execution for the `severance` binary.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;
use tracing::{field, info, instrument, Span};

use crate::input::{InputError, Problem};
use crate::{DisconnectionPlan, Severance, SeveranceError};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "severance",
    about = "Find the cheapest set of roads to destroy so that no two machines stay connected."
)]
pub struct Cli {
    /// Problem file to read. Reads stdin when omitted.
    pub input: Option<PathBuf>,

    /// Also print every cut edge as `from to weight`, heaviest first.
    #[arg(long)]
    pub show_cuts: bool,
}

/// Errors surfaced while executing the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The problem text was malformed.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The problem was rejected by the planner.
    #[error(transparent)]
    Severance(#[from] SeveranceError),
}

/// Summarises the outcome of executing the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// The chosen cuts and their total cost.
    pub plan: DisconnectionPlan<u64>,
    /// Whether the individual cuts should be rendered.
    pub show_cuts: bool,
}

/// Executes the command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be opened or parsed, or the
/// planner rejects it.
#[instrument(name = "cli.run", err, skip(cli), fields(source = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.input.as_deref() {
        Some(path) => {
            span.record("source", field::display(path.display()));
            let reader = open_reader(path)?;
            run_with_reader(&cli, reader)
        }
        None => {
            span.record("source", "stdin");
            run_with_reader(&cli, io::stdin().lock())
        }
    }
}

/// Reads a problem from `reader` and plans its disconnection.
///
/// # Errors
/// Returns [`CliError`] when the problem is malformed or rejected by the planner.
///
/// # Examples
/// ```
/// # use severance::cli::{Cli, run_with_reader};
/// let cli = Cli {
///     input: None,
///     show_cuts: false,
/// };
/// let text = "3 2\n0 1 5\n1 2 9\n0\n2\n";
/// let summary = run_with_reader(&cli, text.as_bytes()).unwrap();
/// assert_eq!(summary.plan.total_cost(), 5);
/// ```
pub fn run_with_reader(cli: &Cli, reader: impl BufRead) -> Result<ExecutionSummary, CliError> {
    let problem = Problem::from_reader(reader)?;
    let planner = Severance::default_params(problem.n_nodes, &problem.edges, &problem.machines);
    let plan = planner.plan()?;
    info!(
        nodes = problem.n_nodes,
        machines = problem.machines.len(),
        cuts = plan.cut_edges().len(),
        total_cost = plan.total_cost(),
        "disconnection planned"
    );
    Ok(ExecutionSummary {
        plan,
        show_cuts: cli.show_cuts,
    })
}

#[instrument(name = "cli.open_reader", err)]
fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Renders `summary` to `writer`: the total cost on the first line, followed
/// by the cut edges when requested.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{}", summary.plan.total_cost())?;
    if summary.show_cuts {
        for edge in summary.plan.cut_edges() {
            writeln!(writer, "{} {} {}", edge.from, edge.to, edge.weight)?;
        }
    }
    Ok(())
}
