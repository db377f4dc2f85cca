//! Reader for the plain-text problem format consumed by the `severance` binary.
//!
//! ```text
//! N K
//! a b w        <- N - 1 edge lines
//! m            <- up to K machine lines
//! ```
//!
//! Malformed edge lines are skipped and do not count towards the N - 1 edges. The first
//! malformed machine line (or the end of input) ends the machine list, even if fewer than K
//! machines were read.

use std::io::{self, BufRead};
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, warn};

use crate::Edge;

// Header counts are untrusted, so up-front reservations are capped.
const MAX_RESERVED: usize = 1024;

/// Errors raised while reading a problem from text.
#[derive(Debug, Error)]
pub enum InputError {
    /// Reading from the underlying source failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    /// The input ended before the header line.
    #[error("input is empty; expected a header line with the node and machine counts")]
    MissingHeader,
    /// The header line is not two non-negative integers.
    #[error("line {line}: expected a header of two non-negative integers")]
    InvalidHeader {
        /// One-based line number.
        line: usize,
    },
    /// A well-formed number does not fit the integer type it is read into.
    #[error("line {line}: number is too large")]
    NumberTooLarge {
        /// One-based line number.
        line: usize,
    },
    /// The input ended before every edge was read.
    #[error("expected {expected} edges but the input ended after {found}")]
    MissingEdges {
        /// Number of edges announced by the header.
        expected: usize,
        /// Number of well-formed edges read.
        found: usize,
    },
}

/// A problem as read from text: the network and its machines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// Number of nodes in the network.
    pub n_nodes: usize,
    /// Weighted edges of the network.
    pub edges: Vec<Edge<u64>>,
    /// Nodes designated as machines.
    pub machines: Vec<usize>,
}

impl Problem {
    /// Reads a problem from `reader`.
    ///
    /// # Errors
    /// Returns [`InputError`] if the header is missing or malformed, the input ends before all
    /// edges are read, a number overflows, or reading fails.
    ///
    /// # Examples
    /// ```
    /// # use severance::input::Problem;
    /// let text = "3 2\n0 1 5\nnot an edge\n1 2 9\n0\n2\n";
    /// let problem = Problem::from_reader(text.as_bytes()).unwrap();
    /// assert_eq!(problem.n_nodes, 3);
    /// assert_eq!(problem.edges.len(), 2);
    /// assert_eq!(problem.machines, vec![0, 2]);
    /// ```
    pub fn from_reader(reader: impl BufRead) -> Result<Self, InputError> {
        let mut lines = reader.lines().enumerate().map(|(n, line)| (n + 1, line));

        let (n_nodes, n_machines) = match lines.next() {
            Some((line_no, line)) => parse_header(&line?, line_no)?,
            None => return Err(InputError::MissingHeader),
        };

        let expected = n_nodes.saturating_sub(1);
        let mut edges = Vec::with_capacity(expected.min(MAX_RESERVED));
        while edges.len() < expected {
            let Some((line_no, line)) = lines.next() else {
                return Err(InputError::MissingEdges {
                    expected,
                    found: edges.len(),
                });
            };
            match parse_fields::<3>(&line?, line_no)? {
                Some([from, to, weight]) => {
                    let from = to_index(from, line_no)?;
                    let to = to_index(to, line_no)?;
                    edges.push(Edge::new(from, to, weight));
                }
                None => warn!(line = line_no, "skipping malformed edge line"),
            }
        }

        let mut machines = Vec::with_capacity(n_machines.min(MAX_RESERVED));
        while machines.len() < n_machines {
            let Some((line_no, line)) = lines.next() else {
                break;
            };
            match parse_fields::<1>(&line?, line_no)? {
                Some([machine]) => machines.push(to_index(machine, line_no)?),
                None => {
                    warn!(line = line_no, "malformed machine line ends the machine list");
                    break;
                }
            }
        }
        if machines.len() < n_machines {
            debug!(
                expected = n_machines,
                found = machines.len(),
                "fewer machines than announced"
            );
        }

        Ok(Problem {
            n_nodes,
            edges,
            machines,
        })
    }
}

fn parse_header(line: &str, line_no: usize) -> Result<(usize, usize), InputError> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(nodes), Some(machines), None) if is_digits(nodes) && is_digits(machines) => Ok((
            parse_number(nodes, line_no)?,
            parse_number(machines, line_no)?,
        )),
        _ => Err(InputError::InvalidHeader { line: line_no }),
    }
}

/// Parses a line made of exactly `N` whitespace separated runs of ASCII digits. Returns
/// `Ok(None)` when the line has any other shape.
fn parse_fields<const N: usize>(
    line: &str,
    line_no: usize,
) -> Result<Option<[u64; N]>, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != N || !tokens.iter().all(|token| is_digits(token)) {
        return Ok(None);
    }
    let mut values = [0; N];
    for (value, token) in values.iter_mut().zip(tokens) {
        *value = parse_number(token, line_no)?;
    }
    Ok(Some(values))
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|byte| byte.is_ascii_digit())
}

fn parse_number<N: FromStr>(token: &str, line_no: usize) -> Result<N, InputError> {
    token
        .parse()
        .map_err(|_| InputError::NumberTooLarge { line: line_no })
}

fn to_index(value: u64, line_no: usize) -> Result<usize, InputError> {
    usize::try_from(value).map_err(|_| InputError::NumberTooLarge { line: line_no })
}
