//! Minimum-cost machine disconnection over weighted trees, in Rust. Generic over primitive
//! integer weight types.
//!
//! Given a tree-shaped network whose edges carry a cost of removal, and a set of nodes
//! designated as "machines", this crate finds the cheapest set of edges to remove so that no
//! machine can reach any other machine afterwards.
//!
//! The algorithm is a modification of Kruskal's spanning tree construction:
//!  1. Edges are processed heaviest first;
//!  2. A disjoint-set forest tracks the components built so far, and each component remembers
//!     whether it contains a machine; and
//!  3. An edge whose two components both contain a machine is cut (its weight is added to the
//!     total), while every other edge merges its two components.
//!
//! Because the heavy edges are kept first, whenever two machine components would meet, the edge
//! between them is the lightest one left on that machine-to-machine path. Sorting dominates, so
//! a run costs `O(E log E)`.
//!
//! # Examples
//! ```
//!use severance::{Edge, Severance};
//!
//!let edges: Vec<Edge<u32>> = vec![
//!    Edge::new(2, 1, 8),
//!    Edge::new(1, 0, 5),
//!    Edge::new(2, 4, 5),
//!    Edge::new(1, 3, 4),
//!];
//!let machines = vec![0, 2, 4];
//!let planner = Severance::default_params(5, &edges, &machines);
//!assert_eq!(10, planner.min_cost().unwrap());
//! ```
//!
//! The crate also ships a `severance` binary that reads a problem from a file or stdin and
//! prints the minimum cost. See the `cli` and `input` modules.

pub use crate::data_wrappers::{DisconnectionPlan, Edge};
pub use crate::error::SeveranceError;
pub use crate::params::{ParamBuilder, SeveranceParams};
pub use crate::severance::{min_disconnection_cost, Severance};

pub mod cli;
mod data_wrappers;
mod error;
pub mod input;
pub mod logging;
mod params;
mod severance;
mod union_find;
mod validation;
