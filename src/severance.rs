use crate::data_wrappers::{DisconnectionPlan, Edge};
use crate::union_find::MachineUnionFind;
use crate::validation::NetworkValidator;
use crate::{SeveranceError, SeveranceParams};
use num_traits::PrimInt;
use std::cmp::Reverse;
use std::fmt::Debug;
use tracing::debug;

/// Minimum-cost machine disconnection over a weighted tree. Generic over primitive integer
/// weight types.
#[derive(Debug, Clone, PartialEq)]
pub struct Severance<'a, T> {
    n_nodes: usize,
    edges: &'a [Edge<T>],
    machines: &'a [usize],
    params: SeveranceParams,
}

impl<'a, T: PrimInt + Debug> Severance<'a, T> {
    /// Creates a disconnection planner using a custom parameter configuration.
    ///
    /// # Parameters
    /// * `n_nodes` - the number of nodes in the network. Nodes are labelled `0..n_nodes`.
    /// * `edges` - the weighted edges of the network, which must form a tree (or a forest if
    ///             spanning is not required). Weights must be non-negative.
    /// * `machines` - the nodes designated as machines.
    /// * `params` - the parameter configuration.
    ///
    /// # Returns
    /// * The planner instance.
    ///
    /// # Examples
    /// ```
    ///use severance::{Edge, Severance, SeveranceParams};
    ///
    ///let edges = vec![Edge::new(0, 1, 4), Edge::new(2, 3, 7)];
    ///let machines = vec![0, 1, 3];
    ///let params = SeveranceParams::builder()
    ///    .require_spanning(false)
    ///    .build();
    ///let planner = Severance::new(4, &edges, &machines, params);
    ///assert_eq!(4, planner.min_cost().unwrap());
    /// ```
    pub fn new(
        n_nodes: usize,
        edges: &'a [Edge<T>],
        machines: &'a [usize],
        params: SeveranceParams,
    ) -> Self {
        Severance {
            n_nodes,
            edges,
            machines,
            params,
        }
    }

    /// Creates a disconnection planner using the default parameters.
    ///
    /// # Examples
    /// ```
    ///use severance::{Edge, Severance};
    ///
    ///let edges = vec![Edge::new(0, 1, 5), Edge::new(1, 2, 9)];
    ///let machines = vec![0, 2];
    ///let planner = Severance::default_params(3, &edges, &machines);
    ///assert_eq!(5, planner.min_cost().unwrap());
    /// ```
    pub fn default_params(n_nodes: usize, edges: &'a [Edge<T>], machines: &'a [usize]) -> Self {
        Severance::new(n_nodes, edges, machines, SeveranceParams::default())
    }

    /// Calculates the minimum total weight of edges that must be removed so that no machine can
    /// reach any other machine.
    ///
    /// # Returns
    /// * A result that, if successful, contains the minimum cost. An error is returned if a node
    ///   or machine index lies outside the network, if a weight is negative, if the edges do not
    ///   form a tree, or if the cost overflows the weight type.
    ///
    /// # Examples
    /// ```
    ///use severance::{Edge, Severance};
    ///
    /// // Path 0-1-2-3 with machines at both ends: the cheapest edge on the path goes
    ///let edges = vec![Edge::new(0, 1, 3), Edge::new(1, 2, 4), Edge::new(2, 3, 2)];
    ///let machines = vec![0, 3];
    ///let planner = Severance::default_params(4, &edges, &machines);
    ///assert_eq!(2, planner.min_cost().unwrap());
    /// ```
    pub fn min_cost(&self) -> Result<T, SeveranceError> {
        self.plan().map(|plan| plan.total_cost())
    }

    /// Works out which edges to remove so that no machine can reach any other machine, at
    /// minimum total cost.
    ///
    /// # Returns
    /// * A result that, if successful, contains the plan: the edges to cut, heaviest first, and
    ///   their summed weight. Errors are as for `Severance::min_cost`.
    ///
    /// # Examples
    /// ```
    ///use severance::{Edge, Severance};
    ///
    /// // Star centred on node 0, every node is a machine, so every edge is cut
    ///let edges = vec![Edge::new(0, 1, 2), Edge::new(0, 2, 6), Edge::new(0, 3, 1)];
    ///let machines = vec![0, 1, 2, 3];
    ///let plan = Severance::default_params(4, &edges, &machines).plan().unwrap();
    ///assert_eq!(9, plan.total_cost());
    ///assert_eq!(3, plan.cut_edges().len());
    /// ```
    pub fn plan(&self) -> Result<DisconnectionPlan<T>, SeveranceError> {
        let validator =
            NetworkValidator::new(self.n_nodes, self.edges, self.machines, &self.params);
        validator.validate_input_data()?;
        let sorted_edges = self.sort_edges_by_weight_desc();
        self.plan_cuts(&sorted_edges)
    }

    fn sort_edges_by_weight_desc(&self) -> Vec<Edge<T>> {
        let mut sorted_edges = self.edges.to_vec();
        sorted_edges.sort_by_key(|edge| Reverse(edge.weight));
        sorted_edges
    }

    fn plan_cuts(&self, sorted_edges: &[Edge<T>]) -> Result<DisconnectionPlan<T>, SeveranceError> {
        let mut union_find = MachineUnionFind::new(self.n_nodes, self.machines);
        let mut total_cost = T::zero();
        let mut cut_edges = Vec::new();

        for edge in sorted_edges {
            let root_from = union_find.find(edge.from);
            let root_to = union_find.find(edge.to);

            if self.edge_connects_two_machines(&union_find, root_from, root_to) {
                debug!(from = edge.from, to = edge.to, weight = ?edge.weight, "cutting edge");
                total_cost = total_cost
                    .checked_add(&edge.weight)
                    .ok_or(SeveranceError::CostOverflow)?;
                cut_edges.push(*edge);
            } else {
                let root = union_find.union(root_from, root_to);
                debug!(from = edge.from, to = edge.to, root, "merging components");
            }
        }

        debug!(cuts = cut_edges.len(), total_cost = ?total_cost, "planned disconnection");
        Ok(DisconnectionPlan {
            total_cost,
            cut_edges,
        })
    }

    fn edge_connects_two_machines(
        &self,
        union_find: &MachineUnionFind,
        root_from: usize,
        root_to: usize,
    ) -> bool {
        union_find.reaches_machine(root_from) && union_find.reaches_machine(root_to)
    }
}

/// Calculates the minimum disconnection cost with the default parameters in one call.
///
/// # Examples
/// ```
///use severance::{min_disconnection_cost, Edge};
///
///let edges: Vec<Edge<u64>> = vec![(0, 1, 5).into(), (1, 2, 9).into()];
///assert_eq!(Ok(5), min_disconnection_cost(3, &edges, &[0, 2]));
/// ```
pub fn min_disconnection_cost<T: PrimInt + Debug>(
    n_nodes: usize,
    edges: &[Edge<T>],
    machines: &[usize],
) -> Result<T, SeveranceError> {
    Severance::default_params(n_nodes, edges, machines).min_cost()
}
