use thiserror::Error;

/// Possible errors that arise due to issues with the network handed to the planner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeveranceError {
    #[error("The network provided has no nodes")]
    EmptyNetwork,
    #[error("Edge {edge} references node {node}, but the network only has {node_count} nodes")]
    NodeOutOfRange {
        edge: usize,
        node: usize,
        node_count: usize,
    },
    #[error("Machine {machine} is not a node of a network with {node_count} nodes")]
    MachineOutOfRange { machine: usize, node_count: usize },
    #[error("Edge {edge} has a negative weight")]
    NegativeWeight { edge: usize },
    #[error("A tree over the network needs {expected} edges, but {found} were provided")]
    WrongEdgeCount { expected: usize, found: usize },
    #[error("Edge {edge} closes a cycle, so the edges do not form a tree")]
    Cycle { edge: usize },
    #[error("The total disconnection cost does not fit in the weight type")]
    CostOverflow,
}
