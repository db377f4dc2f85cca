/// A weighted, undirected edge between two nodes of the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<T> {
    pub from: usize,
    pub to: usize,
    pub weight: T,
}

impl<T> Edge<T> {
    pub fn new(from: usize, to: usize, weight: T) -> Self {
        Edge { from, to, weight }
    }
}

impl<T> From<(usize, usize, T)> for Edge<T> {
    fn from((from, to, weight): (usize, usize, T)) -> Self {
        Edge::new(from, to, weight)
    }
}

/// The outcome of a planning pass: which edges to remove and what removing them costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisconnectionPlan<T> {
    pub(crate) total_cost: T,
    pub(crate) cut_edges: Vec<Edge<T>>,
}

impl<T: Copy> DisconnectionPlan<T> {
    /// The sum of the weights of every cut edge.
    pub fn total_cost(&self) -> T {
        self.total_cost
    }

    /// The edges chosen for removal, heaviest first.
    pub fn cut_edges(&self) -> &[Edge<T>] {
        &self.cut_edges
    }

    pub fn into_cut_edges(self) -> Vec<Edge<T>> {
        self.cut_edges
    }
}
