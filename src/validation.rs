use crate::union_find::MachineUnionFind;
use crate::{Edge, SeveranceError, SeveranceParams};
use num_traits::PrimInt;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NetworkValidator<'a, T> {
    n_nodes: usize,
    edges: &'a [Edge<T>],
    machines: &'a [usize],
    params: &'a SeveranceParams,
}

impl<'a, T: PrimInt> NetworkValidator<'a, T> {
    pub(crate) fn new(
        n_nodes: usize,
        edges: &'a [Edge<T>],
        machines: &'a [usize],
        params: &'a SeveranceParams,
    ) -> Self {
        Self {
            n_nodes,
            edges,
            machines,
            params,
        }
    }

    pub(crate) fn validate_input_data(&self) -> Result<(), SeveranceError> {
        if self.n_nodes == 0 {
            return Err(SeveranceError::EmptyNetwork);
        }
        self.validate_machines()?;
        self.validate_edges()?;
        if self.params.require_spanning {
            self.validate_edge_count()?;
        }
        self.validate_acyclic()
    }

    fn validate_machines(&self) -> Result<(), SeveranceError> {
        match self.machines.iter().find(|&&machine| machine >= self.n_nodes) {
            Some(&machine) => Err(SeveranceError::MachineOutOfRange {
                machine,
                node_count: self.n_nodes,
            }),
            None => Ok(()),
        }
    }

    fn validate_edges(&self) -> Result<(), SeveranceError> {
        for (n, edge) in self.edges.iter().enumerate() {
            for node in [edge.from, edge.to] {
                if node >= self.n_nodes {
                    return Err(SeveranceError::NodeOutOfRange {
                        edge: n,
                        node,
                        node_count: self.n_nodes,
                    });
                }
            }
            if edge.weight < T::zero() {
                return Err(SeveranceError::NegativeWeight { edge: n });
            }
        }
        Ok(())
    }

    fn validate_edge_count(&self) -> Result<(), SeveranceError> {
        let expected = self.n_nodes - 1;
        if self.edges.len() != expected {
            return Err(SeveranceError::WrongEdgeCount {
                expected,
                found: self.edges.len(),
            });
        }
        Ok(())
    }

    fn validate_acyclic(&self) -> Result<(), SeveranceError> {
        let mut forest = MachineUnionFind::new(self.n_nodes, &[]);
        for (n, edge) in self.edges.iter().enumerate() {
            let root_from = forest.find(edge.from);
            let root_to = forest.find(edge.to);
            if root_from == root_to {
                return Err(SeveranceError::Cycle { edge: n });
            }
            forest.union(root_from, root_to);
        }
        Ok(())
    }
}
