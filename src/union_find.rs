/// Disjoint-set forest over the nodes of the network where every component also remembers
/// whether it leads to a machine.
///
/// The "leads to a machine" tag is keyed on the component's root, so it has to follow the
/// surviving root whenever two components merge.
pub(crate) struct MachineUnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
    is_machine: Vec<bool>,
    leads_to_machine: Vec<bool>,
}

impl MachineUnionFind {
    pub(crate) fn new(n_nodes: usize, machines: &[usize]) -> Self {
        let parent = (0..n_nodes).collect();
        let rank = vec![0; n_nodes];
        let mut is_machine = vec![false; n_nodes];
        for &machine in machines {
            is_machine[machine] = true;
        }
        let leads_to_machine = vec![false; n_nodes];

        MachineUnionFind {
            parent,
            rank,
            is_machine,
            leads_to_machine,
        }
    }

    pub(crate) fn find(&mut self, mut n: usize) -> usize {
        let mut root = n;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[n] != root {
            let next = self.parent[n];
            self.parent[n] = root;
            n = next;
        }
        root
    }

    pub(crate) fn reaches_machine(&self, root: usize) -> bool {
        self.is_machine[root] || self.leads_to_machine[root]
    }

    /// Merges two components given by their roots and returns the surviving root.
    /// Both arguments must already be roots.
    pub(crate) fn union(&mut self, root_one: usize, root_two: usize) -> usize {
        if root_one == root_two {
            return root_one;
        }

        let (survivor, absorbed) = if self.rank[root_one] < self.rank[root_two] {
            (root_two, root_one)
        } else {
            (root_one, root_two)
        };
        if self.rank[root_one] == self.rank[root_two] {
            self.rank[survivor] += 1;
        }

        if self.reaches_machine(absorbed) {
            self.leads_to_machine[survivor] = true;
            self.leads_to_machine[absorbed] = false;
        }
        self.parent[absorbed] = survivor;
        survivor
    }

    #[cfg(test)]
    fn rank_of(&self, n: usize) -> usize {
        self.rank[n]
    }
}
