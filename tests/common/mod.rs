use severance::{Edge, Severance, SeveranceError, SeveranceParams};

pub type CostFn = fn(&Severance<u32>) -> Result<u32, SeveranceError>;

fn edges(raw: &[(usize, usize, u32)]) -> Vec<Edge<u32>> {
    raw.iter().map(|&edge| Edge::from(edge)).collect()
}

pub fn test_sample_network(cost_fn: CostFn) {
    let edges = edges(&[(2, 1, 8), (1, 0, 5), (2, 4, 5), (1, 3, 4)]);
    let machines = vec![2, 4, 0];
    let planner = Severance::default_params(5, &edges, &machines);
    assert_eq!(Ok(10), cost_fn(&planner));
}

pub fn test_no_machines(cost_fn: CostFn) {
    let edges = edges(&[(0, 1, 3), (1, 2, 1), (1, 3, 7)]);
    let planner = Severance::default_params(4, &edges, &[]);
    assert_eq!(Ok(0), cost_fn(&planner));
}

pub fn test_one_machine(cost_fn: CostFn) {
    let edges = edges(&[(0, 1, 3), (1, 2, 1), (1, 3, 7)]);
    for machine in 0..4 {
        let machines = [machine];
        let planner = Severance::default_params(4, &edges, &machines);
        assert_eq!(Ok(0), cost_fn(&planner));
    }
}

pub fn test_single_node_machine(cost_fn: CostFn) {
    let planner = Severance::default_params(1, &[], &[0]);
    assert_eq!(Ok(0), cost_fn(&planner));
}

pub fn test_three_node_path(cost_fn: CostFn) {
    // A-B-C with machines at A and C: the lighter edge is cut
    let edges = edges(&[(0, 1, 5), (1, 2, 9)]);
    let machines = vec![0, 2];
    let planner = Severance::default_params(3, &edges, &machines);
    assert_eq!(Ok(5), cost_fn(&planner));
}

pub fn test_four_node_path_labelled_from_one(cost_fn: CostFn) {
    // Node 0 is unused, so the edges only span nodes 1 to 4
    let edges = edges(&[(1, 2, 3), (2, 3, 4), (3, 4, 2)]);
    let machines = vec![1, 4];
    let params = SeveranceParams::builder().require_spanning(false).build();
    let planner = Severance::new(5, &edges, &machines, params);
    assert_eq!(Ok(2), cost_fn(&planner));
}

pub fn test_star_all_machines(cost_fn: CostFn) {
    let edges = edges(&[(0, 1, 4), (0, 2, 9), (0, 3, 1), (0, 4, 6)]);
    let machines: Vec<usize> = (0..5).collect();
    let planner = Severance::default_params(5, &edges, &machines);
    assert_eq!(Ok(20), cost_fn(&planner));
}

pub fn test_all_nodes_machines(cost_fn: CostFn) {
    let edges = edges(&[(0, 1, 2), (1, 2, 8), (2, 3, 3), (2, 4, 5), (4, 5, 1)]);
    let machines: Vec<usize> = (0..6).collect();
    let planner = Severance::default_params(6, &edges, &machines);
    assert_eq!(Ok(19), cost_fn(&planner));
}

pub fn test_leaves_are_machines(cost_fn: CostFn) {
    // Star with a plain centre: every leaf but the heaviest-connected one is cut loose
    let edges = edges(&[(0, 1, 4), (0, 2, 9), (0, 3, 1), (0, 4, 6)]);
    let machines = vec![1, 2, 3, 4];
    let planner = Severance::default_params(5, &edges, &machines);
    assert_eq!(Ok(11), cost_fn(&planner));
}

pub fn test_equal_weights(cost_fn: CostFn) {
    let edges = edges(&[(0, 1, 3), (1, 2, 3), (2, 3, 3), (3, 4, 3)]);
    let machines = vec![0, 2, 4];
    let planner = Severance::default_params(5, &edges, &machines);
    assert_eq!(Ok(6), cost_fn(&planner));
}

pub fn test_zero_weight_edges(cost_fn: CostFn) {
    let edges = edges(&[(0, 1, 0), (1, 2, 7), (2, 3, 0)]);
    let machines = vec![0, 3];
    let planner = Severance::default_params(4, &edges, &machines);
    assert_eq!(Ok(0), cost_fn(&planner));
}

pub fn test_repeated_calls(cost_fn: CostFn) {
    let edges = edges(&[(2, 1, 8), (1, 0, 5), (2, 4, 5), (1, 3, 4)]);
    let machines = vec![2, 4, 0];
    let planner = Severance::default_params(5, &edges, &machines);
    let first = cost_fn(&planner);
    let second = cost_fn(&planner);
    assert_eq!(Ok(10), first);
    assert_eq!(first, second);
}

pub fn test_empty_network(cost_fn: CostFn) {
    let planner = Severance::default_params(0, &[], &[]);
    assert_eq!(Err(SeveranceError::EmptyNetwork), cost_fn(&planner));
}

pub fn test_machine_out_of_range(cost_fn: CostFn) {
    let edges = edges(&[(0, 1, 5), (1, 2, 9)]);
    let machines = vec![0, 3];
    let planner = Severance::default_params(3, &edges, &machines);
    assert_eq!(
        Err(SeveranceError::MachineOutOfRange {
            machine: 3,
            node_count: 3,
        }),
        cost_fn(&planner)
    );
}

pub fn test_not_a_tree(cost_fn: CostFn) {
    let edges = edges(&[(0, 1, 5), (1, 2, 9), (2, 0, 1)]);
    let machines = vec![0, 2];
    let planner = Severance::default_params(4, &edges, &machines);
    assert_eq!(Err(SeveranceError::Cycle { edge: 2 }), cost_fn(&planner));
}

pub fn test_cost_overflow(cost_fn: CostFn) {
    let edges = edges(&[(0, 1, u32::MAX), (0, 2, u32::MAX)]);
    let machines = vec![0, 1, 2];
    let planner = Severance::default_params(3, &edges, &machines);
    assert_eq!(Err(SeveranceError::CostOverflow), cost_fn(&planner));
}
