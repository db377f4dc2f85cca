use severance::{Severance, SeveranceError};

mod common;

macro_rules! define_min_cost_test {
    ($test_fn:ident) => {
        #[test]
        fn $test_fn() {
            fn cost_fn(planner: &Severance<u32>) -> Result<u32, SeveranceError> {
                planner.min_cost()
            }

            common::$test_fn(cost_fn);
        }
    };
}

define_min_cost_test!(test_sample_network);
define_min_cost_test!(test_no_machines);
define_min_cost_test!(test_one_machine);
define_min_cost_test!(test_single_node_machine);
define_min_cost_test!(test_three_node_path);
define_min_cost_test!(test_four_node_path_labelled_from_one);
define_min_cost_test!(test_star_all_machines);
define_min_cost_test!(test_all_nodes_machines);
define_min_cost_test!(test_leaves_are_machines);
define_min_cost_test!(test_equal_weights);
define_min_cost_test!(test_zero_weight_edges);
define_min_cost_test!(test_repeated_calls);
define_min_cost_test!(test_empty_network);
define_min_cost_test!(test_machine_out_of_range);
define_min_cost_test!(test_not_a_tree);
define_min_cost_test!(test_cost_overflow);
