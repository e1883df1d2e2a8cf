//! Expansion of a truth table into its full, unreduced decision tree.

use log::debug;
use rustc_hash::FxHashSet;

use crate::bdd::{BDDNode, NodeId};
use crate::config::Config;
use crate::error::Result;
use crate::truth_table::TruthTable;

/// A complete binary decision tree: depth `n`, `2^n - 1` decision nodes, and
/// leaves that point at the two shared terminals.
///
/// Decision node `k` levels down tests the variable with ordinal `k`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTree {
    nodes: Vec<BDDNode>,
    root: NodeId,
    num_vars: usize,
}

impl DecisionTree {
    /// Builds the tree of `table`. An assignment leads to ONE exactly when it is
    /// reachable by expanding a care pattern; don't-cares lead to ZERO.
    pub fn from_table(table: &TruthTable, config: Config) -> Result<Self> {
        config.check(table.num_vars())?;

        Ok(Self::build(table.num_vars(), &table.care_assignments()))
    }

    /// Builds the tree over `num_vars` variables whose ONE leaves are exactly the
    /// assignment strings in `care`.
    pub fn build(num_vars: usize, care: &FxHashSet<String>) -> Self {
        let mut tree = Self {
            nodes: vec![BDDNode::False, BDDNode::True],
            root: NodeId::ZERO,
            num_vars,
        };

        let mut path = String::with_capacity(num_vars);
        tree.root = tree.build_recursive(0, &mut path, care);

        debug!(
            "decision tree over {} variables: {} decision nodes",
            num_vars,
            tree.decision_count()
        );

        tree
    }

    fn build_recursive(&mut self, depth: usize, path: &mut String, care: &FxHashSet<String>) -> NodeId {
        if depth == self.num_vars {
            return if care.contains(path.as_str()) {
                NodeId::ONE
            } else {
                NodeId::ZERO
            };
        }

        path.push('0');
        let else_subtree = self.build_recursive(depth + 1, path, care);
        path.pop();

        path.push('1');
        let then_subtree = self.build_recursive(depth + 1, path, care);
        path.pop();

        self.push(BDDNode::Choice(else_subtree, depth, then_subtree))
    }

    fn push(&mut self, node: BDDNode) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub const fn root(&self) -> NodeId {
        self.root
    }

    pub fn nodes(&self) -> &[BDDNode] {
        &self.nodes
    }

    pub const fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn decision_count(&self) -> usize {
        self.nodes.len() - 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bdd::NodeSource;

    fn care(assignments: &[&str]) -> FxHashSet<String> {
        assignments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_tree_size() {
        for n in 0..6 {
            let tree = DecisionTree::build(n, &care(&[]));
            assert_eq!(tree.decision_count(), (1 << n) - 1, "n = {n}");
        }
    }

    #[test]
    fn test_zero_variables() {
        assert_eq!(DecisionTree::build(0, &care(&[])).root(), NodeId::ZERO);
        assert_eq!(DecisionTree::build(0, &care(&[""])).root(), NodeId::ONE);
    }

    #[test]
    fn test_leaves_follow_care_set() {
        let tree = DecisionTree::build(2, &care(&["01", "10"]));
        let root = tree.root();
        assert!(!tree.evaluate(root, &[false, false]));
        assert!(tree.evaluate(root, &[false, true]));
        assert!(tree.evaluate(root, &[true, false]));
        assert!(!tree.evaluate(root, &[true, true]));
    }

    #[test]
    fn test_levels_follow_variable_order() {
        let tree = DecisionTree::build(2, &care(&["11"]));
        match tree.node(tree.root()) {
            BDDNode::Choice(e, 0, t) => {
                assert!(matches!(tree.node(e), BDDNode::Choice(_, 1, _)));
                assert!(matches!(tree.node(t), BDDNode::Choice(_, 1, _)));
            }
            other => panic!("unexpected root {other:?}"),
        }
    }
}
