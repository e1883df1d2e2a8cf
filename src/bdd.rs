use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::builder::DecisionTree;
use crate::config::Config;
use crate::error::Result;
use crate::reduce::reduce;
use crate::symbols::Variable;
use crate::truth_table::TruthTable;

/// Handle of a node inside an arena.
///
/// The two terminals live at the same handles in every arena, so `ZERO` and `ONE`
/// are shared by all graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);

    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }

    pub fn is_terminal(self) -> bool {
        self == Self::ZERO || self == Self::ONE
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BDDNode {
    False,
    True,
    // Choice (else-subtree, variable ordinal, then-subtree)
    Choice(NodeId, usize, NodeId),
}

/// Read access to an arena of [`BDDNode`]s.
pub trait NodeSource {
    fn node(&self, id: NodeId) -> BDDNode;

    /// Every node reachable from `root`, in ascending handle order.
    fn node_list(&self, root: NodeId) -> Vec<NodeId> {
        let mut seen = BTreeSet::new();
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            if let BDDNode::Choice(e, _, t) = self.node(id) {
                stack.push(e);
                stack.push(t);
            }
        }

        seen.into_iter().collect()
    }

    /// Follows the path selected by `assignment` (indexed by variable ordinal).
    fn evaluate(&self, root: NodeId, assignment: &[bool]) -> bool {
        let mut current = root;

        loop {
            match self.node(current) {
                BDDNode::False => return false,
                BDDNode::True => return true,
                BDDNode::Choice(e, var, t) => {
                    current = if assignment.get(var).copied().unwrap_or(false) {
                        t
                    } else {
                        e
                    };
                }
            }
        }
    }
}

/// Canonicalization context for reduced diagrams.
///
/// Every decision node is created through [`BDDEnv::mk_choice`], which never
/// creates a node with identical children and never creates two nodes with the
/// same `(variable, else, then)` triple. Two functions reduced against the same
/// environment are equivalent exactly when their roots are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BDDEnv {
    nodes: RefCell<Vec<BDDNode>>,
    unique: RefCell<FxHashMap<(usize, NodeId, NodeId), NodeId>>,
}

impl Default for BDDEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl BDDEnv {
    pub fn new() -> Self {
        Self {
            nodes: RefCell::new(vec![BDDNode::False, BDDNode::True]),
            unique: RefCell::new(FxHashMap::default()),
        }
    }

    /// Number of nodes in the environment, terminals included.
    pub fn size(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub const fn mk_const(&self, v: bool) -> NodeId {
        if v {
            NodeId::ONE
        } else {
            NodeId::ZERO
        }
    }

    // make a new choice on `var` between the given subtrees.
    // a choice between identical subtrees is dropped, otherwise the
    // canonical node for the triple is returned
    pub fn mk_choice(&self, else_subtree: NodeId, var: usize, then_subtree: NodeId) -> NodeId {
        if else_subtree == then_subtree {
            return else_subtree;
        }

        let key = (var, else_subtree, then_subtree);

        if let Some(&existing) = self.unique.borrow().get(&key) {
            return existing;
        }

        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(BDDNode::Choice(else_subtree, var, then_subtree));
        self.unique.borrow_mut().insert(key, id);

        id
    }

    /// Counts reachable decision nodes whose triple also belongs to another
    /// reachable node. Always zero for diagrams built by this environment.
    pub fn duplicates(&self, root: NodeId) -> usize {
        let decisions: Vec<BDDNode> = self
            .node_list(root)
            .into_iter()
            .map(|id| self.node(id))
            .filter(|n| matches!(n, BDDNode::Choice(..)))
            .collect();

        decisions.len() - decisions.iter().unique().count()
    }
}

impl NodeSource for BDDEnv {
    fn node(&self, id: NodeId) -> BDDNode {
        self.nodes.borrow()[id.0]
    }
}

impl NodeSource for DecisionTree {
    fn node(&self, id: NodeId) -> BDDNode {
        self.nodes()[id.0]
    }
}

/// A reduced ordered BDD of a truth table, together with its own environment.
#[derive(Debug, Clone)]
pub struct Robdd {
    env: BDDEnv,
    root: NodeId,
    vars: Vec<Variable>,
}

impl Robdd {
    /// Builds the full decision tree of `table` and reduces it in a fresh environment.
    pub fn from_table(table: &TruthTable, config: Config) -> Result<Self> {
        let tree = DecisionTree::from_table(table, config)?;
        let env = BDDEnv::new();
        let root = reduce(&env, &tree);

        Ok(Self {
            env,
            root,
            vars: table.vars.clone(),
        })
    }

    pub const fn root(&self) -> NodeId {
        self.root
    }

    pub const fn env(&self) -> &BDDEnv {
        &self.env
    }

    pub fn vars(&self) -> &[Variable] {
        &self.vars
    }

    pub fn node(&self, id: NodeId) -> BDDNode {
        self.env.node(id)
    }

    /// Reachable nodes, terminals included.
    pub fn node_count(&self) -> usize {
        self.env.node_list(self.root).len()
    }

    /// Reachable decision nodes.
    pub fn decision_nodes(&self) -> Vec<NodeId> {
        self.env
            .node_list(self.root)
            .into_iter()
            .filter(|id| !id.is_terminal())
            .collect()
    }

    pub fn evaluate(&self, assignment: &[bool]) -> bool {
        self.env.evaluate(self.root, assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminals_are_shared() {
        let a = BDDEnv::new();
        let b = BDDEnv::new();
        assert_eq!(a.mk_const(true), b.mk_const(true));
        assert_eq!(a.node(NodeId::ZERO), BDDNode::False);
        assert_eq!(b.node(NodeId::ONE), BDDNode::True);
        assert_eq!(a.size(), 2);
    }

    #[test]
    fn test_redundant_choice_collapses() {
        let e = BDDEnv::new();
        let one = e.mk_const(true);
        assert_eq!(e.mk_choice(one, 0, one), one);
        assert_eq!(e.size(), 2);
    }

    #[test]
    fn test_hash_consing() {
        let e = BDDEnv::new();
        let x = e.mk_choice(NodeId::ZERO, 1, NodeId::ONE);
        let y = e.mk_choice(NodeId::ZERO, 1, NodeId::ONE);
        assert_eq!(x, y);
        assert_eq!(e.size(), 3);

        let not_x = e.mk_choice(NodeId::ONE, 1, NodeId::ZERO);
        assert_ne!(x, not_x);
        assert_eq!(e.size(), 4);
        assert_eq!(e.duplicates(e.mk_choice(x, 0, not_x)), 0);
    }

    #[test]
    fn test_evaluate() {
        let e = BDDEnv::new();
        let b = e.mk_choice(NodeId::ZERO, 1, NodeId::ONE);
        let and = e.mk_choice(NodeId::ZERO, 0, b);
        assert!(e.evaluate(and, &[true, true]));
        assert!(!e.evaluate(and, &[true, false]));
        assert!(!e.evaluate(and, &[false, true]));
        assert_eq!(e.node_list(and), vec![NodeId::ZERO, NodeId::ONE, b, and]);
    }
}
