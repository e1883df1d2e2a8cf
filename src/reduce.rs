//! Bottom-up reduction of a decision tree into a reduced ordered BDD.

use log::debug;
use rustc_hash::FxHashMap;

use crate::bdd::{BDDEnv, BDDNode, NodeId, NodeSource};
use crate::builder::DecisionTree;

/// Reduces `tree` against the canonicalization table of `env` and returns the
/// reduced root.
///
/// Reducing two logically equivalent trees over the same variable order against
/// one environment yields the same root. The memo of visited tree nodes is local
/// to this call; only `env` carries state between calls.
pub fn reduce(env: &BDDEnv, tree: &DecisionTree) -> NodeId {
    let mut memo: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let before = env.size();

    let root = reduce_recursive(env, tree, tree.root(), &mut memo);

    debug!(
        "reduced {} decision nodes to {} new nodes",
        tree.decision_count(),
        env.size() - before
    );

    root
}

fn reduce_recursive(
    env: &BDDEnv,
    tree: &DecisionTree,
    id: NodeId,
    memo: &mut FxHashMap<NodeId, NodeId>,
) -> NodeId {
    if let Some(&reduced) = memo.get(&id) {
        return reduced;
    }

    let reduced = match tree.node(id) {
        BDDNode::False => env.mk_const(false),
        BDDNode::True => env.mk_const(true),
        BDDNode::Choice(e, var, t) => {
            let e = reduce_recursive(env, tree, e, memo);
            let t = reduce_recursive(env, tree, t, memo);
            env.mk_choice(e, var, t)
        }
    };

    memo.insert(id, reduced);
    reduced
}
