extern crate dot;

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::io;
use std::io::Write;

use itertools::Itertools;

use crate::bdd::{BDDNode, NodeId, NodeSource, Robdd};
use crate::builder::DecisionTree;
use crate::symbols::Variable;

// (source, then-edge, target)
type GraphEdge = (NodeId, bool, NodeId);
type GraphNode = NodeId;

/// DOT view of the nodes reachable from a root.
///
/// Terminals are drawn as boxes, else-edges dotted and then-edges solid; nodes
/// testing the same variable are placed on the same rank.
pub struct BDDGraph {
    nodes: Vec<(NodeId, BDDNode)>,
    names: Vec<String>,
}

impl BDDGraph {
    pub fn new<S: NodeSource>(source: &S, root: NodeId, vars: &[Variable]) -> Self {
        Self {
            nodes: source
                .node_list(root)
                .into_iter()
                .map(|id| (id, source.node(id)))
                .collect(),
            names: vars.iter().map(|v| v.name.to_string()).collect(),
        }
    }

    pub fn from_robdd(robdd: &Robdd) -> Self {
        Self::new(robdd.env(), robdd.root(), robdd.vars())
    }

    pub fn from_tree(tree: &DecisionTree, vars: &[Variable]) -> Self {
        Self::new(tree, tree.root(), vars)
    }

    pub fn render_dot<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let mut buffer = Vec::new();
        dot::render(self, &mut buffer)?;

        // rank hints go inside the graph body
        let text = String::from_utf8_lossy(&buffer).into_owned();
        let body = text.trim_end().strip_suffix('}').unwrap_or(text.as_str());
        writer.write_all(body.as_bytes())?;

        for (var, ids) in self.levels() {
            writeln!(
                writer,
                "    subgraph level_{} {{ rank=same; {}; }}",
                var,
                ids.iter().map(|id| Self::id_name(*id)).join("; ")
            )?;
        }

        writeln!(writer, "}}")
    }

    fn levels(&self) -> BTreeMap<usize, Vec<NodeId>> {
        let mut levels: BTreeMap<usize, Vec<NodeId>> = BTreeMap::new();

        for (id, node) in &self.nodes {
            if let BDDNode::Choice(_, var, _) = node {
                levels.entry(*var).or_default().push(*id);
            }
        }

        levels
    }

    fn id_name(id: NodeId) -> String {
        match id {
            NodeId::ZERO => "n_zero".to_string(),
            NodeId::ONE => "n_one".to_string(),
            _ => format!("n_{}", id.index()),
        }
    }

    fn lookup(&self, id: NodeId) -> Option<BDDNode> {
        self.nodes
            .binary_search_by_key(&id, |(i, _)| *i)
            .ok()
            .map(|pos| self.nodes[pos].1)
    }
}

impl<'a> dot::Labeller<'a, GraphNode, GraphEdge> for BDDGraph {
    fn graph_id(&self) -> dot::Id<'a> {
        dot::Id::new("bdd").expect("cannot create Id named 'bdd'")
    }

    fn node_id(&self, n: &GraphNode) -> dot::Id<'a> {
        dot::Id::new(Self::id_name(*n))
            .unwrap_or_else(|_| panic!("cannot create Id for node {n}"))
    }

    fn node_label(&self, n: &GraphNode) -> dot::LabelText<'a> {
        match self.lookup(*n) {
            Some(BDDNode::False) => dot::LabelText::label("0"),
            Some(BDDNode::True) => dot::LabelText::label("1"),
            Some(BDDNode::Choice(_, var, _)) => dot::LabelText::label(
                self.names
                    .get(var)
                    .cloned()
                    .unwrap_or_else(|| format!("x{var}")),
            ),
            None => dot::LabelText::label(n.to_string()),
        }
    }

    fn node_shape(&self, n: &GraphNode) -> Option<dot::LabelText<'a>> {
        if n.is_terminal() {
            Some(dot::LabelText::label("box"))
        } else {
            None
        }
    }

    fn edge_label(&self, (_, e, _): &GraphEdge) -> dot::LabelText<'a> {
        if *e {
            dot::LabelText::LabelStr(Cow::Borrowed("1"))
        } else {
            dot::LabelText::LabelStr(Cow::Borrowed("0"))
        }
    }

    fn edge_style(&self, (_, e, _): &GraphEdge) -> dot::Style {
        if *e {
            dot::Style::Solid
        } else {
            dot::Style::Dotted
        }
    }
}

impl<'a> dot::GraphWalk<'a, GraphNode, GraphEdge> for BDDGraph {
    fn nodes(&self) -> dot::Nodes<'a, GraphNode> {
        self.nodes.iter().map(|(id, _)| *id).collect()
    }

    fn edges(&self) -> dot::Edges<'a, GraphEdge> {
        self.nodes
            .iter()
            .filter_map(|(id, node)| match node {
                BDDNode::Choice(e, _, t) => Some([(*id, false, *e), (*id, true, *t)]),
                BDDNode::False | BDDNode::True => None,
            })
            .flatten()
            .collect()
    }

    fn source(&self, (a, _, _): &GraphEdge) -> GraphNode {
        *a
    }

    fn target(&self, (_, _, b): &GraphEdge) -> GraphNode {
        *b
    }
}
