//! Explicit game trees
//!
//! A [`GameTree`] is an arena of nodes, each with a static score (from the
//! maximizing side's perspective) and an ordered list of children. Children
//! may be shared, so the "tree" is really a DAG and transpositions can be
//! built on purpose. Nodes without children are terminal.
//!
//! [`TreeState`] is a cursor into a shared tree and implements
//! [`GameState`] with the node id as canonical key.

use std::fmt;
use std::sync::Arc;

use anyhow::ensure;
use minimax_core::{GameState, Score, Side, Successors};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub score: i32,
    pub children: Vec<NodeId>,
}

/// Game DAG rooted at node 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTree {
    nodes: Vec<TreeNode>,
}

impl GameTree {
    /// Build from `(score, children)` pairs indexed by node id.
    ///
    /// Fails on dangling child ids and on cycles.
    pub fn from_nodes(nodes: Vec<(i32, Vec<NodeId>)>) -> anyhow::Result<Arc<Self>> {
        ensure!(!nodes.is_empty(), "a game tree needs a root");
        let tree = GameTree {
            nodes: nodes
                .into_iter()
                .map(|(score, children)| TreeNode { score, children })
                .collect(),
        };
        for (id, node) in tree.nodes.iter().enumerate() {
            for &child in &node.children {
                ensure!(child < tree.nodes.len(), "node {id}: no child {child}");
            }
        }
        ensure!(tree.is_acyclic(), "game tree contains a cycle");
        Ok(Arc::new(tree))
    }

    /// Random layered DAG.
    ///
    /// Children always live on the next layer, so every path reaching a node
    /// has the same length and the same side to move.
    pub fn random(seed: u64, shape: &TreeShape) -> Arc<Self> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let width = shape.width.max(1);

        // layer 0 is the root, every other layer has `width` nodes
        let layer_start = |layer: usize| if layer == 0 { 0 } else { 1 + (layer - 1) * width };
        let total = layer_start(shape.layers) + width;

        let mut nodes = Vec::with_capacity(total);
        for layer in 0..=shape.layers {
            let count = if layer == 0 { 1 } else { width };
            for _ in 0..count {
                let stop = layer == shape.layers
                    || (layer > 0 && rng.random_bool(shape.early_leaf_chance));
                let children = if stop {
                    Vec::new()
                } else {
                    let next = layer_start(layer + 1);
                    let branch = rng.random_range(1..=shape.max_branch.max(1));
                    (0..branch)
                        .map(|_| next + rng.random_range(0..width))
                        .collect()
                };
                let score = if children.is_empty() && rng.random_bool(shape.decisive_chance) {
                    if rng.random_bool(0.5) {
                        Score::WIN.raw()
                    } else {
                        Score::LOSS.raw()
                    }
                } else {
                    rng.random_range(-shape.score_range..=shape.score_range)
                };
                nodes.push(TreeNode { score, children });
            }
        }
        log::trace!("random tree seed={seed} nodes={}", nodes.len());
        Arc::new(GameTree { nodes })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id]
    }

    /// Cursor at the root
    pub fn root(self: &Arc<Self>) -> TreeState {
        self.state(0)
    }

    /// Cursor at `id`
    pub fn state(self: &Arc<Self>, id: NodeId) -> TreeState {
        TreeState {
            tree: Arc::clone(self),
            id,
        }
    }

    fn is_acyclic(&self) -> bool {
        // 0 = unvisited, 1 = on the stack, 2 = done
        let mut mark = vec![0u8; self.nodes.len()];
        for start in 0..self.nodes.len() {
            if mark[start] != 0 {
                continue;
            }
            let mut stack = vec![(start, 0usize)];
            mark[start] = 1;
            while let Some((id, next)) = stack.pop() {
                match self.nodes[id].children.get(next) {
                    Some(&child) => {
                        stack.push((id, next + 1));
                        match mark[child] {
                            0 => {
                                mark[child] = 1;
                                stack.push((child, 0));
                            }
                            1 => return false,
                            _ => {}
                        }
                    }
                    None => mark[id] = 2,
                }
            }
        }
        true
    }
}

/// Shape parameters for [`GameTree::random`]
#[derive(Debug, Clone, PartialEq)]
pub struct TreeShape {
    /// Layers below the root
    pub layers: usize,
    /// Nodes per layer
    pub width: usize,
    /// Children per inner node, drawn from `1..=max_branch`
    pub max_branch: usize,
    /// Chance for a non-root node above the last layer to have no children
    pub early_leaf_chance: f64,
    /// Chance for a terminal node to carry a win/loss sentinel
    pub decisive_chance: f64,
    /// Heuristic scores are drawn from `-score_range..=score_range`
    pub score_range: i32,
}

impl Default for TreeShape {
    fn default() -> Self {
        Self {
            layers: 5,
            width: 8,
            max_branch: 4,
            early_leaf_chance: 0.1,
            decisive_chance: 0.2,
            score_range: 50,
        }
    }
}

/// Position in a [`GameTree`]
#[derive(Clone)]
pub struct TreeState {
    tree: Arc<GameTree>,
    id: NodeId,
}

impl TreeState {
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &Arc<GameTree> {
        &self.tree
    }
}

impl PartialEq for TreeState {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Arc::ptr_eq(&self.tree, &other.tree)
    }
}

impl Eq for TreeState {}

impl fmt::Debug for TreeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TreeState({})", self.id)
    }
}

impl GameState for TreeState {
    type Key = NodeId;

    fn expand(&self, _side: Side, out: &mut Successors<Self>) {
        out.extend(
            self.tree.nodes[self.id]
                .children
                .iter()
                .map(|&child| self.tree.state(child)),
        );
    }

    fn evaluate(&self, perspective: Side) -> Score {
        Score::new(self.tree.nodes[self.id].score).for_side(perspective)
    }

    fn canonical_key(&self) -> NodeId {
        self.id
    }
}
