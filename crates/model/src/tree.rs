use mapi_core::Score;
use serde::Deserialize;
use serde::Serialize;

/// A regression-tree node. Leaves carry their contribution to the margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged, try_from = "Fields")]
pub enum Node {
    Leaf {
        leaf: Score,
    },
    Split {
        feature: usize,
        threshold: Score,
        left: usize,
        right: usize,
        #[serde(default)]
        default_left: bool,
    },
}

/// Every key a node may carry. Which ones are present decides the shape.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Fields {
    leaf: Option<Score>,
    feature: Option<usize>,
    threshold: Option<Score>,
    left: Option<usize>,
    right: Option<usize>,
    default_left: Option<bool>,
}

impl TryFrom<Fields> for Node {
    type Error = String;
    fn try_from(fields: Fields) -> Result<Self, Self::Error> {
        let split = fields.feature.is_some()
            || fields.threshold.is_some()
            || fields.left.is_some()
            || fields.right.is_some()
            || fields.default_left.is_some();
        match (fields.leaf, split) {
            (Some(_), true) => Err(String::from("node mixes `leaf` with split fields")),
            (Some(leaf), false) => Ok(Self::Leaf { leaf }),
            (None, _) => Ok(Self::Split {
                feature: fields.feature.ok_or("split node is missing `feature`")?,
                threshold: fields.threshold.ok_or("split node is missing `threshold`")?,
                left: fields.left.ok_or("split node is missing `left`")?,
                right: fields.right.ok_or("split node is missing `right`")?,
                default_left: fields.default_left.unwrap_or_default(),
            }),
        }
    }
}

/// Flat, root-first node array.
///
/// Every child index points strictly past its parent, so a walk from the
/// root always terminates at a leaf once [`Tree::validate`] has passed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl From<Vec<Node>> for Tree {
    fn from(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

impl Tree {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    /// Leaf value reached by `x`. NaN inputs follow `default_left`.
    pub fn leaf(&self, x: &[Score]) -> Score {
        let mut i = 0;
        loop {
            match self.nodes[i] {
                Node::Leaf { leaf } => return leaf,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    default_left,
                } => {
                    let value = x[feature];
                    i = match value.is_nan() {
                        true if default_left => left,
                        true => right,
                        false if value < threshold => left,
                        false => right,
                    };
                }
            }
        }
    }
    pub fn validate(&self, width: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err(String::from("tree has no nodes"));
        }
        for (i, node) in self.nodes.iter().enumerate() {
            match *node {
                Node::Leaf { leaf } if !leaf.is_finite() => {
                    return Err(format!("leaf {} is not finite", i));
                }
                Node::Leaf { .. } => {}
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    ..
                } => {
                    if feature >= width {
                        return Err(format!("node {} splits on feature {} of {}", i, feature, width));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {} threshold is not finite", i));
                    }
                    for child in [left, right] {
                        if child <= i || child >= self.nodes.len() {
                            return Err(format!("node {} has out-of-order child {}", i, child));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
