use crate::Tree;
use mapi_core::*;
use serde::Deserialize;
use serde::Serialize;

/// Link between the raw margin and the reported output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    BinaryLogistic,
    SquaredError,
}

impl Objective {
    /// Margin contributed by a global bias expressed in output space.
    pub fn margin(&self, base_score: Score) -> Score {
        match self {
            Self::BinaryLogistic => (base_score / (1.0 - base_score)).ln(),
            Self::SquaredError => base_score,
        }
    }
    /// Output-space value of a margin.
    pub fn transform(&self, margin: Score) -> Score {
        match self {
            Self::BinaryLogistic => 1.0 / (1.0 + (-margin).exp()),
            Self::SquaredError => margin,
        }
    }
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BinaryLogistic => write!(f, "binary_logistic"),
            Self::SquaredError => write!(f, "squared_error"),
        }
    }
}

fn default_base_score() -> Score {
    DEFAULT_BASE_SCORE
}

/// The scoring half of an artifact, operating on encoded, scaled rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Estimator {
    /// Additive ensemble of regression trees.
    Booster {
        objective: Objective,
        #[serde(default = "default_base_score")]
        base_score: Score,
        trees: Vec<Tree>,
    },
    /// Single weight per feature plus bias.
    Linear {
        objective: Objective,
        weights: Vec<Score>,
        bias: Score,
    },
}

impl Estimator {
    pub fn objective(&self) -> Objective {
        match self {
            Self::Booster { objective, .. } => *objective,
            Self::Linear { objective, .. } => *objective,
        }
    }
    /// Trees route NaN; a dot product cannot.
    pub fn accepts_missing(&self) -> bool {
        matches!(self, Self::Booster { .. })
    }
    /// Raw margin of one encoded row.
    pub fn margin(&self, x: &[Score]) -> Score {
        match self {
            Self::Booster {
                objective,
                base_score,
                trees,
            } => objective.margin(*base_score) + trees.iter().map(|t| t.leaf(x)).sum::<Score>(),
            Self::Linear { weights, bias, .. } => {
                bias + weights.iter().zip(x).map(|(w, x)| w * x).sum::<Score>()
            }
        }
    }
    /// Output-space value of one encoded row.
    pub fn score(&self, x: &[Score]) -> Score {
        self.objective().transform(self.margin(x))
    }
    pub fn validate(&self, width: usize) -> Result<(), String> {
        match self {
            Self::Booster {
                objective,
                base_score,
                trees,
            } => {
                match objective {
                    Objective::BinaryLogistic if !(*base_score > 0.0 && *base_score < 1.0) => {
                        return Err(format!("base_score {} outside (0, 1)", base_score));
                    }
                    _ if !base_score.is_finite() => {
                        return Err(String::from("base_score must be finite"));
                    }
                    _ => {}
                }
                trees
                    .iter()
                    .enumerate()
                    .try_for_each(|(i, t)| t.validate(width).map_err(|e| format!("tree {}: {}", i, e)))
            }
            Self::Linear { weights, bias, .. } => {
                if weights.len() != width {
                    return Err(format!("{} weights for {} features", weights.len(), width));
                }
                if !bias.is_finite() || weights.iter().any(|w| !w.is_finite()) {
                    return Err(String::from("linear coefficients must be finite"));
                }
                Ok(())
            }
        }
    }
}

impl std::fmt::Display for Estimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Booster {
                objective, trees, ..
            } => write!(f, "booster ({}, {} trees)", objective, trees.len()),
            Self::Linear { objective, .. } => write!(f, "linear ({})", objective),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Node;

    fn booster(objective: Objective, base_score: Score) -> Estimator {
        Estimator::Booster {
            objective,
            base_score,
            trees: vec![
                Tree::from(vec![Node::Leaf { leaf: 0.25 }]),
                Tree::from(vec![
                    Node::Split {
                        feature: 0,
                        threshold: 0.0,
                        left: 1,
                        right: 2,
                        default_left: false,
                    },
                    Node::Leaf { leaf: -1.0 },
                    Node::Leaf { leaf: 1.0 },
                ]),
            ],
        }
    }

    #[test]
    fn booster_sums_leaves_onto_base_margin() {
        let model = booster(Objective::SquaredError, 10.0);
        assert_eq!(model.margin(&[-1.0]), 9.25);
        assert_eq!(model.score(&[1.0]), 11.25);
    }
    #[test]
    fn logistic_base_score_is_a_probability() {
        let model = booster(Objective::BinaryLogistic, 0.5);
        assert_eq!(model.margin(&[1.0]), 1.25);
        let p = model.score(&[1.0]);
        assert!((p - 1.0 / (1.0 + (-1.25f64).exp())).abs() < 1e-12);
        assert!(booster(Objective::BinaryLogistic, 1.0).validate(1).is_err());
        assert!(booster(Objective::BinaryLogistic, 0.2).validate(1).is_ok());
    }
    #[test]
    fn linear_is_a_dot_product() {
        let model = Estimator::Linear {
            objective: Objective::SquaredError,
            weights: vec![2.0, -1.0],
            bias: 0.5,
        };
        assert!(model.validate(2).is_ok());
        assert!(model.validate(3).is_err());
        assert!(!model.accepts_missing());
        assert_eq!(model.score(&[3.0, 4.0]), 2.5);
    }
    #[test]
    fn tree_errors_name_the_tree() {
        let err = booster(Objective::SquaredError, 0.0).validate(0).unwrap_err();
        assert!(err.starts_with("tree 1"), "{}", err);
    }
}
