use mapi_core::Score;
use serde::Serialize;
use serde_json::Value;

/// Model-native output for one row: a class label or a regression value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Prediction {
    Class(Value),
    Value(Score),
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Class(label) => write!(f, "{}", label),
            Self::Value(value) => write!(f, "{}", value),
        }
    }
}
