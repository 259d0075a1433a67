use crate::ScoreError;
use mapi_core::Score;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// How a raw JSON cell becomes a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Kind {
    Numeric,
    Boolean,
    Categorical { categories: Vec<String> },
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric => write!(f, "numeric"),
            Self::Boolean => write!(f, "boolean"),
            Self::Categorical { categories } => write!(f, "categorical{:?}", categories),
        }
    }
}

/// One named input column of the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    #[serde(flatten)]
    pub kind: Kind,
}

impl Feature {
    /// Encode one cell. `null` is a missing value and encodes as NaN.
    pub fn encode(&self, cell: &Value) -> Result<Score, ScoreError> {
        match (&self.kind, cell) {
            (_, Value::Null) => Ok(Score::NAN),
            (Kind::Numeric, Value::Number(n)) => n.as_f64().ok_or_else(|| self.mismatch(cell)),
            (Kind::Boolean, Value::Bool(b)) => Ok(if *b { 1.0 } else { 0.0 }),
            (Kind::Categorical { categories }, Value::String(s)) => categories
                .iter()
                .position(|c| c == s)
                .map(|i| i as Score)
                .ok_or_else(|| ScoreError::UnknownCategory {
                    feature: self.name.clone(),
                    value: s.clone(),
                }),
            _ => Err(self.mismatch(cell)),
        }
    }
    fn mismatch(&self, cell: &Value) -> ScoreError {
        ScoreError::WrongType {
            feature: self.name.clone(),
            expected: match self.kind {
                Kind::Numeric => "number",
                Kind::Boolean => "boolean",
                Kind::Categorical { .. } => "string",
            },
            found: match cell {
                Value::Null => "null",
                Value::Bool(_) => "boolean",
                Value::Number(_) => "number",
                Value::String(_) => "string",
                Value::Array(_) => "array",
                Value::Object(_) => "object",
            },
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feature(kind: Kind) -> Feature {
        Feature {
            name: String::from("f"),
            kind,
        }
    }

    #[test]
    fn numeric_accepts_integers_and_floats() {
        let f = feature(Kind::Numeric);
        assert_eq!(f.encode(&json!(35)), Ok(35.0));
        assert_eq!(f.encode(&json!(-1.5)), Ok(-1.5));
    }
    #[test]
    fn boolean_encodes_as_unit() {
        let f = feature(Kind::Boolean);
        assert_eq!(f.encode(&json!(true)), Ok(1.0));
        assert_eq!(f.encode(&json!(false)), Ok(0.0));
    }
    #[test]
    fn categorical_encodes_as_index() {
        let f = feature(Kind::Categorical {
            categories: vec![String::from("rent"), String::from("own")],
        });
        assert_eq!(f.encode(&json!("own")), Ok(1.0));
        assert_eq!(
            f.encode(&json!("lease")),
            Err(ScoreError::UnknownCategory {
                feature: String::from("f"),
                value: String::from("lease"),
            })
        );
    }
    #[test]
    fn null_is_missing() {
        assert!(feature(Kind::Numeric).encode(&Value::Null).unwrap().is_nan());
    }
    #[test]
    fn wrong_type_names_both_sides() {
        assert_eq!(
            feature(Kind::Numeric).encode(&json!("35")),
            Err(ScoreError::WrongType {
                feature: String::from("f"),
                expected: "number",
                found: "string",
            })
        );
        assert!(feature(Kind::Boolean).encode(&json!(1)).is_err());
        assert!(feature(Kind::Numeric).encode(&json!([1])).is_err());
    }
    #[test]
    fn schema_entries_parse_flat() {
        let f = serde_json::from_value::<Feature>(json!({
            "name": "tenure",
            "kind": "categorical",
            "categories": ["rent", "own"],
        }))
        .unwrap();
        assert_eq!(f.name, "tenure");
        assert!(matches!(f.kind, Kind::Categorical { ref categories } if categories.len() == 2));
    }
}
