use crate::*;
use mapi_core::*;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

/// On-disk shape of an artifact, before validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Artifact {
    features: Vec<Feature>,
    #[serde(default)]
    scaler: Option<Scaler>,
    estimator: Estimator,
    #[serde(default)]
    classes: Option<Vec<Value>>,
}

/// A validated, immutable model artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    features: Vec<Feature>,
    scaler: Option<Scaler>,
    estimator: Estimator,
    classes: Option<[Value; 2]>,
}

impl Model {
    /// Read and validate an artifact file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        log::info!("loading model from {}", path.display());
        let model = std::fs::read_to_string(path)?.parse::<Self>()?;
        log::info!(
            "loaded {} over {} features",
            model.estimator,
            model.features.len()
        );
        Ok(model)
    }
    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }
    pub fn scaler(&self) -> Option<&Scaler> {
        self.scaler.as_ref()
    }
    pub fn classes(&self) -> Option<&[Value; 2]> {
        self.classes.as_ref()
    }

    /// Encode every row against the schema, then standardize.
    fn encode(&self, frame: &Frame) -> Result<Vec<Vec<Score>>, ScoreError> {
        let index = self
            .features
            .iter()
            .map(|f| {
                frame
                    .column(&f.name)
                    .ok_or_else(|| ScoreError::MissingFeature(f.name.clone()))
            })
            .collect::<Result<Vec<usize>, _>>()?;
        if let Some(extra) = frame
            .columns()
            .iter()
            .find(|c| !self.features.iter().any(|f| &f.name == *c))
        {
            return Err(ScoreError::UnexpectedFeature(extra.clone()));
        }
        frame
            .rows()
            .iter()
            .map(|row| -> Result<Vec<Score>, ScoreError> {
                let mut x = self
                    .features
                    .iter()
                    .zip(&index)
                    .map(|(feature, &i)| -> Result<Score, ScoreError> {
                        match feature.encode(&row[i])? {
                            v if v.is_nan() && !self.estimator.accepts_missing() => {
                                Err(ScoreError::MissingValue(feature.name.clone()))
                            }
                            v => Ok(v),
                        }
                    })
                    .collect::<Result<Vec<Score>, _>>()?;
                if let Some(scaler) = self.scaler.as_ref() {
                    scaler.apply(&mut x);
                }
                Ok(x)
            })
            .collect()
    }
    /// Map one encoded row to its output. Overflowed margins are rejected.
    fn decide(&self, x: &[Score]) -> Result<Prediction, ScoreError> {
        let margin = self.estimator.margin(x);
        if !margin.is_finite() {
            return Err(ScoreError::NonFinite);
        }
        let score = self.estimator.objective().transform(margin);
        Ok(match self.classes.as_ref() {
            Some([_, positive]) if score >= DECISION_THRESHOLD => Prediction::Class(positive.clone()),
            Some([negative, _]) => Prediction::Class(negative.clone()),
            None => Prediction::Value(score),
        })
    }
}

impl Predictor for Model {
    fn features(&self) -> &[Feature] {
        &self.features
    }
    fn predict(&self, frame: &Frame) -> Result<Vec<Prediction>, ScoreError> {
        self.encode(frame)?
            .iter()
            .map(|x| self.decide(x))
            .collect()
    }
}

impl std::str::FromStr for Model {
    type Err = LoadError;
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::build(serde_json::from_str::<Artifact>(text)?)
    }
}

impl TryFrom<Value> for Model {
    type Error = LoadError;
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::build(serde_json::from_value::<Artifact>(value)?)
    }
}

impl Model {
    fn build(artifact: Artifact) -> Result<Self, LoadError> {
        let Artifact {
            features,
            scaler,
            estimator,
            classes,
        } = artifact;
        validate(&features).map_err(LoadError::Invalid)?;
        let width = features.len();
        if let Some(scaler) = scaler.as_ref() {
            scaler.validate(width).map_err(LoadError::Invalid)?;
        }
        estimator.validate(width).map_err(LoadError::Invalid)?;
        let classes = match (estimator.objective(), classes) {
            (Objective::SquaredError, None) => None,
            (Objective::SquaredError, Some(_)) => {
                return Err(LoadError::Invalid(String::from(
                    "classes given for a regression objective",
                )));
            }
            (Objective::BinaryLogistic, None) => Some([Value::from(0), Value::from(1)]),
            (Objective::BinaryLogistic, Some(labels)) => Some(binary(labels)?),
        };
        Ok(Self {
            features,
            scaler,
            estimator,
            classes,
        })
    }
}

fn validate(features: &[Feature]) -> Result<(), String> {
    if features.is_empty() {
        return Err(String::from("model declares no features"));
    }
    let mut names = HashSet::new();
    for feature in features {
        if !names.insert(feature.name.as_str()) {
            return Err(format!("duplicate feature {}", feature.name));
        }
        if let Kind::Categorical { categories } = &feature.kind {
            let unique = categories.iter().collect::<HashSet<_>>();
            if categories.is_empty() || unique.len() != categories.len() {
                return Err(format!(
                    "feature {} needs distinct, non-empty categories",
                    feature.name
                ));
            }
        }
    }
    Ok(())
}

fn binary(labels: Vec<Value>) -> Result<[Value; 2], LoadError> {
    if labels
        .iter()
        .any(|l| matches!(l, Value::Null | Value::Array(_) | Value::Object(_)))
    {
        return Err(LoadError::Invalid(String::from("class labels must be scalars")));
    }
    <[Value; 2]>::try_from(labels)
        .map_err(|l| LoadError::Invalid(format!("binary model needs 2 classes, got {}", l.len())))
}
