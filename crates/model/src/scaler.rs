use mapi_core::Score;
use serde::Deserialize;
use serde::Serialize;

/// Per-column standardization fitted at training time: `(x - mean) / scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    mean: Vec<Score>,
    scale: Vec<Score>,
}

impl Scaler {
    pub fn new(mean: Vec<Score>, scale: Vec<Score>) -> Self {
        Self { mean, scale }
    }
    pub fn width(&self) -> usize {
        self.mean.len()
    }
    /// Standardize in place. Missing values stay NaN.
    pub fn apply(&self, x: &mut [Score]) {
        for ((x, mean), scale) in x.iter_mut().zip(&self.mean).zip(&self.scale) {
            *x = (*x - mean) / scale;
        }
    }
    pub fn validate(&self, width: usize) -> Result<(), String> {
        if self.mean.len() != width || self.scale.len() != width {
            return Err(format!(
                "scaler has {} means and {} scales for {} features",
                self.mean.len(),
                self.scale.len(),
                width
            ));
        }
        if self.mean.iter().any(|m| !m.is_finite()) {
            return Err(String::from("scaler mean must be finite"));
        }
        if self.scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
            return Err(String::from("scaler scale must be finite and nonzero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standardizes_each_column() {
        let scaler = Scaler::new(vec![40.0, 60000.0], vec![10.0, 20000.0]);
        let ref mut x = [35.0, 90000.0];
        scaler.apply(x);
        assert_eq!(x, &[-0.5, 1.5]);
    }
    #[test]
    fn missing_stays_missing() {
        let scaler = Scaler::new(vec![1.0], vec![2.0]);
        let ref mut x = [Score::NAN];
        scaler.apply(x);
        assert!(x[0].is_nan());
    }
    #[test]
    fn rejects_width_mismatch_and_zero_scale() {
        assert!(Scaler::new(vec![0.0], vec![1.0]).validate(2).is_err());
        assert!(Scaler::new(vec![0.0, 0.0], vec![1.0, 0.0]).validate(2).is_err());
        assert!(Scaler::new(vec![0.0, 0.0], vec![1.0, 3.0]).validate(2).is_ok());
    }
}
