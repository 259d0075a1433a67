/// Failure to bring an artifact into memory. Always fatal at startup.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "unreadable artifact: {}", e),
            Self::Parse(e) => write!(f, "malformed artifact: {}", e),
            Self::Invalid(s) => write!(f, "invalid artifact: {}", s),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// A frame that does not fit the model's schema.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreError {
    MissingFeature(String),
    UnexpectedFeature(String),
    WrongType {
        feature: String,
        expected: &'static str,
        found: &'static str,
    },
    UnknownCategory {
        feature: String,
        value: String,
    },
    MissingValue(String),
    NonFinite,
}

impl std::fmt::Display for ScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFeature(name) => write!(f, "missing feature: {}", name),
            Self::UnexpectedFeature(name) => write!(f, "unexpected feature: {}", name),
            Self::WrongType {
                feature,
                expected,
                found,
            } => write!(f, "feature {} expects {}, got {}", feature, expected, found),
            Self::UnknownCategory { feature, value } => {
                write!(f, "feature {} has no category {:?}", feature, value)
            }
            Self::MissingValue(name) => write!(f, "feature {} may not be null", name),
            Self::NonFinite => write!(f, "margin is not a finite number"),
        }
    }
}

impl std::error::Error for ScoreError {}
