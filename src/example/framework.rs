//! Framework classification for example paths

use crate::error::GenerationError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Training backend an example targets, selected by its first path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Framework {
    #[serde(rename = "tf")]
    Tensorflow,
    #[serde(rename = "torch")]
    Torch,
    #[serde(rename = "xgboost")]
    XGBoost,
}

impl Framework {
    pub const ALL: [Framework; 3] = [Framework::Tensorflow, Framework::Torch, Framework::XGBoost];

    /// Directory name used for this framework under the modules directory
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Tensorflow => "tf",
            Framework::Torch => "torch",
            Framework::XGBoost => "xgboost",
        }
    }

    /// Trainer class name handed to the template as `trainer_cls`
    pub fn trainer_cls(&self) -> &'static str {
        match self {
            Framework::Tensorflow => "TensorflowTrainer",
            Framework::Torch => "TorchTrainer",
            Framework::XGBoost => "XGBoostTrainer",
        }
    }

    /// Classify an example by the first segment of its path
    pub fn classify<S: AsRef<str>>(example_path: &[S]) -> Result<Self, GenerationError> {
        match example_path.first() {
            Some(first) => first.as_ref().parse(),
            None => Err(GenerationError::UnknownFramework(String::new())),
        }
    }
}

impl FromStr for Framework {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Framework::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| GenerationError::UnknownFramework(s.to_string()))
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
