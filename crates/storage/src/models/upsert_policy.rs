use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How a repeated score submission for the same student/lesson pair is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UpsertPolicy {
    /// The stored score is replaced by the submitted one.
    #[default]
    Overwrite,
    /// The submitted score is added to the stored one.
    Accumulate,
}

impl UpsertPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overwrite => "overwrite",
            Self::Accumulate => "accumulate",
        }
    }

    /// Score the record holds after applying `submitted` on top of `existing`.
    ///
    /// Mirrors the `ON CONFLICT` update of the upsert statements, including
    /// `DOUBLE PRECISION` overflow: a non-finite result is `None`, where
    /// Postgres raises "value out of range".
    pub fn apply(&self, existing: f64, submitted: f64) -> Option<f64> {
        let score = match self {
            Self::Overwrite => submitted,
            Self::Accumulate => existing + submitted,
        };
        score.is_finite().then_some(score)
    }
}

impl fmt::Display for UpsertPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpsertPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Ok(Self::Overwrite),
            "accumulate" => Ok(Self::Accumulate),
            other => Err(format!(
                "unknown upsert policy '{other}', expected 'overwrite' or 'accumulate'"
            )),
        }
    }
}
