//! Headline stats shown in the crisis section.

use serde::{Deserialize, Serialize};

/// Three free-text display values. Overwritten wholesale by the admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Tons of debris washing ashore per year.
    pub tons: String,
    /// Years for plastic to decompose.
    pub years: String,
    /// Survival probability of the marine ecosystem, percent.
    pub prob: String,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            tons: "20,000".to_owned(),
            years: "500".to_owned(),
            prob: "0".to_owned(),
        }
    }
}
