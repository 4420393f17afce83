//! Configuration enum types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How results are printed.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Aligned `hex` / `rgb` / `hsl` lines
    #[default]
    Text,
    /// One JSON object per result
    Json,
}
