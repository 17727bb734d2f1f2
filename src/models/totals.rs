use serde::{Deserialize, Serialize};

/// The two numbers shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepTotals {
    pub last_24_hours: i64,
    pub last_48_hours: i64,
    /// When the totals were computed (POSIX ms).
    pub computed_at_ms: i64,
}
