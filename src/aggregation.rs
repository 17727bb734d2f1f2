// Step totals from a daily-bucketed history read.
// Pure logic; the session decides when to run it and where the result goes.

use crate::models::{Bucket, StepTotals};
use crate::time_window::current_millis;

/// Minimum buckets needed: the last is the latest 24 hours, the one before it the 24 hours prior.
pub const MIN_BUCKETS: usize = 2;

/// Sums every field value of every data point in every data set of `bucket`.
/// Saturates at the `i64` bounds.
pub fn extract_step_value(bucket: &Bucket) -> i64 {
    bucket
        .data_sets
        .iter()
        .flat_map(|ds| ds.data_points.iter())
        .flat_map(|p| p.fields.iter())
        .map(|f| f.value)
        .fold(0i64, i64::saturating_add)
}

/// Totals for the last 24 and 48 hours.
///
/// Returns `None` (and logs) when fewer than [`MIN_BUCKETS`] buckets are given.
pub fn aggregate(buckets: &[Bucket]) -> Option<StepTotals> {
    let [.., previous, latest] = buckets else {
        tracing::error!(
            bucket_count = buckets.len(),
            min_buckets = MIN_BUCKETS,
            "Too few buckets returned: {}",
            buckets.len()
        );
        return None;
    };

    let last_24_hours = extract_step_value(latest);
    let last_48_hours = extract_step_value(previous).saturating_add(last_24_hours);
    tracing::debug!(last_24_hours, last_48_hours, "step totals computed");

    Some(StepTotals {
        last_24_hours,
        last_48_hours,
        computed_at_ms: current_millis(),
    })
}
