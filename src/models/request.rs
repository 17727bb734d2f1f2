// Aggregate read request and its builder.

use serde::{Deserialize, Serialize};

use super::DataType;
use crate::errors::{Error, Result};
use crate::time_window::DAY_IN_MILLIS;

/// Closed interval of POSIX milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub start_ms: i64,
    pub end_ms: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataReadRequest {
    pub data_type: DataType,
    pub aggregate_type: DataType,
    pub bucket_duration_ms: i64,
    pub range: TimeRange,
}

impl DataReadRequest {
    pub fn builder() -> DataReadRequestBuilder {
        DataReadRequestBuilder::default()
    }

    /// Step-count deltas aggregated into 1-day buckets over `range`.
    pub fn daily_steps(range: TimeRange) -> Result<Self> {
        Self::builder()
            .aggregate(DataType::StepCountDelta, DataType::AggregateStepCountDelta)
            .bucket_by_days(1)
            .time_range(range.start_ms, range.end_ms)
            .build()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DataReadRequestBuilder {
    aggregate: Option<(DataType, DataType)>,
    bucket_duration_ms: Option<i64>,
    range: Option<TimeRange>,
}

impl DataReadRequestBuilder {
    pub fn aggregate(mut self, data_type: DataType, aggregate_type: DataType) -> Self {
        self.aggregate = Some((data_type, aggregate_type));
        self
    }

    pub fn bucket_by_millis(mut self, duration_ms: i64) -> Self {
        self.bucket_duration_ms = Some(duration_ms);
        self
    }

    pub fn bucket_by_days(self, days: i64) -> Self {
        self.bucket_by_millis(days.saturating_mul(DAY_IN_MILLIS))
    }

    pub fn time_range(mut self, start_ms: i64, end_ms: i64) -> Self {
        self.range = Some(TimeRange { start_ms, end_ms });
        self
    }

    pub fn build(self) -> Result<DataReadRequest> {
        let (data_type, aggregate_type) = self
            .aggregate
            .ok_or_else(|| Error::InvalidRequest("no aggregate data type".into()))?;
        let range = self
            .range
            .ok_or_else(|| Error::InvalidRequest("no time range".into()))?;
        if range.start_ms >= range.end_ms {
            return Err(Error::InvalidRequest(format!(
                "start {} must be before end {}",
                range.start_ms, range.end_ms
            )));
        }
        // Unbucketed reads are not supported; a single bucket covers the range.
        let bucket_duration_ms = self
            .bucket_duration_ms
            .unwrap_or(range.end_ms.saturating_sub(range.start_ms).saturating_add(1));
        if bucket_duration_ms <= 0 {
            return Err(Error::InvalidRequest(format!(
                "bucket duration must be > 0, got {}",
                bucket_duration_ms
            )));
        }
        Ok(DataReadRequest {
            data_type,
            aggregate_type,
            bucket_duration_ms,
            range,
        })
    }
}
