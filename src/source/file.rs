// JSON-file history source.
// Holds raw step-delta points and answers aggregate reads by laying day buckets
// over the requested range, like the remote history API does.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::FitnessSource;
use crate::errors::{Error, Result};
use crate::models::{
    Bucket, DataPoint, DataReadRequest, DataReadResult, DataSet, DataType, Field, TimeRange,
};

/// On-disk layout: `{"dataPoints": [{"startTimeMs", "endTimeMs", "fields": [...]}]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepHistoryFile {
    pub data_points: Vec<DataPoint>,
}

pub struct FileSource {
    path: PathBuf,
    points: RwLock<Option<Arc<Vec<DataPoint>>>>,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            points: RwLock::new(None),
        }
    }
}

impl FitnessSource for FileSource {
    async fn connect(&self) -> Result<()> {
        let s = tokio::fs::read_to_string(&self.path).await?;
        let file: StepHistoryFile = serde_json::from_str(&s)?;
        tracing::info!(
            path = %self.path.display(),
            data_points = file.data_points.len(),
            "step history loaded"
        );
        *self.points.write().await = Some(Arc::new(file.data_points));
        Ok(())
    }

    async fn disconnect(&self) {
        self.points.write().await.take();
    }

    async fn is_connected(&self) -> bool {
        self.points.read().await.is_some()
    }

    async fn read_data(&self, request: &DataReadRequest) -> Result<DataReadResult> {
        let points = self
            .points
            .read()
            .await
            .clone()
            .ok_or(Error::NotConnected)?;
        let buckets = bucket_by_time(&points, request);
        tracing::debug!(
            data_type = request.data_type.name(),
            buckets = buckets.len(),
            "history read"
        );
        Ok(DataReadResult { buckets })
    }
}

/// Lays `request.bucket_duration_ms` buckets from the range start while the
/// bucket start is still `<= range.end_ms`. Points land in the bucket holding
/// their start time; each bucket carries one aggregate data set with zero or
/// one summed data point.
pub(crate) fn bucket_by_time(points: &[DataPoint], request: &DataReadRequest) -> Vec<Bucket> {
    let TimeRange { start_ms, end_ms } = request.range;
    let fields = request.data_type.fields();
    let source_points: &[DataPoint] = if request.data_type == DataType::StepCountDelta {
        points
    } else {
        &[]
    };

    let mut buckets = Vec::new();
    let mut bucket_start = start_ms;
    while bucket_start <= end_ms {
        let bucket_end = bucket_start.saturating_add(request.bucket_duration_ms);
        let upper = bucket_end.min(end_ms.saturating_add(1));

        let in_bucket: Vec<&DataPoint> = source_points
            .iter()
            .filter(|p| p.start_time_ms >= bucket_start && p.start_time_ms < upper)
            .collect();

        let data_points = if in_bucket.is_empty() {
            Vec::new()
        } else {
            let aggregated = fields
                .iter()
                .map(|name| Field {
                    name: (*name).to_string(),
                    value: in_bucket
                        .iter()
                        .filter_map(|p| p.value(name))
                        .fold(0i64, i64::saturating_add),
                })
                .collect();
            vec![DataPoint {
                start_time_ms: bucket_start,
                end_time_ms: upper - 1,
                fields: aggregated,
            }]
        };

        buckets.push(Bucket {
            start_time_ms: bucket_start,
            end_time_ms: bucket_end,
            data_sets: vec![DataSet {
                data_type: request.aggregate_type,
                data_points,
            }],
        });

        if bucket_end == i64::MAX {
            break;
        }
        bucket_start = bucket_end;
    }
    buckets
}
