// Read-result containers: bucket -> data sets -> data points -> fields.

use serde::{Deserialize, Serialize};

/// Kind of measurement carried by a data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    #[serde(rename = "step_count.delta")]
    StepCountDelta,
    #[serde(rename = "aggregate.step_count.delta")]
    AggregateStepCountDelta,
}

impl DataType {
    /// Field names every data point of this type exposes.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            DataType::StepCountDelta | DataType::AggregateStepCountDelta => &["steps"],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DataType::StepCountDelta => "step_count.delta",
            DataType::AggregateStepCountDelta => "aggregate.step_count.delta",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: i64,
}

impl Field {
    pub fn steps(value: i64) -> Self {
        Self {
            name: "steps".into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    pub start_time_ms: i64,
    pub end_time_ms: i64,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl DataPoint {
    /// Value of the named field, if present.
    pub fn value(&self, name: &str) -> Option<i64> {
        self.fields.iter().find(|f| f.name == name).map(|f| f.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSet {
    pub data_type: DataType,
    #[serde(default)]
    pub data_points: Vec<DataPoint>,
}

/// One time window of an aggregate read (one calendar day for step queries).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub start_time_ms: i64,
    pub end_time_ms: i64,
    #[serde(default)]
    pub data_sets: Vec<DataSet>,
}

/// Buckets in the order the source delivered them, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataReadResult {
    pub buckets: Vec<Bucket>,
}
