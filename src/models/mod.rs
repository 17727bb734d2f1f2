// Domain models for history reads and step totals

mod bucket;
mod request;
mod totals;

pub use bucket::{Bucket, DataPoint, DataReadResult, DataSet, DataType, Field};
pub use request::{DataReadRequest, DataReadRequestBuilder, TimeRange};
pub use totals::StepTotals;
