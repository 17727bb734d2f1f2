// Fitness history sources. The session only depends on the FitnessSource trait.

mod file;

pub use file::{FileSource, StepHistoryFile};

use std::future::Future;

use crate::errors::Result;
use crate::models::{DataReadRequest, DataReadResult};

/// An external fitness-data API: connect, run aggregate history reads, disconnect.
pub trait FitnessSource: Send + Sync + 'static {
    fn connect(&self) -> impl Future<Output = Result<()>> + Send;

    fn disconnect(&self) -> impl Future<Output = ()> + Send;

    fn is_connected(&self) -> impl Future<Output = bool> + Send;

    /// Returns buckets oldest first. Fails with `Error::NotConnected` before `connect`.
    fn read_data(
        &self,
        request: &DataReadRequest,
    ) -> impl Future<Output = Result<DataReadResult>> + Send;
}
