// Shared test helpers
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use stepcount::errors::{Error, Result};
use stepcount::models::*;
use stepcount::source::FitnessSource;

/// One bucket, one step data set, one data point per value.
pub fn bucket(values: &[i64]) -> Bucket {
    Bucket {
        start_time_ms: 0,
        end_time_ms: 0,
        data_sets: vec![DataSet {
            data_type: DataType::AggregateStepCountDelta,
            data_points: values
                .iter()
                .map(|v| DataPoint {
                    start_time_ms: 0,
                    end_time_ms: 0,
                    fields: vec![Field::steps(*v)],
                })
                .collect(),
        }],
    }
}

pub fn empty_bucket() -> Bucket {
    Bucket {
        start_time_ms: 0,
        end_time_ms: 0,
        data_sets: vec![],
    }
}

/// In-memory source returning canned buckets; counts connects and reads.
pub struct StaticSource {
    buckets: Vec<Bucket>,
    fail_connect: bool,
    read_delay: Option<Duration>,
    connected: AtomicBool,
    pub connects: AtomicUsize,
    pub reads: AtomicUsize,
}

impl StaticSource {
    pub fn new(buckets: Vec<Bucket>) -> Self {
        Self {
            buckets,
            fail_connect: false,
            read_delay: None,
            connected: AtomicBool::new(false),
            connects: AtomicUsize::new(0),
            reads: AtomicUsize::new(0),
        }
    }

    /// Every read sleeps for `delay` before answering.
    pub fn slow(buckets: Vec<Bucket>, delay: Duration) -> Self {
        Self {
            read_delay: Some(delay),
            ..Self::new(buckets)
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_connect: true,
            ..Self::new(vec![])
        }
    }
}

impl FitnessSource for StaticSource {
    async fn connect(&self) -> Result<()> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        if self.fail_connect {
            return Err(Error::Io(std::io::Error::other("connection refused")));
        }
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
    }

    async fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn read_data(&self, _request: &DataReadRequest) -> Result<DataReadResult> {
        if !self.connected.load(Ordering::SeqCst) {
            return Err(Error::NotConnected);
        }
        self.reads.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.read_delay {
            tokio::time::sleep(delay).await;
        }
        Ok(DataReadResult {
            buckets: self.buckets.clone(),
        })
    }
}

/// Polls `cond` until true or ~1s passes.
pub async fn wait_for(mut cond: impl FnMut() -> bool) -> bool {
    for _ in 0..100 {
        if cond() {
            return true;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    cond()
}
