//! Random job synthesis from a fixed pool of values

use std::ops::RangeInclusive;

use chrono::{Local, NaiveDateTime, SubsecRound};
use rand::Rng;

use crate::jobs::types::{Job, JobStatus};
use crate::shared::types::app::DashboardError;

pub const DEFAULT_BACKENDS: [&str; 3] = ["ibm_brisbane", "ibm_kyoto", "ibm_osaka"];
pub const DEFAULT_SHOTS: [u32; 4] = [1024, 2048, 4096, 8192];
pub const DEFAULT_QUBITS: RangeInclusive<u32> = 5..=127;

const JOB_ID_GROUP: RangeInclusive<u32> = 1000..=9999;

/// The values a generated job draws from. Never empty.
#[derive(Clone, Debug)]
pub struct JobPool {
    backends: Vec<String>,
    shots: Vec<u32>,
    qubits: RangeInclusive<u32>
}

impl Default for JobPool {
    fn default() -> JobPool {
        JobPool {
            backends: DEFAULT_BACKENDS.iter().map(|b| b.to_string()).collect(),
            shots: DEFAULT_SHOTS.to_vec(),
            qubits: DEFAULT_QUBITS
        }
    }
}

impl JobPool {
    pub fn new(backends: Vec<String>, shots: Vec<u32>, qubits: RangeInclusive<u32>) -> Result<JobPool, DashboardError> {
        if backends.is_empty() {
            return Err(DashboardError::Config("backend pool must not be empty".to_string()));
        }
        if shots.is_empty() {
            return Err(DashboardError::Config("shot pool must not be empty".to_string()));
        }
        if qubits.is_empty() {
            return Err(DashboardError::Config(format!(
                "qubit range {}..={} is empty", qubits.start(), qubits.end())));
        }
        Ok(JobPool { backends, shots, qubits })
    }

    pub fn backends(&self) -> &[String] {
        &self.backends
    }

    /// Build a job with random fields, submitted at `submitted`
    pub fn generate<R: Rng>(&self, rng: &mut R, status: JobStatus, submitted: NaiveDateTime) -> Job {
        Job {
            job_id: generate_job_id(rng),
            status,
            backend: self.backends[rng.random_range(0..self.backends.len())].clone(),
            qubits: rng.random_range(self.qubits.clone()),
            shots: self.shots[rng.random_range(0..self.shots.len())],
            submission_time: submitted.trunc_subsecs(0)
        }
    }
}

/// `job-XXXX-YYYY`, no uniqueness check
pub fn generate_job_id<R: Rng>(rng: &mut R) -> String {
    format!("job-{}-{}", rng.random_range(JOB_ID_GROUP), rng.random_range(JOB_ID_GROUP))
}

/// Local wall clock truncated to whole seconds
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}
