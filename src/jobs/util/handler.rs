//! An abstraction layer interface for the job store
use crate::jobs::types::{Job, JobCounts, JobStatus};

/// Jobs are kept newest first by `submission_time`. Jobs submitted in the
/// same second keep their insertion order, oldest insertion first.
pub trait JobDataHandler {
    /// Synthesize a job with the given status, store it and return it
    fn create_job(&self, status: JobStatus) -> Job;
    fn insert_job(&self, job: Job);

    fn list_all(&self) -> Vec<Job>;
    fn list_by_status(&self, status: JobStatus) -> Vec<Job>;
    fn count_by_status(&self) -> JobCounts;
    /// The first `min(limit, len)` jobs of `list_all`
    fn recent(&self, limit: usize) -> Vec<Job>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
