// A handler that just stores jobs in memory (non-persistent)
// Everything is lost when the process exits
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::jobs::types::{Job, JobCounts, JobStatus};
use crate::jobs::util::generate::{self, JobPool};
use crate::jobs::util::handler::JobDataHandler;

#[derive(Clone)]
pub struct MemoryHandler {
    jobs: Arc<Mutex<Vec<Job>>>,
    pool: Arc<JobPool>
}

impl MemoryHandler {
    pub fn new(pool: JobPool) -> MemoryHandler {
        MemoryHandler {
            jobs: Arc::new(Mutex::new(Vec::new())),
            pool: Arc::new(pool)
        }
    }

    // Every write is a single Vec::insert so a poisoned list is still sorted
    fn jobs(&self) -> MutexGuard<'_, Vec<Job>> {
        self.jobs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryHandler {
    fn default() -> MemoryHandler {
        MemoryHandler::new(JobPool::default())
    }
}

impl JobDataHandler for MemoryHandler {
    fn create_job(&self, status: JobStatus) -> Job {
        let job = self.pool.generate(&mut rand::rng(), status, generate::now());
        log::info!("Created job {} ({}) on {}", job.job_id, job.status, job.backend);
        self.insert_job(job.clone());
        job
    }

    fn insert_job(&self, job: Job) {
        let mut jobs = self.jobs();
        // Descending order, so skip everything not older. Ties keep insertion order.
        let idx = jobs.partition_point(|j| j.submission_time >= job.submission_time);
        jobs.insert(idx, job);
    }

    fn list_all(&self) -> Vec<Job> {
        self.jobs().clone()
    }

    fn list_by_status(&self, status: JobStatus) -> Vec<Job> {
        self.jobs().iter()
            .filter(|j| j.status == status)
            .cloned()
            .collect()
    }

    fn count_by_status(&self) -> JobCounts {
        let mut counts = JobCounts::default();
        for job in self.jobs().iter() {
            counts.record(job.status);
        }
        counts
    }

    fn recent(&self, limit: usize) -> Vec<Job> {
        self.jobs().iter().take(limit).cloned().collect()
    }

    fn len(&self) -> usize {
        self.jobs().len()
    }
}
