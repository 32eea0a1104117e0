use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Serialize, Deserialize};

use crate::shared::types::app::DashboardError;

/// Format of `submission_time` on the wire, second resolution
pub const SUBMISSION_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    Completed,
    Queued,
    Rejected
}

impl JobStatus {
    pub const ALL: [JobStatus; 3] = [JobStatus::Completed, JobStatus::Queued, JobStatus::Rejected];
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            JobStatus::Completed => write!(f, "Completed"),
            JobStatus::Queued => write!(f, "Queued"),
            JobStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

impl FromStr for JobStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "completed" => Ok(JobStatus::Completed),
            "queued" => Ok(JobStatus::Queued),
            "rejected" => Ok(JobStatus::Rejected),
            _ => Err(DashboardError::MalformedRequest(format!("unknown job status `{s}`")))
        }
    }
}

/// A simulated quantum job
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub job_id: String,
    pub status: JobStatus,
    pub backend: String,
    pub qubits: u32,
    pub shots: u32,
    #[serde(with = "submission_time")]
    pub submission_time: NaiveDateTime
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCounts {
    pub completed: usize,
    pub queued: usize,
    pub rejected: usize
}

impl JobCounts {
    pub fn record(&mut self, status: JobStatus) {
        match status {
            JobStatus::Completed => self.completed += 1,
            JobStatus::Queued => self.queued += 1,
            JobStatus::Rejected => self.rejected += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.completed + self.queued + self.rejected
    }
}

mod submission_time {
    use super::SUBMISSION_TIME_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(SUBMISSION_TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, SUBMISSION_TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}
