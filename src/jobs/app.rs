use crate::jobs::handlers::memory_handler::MemoryHandler;
use crate::jobs::types::{Job, JobStatus};
use crate::jobs::util::handler::JobDataHandler;
use crate::shared::types::app::DashboardError;
use crate::shared::util::config::JobsConfig;

use actix_web::{
    get, post, HttpResponse, web::{self, Data}, Result
};
use serde::{Serialize, Deserialize};


// Read projections
#[derive(Deserialize)]
struct GetJobsParams {
    status: Option<String>
}

#[get("/get_jobs")]
async fn get_jobs(handler: Data<MemoryHandler>, params: web::Query<GetJobsParams>) -> Result<HttpResponse> {
    let jobs = match &params.status {
        None => handler.list_all(),
        Some(status) => handler.list_by_status(status.parse::<JobStatus>()?)
    };
    log::debug!("Returning {} jobs", jobs.len());
    Ok(HttpResponse::Ok().json(jobs))
}

#[get("/get_job_counts")]
async fn get_job_counts(handler: Data<MemoryHandler>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(handler.count_by_status()))
}

#[derive(Deserialize)]
struct RecentJobsParams {
    limit: Option<usize>
}

#[get("/get_recent_jobs")]
async fn get_recent_jobs(handler: Data<MemoryHandler>, config: Data<JobsConfig>, params: web::Query<RecentJobsParams>)
        -> Result<HttpResponse> {
    let limit = params.limit.unwrap_or(config.recent_limit);
    if limit > config.max_recent_limit {
        return Err(DashboardError::MalformedRequest(
            format!("limit must be at most {}", config.max_recent_limit)).into());
    }
    Ok(HttpResponse::Ok().json(handler.recent(limit)))
}


// Submissions
#[derive(Serialize, Deserialize)]
pub struct SubmitJobReturn {
    pub message: String,
    pub job: Job
}

fn submit(handler: &MemoryHandler, status: JobStatus) -> HttpResponse {
    HttpResponse::Ok().json(SubmitJobReturn {
        message: "Job submitted successfully!".to_string(),
        job: handler.create_job(status)
    })
}

#[post("/submit_job")]
async fn submit_job(handler: Data<MemoryHandler>) -> Result<HttpResponse> {
    Ok(submit(&handler, JobStatus::Completed))
}

#[post("/submit_queued_job")]
async fn submit_queued_job(handler: Data<MemoryHandler>) -> Result<HttpResponse> {
    Ok(submit(&handler, JobStatus::Queued))
}

#[post("/submit_rejected_job")]
async fn submit_rejected_job(handler: Data<MemoryHandler>) -> Result<HttpResponse> {
    Ok(submit(&handler, JobStatus::Rejected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::routes;
    use crate::jobs::types::JobCounts;
    use crate::shared::types::app::ErrorResponse;
    use actix_web::{http::StatusCode, test, App};

    macro_rules! init_app {
        ($handler: expr) => {
            test::init_service(App::new()
                .app_data(Data::new($handler.clone()))
                .app_data(Data::new(JobsConfig::default()))
                .configure(routes)).await
        };
    }

    #[actix_web::test]
    async fn empty_store() {
        let handler = MemoryHandler::default();
        let app = init_app!(handler);

        let req = test::TestRequest::get().uri("/get_jobs").to_request();
        let jobs: Vec<Job> = test::call_and_read_body_json(&app, req).await;
        assert!(jobs.is_empty());

        let req = test::TestRequest::get().uri("/get_job_counts").to_request();
        let counts: JobCounts = test::call_and_read_body_json(&app, req).await;
        assert_eq!(counts, JobCounts { completed: 0, queued: 0, rejected: 0 });

        let req = test::TestRequest::get().uri("/get_recent_jobs").to_request();
        let jobs: Vec<Job> = test::call_and_read_body_json(&app, req).await;
        assert!(jobs.is_empty());
    }

    #[actix_web::test]
    async fn submit_endpoints_set_status() {
        let handler = MemoryHandler::default();
        let app = init_app!(handler);

        for (uri, status) in [
            ("/submit_job", JobStatus::Completed),
            ("/submit_queued_job", JobStatus::Queued),
            ("/submit_rejected_job", JobStatus::Rejected)
        ] {
            let req = test::TestRequest::post().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
            let body: SubmitJobReturn = test::read_body_json(resp).await;
            assert_eq!(body.message, "Job submitted successfully!");
            assert_eq!(body.job.status, status, "{uri}");
        }

        assert_eq!(handler.len(), 3);
        let req = test::TestRequest::get().uri("/get_job_counts").to_request();
        let counts: JobCounts = test::call_and_read_body_json(&app, req).await;
        assert_eq!(counts, JobCounts { completed: 1, queued: 1, rejected: 1 });
    }

    #[actix_web::test]
    async fn submit_is_post_only() {
        let handler = MemoryHandler::default();
        let app = init_app!(handler);
        let req = test::TestRequest::get().uri("/submit_job").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
        assert!(handler.is_empty());
    }

    #[actix_web::test]
    async fn recent_jobs_limit() {
        let handler = MemoryHandler::default();
        for _ in 0..8 {
            handler.create_job(JobStatus::Completed);
        }
        let app = init_app!(handler);

        let req = test::TestRequest::get().uri("/get_recent_jobs").to_request();
        let jobs: Vec<Job> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(jobs, handler.list_all()[..5].to_vec(), "defaults to five newest");

        let req = test::TestRequest::get().uri("/get_recent_jobs?limit=2").to_request();
        let jobs: Vec<Job> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(jobs.len(), 2);

        let req = test::TestRequest::get().uri("/get_recent_jobs?limit=500").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "malformed request: limit must be at most 100");

        let req = test::TestRequest::get().uri("/get_recent_jobs?limit=lots").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(body.error.starts_with("malformed request"), "{}", body.error);
    }

    #[actix_web::test]
    async fn jobs_filtered_by_status() {
        let handler = MemoryHandler::default();
        handler.create_job(JobStatus::Completed);
        handler.create_job(JobStatus::Queued);
        handler.create_job(JobStatus::Queued);
        let app = init_app!(handler);

        let req = test::TestRequest::get().uri("/get_jobs?status=queued").to_request();
        let jobs: Vec<Job> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(jobs.len(), 2);
        assert!(jobs.iter().all(|j| j.status == JobStatus::Queued));

        let req = test::TestRequest::get().uri("/get_jobs?status=running").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
