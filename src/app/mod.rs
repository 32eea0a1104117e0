use actix_web::{
    HttpResponse, web::{self, Data},
    middleware, App, HttpServer, Result
};
use actix_cors::Cors;
use std::time;

use crate::shared::util::config::Config;
use crate::shared::types::app::{DashboardError, ErrorResponse};

use crate::jobs::handlers::memory_handler::MemoryHandler;
use crate::jobs::app as jobs_app;


async fn not_found() -> Result<HttpResponse> {
    let response = ErrorResponse{ error: "Resource not found".to_string() };
    Ok(HttpResponse::NotFound().json(response))
}

pub fn routes(app: &mut web::ServiceConfig) {
    app
        .app_data(web::QueryConfig::default().error_handler(|err, _req| {
            DashboardError::MalformedRequest(err.to_string()).into()
        }))

        // Reads
        .service(jobs_app::get_jobs)
        .service(jobs_app::get_job_counts)
        .service(jobs_app::get_recent_jobs)

        // Submissions
        .service(jobs_app::submit_job)
        .service(jobs_app::submit_queued_job)
        .service(jobs_app::submit_rejected_job);
}

pub fn init_logging(config: &Config) {
    if config.server.log {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(config.server.log_level.as_str())).init();
    }
}

pub async fn start(config: Config) -> Result<(), DashboardError> {
    let handler = MemoryHandler::new(config.jobs.pool()?);
    let jobs_config = config.jobs.clone();
    let addr = format!("{}:{}", config.server.host, config.server.port);

    log::info!("starting HTTP server at http://{}", addr);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(Data::new(handler.clone()))
            .app_data(Data::new(jobs_config.clone()))
            .configure(routes)
            .wrap(Cors::permissive())
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .default_service(web::route().to(not_found))
    })
        .keep_alive(time::Duration::from_secs(config.server.keep_alive_seconds));

    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    server
        .bind((config.server.host.as_str(), config.server.port))
        .map_err(|source| DashboardError::Bind { addr, source })?
        .run().await?;
    Ok(())
}
