use actix_web::{web, HttpResponse, Responder};

use crate::domain::present::Report;
use crate::domain::solve::run_solve;
use crate::domain::solver_factory::{create_solver, SolverType};
use crate::models::{ErrorBody, SolveRequest, SolveResponse};

/// POST /solve
pub async fn solve(request: web::Json<SolveRequest>) -> impl Responder {
    let solver = create_solver(SolverType::from_env());
    match run_solve(&request, solver.as_ref()) {
        Ok(result) => {
            // Infeasibility is a normal, recoverable outcome; only a backend
            // failure is a server-side error.
            let failed = matches!(result.report, Report::Error { .. });
            let body = SolveResponse::from(result);
            if failed {
                HttpResponse::InternalServerError().json(body)
            } else {
                HttpResponse::Ok().json(body)
            }
        }
        Err(err) => HttpResponse::BadRequest().json(ErrorBody::from(&err)),
    }
}

/// GET /health
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

/// GET /docs
pub async fn docs() -> impl Responder {
    let docs_html = include_str!("../static/docs.html");
    HttpResponse::Ok().content_type("text/html").body(docs_html)
}

/// GET / - Redirect to docs
pub async fn root_redirect() -> impl Responder {
    HttpResponse::Found()
        .append_header(("Location", "/docs"))
        .finish()
}

/// Route table shared by the binary and the in-process test service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root_redirect))
        .route("/solve", web::post().to(solve))
        .route("/health", web::get().to(health_check))
        .route("/docs", web::get().to(docs));
}

/// JSON extractor config: payload limit plus a JSON error body for
/// deserialization failures.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default().limit(limit).error_handler(|err, _| {
        let err_string = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(serde_json::json!({ "error": err_string })),
        )
        .into()
    })
}
