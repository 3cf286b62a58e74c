use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::middlewares;
use crate::models::submissions::requests::{BulkExportRequest, ReviewSubmissionRequest};
use crate::services::SubmissionService;

// 懒加载的全局 SUBMISSION_SERVICE 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

pub async fn list_submissions(req: HttpRequest) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.list_submissions(&req).await
}

pub async fn create_submission(
    req: HttpRequest,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .create_submission(&req, body.into_inner())
        .await
}

pub async fn review_submission(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<ReviewSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .review_submission(&req, path.into_inner(), body.into_inner())
        .await
}

pub async fn bulk_export(
    req: HttpRequest,
    body: web::Json<BulkExportRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.bulk_export(&req, body.into_inner()).await
}

// 配置路由
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/submissions")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_submissions))
                    .route(web::post().to(create_submission)),
            )
            .service(web::resource("/bulk-export").route(web::post().to(bulk_export)))
            .service(
                web::resource("/{submission_id}/review").route(web::put().to(review_submission)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::exams::entities::Exam;
    use crate::routes::test_support::{TestState, signed_in};
    use crate::storage::records::{build_record, get_record, put_record};
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Map, json};

    #[actix_web::test]
    async fn test_manual_submission_review_and_export() {
        let state = TestState::new();
        let (account, token) = signed_in(&state, "prof@escola.com").await;
        let exam: Exam = build_record(
            Map::new(),
            json!({"id": "EVAL111111", "title": "Prova 1", "status": "Ativo", "appliedCount": 2}),
        )
        .unwrap();
        put_record(state.storage.as_ref(), &account.id, &exam)
            .await
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(state.storage_data())
                .app_data(state.cache_data())
                .configure(configure_submissions_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/submissions")
            .insert_header(("Authorization", token.clone()))
            .set_json(json!({
                "examId": "EVAL111111",
                "examTitle": "Prova 1",
                "studentName": "Davi",
                "percentage": 72,
                "gradingStatus": "pending-review"
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let submission_id = body["submission"]["id"].as_str().unwrap().to_string();

        let exam = get_record::<Exam>(state.storage.as_ref(), &account.id, "EVAL111111")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(exam.applied_count, 3);
        assert_eq!(exam.students_count, 1);
        assert!(exam.last_applied.is_some());

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/submissions/{submission_id}/review"))
            .insert_header(("Authorization", token.clone()))
            .set_json(json!({"reviewNotes": "Bom trabalho", "feedback": "Revise a conclusão"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["submission"]["gradingStatus"], "reviewed");
        assert_eq!(body["submission"]["reviewedBy"], account.id.as_str());

        let req = test::TestRequest::get()
            .uri("/api/v1/submissions")
            .insert_header(("Authorization", token.clone()))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["gradedCount"], 0);

        let req = test::TestRequest::post()
            .uri("/api/v1/submissions/bulk-export")
            .insert_header(("Authorization", token.clone()))
            .set_json(json!({"submissionIds": [submission_id, "ausente"]}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["export"]["format"], "csv");
        assert_eq!(body["export"]["totalSubmissions"], 1);
        assert_eq!(body["export"]["data"][0]["studentName"], "Davi");
        assert_eq!(body["export"]["data"][0]["gradingStatus"], "reviewed");

        let req = test::TestRequest::post()
            .uri("/api/v1/submissions/bulk-export")
            .insert_header(("Authorization", token.clone()))
            .set_json(json!({"submissionIds": []}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::put()
            .uri("/api/v1/submissions/ausente/review")
            .insert_header(("Authorization", token))
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
