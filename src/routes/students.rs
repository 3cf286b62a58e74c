use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::middlewares;
use crate::models::students::requests::CreateStudentsRequest;
use crate::services::StudentService;

// 懒加载的全局 STUDENT_SERVICE 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

pub async fn list_students(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(&req).await
}

pub async fn create_students(
    req: HttpRequest,
    body: web::Json<CreateStudentsRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.create_students(&req, body.into_inner()).await
}

pub async fn update_student(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(&req, path.into_inner(), body.into_inner())
        .await
}

pub async fn delete_student(req: HttpRequest, path: web::Path<String>) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(&req, path.into_inner()).await
}

// 配置路由
pub fn configure_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_students))
                    .route(web::post().to(create_students)),
            )
            .service(
                web::resource("/{student_id}")
                    .route(web::put().to(update_student))
                    .route(web::delete().to(delete_student)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{TestState, bearer, signed_in};
    use actix_web::{App, http::StatusCode, test};
    use serde_json::json;

    #[actix_web::test]
    async fn test_student_crud() {
        let state = TestState::new();
        let token = bearer(&state, "prof@escola.com").await;
        let app = test::init_service(
            App::new()
                .app_data(state.storage_data())
                .app_data(state.cache_data())
                .configure(configure_students_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/students")
            .insert_header(("Authorization", token.clone()))
            .set_json(json!({"students": [
                {"name": "Ana", "serieId": "s1", "class": "6A"},
                {"name": "Bruno"}
            ]}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        let ana_id = body["students"][0]["id"].as_str().unwrap().to_string();
        assert_eq!(body["students"][0]["status"], "active");

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/students/{ana_id}"))
            .insert_header(("Authorization", token.clone()))
            .set_json(json!({"id": "outro", "class": "7A"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["student"]["id"], ana_id.as_str());
        assert_eq!(body["student"]["class"], "7A");
        assert!(body["student"]["updatedAt"].is_string());

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/students/{ana_id}"))
            .insert_header(("Authorization", token.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri("/api/v1/students")
            .insert_header(("Authorization", token.clone()))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["count"], 1);

        let req = test::TestRequest::put()
            .uri("/api/v1/students/ausente")
            .insert_header(("Authorization", token))
            .set_json(json!({"name": "X"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_create_students_requires_array() {
        let state = TestState::new();
        let token = bearer(&state, "prof@escola.com").await;
        let app = test::init_service(
            App::new()
                .app_data(state.storage_data())
                .app_data(state.cache_data())
                .configure(configure_students_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/students")
            .insert_header(("Authorization", token))
            .set_json(json!({"students": {"name": "Ana"}}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_list_drops_bad_rows_and_survives_storage_error() {
        let state = TestState::new();
        let (account, token) = signed_in(&state, "prof@escola.com").await;
        state
            .storage
            .set(
                &format!("students:{}:s1", account.id),
                json!({"id": "s1", "name": "Ana"}),
            )
            .await
            .unwrap();
        state
            .storage
            .set(&format!("students:{}:s2", account.id), json!("corrompido"))
            .await
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(state.storage_data())
                .app_data(state.cache_data())
                .configure(configure_students_routes),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/v1/students")
            .insert_header(("Authorization", token.clone()))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["students"][0]["name"], "Ana");

        let failing = test::init_service(
            App::new()
                .app_data(state.failing_list_storage_data())
                .app_data(state.cache_data())
                .configure(configure_students_routes),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/v1/students")
            .insert_header(("Authorization", token))
            .to_request();
        let resp = test::call_service(&failing, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 0);
        assert_eq!(body["students"], json!([]));
    }
}
