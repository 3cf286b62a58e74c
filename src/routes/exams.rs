use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::middlewares;
use crate::models::exams::requests::{CreateSimuladoRequest, SubmitExamRequest};
use crate::services::ExamService;

// 懒加载的全局 EXAM_SERVICE 实例
pub(crate) static EXAM_SERVICE: Lazy<ExamService> = Lazy::new(ExamService::new_lazy);

pub async fn list_exams(req: HttpRequest) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_exams(&req).await
}

pub async fn create_exam(req: HttpRequest, body: web::Json<Value>) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.create_exam(&req, body.into_inner()).await
}

pub async fn create_simulado(
    req: HttpRequest,
    body: web::Json<CreateSimuladoRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.create_simulado(&req, body.into_inner()).await
}

pub async fn update_exam(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .update_exam(&req, path.into_inner(), body.into_inner())
        .await
}

pub async fn delete_exam(req: HttpRequest, path: web::Path<String>) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.delete_exam(&req, path.into_inner()).await
}

pub async fn submit_exam(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<SubmitExamRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .submit_exam(&req, path.into_inner(), body.into_inner())
        .await
}

// 配置路由
pub fn configure_exams_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/exams")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_exams))
                    .route(web::post().to(create_exam)),
            )
            // 须在 /{exam_id} 之前注册
            .service(web::resource("/simulado").route(web::post().to(create_simulado)))
            .service(
                web::resource("/{exam_id}")
                    .route(web::put().to(update_exam))
                    .route(web::delete().to(delete_exam)),
            )
            .service(web::resource("/{exam_id}/submit").route(web::post().to(submit_exam))),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::public::configure_public_routes;
    use crate::routes::test_support::{TestState, bearer, signed_in};
    use actix_web::{App, http::StatusCode, test};
    use serde_json::json;

    macro_rules! init_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state.storage_data())
                    .app_data($state.cache_data())
                    .configure(configure_exams_routes)
                    .configure(configure_public_routes),
            )
            .await
        };
    }

    macro_rules! create_exam {
        ($app:expr, $token:expr, $body:expr $(,)?) => {{
            let req = test::TestRequest::post()
                .uri("/api/v1/exams")
                .insert_header(("Authorization", $token.clone()))
                .set_json($body)
                .to_request();
            let created: Value = test::call_and_read_body_json(&$app, req).await;
            created
        }};
    }

    #[actix_web::test]
    async fn test_submit_scores_multiple_choice() {
        let state = TestState::new();
        let token = bearer(&state, "prof@escola.com").await;
        let app = init_app!(state);

        let created = create_exam!(
            app,
            token,
            json!({
                "title": "Prova de Ciências",
                "questions": [
                    {"id": "q1", "question": "2+2?", "options": ["3", "4", "5"], "correctAnswer": 1},
                    {"id": "q2", "question": "Capital?", "options": ["A", "B", "C"], "correctAnswer": 2}
                ]
            }),
        );
        assert_eq!(created["exam"]["status"], "Rascunho");
        assert!(created["exam"]["id"].as_str().unwrap().starts_with("EVAL"));
        let exam_id = created["exam"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/exams/{exam_id}/submit"))
            .insert_header(("Authorization", token.clone()))
            .set_json(json!({"answers": [1, 0], "studentName": "Carla"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let submission = &body["submission"];
        assert_eq!(submission["score"], 1);
        assert_eq!(submission["totalQuestions"], 2);
        assert_eq!(submission["percentage"], 50);
        assert_eq!(submission["gradingStatus"], "graded");
        assert_eq!(submission["studentName"], "Carla");
        assert_eq!(submission["examTitle"], "Prova de Ciências");
        assert_eq!(submission["results"][0]["isCorrect"], true);
        assert_eq!(submission["results"][1]["isCorrect"], false);
    }

    #[actix_web::test]
    async fn test_submit_with_essay_is_pending_review() {
        let state = TestState::new();
        let token = bearer(&state, "prof@escola.com").await;
        let app = init_app!(state);

        let created = create_exam!(
            app,
            token,
            json!({
                "title": "Redação",
                "questions": [
                    {"id": "q1", "question": "Disserte", "questionType": "essay"},
                    {"id": "q2", "question": "1+1?", "options": ["2", "3"], "correctAnswer": 0}
                ]
            }),
        );
        let exam_id = created["exam"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/exams/{exam_id}/submit"))
            .insert_header(("Authorization", token))
            .set_json(json!({"answers": [null, 0], "essayAnswers": ["Texto livre"]}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let submission = &body["submission"];
        assert_eq!(submission["gradingStatus"], "pending-review");
        assert_eq!(submission["totalQuestions"], 1);
        assert_eq!(submission["totalEssayQuestions"], 1);
        assert_eq!(submission["percentage"], 100);
        assert_eq!(submission["results"][0]["essayAnswer"], "Texto livre");
    }

    #[actix_web::test]
    async fn test_submit_missing_exam_and_missing_questions() {
        let state = TestState::new();
        let token = bearer(&state, "prof@escola.com").await;
        let app = init_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/v1/exams/EVAL000000/submit")
            .insert_header(("Authorization", token.clone()))
            .set_json(json!({"answers": []}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let created = create_exam!(app, token, json!({"title": "Sem questões"}));
        let exam_id = created["exam"]["id"].as_str().unwrap().to_string();
        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/exams/{exam_id}/submit"))
            .insert_header(("Authorization", token))
            .set_json(json!({"answers": []}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_public_exam_requires_active_status() {
        let state = TestState::new();
        let token = bearer(&state, "prof@escola.com").await;
        let app = init_app!(state);

        let created = create_exam!(
            app,
            token,
            json!({
                "title": "Avaliação Bimestral",
                "questions": [{"id": "q1", "question": "?", "options": ["a", "b"], "correctAnswer": 1}]
            }),
        );
        let exam_id = created["exam"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/public/exam/{exam_id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/public/exam/{exam_id}?session=abc"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/exams/{exam_id}"))
            .insert_header(("Authorization", token))
            .set_json(json!({"status": "Ativo"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/public/exam/{exam_id}?session=abc"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["sessionId"], "abc");
        assert_eq!(body["exam"]["title"], "Avaliação Bimestral");
        assert_eq!(body["exam"]["questions"].as_array().unwrap().len(), 1);
        assert!(body["exam"].get("userId").is_none());
    }

    #[actix_web::test]
    async fn test_simulado_reports_insufficient_questions() {
        let state = TestState::new();
        let token = bearer(&state, "prof@escola.com").await;
        let app = init_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/v1/exams/simulado")
            .insert_header(("Authorization", token))
            .set_json(json!({
                "title": "Simulado 1",
                "grade": "9º ano",
                "subjects": ["Matemática"],
                "questionsPerSubject": 2
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_submit_to_another_teachers_exam() {
        let state = TestState::new();
        let author = bearer(&state, "autora@escola.com").await;
        let colleague = bearer(&state, "colega@escola.com").await;
        let app = init_app!(state);

        let created = create_exam!(
            app,
            author,
            json!({
                "title": "Prova compartilhada",
                "questions": [{"id": "q1", "question": "5-3?", "options": ["1", "2"], "correctAnswer": 1}]
            }),
        );
        let exam_id = created["exam"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/exams/{exam_id}/submit"))
            .insert_header(("Authorization", colleague))
            .set_json(json!({"answers": [1]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["submission"]["percentage"], 100);
        assert_eq!(body["submission"]["examId"], exam_id.as_str());
    }

    #[actix_web::test]
    async fn test_submit_with_text_answers_scores_them_wrong() {
        let state = TestState::new();
        let token = bearer(&state, "prof@escola.com").await;
        let app = init_app!(state);

        let created = create_exam!(
            app,
            token,
            json!({
                "title": "Prova mista",
                "questions": [
                    {"id": "q1", "question": "1+1?", "options": ["1", "2"], "correctAnswer": "1"},
                    {"id": "q2", "question": "2+1?", "options": ["3", "4"], "correctAnswer": 0}
                ]
            }),
        );
        assert_eq!(created["success"], true);
        let exam_id = created["exam"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/exams/{exam_id}/submit"))
            .insert_header(("Authorization", token.clone()))
            .set_json(json!({"answers": [1, "0"]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let submission = &body["submission"];
        assert_eq!(submission["score"], 0);
        assert_eq!(submission["percentage"], 0);
        assert_eq!(submission["answers"], json!([1, "0"]));
        assert_eq!(submission["results"][0]["correctAnswer"], "1");
        assert!(submission["results"][0].get("questionId").is_some());

        // 其他老师早先存下的评估，答案字段是字符串
        state
            .storage
            .set(
                "exams:antigo:EVAL999999",
                json!({
                    "id": "EVAL999999",
                    "title": "Prova antiga",
                    "status": "Ativo",
                    "questions": [{"question": "?", "options": ["a", "b"], "correctAnswer": "1"}]
                }),
            )
            .await
            .unwrap();
        let req = test::TestRequest::post()
            .uri("/api/v1/exams/EVAL999999/submit")
            .insert_header(("Authorization", token))
            .set_json(json!({"answers": [1]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["submission"]["score"], 0);
        assert_eq!(body["submission"]["totalQuestions"], 1);
        assert!(body["submission"]["results"][0].get("questionId").is_none());
    }

    #[actix_web::test]
    async fn test_simulado_is_stored_and_bumps_usage() {
        let state = TestState::new();
        let (account, token) = signed_in(&state, "prof@escola.com").await;
        for (id, subject) in [("m1", "Matemática"), ("m2", "Matemática"), ("p1", "Português")] {
            state
                .storage
                .set(
                    &format!("questions:{}:{id}", account.id),
                    json!({
                        "id": id,
                        "question": format!("Pergunta {id}"),
                        "subject": subject,
                        "difficulty": "Fácil",
                        "options": ["a", "b", "c"],
                        "correctAnswer": 2,
                        "usageCount": 0
                    }),
                )
                .await
                .unwrap();
        }
        let app = init_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/v1/exams/simulado")
            .insert_header(("Authorization", token))
            .set_json(json!({
                "title": "Simulado de Matemática",
                "grade": "9º ano",
                "subjects": ["Matemática"],
                "questionsPerSubject": 2,
                "difficulty": "Misto"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let exam = &body["exam"];
        assert_eq!(exam["type"], "simulado");
        assert_eq!(exam["totalQuestions"], 2);
        assert_eq!(exam["questionsPerSubject"], 2);
        assert_eq!(exam["subjects"], json!(["Matemática"]));
        for question in exam["questions"].as_array().unwrap() {
            assert_eq!(question["subject"], "Matemática");
        }

        let mut usage = Vec::new();
        for id in ["m1", "m2", "p1"] {
            let stored = state
                .storage
                .get(&format!("questions:{}:{id}", account.id))
                .await
                .unwrap()
                .unwrap();
            usage.push(stored["usageCount"].as_i64().unwrap());
        }
        assert_eq!(usage, vec![1, 1, 0]);
    }
}
