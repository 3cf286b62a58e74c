use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::middlewares;
use crate::services::QuestionService;

// 懒加载的全局 QUESTION_SERVICE 实例
static QUESTION_SERVICE: Lazy<QuestionService> = Lazy::new(QuestionService::new_lazy);

pub async fn list_questions(req: HttpRequest) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE.list_questions(&req).await
}

pub async fn create_question(
    req: HttpRequest,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE.create_question(&req, body.into_inner()).await
}

pub async fn update_question(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE
        .update_question(&req, path.into_inner(), body.into_inner())
        .await
}

pub async fn delete_question(
    req: HttpRequest,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE.delete_question(&req, path.into_inner()).await
}

// 配置路由
pub fn configure_questions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/questions")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_questions))
                    .route(web::post().to(create_question)),
            )
            .service(
                web::resource("/{question_id}")
                    .route(web::put().to(update_question))
                    .route(web::delete().to(delete_question)),
            ),
    );
}
