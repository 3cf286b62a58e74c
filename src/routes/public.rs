use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::exams::EXAM_SERVICE;
use crate::models::exams::requests::PublicExamQuery;

/// 学生通过链接作答，不需要登录
pub async fn get_public_exam(
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<PublicExamQuery>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .get_public_exam(&req, path.into_inner(), query.into_inner().session)
        .await
}

// 配置路由
pub fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/public")
            .route("/exam/{exam_id}", web::get().to(get_public_exam)),
    );
}
