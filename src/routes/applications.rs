use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::middlewares;
use crate::services::ApplicationService;

// 懒加载的全局 APPLICATION_SERVICE 实例
static APPLICATION_SERVICE: Lazy<ApplicationService> = Lazy::new(ApplicationService::new_lazy);

pub async fn list_applications(req: HttpRequest) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE.list_applications(&req).await
}

pub async fn create_application(
    req: HttpRequest,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE
        .create_application(&req, body.into_inner())
        .await
}

pub async fn update_application(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE
        .update_application(&req, path.into_inner(), body.into_inner())
        .await
}

pub async fn delete_application(
    req: HttpRequest,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE
        .delete_application(&req, path.into_inner())
        .await
}

// 配置路由
pub fn configure_applications_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/applications")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_applications))
                    .route(web::post().to(create_application)),
            )
            .service(
                web::resource("/{application_id}")
                    .route(web::put().to(update_application))
                    .route(web::delete().to(delete_application)),
            ),
    );
}
