use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::middlewares;
use crate::models::series::requests::CreateSeriesRequest;
use crate::services::SeriesService;

// 懒加载的全局 SERIES_SERVICE 实例
static SERIES_SERVICE: Lazy<SeriesService> = Lazy::new(SeriesService::new_lazy);

pub async fn list_series(req: HttpRequest) -> ActixResult<HttpResponse> {
    SERIES_SERVICE.list_series(&req).await
}

pub async fn create_series(
    req: HttpRequest,
    body: web::Json<CreateSeriesRequest>,
) -> ActixResult<HttpResponse> {
    SERIES_SERVICE.create_series(&req, body.into_inner()).await
}

pub async fn get_series(req: HttpRequest, path: web::Path<String>) -> ActixResult<HttpResponse> {
    SERIES_SERVICE.get_series(&req, path.into_inner()).await
}

pub async fn update_series(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    SERIES_SERVICE
        .update_series(&req, path.into_inner(), body.into_inner())
        .await
}

pub async fn delete_series(req: HttpRequest, path: web::Path<String>) -> ActixResult<HttpResponse> {
    SERIES_SERVICE.delete_series(&req, path.into_inner()).await
}

pub async fn list_series_students(
    req: HttpRequest,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    SERIES_SERVICE
        .list_series_students(&req, path.into_inner())
        .await
}

// 配置路由
pub fn configure_series_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/series")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_series))
                    .route(web::post().to(create_series)),
            )
            .service(
                web::resource("/{series_id}")
                    .route(web::get().to(get_series))
                    .route(web::put().to(update_series))
                    .route(web::delete().to(delete_series)),
            )
            .service(
                web::resource("/{series_id}/students").route(web::get().to(list_series_students)),
            ),
    );
}
