use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::middlewares;
use crate::services::ImageService;

// 懒加载的全局 IMAGE_SERVICE 实例
static IMAGE_SERVICE: Lazy<ImageService> = Lazy::new(ImageService::new_lazy);

pub async fn list_images(req: HttpRequest) -> ActixResult<HttpResponse> {
    IMAGE_SERVICE.list_images(&req).await
}

pub async fn create_image(req: HttpRequest, body: web::Json<Value>) -> ActixResult<HttpResponse> {
    IMAGE_SERVICE.create_image(&req, body.into_inner()).await
}

// 配置路由
pub fn configure_images_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/images")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_images))
                    .route(web::post().to(create_image)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{TestState, bearer};
    use actix_web::{App, test};
    use serde_json::json;

    #[actix_web::test]
    async fn test_image_starts_processing() {
        let state = TestState::new();
        let token = bearer(&state, "prof@escola.com").await;
        let app = test::init_service(
            App::new()
                .app_data(state.storage_data())
                .app_data(state.cache_data())
                .configure(configure_images_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/images")
            .insert_header(("Authorization", token.clone()))
            .set_json(json!({"fileName": "cartao-01.jpg", "status": "Processada"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["image"]["status"], "Processando");
        assert_eq!(body["image"]["fileName"], "cartao-01.jpg");

        let req = test::TestRequest::get()
            .uri("/api/v1/images")
            .insert_header(("Authorization", token))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["images"].as_array().unwrap().len(), 1);
    }
}
