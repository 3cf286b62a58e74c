pub mod applications;

pub mod auth;

pub mod classes;

pub mod dashboard;

pub mod exams;

pub mod health;

pub mod images;

pub mod public;

pub mod questions;

pub mod series;

pub mod students;

pub mod submissions;

#[cfg(test)]
pub(crate) mod test_support;

pub use applications::configure_applications_routes;
pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use dashboard::configure_dashboard_routes;
pub use exams::configure_exams_routes;
pub use health::configure_health_routes;
pub use images::configure_images_routes;
pub use public::configure_public_routes;
pub use questions::configure_questions_routes;
pub use series::configure_series_routes;
pub use students::configure_students_routes;
pub use submissions::configure_submissions_routes;

use actix_web::web;

/// 注册全部 `/api/v1` 路由
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_health_routes)
        .configure(configure_auth_routes)
        .configure(configure_public_routes)
        .configure(configure_students_routes)
        .configure(configure_questions_routes)
        .configure(configure_exams_routes)
        .configure(configure_submissions_routes)
        .configure(configure_images_routes)
        .configure(configure_classes_routes)
        .configure(configure_series_routes)
        .configure(configure_applications_routes)
        .configure(configure_dashboard_routes);
}
