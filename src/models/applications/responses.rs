use serde::Serialize;

use super::entities::Application;

#[derive(Debug, Serialize)]
pub struct ApplicationListResponse {
    pub applications: Vec<Application>,
}

#[derive(Debug, Serialize)]
pub struct ApplicationResponse {
    pub application: Application,
}
