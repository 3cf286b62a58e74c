use serde::Serialize;

use super::entities::Class;

#[derive(Debug, Serialize)]
pub struct ClassListResponse {
    pub classes: Vec<Class>,
}

#[derive(Debug, Serialize)]
pub struct ClassResponse {
    pub class: Class,
}
