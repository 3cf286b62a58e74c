pub mod applications;
pub mod auth;
pub mod classes;
pub mod common;
pub mod dashboard;
pub mod exams;
pub mod images;
pub mod questions;
pub mod series;
pub mod students;
pub mod submissions;

pub use common::error_code::ErrorCode;
pub use common::response::{ApiResponse, DataPayload};
