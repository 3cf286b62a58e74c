use serde::Serialize;

use super::entities::ScannedImage;

#[derive(Debug, Serialize)]
pub struct ImageListResponse {
    pub images: Vec<ScannedImage>,
}

#[derive(Debug, Serialize)]
pub struct ImageResponse {
    pub image: ScannedImage,
}
