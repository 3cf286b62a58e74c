//! 答题卡识别（占位实现）
//!
//! 延时后把图片记录改写为已处理，填入占位的学生姓名和十个答案。
//! 任务不可取消，进程退出时未完成的任务直接丢失。

use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

use crate::models::images::entities::{ImageStatus, ScannedImage};
use crate::storage::Storage;
use crate::storage::records::put_record;
use crate::utils::time::now_iso;

pub const EXTRACTED_ANSWER_COUNT: usize = 10;
pub const OPTION_COUNT: i64 = 4;

pub fn process_image<R: Rng + ?Sized>(
    mut image: ScannedImage,
    rng: &mut R,
    processed_at: String,
) -> ScannedImage {
    image.status = ImageStatus::Processada;
    image.processed_at = Some(processed_at);
    image.student_name = Some(format!("Aluno {}", rng.random_range(1..=100)));
    image.extracted_answers = Some(
        (0..EXTRACTED_ANSWER_COUNT)
            .map(|_| rng.random_range(0..OPTION_COUNT))
            .collect(),
    );
    image
}

pub fn spawn_processing(
    storage: Arc<dyn Storage>,
    owner_id: String,
    image: ScannedImage,
    delay: Duration,
) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let image_id = image.id.clone();
        let processed = process_image(image, &mut rand::rng(), now_iso());
        match put_record(storage.as_ref(), &owner_id, &processed).await {
            Ok(()) => debug!("Image {} processed", image_id),
            Err(e) => error!("Failed to store processed image {}: {}", image_id, e),
        }
    });
}
