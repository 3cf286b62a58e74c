use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::json;
use tracing::{info, warn};

use super::ExamService;
use super::assemble::assemble_simulado;
use super::create::store_new_exam;
use crate::middlewares::RequireJWT;
use crate::models::exams::entities::SIMULADO_TYPE;
use crate::models::exams::requests::CreateSimuladoRequest;
use crate::models::exams::responses::ExamResponse;
use crate::models::questions::entities::Question;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, internal_error, write_error};
use crate::storage::records::{list_records, put_record};
use crate::utils::json::into_object;
use crate::utils::time::now_iso;

pub async fn create_simulado(
    service: &ExamService,
    request: &HttpRequest,
    body: CreateSimuladoRequest,
) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let settings = match body.into_settings() {
        Ok(settings) => settings,
        Err(msg) => return Ok(bad_request(ErrorCode::SimuladoSettingsInvalid, msg)),
    };

    let storage = service.get_storage(request);
    let bank = match list_records::<Question>(storage.as_ref(), &owner_id).await {
        Ok(bank) => bank,
        Err(e) => return Ok(internal_error("Failed to load question bank", e)),
    };

    // rng 不能跨 await 持有
    let assembled = {
        let mut rng = rand::rng();
        assemble_simulado(&bank, &settings, &mut rng)
    };
    let questions = match assembled {
        Ok(questions) => questions,
        Err(insufficient) => {
            let detail = insufficient
                .iter()
                .map(|s| format!("{} ({} available)", s.subject, s.available))
                .collect::<Vec<_>>()
                .join(", ");
            return Ok(bad_request(
                ErrorCode::SimuladoInsufficientQuestions,
                format!(
                    "Not enough questions ({} per subject required): {detail}",
                    settings.questions_per_subject
                ),
            ));
        }
    };

    let exam_body = into_object(json!({
        "title": settings.title,
        "description": settings.description,
        "grade": settings.grade,
        "type": SIMULADO_TYPE,
        "subjects": settings.subjects,
        "questions": questions,
        "timeLimit": settings.time_limit,
        "totalQuestions": questions.len(),
        "questionsPerSubject": settings.questions_per_subject,
        "settings": {
            "questionsPerSubject": settings.questions_per_subject,
            "shuffleQuestions": settings.shuffle_questions,
            "shuffleOptions": settings.shuffle_options,
            "showResults": settings.show_results,
            "allowReview": settings.allow_review,
        },
    }));
    let exam_body = match exam_body {
        Ok(body) => body,
        Err(e) => return Ok(internal_error("Failed to save simulado", e)),
    };

    let exam = match store_new_exam(storage.as_ref(), &owner_id, exam_body).await {
        Ok(exam) => exam,
        Err(e) => return Ok(write_error("Failed to save simulado", e)),
    };

    // 逐题累加使用次数，非原子操作
    let now = now_iso();
    for question in &bank {
        if !questions.iter().any(|q| q.id.as_deref() == Some(question.id.as_str())) {
            continue;
        }
        let mut used = question.clone();
        used.usage_count += 1;
        used.updated_at = Some(now.clone());
        if let Err(e) = put_record(storage.as_ref(), &owner_id, &used).await {
            warn!("Failed to bump usage count of question {}: {}", used.id, e);
        }
    }

    info!(
        "Simulado {} assembled for {} with {} questions",
        exam.id,
        owner_id,
        questions.len()
    );
    Ok(HttpResponse::Ok().json(ApiResponse::success(ExamResponse { exam })))
}
