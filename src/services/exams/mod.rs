pub mod assemble;
pub mod create;
pub mod delete;
pub mod list;
pub mod public;
pub mod scoring;
pub mod simulado;
pub mod submit;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use std::sync::Arc;

use crate::errors::Result;
use crate::models::exams::entities::Exam;
use crate::models::exams::requests::{CreateSimuladoRequest, SubmitExamRequest};
use crate::storage::Storage;
use crate::storage::records::{get_record, list_records_all_owners};

pub struct ExamService {
    storage: Option<Arc<dyn Storage>>,
}

impl ExamService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_exams(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_exams(self, request).await
    }

    pub async fn create_exam(&self, request: &HttpRequest, body: Value) -> ActixResult<HttpResponse> {
        create::create_exam(self, request, body).await
    }

    // 服务端组卷生成模拟考试
    pub async fn create_simulado(
        &self,
        request: &HttpRequest,
        body: CreateSimuladoRequest,
    ) -> ActixResult<HttpResponse> {
        simulado::create_simulado(self, request, body).await
    }

    pub async fn update_exam(
        &self,
        request: &HttpRequest,
        exam_id: String,
        patch: Value,
    ) -> ActixResult<HttpResponse> {
        update::update_exam(self, request, exam_id, patch).await
    }

    pub async fn delete_exam(
        &self,
        request: &HttpRequest,
        exam_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_exam(self, request, exam_id).await
    }

    // 提交作答并自动评分
    pub async fn submit_exam(
        &self,
        request: &HttpRequest,
        exam_id: String,
        body: SubmitExamRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_exam(self, request, exam_id, body).await
    }

    // 学生端获取评估，无需登录
    pub async fn get_public_exam(
        &self,
        request: &HttpRequest,
        exam_id: String,
        session: Option<String>,
    ) -> ActixResult<HttpResponse> {
        public::get_public_exam(self, request, exam_id, session).await
    }
}

/// 在所有用户的评估中按 ID 查找
pub async fn find_exam_any_owner(storage: &dyn Storage, exam_id: &str) -> Result<Option<Exam>> {
    let exams = list_records_all_owners::<Exam>(storage).await?;
    Ok(exams.into_iter().find(|exam| exam.id == exam_id))
}

/// 先查当前用户的评估，找不到再跨用户查找
pub async fn find_exam_for_submission(
    storage: &dyn Storage,
    owner_id: &str,
    exam_id: &str,
) -> Result<Option<Exam>> {
    if let Some(exam) = get_record::<Exam>(storage, owner_id, exam_id).await? {
        return Ok(Some(exam));
    }
    find_exam_any_owner(storage, exam_id).await
}
