use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;

use super::{SERIES_PROTECTED_FIELDS, SeriesService, code_exists};
use crate::errors::SeiceError;
use crate::middlewares::RequireJWT;
use crate::models::series::entities::Series;
use crate::models::series::responses::SeriesResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, internal_error, not_found, write_error};
use crate::storage::records::{Record, list_records, put_record};
use crate::storage::Storage;
use crate::utils::json::{into_object, merge_patch, remove_nulls};
use crate::utils::time::now_iso;

pub async fn update_series(
    service: &SeriesService,
    request: &HttpRequest,
    series_id: String,
    patch: Value,
) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::require_user_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let patch = match into_object(patch) {
        Ok(patch) => patch,
        Err(e) => return Ok(bad_request(ErrorCode::BadRequest, e.message())),
    };
    let storage = service.get_storage(request);

    let key = Series::KIND.key(&owner_id, &series_id);
    let stored = match storage.get(&key).await {
        Ok(Some(stored)) => stored,
        Ok(None) => return Ok(not_found(ErrorCode::SeriesNotFound, "Series not found")),
        Err(e) => return Ok(internal_error("Failed to update series", e)),
    };
    let mut merged = match into_object(stored) {
        Ok(merged) => merged,
        Err(e) => return Ok(internal_error("Failed to update series", e)),
    };

    // 代码变更时检查是否与其他年级重复
    let new_code = patch.get("code").and_then(Value::as_str).filter(|c| !c.is_empty());
    let old_code = merged.get("code").and_then(Value::as_str);
    if let Some(code) = new_code
        && Some(code) != old_code
        && let Err(resp) = ensure_code_free(storage.as_ref(), &owner_id, &series_id, code).await
    {
        return Ok(resp);
    }

    merge_patch(&mut merged, patch, &SERIES_PROTECTED_FIELDS, &now_iso());
    remove_nulls(&mut merged);

    let series: Series = match serde_json::from_value(Value::Object(merged)) {
        Ok(series) => series,
        Err(e) => {
            return Ok(write_error(
                "Failed to update series",
                SeiceError::validation(format!("Invalid series: {e}")),
            ));
        }
    };
    if !series.is_valid() {
        return Ok(bad_request(
            ErrorCode::SeriesFieldsMissing,
            "Name and code are required",
        ));
    }
    if let Err(e) = put_record(storage.as_ref(), &owner_id, &series).await {
        return Ok(internal_error("Failed to update series", e));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(SeriesResponse::new(series))))
}

async fn ensure_code_free(
    storage: &dyn Storage,
    owner_id: &str,
    series_id: &str,
    code: &str,
) -> Result<(), HttpResponse> {
    let existing = list_records::<Series>(storage, owner_id)
        .await
        .map_err(|e| internal_error("Failed to update series", e))?;
    if code_exists(&existing, code, Some(series_id)) {
        return Err(bad_request(
            ErrorCode::SeriesCodeExists,
            "Code already exists, choose another code",
        ));
    }
    Ok(())
}
