//! 类型化记录
//!
//! 业务记录以 `{kind}:{ownerId}:{entityId}` 为键存放在键值存储中。
//! 读取列表时逐条解码，无法解码或缺少必填字段的记录会被丢弃并记录警告。

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::Storage;
use crate::errors::{Result, SeiceError};
use crate::utils::json::{into_object, merge_patch};
use crate::utils::time::now_iso;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Students,
    Questions,
    Exams,
    Submissions,
    Images,
    Classes,
    Series,
    Applications,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Students => "students",
            RecordKind::Questions => "questions",
            RecordKind::Exams => "exams",
            RecordKind::Submissions => "submissions",
            RecordKind::Images => "images",
            RecordKind::Classes => "classes",
            RecordKind::Series => "series",
            RecordKind::Applications => "applications",
        }
    }

    pub fn key(&self, owner_id: &str, entity_id: &str) -> String {
        format!("{}:{}:{}", self.as_str(), owner_id, entity_id)
    }

    /// 某个用户名下该类记录的前缀
    pub fn owner_prefix(&self, owner_id: &str) -> String {
        format!("{}:{}:", self.as_str(), owner_id)
    }

    /// 所有用户的该类记录
    pub fn kind_prefix(&self) -> String {
        format!("{}:", self.as_str())
    }
}

pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    const KIND: RecordKind;

    fn id(&self) -> &str;

    /// 解码成功后的额外校验，例如必填字符串不能为空
    fn is_valid(&self) -> bool {
        !self.id().is_empty()
    }
}

/// 解码一批存储值，丢弃不合法的记录
pub fn decode_records<T: Record>(values: Vec<Value>) -> Vec<T> {
    let total = values.len();
    let records: Vec<T> = values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<T>(value) {
            Ok(record) if record.is_valid() => Some(record),
            Ok(record) => {
                warn!(
                    "Dropping invalid {} record '{}'",
                    T::KIND.as_str(),
                    record.id()
                );
                None
            }
            Err(e) => {
                warn!("Dropping undecodable {} record: {}", T::KIND.as_str(), e);
                None
            }
        })
        .collect();

    debug!(
        "Decoded {}/{} {} records",
        records.len(),
        total,
        T::KIND.as_str()
    );
    records
}

/// 将请求体与服务端字段合并后解码为记录，失败时返回校验错误
pub fn build_record<T: Record>(mut body: Map<String, Value>, server_fields: Value) -> Result<T> {
    if let Value::Object(fields) = server_fields {
        body.extend(fields);
    }
    let record: T = serde_json::from_value(Value::Object(body))
        .map_err(|e| SeiceError::validation(format!("Invalid {}: {e}", T::KIND.as_str())))?;
    if !record.is_valid() {
        return Err(SeiceError::validation(format!(
            "Invalid {}: required fields are empty",
            T::KIND.as_str()
        )));
    }
    Ok(record)
}

pub async fn get_record<T: Record>(
    storage: &dyn Storage,
    owner_id: &str,
    id: &str,
) -> Result<Option<T>> {
    // 与列表一致，不合法的记录视为不存在
    match storage.get(&T::KIND.key(owner_id, id)).await? {
        Some(value) => Ok(decode_records(vec![value]).pop()),
        None => Ok(None),
    }
}

pub async fn put_record<T: Record>(storage: &dyn Storage, owner_id: &str, record: &T) -> Result<()> {
    let value = serde_json::to_value(record)?;
    storage.set(&T::KIND.key(owner_id, record.id()), value).await
}

pub async fn delete_record(
    storage: &dyn Storage,
    kind: RecordKind,
    owner_id: &str,
    id: &str,
) -> Result<bool> {
    storage.delete(&kind.key(owner_id, id)).await
}

/// 把补丁浅合并到已存储的记录上并写回，记录不存在时返回 `Ok(None)`
pub async fn merge_record<T: Record>(
    storage: &dyn Storage,
    owner_id: &str,
    id: &str,
    patch: Map<String, Value>,
    protected: &[&str],
) -> Result<Option<T>> {
    let key = T::KIND.key(owner_id, id);
    let Some(stored) = storage.get(&key).await? else {
        return Ok(None);
    };

    let mut merged = into_object(stored)?;
    merge_patch(&mut merged, patch, protected, &now_iso());

    let record: T = serde_json::from_value(Value::Object(merged))
        .map_err(|e| SeiceError::validation(format!("Invalid {}: {e}", T::KIND.as_str())))?;
    if !record.is_valid() {
        return Err(SeiceError::validation(format!(
            "Invalid {}: required fields are empty",
            T::KIND.as_str()
        )));
    }

    put_record(storage, owner_id, &record).await?;
    Ok(Some(record))
}

pub async fn list_records<T: Record>(storage: &dyn Storage, owner_id: &str) -> Result<Vec<T>> {
    let values = storage.get_by_prefix(&T::KIND.owner_prefix(owner_id)).await?;
    Ok(decode_records(values))
}

/// 跨所有用户列出记录，仅用于公开访问的查找
pub async fn list_records_all_owners<T: Record>(storage: &dyn Storage) -> Result<Vec<T>> {
    let values = storage.get_by_prefix(&T::KIND.kind_prefix()).await?;
    Ok(decode_records(values))
}
