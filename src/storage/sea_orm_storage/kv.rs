//! 键值表操作

use super::SeaOrmStorage;
use crate::entity::kv_store::{ActiveModel, Column, Entity as KvStore};
use crate::errors::{Result, SeiceError};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde_json::Value;

impl SeaOrmStorage {
    /// 读取单个键
    pub async fn get_impl(&self, key: &str) -> Result<Option<Value>> {
        let result = KvStore::find_by_id(key.to_string())
            .one(&self.db)
            .await
            .map_err(|e| SeiceError::database_operation(format!("查询键 {key} 失败: {e}")))?;

        result.map(|m| m.into_value()).transpose()
    }

    /// 写入键，已存在时覆盖
    pub async fn set_impl(&self, key: &str, value: Value) -> Result<()> {
        let now = chrono::Utc::now().timestamp_millis();

        let model = ActiveModel {
            key: Set(key.to_string()),
            value: Set(serde_json::to_string(&value)?),
            updated_at: Set(now),
        };

        KvStore::insert(model)
            .on_conflict(
                OnConflict::column(Column::Key)
                    .update_columns([Column::Value, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| SeiceError::database_operation(format!("写入键 {key} 失败: {e}")))?;

        Ok(())
    }

    /// 删除键
    pub async fn delete_impl(&self, key: &str) -> Result<bool> {
        let result = KvStore::delete_by_id(key.to_string())
            .exec(&self.db)
            .await
            .map_err(|e| SeiceError::database_operation(format!("删除键 {key} 失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 按前缀列出值
    pub async fn get_by_prefix_impl(&self, prefix: &str) -> Result<Vec<Value>> {
        let rows = KvStore::find()
            .filter(Column::Key.starts_with(prefix))
            .order_by_asc(Column::Key)
            .all(&self.db)
            .await
            .map_err(|e| {
                SeiceError::database_operation(format!("按前缀 {prefix} 查询失败: {e}"))
            })?;

        // LIKE 会把 `_` 当作通配符，这里再精确过滤一次
        rows.into_iter()
            .filter(|m| m.key.starts_with(prefix))
            .map(|m| m.into_value())
            .collect()
    }
}
