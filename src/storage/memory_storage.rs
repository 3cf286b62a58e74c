//! 内存存储实现
//!
//! 用于测试和临时运行，进程退出即丢失。

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use super::Storage;
use crate::errors::Result;

#[derive(Default)]
pub struct MemoryStorage {
    entries: DashMap<String, Value>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.entries.remove(key).is_some())
    }

    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>> {
        let mut matched: Vec<(String, Value)> = self
            .entries
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        matched.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(matched.into_iter().map(|(_, value)| value).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[actix_web::test]
    async fn test_set_get_delete() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());
        storage
            .set("students:u1:s1", json!({"id": "s1", "name": "Ana"}))
            .await
            .unwrap();
        assert_eq!(storage.len(), 1);

        let value = storage.get("students:u1:s1").await.unwrap().unwrap();
        assert_eq!(value["name"], "Ana");

        assert!(storage.delete("students:u1:s1").await.unwrap());
        assert!(!storage.delete("students:u1:s1").await.unwrap());
        assert!(storage.get("students:u1:s1").await.unwrap().is_none());
        assert!(storage.is_empty());
    }

    #[actix_web::test]
    async fn test_prefix_scan_is_scoped_and_ordered() {
        let storage = MemoryStorage::new();
        storage.set("exams:u1:b", json!({"id": "b"})).await.unwrap();
        storage.set("exams:u1:a", json!({"id": "a"})).await.unwrap();
        storage.set("exams:u2:c", json!({"id": "c"})).await.unwrap();
        storage.set("questions:u1:q", json!({"id": "q"})).await.unwrap();

        let values = storage.get_by_prefix("exams:u1:").await.unwrap();
        let ids: Vec<&str> = values.iter().filter_map(|v| v["id"].as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);

        assert_eq!(storage.get_by_prefix("exams:").await.unwrap().len(), 3);
    }
}
