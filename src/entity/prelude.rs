//! 预导入模块，方便使用

pub use super::kv_store::{
    ActiveModel as KvActiveModel, Column as KvColumn, Entity as KvStore, Model as KvModel,
};
