//! SeaORM 实体定义
//!
//! 业务记录全部以 JSON 形式存放在同一张键值表中，
//! 实体层只描述这张表本身，类型化的记录定义在 models 模块。

pub mod prelude;

pub mod kv_store;
