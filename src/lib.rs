//! Classroom - 课堂作业与词汇翻译后端服务
//!
//! 基于 Actix Web 构建：教师上传并布置 PDF 作业、批改提交，
//! 学生查看作业与成绩，另提供基于词汇表的逐词翻译。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM + 上传目录）
//! - `translator`: 词汇表与逐词翻译
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod translator;
pub mod utils;
