//! # Billed
//!
//! 员工报销单客户端：上传票据、填写表单、查看已提交的报销单
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 会话存储，登录用户在构造时以 `Session` 显式传入
//! - `clients/` - bills 集合的远程存储（`BillStore`：HTTP / 内存实现）
//!
//! ### ② 流程层（Workflow）
//! - `workflow/` - 一张报销单的两阶段提交
//! - `DraftState` - `Empty → Uploading → Uploaded → Submitting → Done`
//! - `NewBillFlow` - 选择票据时 `create` 草稿，提交表单时 `update` 草稿
//!
//! ### ③ 展示与路由（Presenter / Routing）
//! - `presenter/` - 列表排序、状态标记、错误页
//! - `routing/` - 路由分发、侧边栏高亮、导航句柄
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/` - 从 TOML 草稿目录批量提交
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod presenter;
pub mod routing;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{BillStore, HttpBillStore, MemoryBillStore};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{MemorySessionStore, Session, SessionStore};
pub use models::{Bill, BillStatus, NewBillForm, Receipt};
pub use orchestrator::{App, SubmissionStats};
pub use routing::{Navigator, Route, Router};
pub use workflow::{DraftState, NewBillFlow};
