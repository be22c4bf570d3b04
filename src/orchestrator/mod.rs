//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_submitter` - 批量提交
//! - 以配置中的用户登录
//! - 加载草稿目录中的所有 TOML 文件
//! - 逐份提交，统计结果，最后显示报销单列表
//!
//! ### `draft_processor` - 单份草稿
//! - 读取票据，驱动 `NewBillFlow` 完成两阶段提交
//!
//! ## 层次关系
//!
//! ```text
//! batch_submitter (处理 Vec<DraftBill>)
//!     ↓
//! draft_processor (处理单个 DraftBill)
//!     ↓
//! workflow::NewBillFlow (create → update)
//!     ↓
//! clients (BillStore) / routing (Navigator)
//! ```

pub mod batch_submitter;
pub mod draft_processor;

pub use batch_submitter::{App, ClaimOutcome, SubmissionStats};
pub use draft_processor::process_draft;
