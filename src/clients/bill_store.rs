//! bills 集合的远程存储接口

use crate::error::AppResult;
use crate::models::{Bill, CreatedBill, Receipt};

/// `create` 的请求体：票据文件 + 当前用户邮箱
#[derive(Debug, Clone, Copy)]
pub struct ReceiptUpload<'a> {
    pub receipt: &'a Receipt,
    pub email: &'a str,
}

/// bills 集合
///
/// 失败时返回 [`crate::error::StoreError`]，HTTP 状态码以数值形式携带。
#[allow(async_fn_in_trait)]
pub trait BillStore {
    /// 上传票据并登记一份草稿
    async fn create(&self, upload: ReceiptUpload<'_>) -> AppResult<CreatedBill>;

    /// 用完整记录覆盖 `selector` 指向的报销单
    async fn update(&self, selector: &str, bill: &Bill) -> AppResult<Bill>;

    async fn list(&self) -> AppResult<Vec<Bill>>;
}
