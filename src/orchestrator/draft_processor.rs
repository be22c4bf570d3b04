//! 单份草稿处理器
//!
//! 读取票据 → 选择文件 → 填写表单 → 提交

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::clients::BillStore;
use crate::models::{DraftBill, Receipt};
use crate::utils::logging::claim_label;
use crate::workflow::NewBillFlow;

/// 提交一份草稿
///
/// 票据读取失败时返回错误；上传或表单被拒绝时返回 `Ok(false)`。
pub async fn process_draft<S: BillStore>(
    flow: &mut NewBillFlow<S>,
    draft: &DraftBill,
    draft_index: usize,
    verbose_logging: bool,
) -> Result<bool> {
    info!(
        "[草稿 {}] 📄 {} | {} | {} €",
        draft_index,
        claim_label(&draft.name, 40),
        draft.date,
        draft.amount
    );

    let receipt_path = draft.receipt_path();
    let receipt = Receipt::from_path(&receipt_path)
        .await
        .with_context(|| format!("无法读取票据: {}", receipt_path.display()))?;

    if let Err(e) = flow.on_file_selected(receipt).await {
        warn!("[草稿 {}] ⚠️ 票据未被接受: {}", draft_index, e);
        return Ok(false);
    }

    let form = draft.to_form();
    if verbose_logging {
        info!("[草稿 {}]   表单: {:?}", draft_index, form);
    }

    if let Err(e) = flow.on_submit(&form).await {
        warn!("[草稿 {}] ⚠️ 表单未提交: {}", draft_index, e);
        return Ok(false);
    }

    info!("[草稿 {}] ✓ 已提交", draft_index);
    Ok(true)
}
