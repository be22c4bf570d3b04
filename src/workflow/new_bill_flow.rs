//! 新建报销单流程 - 流程层
//!
//! 核心职责：驱动一张报销单的两阶段提交
//!
//! 流程顺序：
//! 1. 选择票据 → 校验类型 → `create` 登记草稿
//! 2. 填写表单 → 合并草稿信息 → `update` 完成草稿 → 回到列表页
//!
//! 所有方法都要求 `&mut self`，因此同一个表单不可能在 `create` 返回之前发出 `update`。

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::clients::{BillStore, ReceiptUpload};
use crate::error::{AppResult, StoreError, WorkflowError};
use crate::infrastructure::Session;
use crate::models::{Bill, BillStatus, NewBillForm, Receipt};
use crate::routing::{Navigator, Route};
use crate::workflow::draft_state::{Draft, DraftState};

/// 新建报销单流程（一个表单实例）
pub struct NewBillFlow<S: BillStore> {
    store: Arc<S>,
    session: Session,
    navigator: Navigator,
    state: DraftState,
}

impl<S: BillStore> NewBillFlow<S> {
    pub fn new(store: Arc<S>, session: Session, navigator: Navigator) -> Self {
        Self {
            store,
            session,
            navigator,
            state: DraftState::Empty,
        }
    }

    pub fn state(&self) -> &DraftState {
        &self.state
    }

    /// 用户选择了票据文件
    ///
    /// 类型不合法时直接拒绝，不会调用 `create`。上传失败时回到 `Empty`，错误返回给调用方。
    /// 在 `Uploaded` 状态下重新选择文件会登记新的草稿，以最后一次为准。
    pub async fn on_file_selected(&mut self, receipt: Receipt) -> AppResult<()> {
        if self.state.is_finished() {
            return Err(WorkflowError::AlreadySubmitted.into());
        }

        if let Err(e) = receipt.validate() {
            warn!("⚠️ 票据被拒绝: {}", e);
            return Err(e.into());
        }

        info!("📎 上传票据: {}", receipt.file_name);
        self.state = DraftState::Uploading;

        let upload = ReceiptUpload {
            receipt: &receipt,
            email: self.session.email(),
        };

        let created = match self.store.create(upload).await {
            Ok(created) => created,
            Err(e) => {
                error!("❌ 上传票据失败 ({}): {}", receipt.file_name, e);
                self.state = DraftState::Empty;
                return Err(e);
            }
        };

        let Some(bill_id) = created.bill_id() else {
            error!("❌ 上传结果缺少草稿 ID: {:?}", created);
            self.state = DraftState::Empty;
            return Err(StoreError::EmptyResponse {
                endpoint: "bills".to_string(),
            }
            .into());
        };

        let draft = Draft {
            bill_id: bill_id.to_string(),
            file_url: created.file_url.clone(),
            file_name: receipt.file_name.clone(),
        };
        info!("✓ 草稿已登记 {}", draft);
        self.state = DraftState::Uploaded(draft);

        Ok(())
    }

    /// 用户提交表单
    ///
    /// 只有 `Uploaded` 状态可以提交。`update` 发出后立即跳转回列表页，
    /// 不等待结果；`update` 失败只记录日志。
    pub async fn on_submit(&mut self, form: &NewBillForm) -> AppResult<()> {
        let draft = match &self.state {
            DraftState::Uploaded(draft) => draft.clone(),
            state if state.is_finished() => {
                return Err(WorkflowError::AlreadySubmitted.into());
            }
            state => {
                warn!("⚠️ 草稿未就绪，拒绝提交 (状态: {})", state.name());
                return Err(WorkflowError::DraftNotReady { state: state.name() }.into());
            }
        };

        if let Err(e) = form.validate() {
            warn!("⚠️ 表单校验失败: {}", e);
            return Err(e.into());
        }

        let bill = self.build_bill(form, &draft)?;
        self.state = DraftState::Submitting(draft.clone());

        info!("📤 提交报销单 {}: {}", draft, bill.name);

        let finalize = self.store.update(&draft.bill_id, &bill);
        self.navigator.navigate(Route::Bills);

        match finalize.await {
            Ok(_) => info!("✓ 报销单提交成功 {}", draft),
            Err(e) => error!("❌ 报销单提交失败 {}: {}", draft, e),
        }

        self.state = DraftState::Done;
        Ok(())
    }

    /// 合并表单、会话与草稿信息
    fn build_bill(&self, form: &NewBillForm, draft: &Draft) -> AppResult<Bill> {
        Ok(Bill {
            id: Some(draft.bill_id.clone()),
            email: self.session.email().to_string(),
            kind: form.expense_type.clone(),
            name: form.name.clone(),
            amount: form.parsed_amount()?,
            date: form.date.trim().to_string(),
            vat: form.vat.clone(),
            pct: form.parsed_pct(),
            commentary: form.commentary.clone(),
            file_url: Some(draft.file_url.clone()),
            file_name: Some(draft.file_name.clone()),
            status: BillStatus::Pending,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::MemoryBillStore;
    use crate::error::{AppError, ValidationError};
    use crate::models::User;
    use crate::routing::NavigationReceiver;
    use tokio_test::{assert_err, assert_ok};

    fn setup() -> (
        Arc<MemoryBillStore>,
        NewBillFlow<MemoryBillStore>,
        NavigationReceiver,
    ) {
        let store = Arc::new(MemoryBillStore::new());
        let session = Session {
            user: User::employee("a@a"),
            token: None,
        };
        let (navigator, receiver) = Navigator::channel();
        let flow = NewBillFlow::new(store.clone(), session, navigator);
        (store, flow, receiver)
    }

    fn png() -> Receipt {
        Receipt::new("test.png", "image/png", b"dummy content".to_vec())
    }

    fn form() -> NewBillForm {
        NewBillForm {
            name: "ticket".to_string(),
            amount: "50".to_string(),
            date: "2021-01-01".to_string(),
            pct: "20".to_string(),
            ..NewBillForm::default()
        }
    }

    #[tokio::test]
    async fn test_valid_image_creates_one_draft() {
        let (store, mut flow, _rx) = setup();

        assert_ok!(flow.on_file_selected(png()).await);

        let calls = store.create_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].file_name, "test.png");
        assert_eq!(calls[0].bytes, b"dummy content".to_vec());
        assert_eq!(calls[0].email, "a@a");

        let draft = flow.state().ready_draft().unwrap();
        assert_eq!(draft.bill_id, "0001");
        assert_eq!(draft.file_url, "https://localhost:3456/images/test.png");
        assert_eq!(draft.file_name, "test.png");
    }

    #[tokio::test]
    async fn test_non_image_never_calls_create() {
        let (store, mut flow, _rx) = setup();

        let pdf = Receipt::new("facture.pdf", "application/pdf", b"%PDF".to_vec());
        let err = flow.on_file_selected(pdf).await.unwrap_err();

        assert!(matches!(
            err,
            AppError::Validation(ValidationError::UnsupportedFileType { .. })
        ));
        assert!(store.create_calls().is_empty());
        assert_eq!(flow.state(), &DraftState::Empty);
    }

    #[tokio::test]
    async fn test_submit_finalizes_draft_and_navigates() {
        let (store, mut flow, mut rx) = setup();
        assert_ok!(flow.on_file_selected(png()).await);

        assert_ok!(flow.on_submit(&form()).await);

        let updates = store.update_calls();
        assert_eq!(updates.len(), 1);
        let (selector, bill) = &updates[0];
        assert_eq!(selector, "0001");
        assert_eq!(bill.status, BillStatus::Pending);
        assert_eq!(bill.email, "a@a");
        assert_eq!(bill.amount, 50);
        assert_eq!(bill.file_url.as_deref(), Some("https://localhost:3456/images/test.png"));
        assert_eq!(bill.file_name.as_deref(), Some("test.png"));

        assert_eq!(rx.try_recv().unwrap(), Route::Bills);
        assert_eq!(flow.state(), &DraftState::Done);
        assert_eq!(store.bills()[0].name, "ticket");
    }

    #[tokio::test]
    async fn test_submit_without_file_is_blocked() {
        let (store, mut flow, mut rx) = setup();

        let err = flow.on_submit(&form()).await.unwrap_err();

        assert!(matches!(
            err,
            AppError::Workflow(WorkflowError::DraftNotReady { state: "Empty" })
        ));
        assert!(store.update_calls().is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_blank_pct_defaults_to_twenty() {
        let (store, mut flow, _rx) = setup();
        assert_ok!(flow.on_file_selected(png()).await);

        let mut form = form();
        form.pct = "vingt".to_string();
        assert_ok!(flow.on_submit(&form).await);

        assert_eq!(store.update_calls()[0].1.pct, 20);
    }

    #[tokio::test]
    async fn test_invalid_form_keeps_draft() {
        let (store, mut flow, mut rx) = setup();
        assert_ok!(flow.on_file_selected(png()).await);

        let mut bad = form();
        bad.amount = String::new();
        assert_err!(flow.on_submit(&bad).await);
        assert!(store.update_calls().is_empty());
        assert!(rx.try_recv().is_err());
        assert!(flow.state().ready_draft().is_some());

        assert_ok!(flow.on_submit(&form()).await);
        assert_eq!(store.update_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_upload_failure_blocks_submit() {
        let (store, mut flow, mut rx) = setup();
        store.fail_create_with(500);

        let err = flow.on_file_selected(png()).await.unwrap_err();
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(flow.state(), &DraftState::Empty);

        assert_err!(flow.on_submit(&form()).await);
        assert!(store.update_calls().is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_finalize_failure_is_logged_not_raised() {
        let (store, mut flow, mut rx) = setup();
        assert_ok!(flow.on_file_selected(png()).await);
        store.fail_update_with(500);

        assert_ok!(flow.on_submit(&form()).await);

        assert_eq!(store.update_calls().len(), 1);
        assert_eq!(rx.try_recv().unwrap(), Route::Bills);
        assert_eq!(flow.state(), &DraftState::Done);
    }

    #[tokio::test]
    async fn test_reselecting_file_last_write_wins() {
        let (store, mut flow, _rx) = setup();
        assert_ok!(flow.on_file_selected(png()).await);
        assert_ok!(
            flow.on_file_selected(Receipt::new("second.jpg", "image/jpeg", b"2".to_vec()))
                .await
        );

        assert_eq!(store.create_calls().len(), 2);
        let draft = flow.state().ready_draft().unwrap();
        assert_eq!(draft.bill_id, "0002");
        assert_eq!(draft.file_name, "second.jpg");

        assert_ok!(flow.on_submit(&form()).await);
        assert_eq!(store.update_calls()[0].0, "0002");
    }

    #[tokio::test]
    async fn test_form_cannot_be_submitted_twice() {
        let (store, mut flow, _rx) = setup();
        assert_ok!(flow.on_file_selected(png()).await);
        assert_ok!(flow.on_submit(&form()).await);

        let err = flow.on_submit(&form()).await.unwrap_err();
        assert!(matches!(err, AppError::Workflow(WorkflowError::AlreadySubmitted)));
        assert_err!(flow.on_file_selected(png()).await);
        assert_eq!(store.update_calls().len(), 1);
    }
}
