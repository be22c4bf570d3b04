use std::sync::Mutex;

use crate::clients::bill_store::{BillStore, ReceiptUpload};
use crate::error::{AppError, AppResult};
use crate::models::{Bill, BillStatus, CreatedBill};

const FILE_HOST: &str = "https://localhost:3456/images";

/// 一次 `create` 调用的记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCall {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub email: String,
}

#[derive(Debug, Default)]
struct Inner {
    bills: Vec<Bill>,
    create_calls: Vec<CreateCall>,
    update_calls: Vec<(String, Bill)>,
    list_calls: usize,
    next_id: u64,
    create_failure: Option<u16>,
    update_failure: Option<u16>,
    list_failure: Option<u16>,
}

/// 进程内的 bills 集合，记录每次调用，可按操作注入失败状态码
#[derive(Debug, Default)]
pub struct MemoryBillStore {
    inner: Mutex<Inner>,
}

impl MemoryBillStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bills(bills: Vec<Bill>) -> Self {
        let store = Self::default();
        store.inner.lock().unwrap().bills = bills;
        store
    }

    pub fn fail_create_with(&self, status: u16) {
        self.inner.lock().unwrap().create_failure = Some(status);
    }

    pub fn fail_update_with(&self, status: u16) {
        self.inner.lock().unwrap().update_failure = Some(status);
    }

    pub fn fail_list_with(&self, status: u16) {
        self.inner.lock().unwrap().list_failure = Some(status);
    }

    pub fn clear_failures(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.create_failure = None;
        inner.update_failure = None;
        inner.list_failure = None;
    }

    pub fn bills(&self) -> Vec<Bill> {
        self.inner.lock().unwrap().bills.clone()
    }

    pub fn create_calls(&self) -> Vec<CreateCall> {
        self.inner.lock().unwrap().create_calls.clone()
    }

    pub fn update_calls(&self) -> Vec<(String, Bill)> {
        self.inner.lock().unwrap().update_calls.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.inner.lock().unwrap().list_calls
    }
}

impl BillStore for MemoryBillStore {
    async fn create(&self, upload: ReceiptUpload<'_>) -> AppResult<CreatedBill> {
        let mut inner = self.inner.lock().unwrap();
        inner.create_calls.push(CreateCall {
            file_name: upload.receipt.file_name.clone(),
            content_type: upload.receipt.content_type.clone(),
            bytes: upload.receipt.bytes.clone(),
            email: upload.email.to_string(),
        });

        if let Some(status) = inner.create_failure {
            return Err(AppError::store_status("bills", status));
        }

        inner.next_id += 1;
        let key = format!("{:04}", inner.next_id);
        let file_url = format!("{}/{}", FILE_HOST, upload.receipt.file_name);

        inner.bills.push(Bill {
            id: Some(key.clone()),
            email: upload.email.to_string(),
            file_url: Some(file_url.clone()),
            file_name: Some(upload.receipt.file_name.clone()),
            status: BillStatus::Pending,
            ..Bill::default()
        });

        Ok(CreatedBill {
            id: None,
            key: Some(key),
            file_url,
            file_name: None,
        })
    }

    async fn update(&self, selector: &str, bill: &Bill) -> AppResult<Bill> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .update_calls
            .push((selector.to_string(), bill.clone()));

        if let Some(status) = inner.update_failure {
            return Err(AppError::store_status(format!("bills/{}", selector), status));
        }

        let stored = inner
            .bills
            .iter_mut()
            .find(|b| b.id.as_deref() == Some(selector))
            .ok_or_else(|| AppError::store_status(format!("bills/{}", selector), 404))?;

        *stored = Bill {
            id: Some(selector.to_string()),
            ..bill.clone()
        };
        Ok(stored.clone())
    }

    async fn list(&self) -> AppResult<Vec<Bill>> {
        let mut inner = self.inner.lock().unwrap();
        inner.list_calls += 1;

        if let Some(status) = inner.list_failure {
            return Err(AppError::store_status("bills", status));
        }
        Ok(inner.bills.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Receipt;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_create_then_update_draft() {
        let store = MemoryBillStore::new();
        let receipt = Receipt::new("test.png", "image/png", b"dummy content".to_vec());

        let created = assert_ok!(
            store
                .create(ReceiptUpload {
                    receipt: &receipt,
                    email: "a@a",
                })
                .await
        );
        assert_eq!(created.bill_id(), Some("0001"));
        assert_eq!(created.file_url, "https://localhost:3456/images/test.png");

        let bill = Bill {
            name: "ticket".to_string(),
            amount: 50,
            ..store.bills()[0].clone()
        };
        let updated = assert_ok!(store.update("0001", &bill).await);
        assert_eq!(updated.name, "ticket");
        assert_eq!(store.bills().len(), 1);

        assert_err!(store.update("9999", &bill).await);
    }

    #[tokio::test]
    async fn test_list_failure_carries_status() {
        let store = MemoryBillStore::new();
        store.fail_list_with(500);
        let err = store.list().await.unwrap_err();
        assert_eq!(err.status_code(), Some(500));

        store.clear_failures();
        assert_ok!(store.list().await);
        assert_eq!(store.list_calls(), 2);
    }
}
