/// 报销后端 REST 客户端
///
/// 封装 bills 集合的 create / update / list 调用
use crate::clients::bill_store::{BillStore, ReceiptUpload};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{Bill, CreatedBill};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

const BILLS: &str = "bills";

pub struct HttpBillStore {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBillStore {
    /// 创建新的客户端
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(&config.api_base_url, config.token().map(str::to_string))
    }

    pub fn with_base_url(base_url: &str, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// 发送请求，非 2xx 状态码转换成结构化错误
    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> AppResult<T> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| AppError::store_request_failed(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            debug!("请求 {} 返回状态码 {}", endpoint, status);
            return Err(AppError::store_status(endpoint, status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::store_request_failed(endpoint, e))?;

        debug!("请求 {} 返回: {}", endpoint, body);

        Ok(serde_json::from_str(&body)?)
    }
}

impl BillStore for HttpBillStore {
    async fn create(&self, upload: ReceiptUpload<'_>) -> AppResult<CreatedBill> {
        let endpoint = self.endpoint(BILLS);
        let receipt = upload.receipt;

        debug!(
            "上传票据: {} ({}, {} 字节)",
            receipt.file_name,
            receipt.content_type,
            receipt.bytes.len()
        );

        // multipart 的 Content-Type 由 reqwest 自动带上 boundary
        let file = Part::bytes(receipt.bytes.clone())
            .file_name(receipt.file_name.clone())
            .mime_str(&receipt.content_type)?;
        let form = Form::new()
            .part("file", file)
            .text("email", upload.email.to_string());

        let request = self.client.post(&endpoint).multipart(form);
        self.send(&endpoint, request).await
    }

    async fn update(&self, selector: &str, bill: &Bill) -> AppResult<Bill> {
        let endpoint = self.endpoint(&format!("{}/{}", BILLS, selector));

        debug!("更新报销单 Payload: {}", serde_json::to_string(bill)?);

        let request = self.client.patch(&endpoint).json(bill);
        self.send(&endpoint, request).await
    }

    async fn list(&self) -> AppResult<Vec<Bill>> {
        let endpoint = self.endpoint(BILLS);
        let request = self.client.get(&endpoint);
        self.send(&endpoint, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let store = HttpBillStore::with_base_url("http://localhost:5678/", None);
        assert_eq!(store.endpoint("bills"), "http://localhost:5678/bills");
        assert_eq!(store.endpoint("bills/42"), "http://localhost:5678/bills/42");
    }

    #[test]
    fn test_new_reads_token_from_config() {
        let config = Config {
            api_token: "  ".to_string(),
            ..Config::default()
        };
        assert!(HttpBillStore::new(&config).token.is_none());

        let config = Config {
            api_token: "abc".to_string(),
            ..Config::default()
        };
        assert_eq!(HttpBillStore::new(&config).token.as_deref(), Some("abc"));
    }
}
