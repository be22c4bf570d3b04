use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::new_bill_form::NewBillForm;

/// 待提交的报销草稿（TOML 文件）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftBill {
    /// 票据路径，相对路径按 TOML 文件所在目录解析
    pub receipt: String,
    #[serde(rename = "type", default = "default_type")]
    pub kind: String,
    pub name: String,
    pub date: String,
    pub amount: i64,
    #[serde(default)]
    pub vat: Option<String>,
    #[serde(default)]
    pub pct: Option<i64>,
    #[serde(default)]
    pub commentary: Option<String>,
    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<String>,
}

fn default_type() -> String {
    "Transports".to_string()
}

impl DraftBill {
    pub fn with_file_path(mut self, file_path: String) -> Self {
        self.file_path = Some(file_path);
        self
    }

    pub fn receipt_path(&self) -> PathBuf {
        let receipt = Path::new(&self.receipt);
        if receipt.is_absolute() {
            return receipt.to_path_buf();
        }
        match self.file_path.as_deref().and_then(|p| Path::new(p).parent()) {
            Some(dir) => dir.join(receipt),
            None => receipt.to_path_buf(),
        }
    }

    /// 转换成输入框里的原始值
    pub fn to_form(&self) -> NewBillForm {
        NewBillForm {
            expense_type: self.kind.clone(),
            name: self.name.clone(),
            date: self.date.clone(),
            amount: self.amount.to_string(),
            vat: self.vat.clone().unwrap_or_default(),
            pct: self.pct.map(|p| p.to_string()).unwrap_or_default(),
            commentary: self.commentary.clone().unwrap_or_default(),
        }
    }
}
