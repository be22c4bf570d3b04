//! 新建报销单表单
//!
//! 字段保持为字符串，与输入框中拿到的原始值一致；数值转换在提交时进行。

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::models::bill::DEFAULT_PCT;

/// 费用类型下拉框的选项
pub const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBillForm {
    pub expense_type: String,
    pub name: String,
    pub date: String,
    pub amount: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

impl Default for NewBillForm {
    fn default() -> Self {
        Self {
            expense_type: EXPENSE_TYPES[0].to_string(),
            name: String::new(),
            date: String::new(),
            amount: String::new(),
            vat: String::new(),
            pct: String::new(),
            commentary: String::new(),
        }
    }
}

impl NewBillForm {
    /// 必填字段与格式检查，不涉及票据文件
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !EXPENSE_TYPES.contains(&self.expense_type.as_str()) {
            return Err(ValidationError::UnknownExpenseType {
                value: self.expense_type.clone(),
            });
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "name" });
        }
        if self.date.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "date" });
        }
        if NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").is_err() {
            return Err(ValidationError::InvalidDate {
                value: self.date.clone(),
            });
        }
        if self.amount.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "amount" });
        }
        self.parsed_amount()?;
        Ok(())
    }

    pub fn parsed_amount(&self) -> Result<i64, ValidationError> {
        self.amount
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidAmount {
                value: self.amount.clone(),
            })
    }

    /// 空值或非数字时回落到 20
    pub fn parsed_pct(&self) -> i64 {
        self.pct.trim().parse::<i64>().unwrap_or(DEFAULT_PCT)
    }
}
