//! 报销单列表
//!
//! 排序在格式化之前进行：原始日期是 ISO-8601 字符串，按字典序倒序即为倒序时间。

use std::fmt::Display;
use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::models::{Bill, BillStatus};
use crate::routing::{Navigator, Route};

/// 法语月份缩写（取前三个字母）
const MONTHS_FR: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

fn iso_date_regex() -> &'static Regex {
    static ISO_DATE: OnceLock<Regex> = OnceLock::new();
    ISO_DATE.get_or_init(|| {
        Regex::new(r"^(19|20)\d\d[- /.](0[1-9]|1[012])[- /.](0[1-9]|[12][0-9]|3[01])$")
            .expect("static regex")
    })
}

pub fn is_iso_date(raw: &str) -> bool {
    iso_date_regex().is_match(raw)
}

/// `2004-04-04` → `4 Avr. 04`；无法识别的日期原样返回
pub fn format_date(raw: &str) -> String {
    if !is_iso_date(raw) {
        return raw.to_string();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => format!(
            "{} {}. {:02}",
            date.day(),
            MONTHS_FR[date.month0() as usize],
            date.year() % 100
        ),
        Err(_) => raw.to_string(),
    }
}

pub fn format_status(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => "En attente",
        BillStatus::Accepted => "Accepté",
        BillStatus::Refused => "Refusé",
    }
}

/// 状态标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusIcon {
    Hourglass,
    Check,
    Cross,
}

impl StatusIcon {
    pub fn marker(&self) -> &'static str {
        match self {
            StatusIcon::Hourglass => "⏳",
            StatusIcon::Check => "✅",
            StatusIcon::Cross => "❌",
        }
    }
}

pub fn status_icon(status: BillStatus) -> StatusIcon {
    match status {
        BillStatus::Pending => StatusIcon::Hourglass,
        BillStatus::Accepted => StatusIcon::Check,
        BillStatus::Refused => StatusIcon::Cross,
    }
}

/// 按日期倒序（最新在前），日期相同时保持原顺序
pub fn sort_anti_chrono(bills: &mut [Bill]) {
    bills.sort_by(|a, b| b.date.cmp(&a.date));
}

#[derive(Debug, Clone, PartialEq)]
pub struct BillRow {
    pub id: Option<String>,
    pub kind: String,
    pub name: String,
    /// 原始日期，用于排序
    pub date: String,
    pub formatted_date: String,
    pub amount: String,
    pub status: BillStatus,
    pub status_label: &'static str,
    pub icon: StatusIcon,
    pub file_url: Option<String>,
}

impl From<Bill> for BillRow {
    fn from(bill: Bill) -> Self {
        Self {
            formatted_date: format_date(&bill.date),
            amount: format!("{} €", bill.amount),
            status_label: format_status(bill.status),
            icon: status_icon(bill.status),
            status: bill.status,
            id: bill.id,
            kind: bill.kind,
            name: bill.name,
            date: bill.date,
            file_url: bill.file_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BillsView {
    pub rows: Vec<BillRow>,
}

impl BillsView {
    pub fn from_bills(mut bills: Vec<Bill>) -> Self {
        sort_anti_chrono(&mut bills);
        Self {
            rows: bills.into_iter().map(BillRow::from).collect(),
        }
    }

    /// 各行的原始日期，按显示顺序
    pub fn dates(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.date.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 「Nouvelle note de frais」按钮：跳转到新建页面
    pub fn on_new_bill(&self, navigator: &Navigator) {
        navigator.navigate(Route::NewBill);
    }
}

impl Display for BillsView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Mes notes de frais")?;
        if self.rows.is_empty() {
            return writeln!(f, "(aucune note de frais)");
        }
        for row in &self.rows {
            writeln!(
                f,
                "{} | {} | {} | {} | {} {}",
                row.kind,
                row.name,
                row.formatted_date,
                row.amount,
                row.icon.marker(),
                row.status_label
            )?;
        }
        Ok(())
    }
}
