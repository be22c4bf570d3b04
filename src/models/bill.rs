use serde::{Deserialize, Deserializer, Serialize};

/// 未填写或无法解析时的默认税率百分比
pub const DEFAULT_PCT: i64 = 20;

fn default_pct() -> i64 {
    DEFAULT_PCT
}

// 草稿只有票据信息，服务端对未填写的字段返回 null
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn null_as_default_pct<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(|pct| pct.unwrap_or(DEFAULT_PCT))
}

/// 报销单状态，由服务端管理；客户端创建和更新时总是写入 `pending`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }
}

/// 报销单（唯一持久化实体）
///
/// `id`、`file_url`、`file_name` 在票据被 `create` 接受之前都为空。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub vat: String,
    #[serde(default = "default_pct", deserialize_with = "null_as_default_pct")]
    pub pct: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub commentary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: BillStatus,
}

impl Default for Bill {
    fn default() -> Self {
        Self {
            id: None,
            email: String::new(),
            kind: String::new(),
            name: String::new(),
            amount: 0,
            date: String::new(),
            vat: String::new(),
            pct: DEFAULT_PCT,
            commentary: String::new(),
            file_url: None,
            file_name: None,
            status: BillStatus::Pending,
        }
    }
}

/// `create` 的返回结果
///
/// 后端以 `key` 作为草稿的正式标识，部分实现只返回 `id`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBill {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    pub file_url: String,
    #[serde(default)]
    pub file_name: Option<String>,
}

impl CreatedBill {
    pub fn bill_id(&self) -> Option<&str> {
        self.key.as_deref().or(self.id.as_deref())
    }
}
