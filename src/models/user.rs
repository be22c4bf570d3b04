use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

/// 会话中保存的登录用户
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "type")]
    pub kind: UserType,
    #[serde(default)]
    pub email: String,
}

impl User {
    pub fn employee(email: impl Into<String>) -> Self {
        Self {
            kind: UserType::Employee,
            email: email.into(),
        }
    }
}
