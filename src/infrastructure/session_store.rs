//! 会话存储 - 基础设施层
//!
//! 同步的字符串键值存储，`"user"` 键保存 JSON 编码的登录用户，
//! `"jwt"` 键保存可选的 token。控制器不直接读取它，而是在构造时拿到 [`Session`]。

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{AppResult, SessionError};
use crate::models::User;

pub const USER_KEY: &str = "user";
pub const TOKEN_KEY: &str = "jwt";

/// 同步键值存储
pub trait SessionStore: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: String);
    fn remove_item(&self, key: &str);
    fn clear(&self);
}

/// 进程内会话存储
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().unwrap().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: String) {
        self.items.lock().unwrap().insert(key.to_string(), value);
    }

    fn remove_item(&self, key: &str) {
        self.items.lock().unwrap().remove(key);
    }

    fn clear(&self) {
        self.items.lock().unwrap().clear();
    }
}

/// 当前登录用户的显式上下文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub token: Option<String>,
}

impl Session {
    /// 从存储中读取会话
    pub fn load(store: &dyn SessionStore) -> AppResult<Self> {
        let raw = store.get_item(USER_KEY).ok_or(SessionError::NotLoggedIn)?;
        let user: User = serde_json::from_str(&raw).map_err(|e| SessionError::Corrupted {
            source: Box::new(e),
        })?;
        Ok(Self {
            user,
            token: store.get_item(TOKEN_KEY),
        })
    }

    /// 写入会话
    pub fn login(store: &dyn SessionStore, user: User, token: Option<String>) -> AppResult<Self> {
        store.set_item(USER_KEY, serde_json::to_string(&user)?);
        match &token {
            Some(t) => store.set_item(TOKEN_KEY, t.clone()),
            None => store.remove_item(TOKEN_KEY),
        }
        Ok(Self { user, token })
    }

    pub fn email(&self) -> &str {
        &self.user.email
    }
}
