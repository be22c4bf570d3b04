use crate::error::ConfigError;
use crate::models::UserType;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 后端 API 根地址
    pub api_base_url: String,
    /// 登录用户邮箱
    pub user_email: String,
    /// 登录用户类型（Employee / Admin）
    pub user_type: String,
    /// Bearer token，为空时不发送 Authorization 头
    pub api_token: String,
    /// 报销草稿 TOML 文件存放目录
    pub drafts_folder: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5678".to_string(),
            user_email: "employee@test.tld".to_string(),
            user_type: "Employee".to_string(),
            api_token: String::new(),
            drafts_folder: "drafts".to_string(),
            verbose_logging: false,
            output_log_file: "bills.log".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("API_BASE_URL").unwrap_or(default.api_base_url),
            user_email: std::env::var("USER_EMAIL").unwrap_or(default.user_email),
            user_type: std::env::var("USER_TYPE").unwrap_or(default.user_type),
            api_token: std::env::var("API_TOKEN").unwrap_or(default.api_token),
            drafts_folder: std::env::var("DRAFTS_FOLDER").unwrap_or(default.drafts_folder),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }

    /// 解析用户类型
    pub fn user_type(&self) -> Result<UserType, ConfigError> {
        match self.user_type.as_str() {
            "Employee" => Ok(UserType::Employee),
            "Admin" => Ok(UserType::Admin),
            other => Err(ConfigError::EnvVarParseFailed {
                var_name: "USER_TYPE".to_string(),
                value: other.to_string(),
                expected_type: "Employee | Admin".to_string(),
            }),
        }
    }

    /// 检查必填项
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::Missing {
                var_name: "API_BASE_URL".to_string(),
            });
        }
        if self.user_email.trim().is_empty() {
            return Err(ConfigError::Missing {
                var_name: "USER_EMAIL".to_string(),
            });
        }
        self.user_type()?;
        Ok(())
    }

    pub fn token(&self) -> Option<&str> {
        let token = self.api_token.trim();
        (!token.is_empty()).then_some(token)
    }
}
