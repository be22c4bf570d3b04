use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 远程存储（bills 集合）错误
    Store(StoreError),
    /// 表单或文件校验错误
    Validation(ValidationError),
    /// 提交流程状态错误
    Workflow(WorkflowError),
    /// 会话错误
    Session(SessionError),
    /// 文件操作错误
    File(FileError),
    /// 配置错误
    Config(ConfigError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Store(e) => write!(f, "存储错误: {}", e),
            AppError::Validation(e) => write!(f, "校验错误: {}", e),
            AppError::Workflow(e) => write!(f, "流程错误: {}", e),
            AppError::Session(e) => write!(f, "会话错误: {}", e),
            AppError::File(e) => write!(f, "文件错误: {}", e),
            AppError::Config(e) => write!(f, "配置错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Store(e) => Some(e),
            AppError::Validation(e) => Some(e),
            AppError::Workflow(e) => Some(e),
            AppError::Session(e) => Some(e),
            AppError::File(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 远程存储错误
#[derive(Debug)]
pub enum StoreError {
    /// 服务端返回非 2xx 状态码
    Status { endpoint: String, status: u16 },
    /// 网络请求失败
    RequestFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 返回结果缺少必要字段
    EmptyResponse { endpoint: String },
    /// JSON 解析失败
    JsonParseFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl StoreError {
    /// HTTP 状态码（仅 Status 变体携带）
    pub fn status_code(&self) -> Option<u16> {
        match self {
            StoreError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Status { endpoint, status } => {
                write!(f, "Erreur {} ({})", status, endpoint)
            }
            StoreError::RequestFailed { endpoint, source } => {
                write!(f, "请求失败 ({}): {}", endpoint, source)
            }
            StoreError::EmptyResponse { endpoint } => {
                write!(f, "返回结果缺少必要字段: {}", endpoint)
            }
            StoreError::JsonParseFailed { source } => {
                write!(f, "JSON解析失败: {}", source)
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::RequestFailed { source, .. } | StoreError::JsonParseFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 校验错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// 文件类型不在允许列表中
    UnsupportedFileType {
        file_name: String,
        content_type: String,
    },
    /// 必填字段为空
    MissingField { field: &'static str },
    /// 金额不是整数
    InvalidAmount { value: String },
    /// 日期不是 YYYY-MM-DD
    InvalidDate { value: String },
    /// 未知的费用类型
    UnknownExpenseType { value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnsupportedFileType {
                file_name,
                content_type,
            } => write!(
                f,
                "不支持的文件类型: {} ({})，仅接受 jpg / jpeg / png",
                file_name, content_type
            ),
            ValidationError::MissingField { field } => write!(f, "必填字段为空: {}", field),
            ValidationError::InvalidAmount { value } => write!(f, "金额必须是整数: '{}'", value),
            ValidationError::InvalidDate { value } => write!(f, "日期格式无效: '{}'", value),
            ValidationError::UnknownExpenseType { value } => {
                write!(f, "未知的费用类型: {}", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// 提交流程错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    /// 草稿尚未上传完成，不能提交
    DraftNotReady { state: &'static str },
    /// 表单已经提交过
    AlreadySubmitted,
}

impl fmt::Display for WorkflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowError::DraftNotReady { state } => {
                write!(f, "草稿尚未就绪 (当前状态: {})，请先上传票据", state)
            }
            WorkflowError::AlreadySubmitted => write!(f, "该表单已经提交"),
        }
    }
}

impl std::error::Error for WorkflowError {}

/// 会话错误
#[derive(Debug)]
pub enum SessionError {
    /// 未登录
    NotLoggedIn,
    /// 会话数据损坏
    Corrupted {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotLoggedIn => write!(f, "用户未登录"),
            SessionError::Corrupted { source } => write!(f, "会话数据损坏: {}", source),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Corrupted { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            SessionError::NotLoggedIn => None,
        }
    }
}

/// 文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 文件不存在
    NotFound { path: String },
    /// 读取文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// TOML 解析失败
    TomlParseFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::NotFound { path } => write!(f, "文件不存在: {}", path),
            FileError::ReadFailed { path, source } => {
                write!(f, "读取文件失败 ({}): {}", path, source)
            }
            FileError::TomlParseFailed { path, source } => {
                write!(f, "TOML解析失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::ReadFailed { source, .. } | FileError::TomlParseFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            FileError::NotFound { .. } => None,
        }
    }
}

/// 配置错误
#[derive(Debug)]
pub enum ConfigError {
    /// 环境变量解析失败
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 必填配置为空
    Missing { var_name: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EnvVarParseFailed {
                var_name,
                value,
                expected_type,
            } => {
                write!(
                    f,
                    "环境变量 {} 解析失败: 值 '{}' 无法转换为 {}",
                    var_name, value, expected_type
                )
            }
            ConfigError::Missing { var_name } => write!(f, "配置项 {} 不能为空", var_name),
        }
    }
}

impl std::error::Error for ConfigError {}

// ========== 从常见错误类型转换 ==========

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<WorkflowError> for AppError {
    fn from(err: WorkflowError) -> Self {
        AppError::Workflow(err)
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        AppError::Session(err)
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Store(StoreError::JsonParseFailed {
            source: Box::new(err),
        })
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::File(FileError::TomlParseFailed {
            path: String::new(), // TOML错误通常不包含路径信息
            source: Box::new(err),
        })
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: String::new(),
            source: Box::new(err),
        })
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let endpoint = err.url().map(|u| u.to_string()).unwrap_or_default();
        match err.status() {
            Some(status) => AppError::Store(StoreError::Status {
                endpoint,
                status: status.as_u16(),
            }),
            None => AppError::Store(StoreError::RequestFailed {
                endpoint,
                source: Box::new(err),
            }),
        }
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建服务端状态码错误
    pub fn store_status(endpoint: impl Into<String>, status: u16) -> Self {
        AppError::Store(StoreError::Status {
            endpoint: endpoint.into(),
            status,
        })
    }

    /// 创建请求失败错误
    pub fn store_request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Store(StoreError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 取出存储错误携带的 HTTP 状态码
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::Store(e) => e.status_code(),
            _ => None,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
