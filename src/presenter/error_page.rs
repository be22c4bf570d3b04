use std::fmt::Display;

use crate::error::AppError;

const GENERIC_MESSAGE: &str = "Erreur : impossible de charger les notes de frais";

/// `list()` 失败时显示的错误页
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPage {
    pub status: Option<u16>,
    pub message: String,
}

impl ErrorPage {
    /// 404 / 500 显示对应的状态码，其余错误显示通用提示
    pub fn from_error(err: &AppError) -> Self {
        let status = err.status_code();
        let message = match status {
            Some(code @ (404 | 500)) => format!("Erreur {}", code),
            _ => GENERIC_MESSAGE.to_string(),
        };
        Self { status, message }
    }
}

impl Display for ErrorPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Erreur")?;
        writeln!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SessionError;

    #[test]
    fn test_known_statuses_are_named() {
        let page = ErrorPage::from_error(&AppError::store_status("bills", 404));
        assert!(page.to_string().contains("Erreur 404"));

        let page = ErrorPage::from_error(&AppError::store_status("bills", 500));
        assert!(page.to_string().contains("Erreur 500"));
        assert_eq!(page.status, Some(500));
    }

    #[test]
    fn test_other_failures_are_generic() {
        let page = ErrorPage::from_error(&AppError::store_status("bills", 403));
        assert_eq!(page.message, GENERIC_MESSAGE);
        assert!(!page.to_string().contains("403"));

        let page = ErrorPage::from_error(&AppError::Session(SessionError::NotLoggedIn));
        assert_eq!(page.status, None);
        assert_eq!(page.message, GENERIC_MESSAGE);
    }
}
