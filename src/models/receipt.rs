//! 票据文件

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{AppError, AppResult, FileError, ValidationError};

/// 允许上传的 MIME 类型
pub const ACCEPTED_MIME_TYPES: [&str; 3] = ["image/jpg", "image/jpeg", "image/png"];

/// 允许上传的扩展名
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// 用户选择的票据文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// 原始文件名
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Receipt {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// 从磁盘读取票据，MIME 类型按扩展名推断
    pub async fn from_path(path: &Path) -> AppResult<Self> {
        let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppError::File(FileError::NotFound {
                path: path.display().to_string(),
            }),
            _ => AppError::file_read_failed(path.display().to_string(), e),
        })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let content_type = guess_content_type(&file_name).to_string();

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    /// 扩展名（小写）
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
    }

    /// 检查 MIME 类型和扩展名是否都在允许列表中
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mime = self.content_type.to_ascii_lowercase();
        let mime_ok = ACCEPTED_MIME_TYPES.contains(&mime.as_str());
        let ext_ok = self
            .extension()
            .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()));

        if mime_ok && ext_ok {
            Ok(())
        } else {
            Err(ValidationError::UnsupportedFileType {
                file_name: self.file_name.clone(),
                content_type: self.content_type.clone(),
            })
        }
    }
}

fn guess_content_type(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    #[test]
    fn test_accepts_images_case_insensitively() {
        assert!(Receipt::new("test.png", "image/png", b"x".to_vec()).validate().is_ok());
        assert!(Receipt::new("ticket.JPG", "IMAGE/JPEG", b"x".to_vec()).validate().is_ok());
        assert!(Receipt::new("scan.jpeg", "image/jpg", b"x".to_vec()).validate().is_ok());
    }

    #[test]
    fn test_rejects_other_files() {
        let pdf = Receipt::new("facture.pdf", "application/pdf", b"%PDF".to_vec());
        assert!(matches!(
            pdf.validate(),
            Err(ValidationError::UnsupportedFileType { .. })
        ));

        // 扩展名与 MIME 不一致
        let renamed = Receipt::new("facture.pdf", "image/png", b"x".to_vec());
        assert!(renamed.validate().is_err());

        let no_ext = Receipt::new("facture", "image/png", b"x".to_vec());
        assert!(no_ext.validate().is_err());
    }

    #[tokio::test]
    async fn test_from_path_reads_receipt() {
        let dir = std::env::temp_dir().join(format!("billed-receipt-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("ticket.png");
        std::fs::write(&path, b"\x89PNG fake").unwrap();

        let receipt = assert_ok!(Receipt::from_path(&path).await);
        assert_eq!(receipt.file_name, "ticket.png");
        assert_eq!(receipt.content_type, "image/png");
        assert_eq!(receipt.bytes, b"\x89PNG fake".to_vec());
        assert!(receipt.validate().is_ok());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_from_path_missing_file_is_not_found() {
        let path = std::env::temp_dir()
            .join(format!("billed-missing-{}", std::process::id()))
            .join("absent.jpg");

        let result = Receipt::from_path(&path).await;
        assert!(matches!(
            result,
            Err(AppError::File(FileError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_guess_content_type() {
        assert_eq!(guess_content_type("a.PNG"), "image/png");
        assert_eq!(guess_content_type("a.jpg"), "image/jpeg");
        assert_eq!(guess_content_type("a.txt"), "application/octet-stream");
    }
}
