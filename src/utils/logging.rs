//! 日志工具模块
//!
//! 控制台日志之外，每次批量提交都会写一份纯文本记录，逐行列出每张报销单的结果。

use anyhow::{Context, Result};
use tokio::io::AsyncWriteExt;
use tracing::info;

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// 新建提交记录文件，写入本次运行的后端地址和提交人
pub fn init_log_file(log_file_path: &str, api_base_url: &str, email: &str) -> Result<()> {
    let header = format!(
        "{rule}\n报销单提交日志 - {}\n后端: {}\n提交人: {}\n{rule}\n\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        api_base_url,
        email,
        rule = rule(),
    );
    std::fs::write(log_file_path, header)
        .with_context(|| format!("无法创建日志文件: {}", log_file_path))?;
    Ok(())
}

/// 向提交记录追加若干行
pub async fn append_log_lines(log_file_path: &str, lines: &[String]) -> Result<()> {
    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .await
        .with_context(|| format!("无法打开日志文件: {}", log_file_path))?;
    for line in lines {
        file.write_all(line.as_bytes()).await?;
        file.write_all(b"\n").await?;
    }
    file.flush().await?;
    Ok(())
}

pub fn log_startup(api_base_url: &str, email: &str) {
    info!("{}", rule());
    info!("🚀 程序启动 - 报销单批量提交");
    info!("🌐 后端地址: {}", api_base_url);
    info!("👤 当前用户: {}", email);
    info!("{}", rule());
}

pub fn log_drafts_loaded(total: usize) {
    info!("✓ 找到 {} 份待提交的报销草稿", total);
    info!("💡 逐份提交：上传票据 → 填写表单 → 提交\n");
}

/// 日志中显示的报销单名称：去掉首尾空白，超过 `max_chars` 个字符时截断
pub fn claim_label(name: &str, max_chars: usize) -> String {
    let name = name.trim();
    if name.is_empty() {
        return "(sans titre)".to_string();
    }
    match name.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", &name[..cut]),
        None => name.to_string(),
    }
}
