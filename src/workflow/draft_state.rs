//! 草稿状态
//!
//! 一个表单实例内的两阶段提交：
//! `Empty → Uploading → Uploaded → Submitting → Done`

use std::fmt::Display;

/// `create` 成功后服务端登记的草稿
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub bill_id: String,
    pub file_url: String,
    /// 用户选择的原始文件名，而不是从 URL 推出来的
    pub file_name: String,
}

impl Display for Draft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[草稿 ID#{} 文件#{}]", self.bill_id, self.file_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DraftState {
    #[default]
    Empty,
    Uploading,
    Uploaded(Draft),
    Submitting(Draft),
    Done,
}

impl DraftState {
    pub fn name(&self) -> &'static str {
        match self {
            DraftState::Empty => "Empty",
            DraftState::Uploading => "Uploading",
            DraftState::Uploaded(_) => "Uploaded",
            DraftState::Submitting(_) => "Submitting",
            DraftState::Done => "Done",
        }
    }

    /// 只有 `Uploaded` 状态可以提交
    pub fn ready_draft(&self) -> Option<&Draft> {
        match self {
            DraftState::Uploaded(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, DraftState::Submitting(_) | DraftState::Done)
    }
}
