use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info, warn};

use crate::clients::{BillStore, HttpBillStore};
use crate::config::Config;
use crate::infrastructure::{MemorySessionStore, Session, SessionStore};
use crate::models::{load_all_drafts, DraftBill, User};
use crate::orchestrator::draft_processor::process_draft;
use crate::routing::{Route, Router};
use crate::utils::logging::{
    append_log_lines, claim_label, init_log_file, log_drafts_loaded, log_startup,
};

/// 单张报销单的提交结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimOutcome {
    pub name: String,
    pub date: String,
    pub submitted: bool,
}

/// 处理统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubmissionStats {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
    /// 按处理顺序
    pub outcomes: Vec<ClaimOutcome>,
}

impl SubmissionStats {
    fn record(&mut self, draft: &DraftBill, submitted: bool) {
        if submitted {
            self.success += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(ClaimOutcome {
            name: claim_label(&draft.name, 40),
            date: draft.date.clone(),
            submitted,
        });
    }

    /// 每张报销单一行，最后一行为汇总
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .outcomes
            .iter()
            .map(|o| {
                let mark = if o.submitted { "✅ 已提交" } else { "❌ 未提交" };
                format!("{} | {} | {}", mark, o.date, o.name)
            })
            .collect();
        lines.push(format!(
            "📊 报销单 {} 份：已提交 {}，未提交 {}",
            self.total, self.success, self.failed
        ));
        lines
    }

    /// 输出到控制台并追加到提交记录
    async fn report(&self, log_file_path: &str) -> Result<()> {
        let lines = self.summary_lines();
        info!("\n{}", "=".repeat(60));
        for line in &lines {
            info!("{}", line);
        }
        info!("{}", "=".repeat(60));
        append_log_lines(log_file_path, &lines).await?;
        info!("📝 提交记录已保存至: {}", log_file_path);
        Ok(())
    }
}

/// 应用主结构
pub struct App<S: BillStore> {
    config: Config,
    router: Router<S>,
}

impl App<HttpBillStore> {
    /// 使用 HTTP 后端初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        let store = HttpBillStore::new(&config);
        Self::with_store(config, store)
    }
}

impl<S: BillStore> App<S> {
    /// 使用任意存储初始化应用，并以配置中的用户登录
    pub fn with_store(config: Config, store: S) -> Result<Self> {
        config.validate()?;

        init_log_file(
            &config.output_log_file,
            &config.api_base_url,
            &config.user_email,
        )?;
        log_startup(&config.api_base_url, &config.user_email);

        let sessions: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let user = User {
            kind: config.user_type()?,
            email: config.user_email.clone(),
        };
        Session::login(sessions.as_ref(), user, config.token().map(str::to_string))?;

        let router = Router::new(Arc::new(store), sessions);

        Ok(Self { config, router })
    }

    pub fn router(&self) -> &Router<S> {
        &self.router
    }

    /// 运行应用主逻辑
    pub async fn run(&mut self) -> Result<SubmissionStats> {
        self.router.navigate(Route::Bills).await;

        let drafts = load_drafts(&self.config).await?;
        let mut stats = SubmissionStats {
            total: drafts.len(),
            ..Default::default()
        };

        if drafts.is_empty() {
            warn!("⚠️ 没有找到待提交的报销草稿");
        } else {
            log_drafts_loaded(drafts.len());
        }

        for (idx, draft) in drafts.iter().enumerate() {
            let draft_index = idx + 1;

            self.router.navigate(Route::NewBill).await;
            let mut flow = self.router.new_bill_flow()?;

            let submitted =
                match process_draft(&mut flow, draft, draft_index, self.config.verbose_logging)
                    .await
                {
                    Ok(submitted) => submitted,
                    Err(e) => {
                        error!("[草稿 {}] ❌ 处理过程中发生错误: {:#}", draft_index, e);
                        false
                    }
                };
            stats.record(draft, submitted);

            // 提交成功时流程会请求跳转到列表页；失败时手动返回
            if self.router.process_pending().await.is_none() {
                self.router.navigate(Route::Bills).await;
            }
        }

        if let Some(rendered) = self.router.current() {
            for line in rendered.view.to_string().lines() {
                info!("{}", line);
            }
        }

        stats.report(&self.config.output_log_file).await?;

        Ok(stats)
    }
}

/// 加载草稿；目录不存在时视为没有草稿
async fn load_drafts(config: &Config) -> Result<Vec<DraftBill>> {
    if !tokio::fs::try_exists(&config.drafts_folder).await.unwrap_or(false) {
        warn!("⚠️ 草稿目录不存在: {}", config.drafts_folder);
        return Ok(Vec::new());
    }
    info!("\n📁 正在扫描待提交的报销草稿...");
    load_all_drafts(&config.drafts_folder).await
}
