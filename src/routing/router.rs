//! 路由分发
//!
//! 同一时刻只有一个页面处于激活状态，侧边栏最多高亮一个图标。

use std::sync::Arc;

use tracing::{info, warn};

use crate::clients::BillStore;
use crate::error::AppResult;
use crate::infrastructure::{Session, SessionStore};
use crate::presenter::{BillsView, ErrorPage, View};
use crate::routing::navigator::{NavigationReceiver, Navigator};
use crate::routing::routes::{NavIcon, Route};
use crate::workflow::NewBillFlow;

/// 一次分发的结果
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub route: Route,
    pub active_icon: Option<NavIcon>,
    pub view: View,
}

pub struct Router<S: BillStore> {
    store: Arc<S>,
    session_store: Arc<dyn SessionStore>,
    navigator: Navigator,
    receiver: NavigationReceiver,
    current: Option<Rendered>,
}

impl<S: BillStore> Router<S> {
    pub fn new(store: Arc<S>, session_store: Arc<dyn SessionStore>) -> Self {
        let (navigator, receiver) = Navigator::channel();
        Self {
            store,
            session_store,
            navigator,
            receiver,
            current: None,
        }
    }

    /// 交给页面和控制器使用的导航句柄
    pub fn navigator(&self) -> Navigator {
        self.navigator.clone()
    }

    pub fn current(&self) -> Option<&Rendered> {
        self.current.as_ref()
    }

    pub fn active_icon(&self) -> Option<NavIcon> {
        self.current.as_ref().and_then(|r| r.active_icon)
    }

    pub async fn navigate(&mut self, route: Route) -> &Rendered {
        let rendered = self.render(route).await;
        info!("🧭 当前页面: {}", rendered.route);
        &*self.current.insert(rendered)
    }

    pub async fn navigate_path(&mut self, path: &str) -> &Rendered {
        self.navigate(Route::from_path(path)).await
    }

    /// 按顺序处理排队中的跳转请求，没有请求时返回 `None`
    pub async fn process_pending(&mut self) -> Option<&Rendered> {
        let mut handled = false;
        while let Ok(route) = self.receiver.try_recv() {
            let rendered = self.render(route).await;
            info!("🧭 当前页面: {}", rendered.route);
            self.current = Some(rendered);
            handled = true;
        }
        if handled {
            self.current.as_ref()
        } else {
            None
        }
    }

    /// 为新建页面创建一个表单实例
    pub fn new_bill_flow(&self) -> AppResult<NewBillFlow<S>> {
        let session = Session::load(self.session_store.as_ref())?;
        Ok(NewBillFlow::new(self.store.clone(), session, self.navigator()))
    }

    /// 清空会话并回到登录页
    pub async fn logout(&mut self) -> &Rendered {
        self.session_store.clear();
        info!("👋 已退出登录");
        self.navigate(Route::Login).await
    }

    async fn render(&self, route: Route) -> Rendered {
        let route = match (route, Session::load(self.session_store.as_ref())) {
            (Route::Login, _) => Route::Login,
            (route, Ok(_)) => route,
            (route, Err(e)) => {
                warn!("⚠️ 无法进入 {}: {}，回到登录页", route, e);
                Route::Login
            }
        };

        let view = match route {
            Route::Login => View::Login,
            Route::NewBill => View::NewBill,
            Route::Bills => match self.store.list().await {
                Ok(bills) => View::Bills(BillsView::from_bills(bills)),
                Err(e) => {
                    warn!("⚠️ 加载报销单列表失败: {}", e);
                    View::Error(ErrorPage::from_error(&e))
                }
            },
        };

        Rendered {
            route,
            active_icon: route.active_icon(),
            view,
        }
    }
}
