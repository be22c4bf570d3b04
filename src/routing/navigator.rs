use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

use crate::routing::routes::Route;

/// 导航句柄
///
/// 控制器和页面通过它请求跳转，请求排队后由 [`crate::routing::Router`] 统一处理。
#[derive(Debug, Clone)]
pub struct Navigator {
    sender: UnboundedSender<Route>,
}

pub type NavigationReceiver = UnboundedReceiver<Route>;

impl Navigator {
    pub fn channel() -> (Self, NavigationReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    pub fn navigate(&self, route: Route) {
        debug!("请求跳转: {}", route);
        if self.sender.send(route).is_err() {
            warn!("路由已关闭，忽略跳转请求: {}", route);
        }
    }
}
