//! 路由表

use std::fmt::Display;

/// 逻辑路径
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Bills,
    NewBill,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
        }
    }

    /// 未知路径回到登录页
    pub fn from_path(path: &str) -> Self {
        match path {
            "#employee/bills" => Route::Bills,
            "#employee/bill/new" => Route::NewBill,
            _ => Route::Login,
        }
    }

    /// 侧边栏中需要高亮的图标，登录页没有侧边栏
    pub fn active_icon(&self) -> Option<NavIcon> {
        match self {
            Route::Login => None,
            Route::Bills => Some(NavIcon::Window),
            Route::NewBill => Some(NavIcon::Mail),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// 侧边栏图标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Window,
    Mail,
}

impl NavIcon {
    pub fn test_id(&self) -> &'static str {
        match self {
            NavIcon::Window => "icon-window",
            NavIcon::Mail => "icon-mail",
        }
    }
}
