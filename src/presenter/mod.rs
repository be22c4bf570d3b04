//! 展示层
//!
//! 纯函数：排序、日期 / 状态格式化、错误页映射。不发起任何请求。

pub mod bills_view;
pub mod error_page;
pub mod view;

pub use bills_view::{
    format_date, format_status, is_iso_date, sort_anti_chrono, status_icon, BillRow, BillsView,
    StatusIcon,
};
pub use error_page::ErrorPage;
pub use view::View;
