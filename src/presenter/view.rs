use std::fmt::Display;

use crate::presenter::bills_view::BillsView;
use crate::presenter::error_page::ErrorPage;

/// 当前显示的页面
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Login,
    Bills(BillsView),
    NewBill,
    Error(ErrorPage),
}

impl Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            View::Login => writeln!(f, "Administration / Employé : connexion"),
            View::Bills(bills) => write!(f, "{}", bills),
            View::NewBill => writeln!(f, "Envoyer une note de frais"),
            View::Error(page) => write!(f, "{}", page),
        }
    }
}
