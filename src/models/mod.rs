pub mod bill;
pub mod draft;
pub mod loaders;
pub mod new_bill_form;
pub mod receipt;
pub mod user;

pub use bill::{Bill, BillStatus, CreatedBill, DEFAULT_PCT};
pub use draft::DraftBill;
pub use loaders::{load_all_drafts, load_toml_to_draft};
pub use new_bill_form::{NewBillForm, EXPENSE_TYPES};
pub use receipt::Receipt;
pub use user::{User, UserType};
