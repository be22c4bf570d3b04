pub mod bill_store;
pub mod http_bill_store;
pub mod memory_bill_store;

pub use bill_store::{BillStore, ReceiptUpload};
pub use http_bill_store::HttpBillStore;
pub use memory_bill_store::{CreateCall, MemoryBillStore};
