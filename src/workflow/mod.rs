pub mod draft_state;
pub mod new_bill_flow;

pub use draft_state::{Draft, DraftState};
pub use new_bill_flow::NewBillFlow;
