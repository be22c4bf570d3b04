pub mod navigator;
pub mod router;
pub mod routes;

pub use navigator::{NavigationReceiver, Navigator};
pub use router::{Rendered, Router};
pub use routes::{NavIcon, Route};
