pub mod session_store;

pub use session_store::{MemorySessionStore, Session, SessionStore, TOKEN_KEY, USER_KEY};
