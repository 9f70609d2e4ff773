pub mod model;
pub mod session;
pub mod store;

pub use model::{Book, Journal, JournalError, Note};
pub use session::{Session, SessionError};
pub use store::{JournalStore, StoreError};
