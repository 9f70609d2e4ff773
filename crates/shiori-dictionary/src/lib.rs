pub mod client;
pub mod types;

pub use client::{DictionaryClient, LookupError};
pub use types::{Definition, Meaning};
