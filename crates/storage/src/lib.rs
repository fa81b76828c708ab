mod error;
mod store;

pub use error::StorageError;
pub use store::JsonStore;

pub type Result<T> = std::result::Result<T, StorageError>;
