pub mod memory;
pub mod pool;
pub mod results;
pub mod store;

pub use store::{NewResult, ResultStore, StoredResult};
