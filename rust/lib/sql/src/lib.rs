pub mod builder;
pub mod error;
pub mod sqlite;
pub mod traits;

pub use builder::{Direction, SelectBuilder, Statement};
pub use error::SQLError;
pub use sqlite::SqliteStore;
pub use traits::{Row, SQLStore, Value};
