pub mod models;
pub mod schema;
pub mod ops;
pub mod migrate;
mod conn;

pub use conn::{DbConn, Connection};
