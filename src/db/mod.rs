//! Database layer: pool, schema bootstrap and repositories for PostgreSQL.

mod pool;
mod repositories;
mod schema;

pub use pool::{create_pool, database_name, ensure_database, DbPool};
pub use repositories::*;
pub use schema::init_schema;
