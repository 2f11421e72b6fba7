pub mod db;

pub use db::{Database, MEMORY_STORE_URL, connect_store, connect_to_mongo};
