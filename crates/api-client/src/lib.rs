pub mod client;
pub mod query_cache;

pub use client::PropertyServiceClient;
pub use query_cache::QueryCache;
