pub mod error;
pub mod models;
pub mod property;

pub use error::*;
pub use models::*;
pub use property::*;
