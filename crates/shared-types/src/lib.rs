pub mod access;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod requests;
pub mod section;

pub use access::*;
pub use config::*;
pub use error::*;
pub use filter::*;
pub use models::*;
pub use requests::*;
pub use section::*;
