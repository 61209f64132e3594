pub mod api;
pub mod config;
pub mod http;
pub mod loader;
pub mod router;
pub mod session;

pub use api::DashboardApi;
pub use http::ApiClient;
pub use loader::{load, DashboardData, LoadState, LoadStatus, SectionData};
pub use router::{View, ViewRouter};
pub use session::{Session, SessionPhase, Store};
