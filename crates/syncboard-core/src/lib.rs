pub mod config;
pub mod error;
pub mod pagination;
pub mod result;
pub mod telemetry;

pub use config::SyncConfig;
pub use error::BoardError;
pub use pagination::{PageRequest, Paginated};
pub use result::BoardResult;
pub use telemetry::init_tracing;
