pub mod errors;
pub mod router;
mod server;

pub use errors::{ApiError, ApiResult};
pub use router::routes;
pub use server::{serve, serve_with_listener};
