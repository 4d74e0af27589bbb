//! Web layer for the pollen forecast front end.
//!
//! Serves the index, region and postal-code pages plus static assets.

mod error;
mod routes;
mod state;
pub mod templates;
pub mod views;

pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
