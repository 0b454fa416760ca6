//! HTTP surface for the Marquee booking directory.
//!
//! A stateless axum app over the repository layer: listing and search
//! pages serve the view models from `marquee_core`, mutations validate
//! their form payloads before anything touches storage, and every
//! response carries the flash notification the rendering collaborator
//! shows. Each request checks one pooled connection out for its database
//! work; blocking Diesel calls run on the blocking thread pool.

mod artists;
mod config;
mod error;
mod flash;
mod routes;
mod shows;
mod state;
mod venues;

pub use config::ServerConfig;
pub use error::ApiError;
pub use flash::{Flash, FlashCategory};
pub use routes::create_router;
pub use state::AppState;
