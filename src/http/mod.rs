//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, request log line)
//!     → handlers.rs (/, /me, /health, fallback)
//!     → response.rs (typed JSON bodies, timestamps)
//!     → error.rs (500 bodies for handler errors and panics)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use error::AppError;
pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use response::{ProfileResponse, UserProfile};
pub use server::{AppState, HttpServer};
