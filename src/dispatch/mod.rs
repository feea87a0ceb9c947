//! Request dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! method + body bytes
//!     → envelope.rs (classify: Resource | Listener | Widget | Manifest,
//!       or no dispatch at all for non-POST)
//!     → handler.rs (exactly one handler map entry invoked per request)
//!     → response (JSON envelope, empty body, file bytes, or plain-text
//!       error with 404/500)
//! ```

pub mod envelope;
pub mod handler;

pub use envelope::RequestEnvelope;
pub use handler::{dispatch, DispatchError};
