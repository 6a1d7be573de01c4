//! Error model shared by the faultline crates
//!
//! Errors advertise what they can tell a client through two optional
//! capabilities: [`AbortInfo`] (status, reason, metadata) and
//! [`DebugInfo`] (identifier, causes, fixes, links). The server layer turns
//! whatever a handler fails with into a response using only these.

#![allow(clippy::must_use_candidate)]

mod abort;
mod environment;
mod error;
mod opaque;

pub use abort::Abort;
pub use environment::{Environment, ParseEnvironmentError};
pub use error::{AbortInfo, DebugInfo, Error, ResponseError};
pub use opaque::Opaque;
