//! `planner-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod event;
pub mod id;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use event::{Event, EventDraft, EventPatch};
pub use id::{EventId, UserId};
pub use user::{validate_email, NewUser, User};
