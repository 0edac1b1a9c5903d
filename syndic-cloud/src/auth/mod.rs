//! Authentication middleware and actor identity

pub mod actor_auth;

pub use actor_auth::{Actor, ActorRole};
