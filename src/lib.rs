//! Asserts RBAC decisions of a live cluster through `SubjectAccessReview`s.
//!
//! The client is built once by the caller and handed to a [`check::Checker`]
//! which runs each [`types::AccessCheckCase`] in order.

pub mod cases;
pub mod check;
pub mod client;
pub mod config;
pub mod constants;
pub mod formatter;
pub mod types;
