//! Delegation engine: records employees, tools and tasks for one session
//! and proposes who should take each delegatable task.

pub mod candidate;
pub mod command;
pub mod config;
pub mod delegation;
pub mod error;
pub mod export;
pub mod matcher;
pub mod session;
pub mod similarity;
pub mod snapshot;
pub mod store;
pub mod task;
pub mod types;
