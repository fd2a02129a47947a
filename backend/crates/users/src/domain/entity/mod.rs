//! Entity Module

pub mod user;
pub mod user_patch;
