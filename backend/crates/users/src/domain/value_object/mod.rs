//! Value Object Module

pub mod email;
pub mod lesson_completion;
pub mod timestamp;
pub mod user_id;
