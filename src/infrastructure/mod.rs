//! Storage backends implementing [`crate::domain::ports::AccountStore`].

pub mod in_memory;
pub mod json_file;
