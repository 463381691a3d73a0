//! Utility helpers

pub mod path;
pub mod path_list;
