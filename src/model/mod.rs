//! Data types shared by the loader, renderer and selection tracker

pub mod dtos;
pub mod structs;

pub use dtos::SelectedClass;
pub use structs::{decode_class_list, ClassRecord, DEFAULT_TIME, UNKNOWN_DAY};
