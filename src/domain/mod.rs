//! Domain layer - lecture lifecycle model.

pub mod foundation;
pub mod lecture;
