pub mod backend;
pub mod compare;
pub mod diff;
pub mod discover;
pub mod engine;
pub mod error;
pub mod layout;
pub mod normalize;
pub mod report;
pub mod types;

pub use crate::engine::run;
pub use crate::layout::Layout;
