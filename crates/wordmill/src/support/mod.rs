//! # Support Utilities

mod artifacts;
mod path_utils;

#[doc(inline)]
pub use artifacts::{PARTIAL_EXTENSION, StepOutcome, write_artifact};
#[doc(inline)]
pub use path_utils::append_extension;
