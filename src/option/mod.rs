//! Option table model
//!
//! Descriptors, flags, and the validated table the scanner reads.
//! Tables are validated on construction (fail-fast pattern).

pub mod descriptor;
pub mod flags;
pub mod table;

pub use descriptor::{ArgumentKind, OptionDescriptor};
pub use flags::OptionFlags;
pub use table::OptionTable;
