//! Export of the normalized package and component tables.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{
    COMPONENTS_STEM, OutputOptions, PACKAGES_STEM, output_path, write_frame, write_outputs,
};
