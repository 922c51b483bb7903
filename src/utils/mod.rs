pub mod error;
pub mod fs;
pub mod validation;

pub use error::{ConvertError, ConvertResult};
pub use fs::{display_name, ensure_output_directory, file_exists, get_extension};
pub use validation::{parse_dimension, validate_dimensions};
