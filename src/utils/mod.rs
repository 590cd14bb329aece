pub mod file_magic;
pub mod filename;
pub mod parameter_error_handler;
pub mod password;

pub use file_magic::is_pdf;
pub use filename::secure_filename;
pub use parameter_error_handler::{json_error_handler, path_error_handler};
