pub mod operations;

pub use operations::{file_exists, read_file_to_string, write_file_sync};
