//! I/O collaborators: resonator import and response export.

pub mod csv;

pub use self::csv::{import_csv, write_response_csv};
