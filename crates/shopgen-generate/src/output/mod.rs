pub mod csv;

pub use self::csv::{write_dataset, write_records};
