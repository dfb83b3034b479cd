pub mod layout;
pub mod reader;
pub mod table;

pub use layout::{Field, IntWidth, RecordLayout};
pub use reader::RecordReader;
pub use table::FormatTable;
