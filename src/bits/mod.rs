pub mod reader;
pub mod writer;

pub use reader::FlagReader;
pub use writer::FlagWriter;
