pub mod destinations;
pub mod input;
pub mod output;

pub use destinations::{
    destination_for, FileDestination, MemoryDestination, OutputDestination, StdoutDestination,
};
pub use input::read_package_list;
pub use output::{create_writer, GoOptions, GoWriter, JsonWriter, OutputFormat, TableWriter};
