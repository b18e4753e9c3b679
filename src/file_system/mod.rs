pub mod entry;
pub mod read;
pub mod size;
