/// Data model for the sorter: categories and listed file entries.
pub mod category;
pub mod file_entry;

pub use category::{categorise_extension, Category};
pub use file_entry::FileEntry;
