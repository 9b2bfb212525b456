mod file_finder;

pub use file_finder::{load_layout, LayoutDirectory};
