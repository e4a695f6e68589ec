pub mod text;

pub use text::{to_text, to_text_file};
