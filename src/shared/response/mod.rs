pub mod json;
pub mod render;
pub mod table;

pub use json::JsonRenderer;
pub use render::{OutputFormat, Renderer};
pub use table::TableRenderer;
