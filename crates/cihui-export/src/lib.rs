mod docx;
mod error;
mod json;
mod preview;
mod template;

pub use docx::DocxExporter;
pub use error::ExportError;
pub use json::{save_json, write_json};
pub use preview::{display_width, render_table};
pub use template::HandoutTemplate;
