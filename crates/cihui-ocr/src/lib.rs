mod decode;
mod lazy;
mod tesseract;

pub use decode::{decode_image, encode_png};
pub use lazy::LazyTesseract;
pub use tesseract::{TesseractEngine, parse_lines};
