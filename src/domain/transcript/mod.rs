pub mod encoding;
pub mod reader;

pub use encoding::{parse_encoding_list, TextEncoding, DEFAULT_ENCODINGS};
pub use reader::{ResilientTextReader, TextReadError, TextReader};
