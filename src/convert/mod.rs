pub mod classifier;
pub mod converter;
pub mod document;
pub mod error;
pub mod resolver;


pub use converter::{Converter, ParsedAssignment};
pub use document::{convert_document, ConversionContext};
pub use error::ConvertError;
