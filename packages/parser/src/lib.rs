pub mod error;
pub mod modifier;

#[cfg(test)]
mod tests_comprehensive;

pub use error::{ParseError, ParseResult};
pub use modifier::{parse_class_token, Media, ParsedModifiers, Pseudo};
