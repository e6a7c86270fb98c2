/// All logic for converting the plain-text instance format into an [`Instance`](crate::entities::Instance)
pub mod parse;

#[doc(inline)]
pub use parse::{ParseError, parse_instance};
