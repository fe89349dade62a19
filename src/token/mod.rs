// Internal modules
mod decoded;
mod segments;

// Public API exports
pub use decoded::DecodedToken;
pub use segments::TokenSegments;

pub(crate) use decoded::decode_part;
