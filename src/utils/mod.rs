pub mod codec;

pub use codec::{Alphabet, decode_segment, encode_segment};
