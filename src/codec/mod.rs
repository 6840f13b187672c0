pub mod png;

pub use self::png::{decode_png, encode_png};
