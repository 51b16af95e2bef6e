pub mod alphabet;
pub mod classify;
pub mod codec;
pub mod error;
pub mod keyboard;

pub use codec::{join, join_string, join_suffix, split, split_string, Decomposed};
pub use error::HangulError;
pub use keyboard::qwerty_to_hangul;
