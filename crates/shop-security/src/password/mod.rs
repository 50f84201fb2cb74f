//! Password credential codecs.

mod codec;

pub use codec::*;
