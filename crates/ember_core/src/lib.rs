//! Runtime support for programs emitted by the Ember compiler.
//!
//! This crate contains the primitives generated code links against:
//! - `GrowSeq` - Growable sequence with doubling capacity (`CharSeq`, `IntSeq`)
//! - `Text` - Immutable string value with small string optimization
//! - `Appendable` - Sink the rendering routines write into
//! - `SeqError` - Growth failures, and the fatal path generated code uses

pub mod appendable;
pub mod config;
pub mod errors;
pub mod render;
pub mod seq;
pub mod text;

pub use appendable::Appendable;
pub use config::SeqConfig;
pub use errors::SeqError;
pub use render::Element;
pub use seq::{CharSeq, GrowSeq, IntSeq};
pub use text::Text;
