//! Sources, loads and probes that surround a parametric element.

mod load;
mod probe;
mod source;

pub use load::{Lossless, ResistiveLoad};
pub use probe::TestProbe;
pub use source::{FnSource, HeldSource};
