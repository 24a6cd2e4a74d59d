pub mod stream;
mod trace;

// re-export
pub use stream::*;
pub use trace::trace_init;
