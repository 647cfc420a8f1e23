// Reflected XSS candidate discovery:
// reflection detection first, then per-character pass-through probing.

pub mod probe;
pub mod reflect;

pub use probe::{probe_characters, probe_rank};
pub use reflect::detect_reflected;
