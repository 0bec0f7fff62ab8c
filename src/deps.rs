//! Re-exports of third party crates whose types are present in `mmcq`'s public API.

pub use palette;
