mod base;

pub use base::{base, PageConfig};
