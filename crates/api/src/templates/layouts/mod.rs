mod base;

pub use base::base;
