//! Glow composition: layer stack, the thinking-glow preset and its animation driver.

pub(crate) mod driver;
pub(crate) mod glow;
pub(crate) mod layer;
