//! CPU rendering primitives: coverage rasterization, blur, masking and blending.

pub(crate) mod blur;
pub(crate) mod composite;
pub(crate) mod frame;
pub(crate) mod raster;
