pub(crate) mod contour;
pub(crate) mod measure;
pub(crate) mod rounded;
pub(crate) mod stroke;
pub(crate) mod wavy;
