//! Command handlers.

pub(crate) mod load;
pub(crate) mod locales;
pub(crate) mod normalize;
