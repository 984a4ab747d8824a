/*!
# `Enalpha` - Kinds
*/

pub(super) mod color;
pub(super) mod image;
#[cfg(feature = "png")] pub(super) mod png;
