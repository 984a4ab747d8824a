/*!
# `Enalpha` - Color Kind
*/

use crate::EnalphaError;
use std::fmt;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Source Image Color.
///
/// This is the color mode an image is _stored_ with, as declared by its
/// header, regardless of what the pixels themselves get up to. (A photo of a
/// grey cat saved as RGBA is still RGBA.)
///
/// Two modes, [`ColorKind::GreyAlpha`] and [`ColorKind::Rgba`], carry an
/// explicit per-pixel opacity channel. The other three are implicitly
/// opaque, though palette images can smuggle transparency in through
/// auxiliary data.
pub enum ColorKind {
	/// # Greyscale.
	Grey,
	/// # Greyscale with Alpha.
	GreyAlpha,
	/// # Palette-Indexed.
	Palette,
	/// # RGB.
	Rgb,
	/// # RGB with Alpha.
	Rgba,
}

impl TryFrom<u8> for ColorKind {
	type Error = EnalphaError;

	/// # From Color Type.
	///
	/// Match a PNG color-type byte to its corresponding kind.
	///
	/// ## Errors
	///
	/// This will return an error if the byte is not one of the five defined
	/// color types.
	fn try_from(src: u8) -> Result<Self, Self::Error> {
		match src {
			0 => Ok(Self::Grey),
			2 => Ok(Self::Rgb),
			3 => Ok(Self::Palette),
			4 => Ok(Self::GreyAlpha),
			6 => Ok(Self::Rgba),
			_ => Err(EnalphaError::Color),
		}
	}
}

impl AsRef<str> for ColorKind {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for ColorKind {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// # Getters.
impl ColorKind {
	#[inline]
	#[must_use]
	/// # As Str.
	///
	/// Return the mode as an English string slice.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Grey => "greyscale",
			Self::GreyAlpha => "greyscale with alpha",
			Self::Palette => "palette",
			Self::Rgb => "RGB",
			Self::Rgba => "RGBA",
		}
	}

	#[inline]
	#[must_use]
	/// # Total Channels.
	///
	/// Return the number of channels the mode stores per pixel. (Palette
	/// pixels are a single index apiece.)
	pub const fn channels(self) -> u32 {
		match self {
			Self::Grey | Self::Palette => 1,
			Self::GreyAlpha => 2,
			Self::Rgb => 3,
			Self::Rgba => 4,
		}
	}

	#[inline]
	#[must_use]
	/// # Has Alpha?
	///
	/// Modes with a dedicated alpha channel return true.
	pub const fn has_alpha(self) -> bool {
		matches!(self, Self::GreyAlpha | Self::Rgba)
	}
}
