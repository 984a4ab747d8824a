/*!
# `Enalpha` - PNG Header
*/

use crate::{
	ColorKind,
	EnalphaError,
};
use std::num::NonZeroU32;



/// # PNG Magic.
///
/// Every PNG file opens with this same eight-byte signature.
pub(crate) const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// # Minimum Parseable Length.
///
/// The signature, the IHDR length and type, and the thirteen IHDR data
/// bytes.
const HEADER_LEN: usize = 29;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # PNG Header.
///
/// The useful essentials from the front of a PNG file: its dimensions, color
/// mode, and bit depth. This is all the detail the post-save verification
/// pass needs, and a lot cheaper to pull than a full pixel decode.
///
/// Parsing requires no codec support, so headers can be inspected even when
/// the `png` feature is disabled.
///
/// Instantiation uses `TryFrom<&[u8]>`, which expects the raw file bytes.
pub struct Header {
	/// # Image Width.
	width: NonZeroU32,

	/// # Image Height.
	height: NonZeroU32,

	/// # Color Mode.
	color: ColorKind,

	/// # Bit Depth.
	depth: u8,
}

impl TryFrom<&[u8]> for Header {
	type Error = EnalphaError;

	/// # From Raw Bytes.
	///
	/// Parse the signature and IHDR chunk from the start of a raw PNG file.
	///
	/// ## Errors
	///
	/// This will return an error if the data is truncated, the signature or
	/// IHDR chunk are missing, the dimensions are out of range, or the color
	/// declaration is invalid.
	fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
		if src.len() < HEADER_LEN || src[..8] != PNG_MAGIC {
			return Err(EnalphaError::Image);
		}

		// IHDR has to come first: four bytes of length (always thirteen),
		// then the chunk type.
		if src[8..12] != [0, 0, 0, 13] || src[12..16] != *b"IHDR" {
			return Err(EnalphaError::Image);
		}

		let width = NonZeroU32::new(u32::from_be_bytes([src[16], src[17], src[18], src[19]]))
			.ok_or(EnalphaError::Overflow)?;
		let height = NonZeroU32::new(u32::from_be_bytes([src[20], src[21], src[22], src[23]]))
			.ok_or(EnalphaError::Overflow)?;

		let depth = src[24];
		let color = ColorKind::try_from(src[25])?;

		// Not every depth pairs with every color mode.
		let legal = match color {
			ColorKind::Grey => matches!(depth, 1 | 2 | 4 | 8 | 16),
			ColorKind::Palette => matches!(depth, 1 | 2 | 4 | 8),
			ColorKind::GreyAlpha | ColorKind::Rgb | ColorKind::Rgba => matches!(depth, 8 | 16),
		};

		if legal { Ok(Self { width, height, color, depth }) }
		else { Err(EnalphaError::Color) }
	}
}

/// # Getters.
impl Header {
	#[inline]
	#[must_use]
	/// # Color Mode.
	pub const fn color(&self) -> ColorKind { self.color }

	#[inline]
	#[must_use]
	/// # Bit Depth.
	pub const fn depth(&self) -> u8 { self.depth }

	#[inline]
	#[must_use]
	/// # Has Alpha?
	///
	/// True if the declared color mode carries an explicit alpha channel.
	pub const fn has_alpha(&self) -> bool { self.color.has_alpha() }

	#[inline]
	#[must_use]
	/// # Image Height.
	pub const fn height(&self) -> u32 { self.height.get() }

	#[inline]
	#[must_use]
	/// # Image Width.
	pub const fn width(&self) -> u32 { self.width.get() }
}
