/*!
# `Enalpha` - Image Kind
*/

use crate::{
	EnalphaError,
	Input,
	header::PNG_MAGIC,
	traits::DecoderResult,
};
use std::fmt;

#[cfg(feature = "png")] use crate::ImagePng;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Image Kind.
///
/// The file formats this library can shuttle pixels between. That is
/// currently just PNG, but the enum keeps the plumbing honest about which
/// format it is holding.
pub enum ImageKind {
	/// # PNG.
	Png,
}

impl AsRef<str> for ImageKind {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for ImageKind {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl TryFrom<&[u8]> for ImageKind {
	type Error = EnalphaError;

	/// # From Raw Bytes.
	///
	/// This examines the first bytes of the raw image file to see what magic
	/// its headers contain.
	///
	/// ## Errors
	///
	/// This will return an error if the source is anything other than a PNG.
	fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
		// There is only one way to start a PNG.
		if 8 <= src.len() && src[..8] == PNG_MAGIC { Ok(Self::Png) }
		else { Err(EnalphaError::Image) }
	}
}

/// ## Information.
impl ImageKind {
	#[cfg(feature = "png")]
	#[inline]
	#[must_use]
	/// # Can Decode?
	///
	/// Returns `true` if decoding is supported for this image type.
	///
	/// Support is settled at compile time by the `png` feature flag, so this
	/// lets callers find out up front whether a build can do the work at
	/// all, before any files get touched.
	pub const fn can_decode(self) -> bool { matches!(self, Self::Png) }

	#[cfg(not(feature = "png"))]
	#[inline]
	#[must_use]
	/// # Can Decode?
	///
	/// Returns `true` if decoding is supported for this image type.
	///
	/// Support is settled at compile time by the `png` feature flag, so this
	/// lets callers find out up front whether a build can do the work at
	/// all, before any files get touched.
	pub const fn can_decode(self) -> bool { false }

	#[cfg(feature = "png")]
	#[inline]
	#[must_use]
	/// # Can Encode?
	///
	/// Returns `true` if encoding is supported for this image type.
	///
	/// As with [`ImageKind::can_decode`], the answer is baked in at compile
	/// time.
	pub const fn can_encode(self) -> bool { matches!(self, Self::Png) }

	#[cfg(not(feature = "png"))]
	#[inline]
	#[must_use]
	/// # Can Encode?
	///
	/// Returns `true` if encoding is supported for this image type.
	///
	/// As with [`ImageKind::can_decode`], the answer is baked in at compile
	/// time.
	pub const fn can_encode(self) -> bool { false }
}

/// ## Getters.
impl ImageKind {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Png => "PNG",
		}
	}
}

/// ## Decoding.
impl ImageKind {
	#[cfg_attr(not(feature = "png"), expect(unused_variables, reason = "The stub arm has no work to do."))]
	/// # Decode.
	///
	/// Decode a raw image of this kind into RGBA pixels (and width, height,
	/// and color mode).
	///
	/// ## Errors
	///
	/// This will bubble up any decoder errors encountered, including cases
	/// where decoding support was not compiled in.
	pub fn decode(self, raw: &[u8]) -> Result<DecoderResult, EnalphaError> {
		#[cfg(feature = "png")] use crate::traits::Decoder;

		match self {
			#[cfg(feature = "png")] Self::Png => ImagePng::decode(raw),
			#[cfg(not(feature = "png"))] _ => Err(EnalphaError::ImageDecode(self)),
		}
	}
}

/// ## Encoding.
impl ImageKind {
	#[cfg_attr(not(feature = "png"), expect(unused_variables, reason = "The stub arm has no work to do."))]
	/// # Encode.
	///
	/// Encode a decoded image back into a raw file of this kind, always with
	/// an explicit alpha channel.
	///
	/// ## Errors
	///
	/// This will bubble up any encoder errors encountered, including cases
	/// where encoding support was not compiled in.
	pub fn encode(self, input: &Input) -> Result<Vec<u8>, EnalphaError> {
		#[cfg(feature = "png")] use crate::traits::Encoder;

		match self {
			#[cfg(feature = "png")] Self::Png => ImagePng::encode(input),
			#[cfg(not(feature = "png"))] _ => Err(EnalphaError::ImageEncode(self)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_magic() {
		let png = [0x89_u8, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n', 0, 0, 0, 13];
		assert_eq!(ImageKind::try_from(png.as_slice()), Ok(ImageKind::Png));

		// JPEG magic is not our magic.
		let jpeg = [0xFF_u8, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];
		assert_eq!(ImageKind::try_from(jpeg.as_slice()), Err(EnalphaError::Image));

		// Nor are emptiness, text, or an off-by-one signature.
		assert_eq!(ImageKind::try_from([].as_slice()), Err(EnalphaError::Image));
		assert_eq!(ImageKind::try_from(b"not a png at all".as_slice()), Err(EnalphaError::Image));

		let mut bad = png;
		bad[0] = 0x88;
		assert_eq!(ImageKind::try_from(bad.as_slice()), Err(EnalphaError::Image));
	}

	#[test]
	fn t_strings() {
		assert_eq!(ImageKind::Png.as_str(), "PNG");
		assert_eq!(ImageKind::Png.to_string(), "PNG");
	}

	#[cfg(feature = "png")]
	#[test]
	fn t_support() {
		assert!(ImageKind::Png.can_decode());
		assert!(ImageKind::Png.can_encode());
	}
}
