/*!
# `Enalpha` - Traits.
*/

use crate::ColorKind;

#[cfg(feature = "png")]
use crate::{
	EnalphaError,
	Input,
};



/// # The result type for `Decoder::decode`.
pub(super) type DecoderResult = (Vec<u8>, usize, usize, ColorKind);

#[cfg(feature = "png")]
/// # Decoder.
///
/// This is implemented for image formats capable of decoding raw image data
/// into RGBA pixels.
pub(super) trait Decoder {
	/// # Decode.
	///
	/// Decode the bytes from a raw image file into a contiguous `u8` buffer
	/// using 4 bytes (RGBA) per pixel.
	///
	/// RGB, greyscale, etc., should be upscaled accordingly, but the color
	/// mode reported alongside the buffer is the one the file _declared_.
	///
	/// ## Errors
	///
	/// Return any errors encountered during decoding.
	fn decode(raw: &[u8]) -> Result<DecoderResult, EnalphaError>;
}

#[cfg(feature = "png")]
/// # Encoder.
///
/// This is implemented for image formats capable of encoding RGBA pixels
/// back into a raw image file.
pub(super) trait Encoder {
	/// # Encode.
	///
	/// Encode a decoded image into a complete file, keeping the explicit
	/// four-channel layout no matter how redundant the alpha data might be.
	///
	/// ## Errors
	///
	/// Return any errors encountered during encoding.
	fn encode(input: &Input) -> Result<Vec<u8>, EnalphaError>;
}
