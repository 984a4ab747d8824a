/*!
# `Enalpha` - Input Image
*/

use crate::{
	ColorKind,
	EnalphaError,
	ImageKind,
};
use std::{
	fmt,
	num::NonZeroU32,
	ops::Deref,
};



#[derive(Clone)]
/// # Input Image.
///
/// This struct holds _decoded_ image data as a contiguous RGBA (4-byte)
/// pixel slice, along with the details worth remembering about where it came
/// from.
///
/// Decoding normalizes the buffer, not the record: [`Input::color`] reports
/// the mode the source was _stored_ with, even though the pixels themselves
/// are always four-channel.
///
/// Both `AsRef<[u8]>` and `Deref` traits are implemented to provide raw
/// access to the pixel slice.
///
/// Instantiation uses `TryFrom<&[u8]>`, which expects the raw (undecoded)
/// file bytes.
///
/// ## Examples
///
/// ```no_run
/// use enalpha_core::Input;
///
/// let raw = std::fs::read("app_icon.png").unwrap();
/// let input = Input::try_from(raw.as_slice()).unwrap();
/// ```
pub struct Input {
	/// # Image Pixels (RGBA).
	pixels: Vec<u8>,

	/// # Image Width.
	width: NonZeroU32,

	/// # Image Height.
	height: NonZeroU32,

	/// # Color Kind.
	color: ColorKind,

	/// # Image Kind.
	kind: ImageKind,
}

impl AsRef<[u8]> for Input {
	#[inline]
	fn as_ref(&self) -> &[u8] { self }
}

impl fmt::Debug for Input {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Input")
		.field("width", &self.width)
		.field("height", &self.height)
		.field("color", &self.color)
		.field("kind", &self.kind)
		.finish()
	}
}

impl Deref for Input {
	type Target = [u8];

	#[inline]
	fn deref(&self) -> &Self::Target { self.pixels.as_ref() }
}

impl TryFrom<&[u8]> for Input {
	type Error = EnalphaError;

	/// # From Raw Bytes.
	///
	/// Sniff the format, decode the pixels, and file everything away.
	///
	/// ## Errors
	///
	/// This will return an error if the source is not a PNG, cannot be
	/// decoded, or has out-of-range dimensions.
	fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
		let kind = ImageKind::try_from(src)?;
		let (pixels, width, height, color) = kind.decode(src)?;

		// Make sure the dimensions are in range.
		let width = u32::try_from(width).ok()
			.and_then(NonZeroU32::new)
			.ok_or(EnalphaError::Overflow)?;

		let height = u32::try_from(height).ok()
			.and_then(NonZeroU32::new)
			.ok_or(EnalphaError::Overflow)?;

		Ok(Self { pixels, width, height, color, kind })
	}
}

/// ## Getters.
impl Input {
	#[inline]
	#[must_use]
	/// # Color Kind.
	///
	/// This returns the color mode the source image was stored with. The
	/// instance's own buffer is always RGBA.
	pub const fn color(&self) -> ColorKind { self.color }

	#[inline]
	#[must_use]
	/// # Has Alpha?
	///
	/// This returns true if the source mode carried an explicit alpha
	/// channel of its own.
	pub const fn has_alpha(&self) -> bool { self.color.has_alpha() }

	#[inline]
	#[must_use]
	/// # Height.
	pub const fn height(&self) -> usize { self.height.get() as usize }

	#[inline]
	#[must_use]
	/// # Image Kind.
	///
	/// This returns the source image format.
	pub const fn kind(&self) -> ImageKind { self.kind }

	#[inline]
	#[must_use]
	/// # Width.
	pub const fn width(&self) -> usize { self.width.get() as usize }
}
