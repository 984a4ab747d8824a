/*!
# `Enalpha` - Error
*/

use crate::ImageKind;
use std::{
	error::Error,
	fmt,
};



#[cfg(feature = "bin")]
/// # Help Text.
const HELP: &str = concat!(r"
 +--------+
 | ##  ## |
 |   ##   |  ", "\x1b[38;5;199mEnalpha\x1b[0;38;5;69m v", env!("CARGO_PKG_VERSION"), "\x1b[0m", r#"
 | ##  ## |  Explicit RGBA re-encoding for
 |   ##   |  PNG image sources.
 +--------+

USAGE:
    enalpha [FLAGS] [OPTIONS]

FLAGS:
    -h, --help        Print help information and exit.
    -V, --version     Print version information and exit.

OPTIONS:
    -i, --input <FILE>
                      Read the source PNG from this path instead of the
                      default app_icon.png.
    -o, --output <FILE>
                      Save the RGBA copy to this path instead of the default
                      app_icon_rgba.png.
"#);



#[derive(Debug, Copy, Clone, Eq, PartialEq)]
/// # Errors.
pub enum EnalphaError {
	/// # Unsupported color.
	Color,

	/// # Decoding failed.
	Decode,

	/// # Encoding failed.
	Encode,

	/// # Invalid image.
	Image,

	/// # Decoding not supported.
	ImageDecode(ImageKind),

	/// # Encoding not supported.
	ImageEncode(ImageKind),

	/// # Image dimensions are out of range.
	Overflow,

	/// # I/O read error.
	Read,

	/// # Verification read error.
	Verify,

	/// # I/O write error.
	Write,

	#[cfg(feature = "bin")]
	/// # Print Help (Not an Error).
	PrintHelp,

	#[cfg(feature = "bin")]
	/// # Print Version (Not an Error).
	PrintVersion,
}

impl Error for EnalphaError {}

impl AsRef<str> for EnalphaError {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for EnalphaError {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl EnalphaError {
	#[must_use]
	/// # As Str.
	///
	/// Return the error as an English string slice.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Color => "Unsupported color type or bit depth.",
			Self::Decode => "The image could not be decoded.",
			Self::Encode => "The image could not be encoded.",
			Self::Image => "Invalid PNG image.",
			Self::ImageDecode(k) => match k {
				ImageKind::Png => "Enalpha cannot decode PNG images; rebuild it with the png feature enabled.",
			},
			Self::ImageEncode(k) => match k {
				ImageKind::Png => "Enalpha cannot encode PNG images; rebuild it with the png feature enabled.",
			},
			Self::Overflow => "The image dimensions are out of range.",
			Self::Read => "Unable to read the source file.",
			Self::Verify => "Unable to read back the saved copy.",
			Self::Write => "Unable to save the file.",

			#[cfg(feature = "bin")] Self::PrintHelp => HELP,
			#[cfg(feature = "bin")] Self::PrintVersion => concat!("Enalpha v", env!("CARGO_PKG_VERSION")),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_strings() {
		// Every variant should say something.
		for e in [
			EnalphaError::Color,
			EnalphaError::Decode,
			EnalphaError::Encode,
			EnalphaError::Image,
			EnalphaError::ImageDecode(ImageKind::Png),
			EnalphaError::ImageEncode(ImageKind::Png),
			EnalphaError::Overflow,
			EnalphaError::Read,
			EnalphaError::Verify,
			EnalphaError::Write,
		] {
			assert!(! e.as_str().is_empty());
			assert_eq!(e.as_str(), e.to_string());
		}
	}
}
