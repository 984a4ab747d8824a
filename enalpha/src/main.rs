/*!
# `Enalpha`
*/

#![warn(clippy::filetype_is_file)]
#![warn(clippy::integer_division)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::suboptimal_flops)]
#![warn(clippy::unneeded_field_pattern)]
#![warn(macro_use_extern_crate)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]

#![allow(clippy::module_name_repetitions)]



mod convert;

use argyle::Argument;
use enalpha_core::{
	EnalphaError,
	ImageKind,
};
use std::path::PathBuf;



/// # Default Source Path.
const DEFAULT_SRC: &str = "app_icon.png";

/// # Default Destination Path.
const DEFAULT_DST: &str = "app_icon_rgba.png";



/// # Main.
///
/// This lets errors bubble up from the actual implementation so they can all
/// be printed from one place, with one exit code.
fn main() {
	match _main() {
		Ok(()) => {},
		Err(e @ (EnalphaError::PrintHelp | EnalphaError::PrintVersion)) => {
			println!("{e}");
		},
		Err(e) => {
			eprintln!("Error: {e}");
			std::process::exit(1);
		},
	}
}

/// # Actual Main.
///
/// Parse the arguments, make sure this build is actually capable of the
/// work, and hand off to the conversion routine.
fn _main() -> Result<(), EnalphaError> {
	let (src, dst) = parse_args()?;

	// Codec support is baked in at compile time; refuse to touch any files
	// if this build came up short.
	if ! ImageKind::Png.can_decode() {
		return Err(EnalphaError::ImageDecode(ImageKind::Png));
	}
	if ! ImageKind::Png.can_encode() {
		return Err(EnalphaError::ImageEncode(ImageKind::Png));
	}

	convert::convert(&src, &dst)
}

/// # Parse CLI Arguments.
///
/// Return the source and destination paths to work with, the fixed defaults
/// unless overridden.
fn parse_args() -> Result<(PathBuf, PathBuf), EnalphaError> {
	let mut src = PathBuf::from(DEFAULT_SRC);
	let mut dst = PathBuf::from(DEFAULT_DST);

	// Load CLI arguments, if any.
	let args = argyle::args()
		.with_keywords(include!(concat!(env!("OUT_DIR"), "/argyle.rs")));
	for arg in args {
		match arg {
			Argument::Key("-h" | "--help") => return Err(EnalphaError::PrintHelp),
			Argument::Key("-V" | "--version") => return Err(EnalphaError::PrintVersion),

			Argument::KeyWithValue("-i" | "--input", s) => { src = PathBuf::from(s); },
			Argument::KeyWithValue("-o" | "--output", s) => { dst = PathBuf::from(s); },

			// Nothing else is relevant.
			_ => {},
		}
	}

	Ok((src, dst))
}
