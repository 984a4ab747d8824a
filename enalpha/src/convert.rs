/*!
# `Enalpha` - Conversion
*/

use dactyl::NiceU64;
use enalpha_core::{
	EnalphaError,
	Header,
	Input,
};
use fyi_msg::{
	Msg,
	MsgKind,
};
use std::{
	borrow::Cow,
	ffi::OsStr,
	path::Path,
};



/// # Convert and Verify.
///
/// Read and decode the source image, re-encode it with an explicit alpha
/// channel, save the copy, then reopen the copy to confirm (and report) what
/// actually landed on disk.
///
/// ## Errors
///
/// This will return an error if any stage of the pipeline fails. The first
/// failure wins; nothing after it is attempted.
pub(super) fn convert(src: &Path, dst: &Path) -> Result<(), EnalphaError> {
	print_header_path(src);

	// Decode the source.
	let raw = std::fs::read(src).map_err(|_| EnalphaError::Read)?;
	let input = Input::try_from(raw.as_slice())?;

	// Alpha-less sources are in for a mode upgrade; mention it.
	if ! input.has_alpha() {
		Msg::new(MsgKind::None, format!("\x1b[2mUpgrading {} to RGBA.\x1b[0m", input.color()))
			.with_indent(1)
			.with_newline(true)
			.print();
	}

	// Re-encode and save. The encoder pins the four-channel layout whether
	// or not the source already had it; the pixels pass through as decoded.
	let out = input.kind().encode(&input)?;
	write_image(dst, &out)?;

	// Reopen the copy and report what it says about itself.
	let check = std::fs::read(dst).map_err(|_| EnalphaError::Verify)?;
	let header = Header::try_from(check.as_slice())?;

	print_success(src, dst, out.len());
	print_verified(&header);

	Ok(())
}

#[must_use]
/// # File Name.
///
/// This extracts the file name from a path. If for some reason it doesn't
/// have one, "?" is returned so that _something_ can be printed.
fn file_name(path: &Path) -> Cow<str> {
	path.file_name().map_or_else(|| Cow::Borrowed("?"), OsStr::to_string_lossy)
}

/// # Print Path Title.
///
/// This prints the source image path with a nice ANSI-colored border, like:
///
/// ```ignore
/// +--------------+
/// | app_icon.png |
/// +--------------+
/// ```
fn print_header_path(path: &Path) {
	let txt = path.to_string_lossy();
	let dashes = "-".repeat(txt.len() + 2);

	println!("\x1b[38;5;199m+{dashes}+\n| \x1b[0m{txt} \x1b[38;5;199m|\n+{dashes}+\x1b[0m");
}

/// # Print Success.
///
/// This credits the finished conversion, like:
///
/// ```ignore
/// Success: Converted app_icon.png to app_icon_rgba.png. (1,234 bytes.)
/// ```
fn print_success(src: &Path, dst: &Path, size: usize) {
	Msg::success(format!(
		"Converted \x1b[1m{}\x1b[0m to \x1b[1m{}\x1b[0m.",
		file_name(src),
		file_name(dst),
	))
		.with_indent(1)
		.with_suffix(format!(
			" \x1b[2m({} bytes.)\x1b[0m",
			NiceU64::from(size).as_str(),
		))
		.print();
}

/// # Print Verification.
///
/// This reports the mode and dimensions of the saved file, as read back from
/// its own header rather than taken on faith.
fn print_verified(header: &Header) {
	Msg::new(MsgKind::None, format!("New image mode: {}.", header.color()))
		.with_indent(1)
		.with_newline(true)
		.print();
	Msg::new(MsgKind::None, format!("New image size: ({}, {}).", header.width(), header.height()))
		.with_indent(1)
		.with_newline(true)
		.print();
}

/// # Write Image.
///
/// This saves image data to the specified path, atomically, leaving any
/// previous copy untouched on failure.
fn write_image(path: &Path, data: &[u8]) -> Result<(), EnalphaError> {
	write_atomic::write_file(path, data).map_err(|_| EnalphaError::Write)
}
