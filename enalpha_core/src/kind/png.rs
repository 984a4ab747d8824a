/*!
# `Enalpha` - PNG Images.
*/

use crate::{
	EnalphaError,
	Header,
	Input,
	traits::{
		Decoder,
		DecoderResult,
		Encoder,
	},
};
use rgb::{
	ComponentSlice,
	FromSlice,
};



/// # PNG Image.
pub(crate) struct ImagePng;

impl Decoder for ImagePng {
	/// # Decode.
	///
	/// `lodepng` upscales everything to four-channel RGBA for us, honoring
	/// `tRNS` transparency and reducing sixteen-bit samples to eight along
	/// the way.
	///
	/// The color mode reported back comes from the file header rather than
	/// the pixels so that opaque RGBA sources still read as RGBA.
	fn decode(raw: &[u8]) -> Result<DecoderResult, EnalphaError> {
		let color = Header::try_from(raw)?.color();

		// Grab the RGBA pixels, width, and height.
		let img = lodepng::decode32(raw).map_err(|_| EnalphaError::Decode)?;
		let size = img.width.checked_mul(img.height)
			.and_then(|x| x.checked_mul(4))
			.ok_or(EnalphaError::Overflow)?;

		// Flatten the pixels to bytes, and make sure the total comes out the
		// right size.
		let pixels: Vec<u8> = img.buffer.iter()
			.fold(Vec::with_capacity(size), |mut acc, px| {
				acc.extend_from_slice(px.as_slice());
				acc
			});
		if pixels.len() == size {
			Ok((pixels, img.width, img.height, color))
		}
		else { Err(EnalphaError::Decode) }
	}
}

impl Encoder for ImagePng {
	/// # Encode.
	///
	/// Write the pixels back out as an eight-bit RGBA PNG.
	///
	/// The encoder's automatic color-model reduction has to be disabled for
	/// both the raw and output descriptors or fully-opaque images would come
	/// back RGB or palette, defeating the whole point of the exercise.
	fn encode(input: &Input) -> Result<Vec<u8>, EnalphaError> {
		let mut enc = lodepng::Encoder::new();
		enc.set_auto_convert(false);
		enc.info_raw_mut().set_colortype(lodepng::ColorType::RGBA);
		enc.info_raw_mut().set_bitdepth(8);

		let info = enc.info_png_mut();
		info.color.set_colortype(lodepng::ColorType::RGBA);
		info.color.set_bitdepth(8);

		enc.encode(input.as_rgba(), input.width(), input.height())
			.map_err(|_| EnalphaError::Encode)
	}
}

#[cfg(test)]
mod tests {
	use crate::ColorKind;
	use super::*;

	/// # Encode a Fixture.
	///
	/// Build a complete PNG file with the given storage mode, leaving the
	/// pixels exactly as provided.
	fn fixture(colortype: lodepng::ColorType, pixels: &[u8], width: usize, height: usize)
	-> Vec<u8> {
		let mut enc = lodepng::Encoder::new();
		enc.set_auto_convert(false);
		enc.info_raw_mut().set_colortype(colortype);
		enc.info_raw_mut().set_bitdepth(8);

		let info = enc.info_png_mut();
		info.color.set_colortype(colortype);
		info.color.set_bitdepth(8);

		enc.encode(pixels, width, height).expect("Unable to encode fixture.")
	}

	#[test]
	fn t_decode_rgb() {
		let file = fixture(lodepng::ColorType::RGB, &[1, 2, 3, 4, 5, 6, 7, 8, 9], 3, 1);
		let (pixels, width, height, color) = ImagePng::decode(&file)
			.expect("Unable to decode fixture.");

		assert_eq!(width, 3);
		assert_eq!(height, 1);
		assert_eq!(color, ColorKind::Rgb);
		assert_eq!(pixels, [1, 2, 3, 255, 4, 5, 6, 255, 7, 8, 9, 255]);
	}

	#[test]
	fn t_decode_grey() {
		let file = fixture(lodepng::ColorType::GREY, &[10, 20, 30, 40], 2, 2);
		let (pixels, width, height, color) = ImagePng::decode(&file)
			.expect("Unable to decode fixture.");

		assert_eq!(width, 2);
		assert_eq!(height, 2);
		assert_eq!(color, ColorKind::Grey);
		assert_eq!(
			pixels,
			[
				10, 10, 10, 255,  20, 20, 20, 255,
				30, 30, 30, 255,  40, 40, 40, 255,
			],
		);
	}

	#[test]
	fn t_decode_grey_alpha() {
		let file = fixture(lodepng::ColorType::GREY_ALPHA, &[10, 0, 20, 128], 2, 1);
		let (pixels, width, height, color) = ImagePng::decode(&file)
			.expect("Unable to decode fixture.");

		assert_eq!(width, 2);
		assert_eq!(height, 1);
		assert_eq!(color, ColorKind::GreyAlpha);
		assert_eq!(pixels, [10, 10, 10, 0, 20, 20, 20, 128]);
	}

	#[test]
	fn t_decode_rgba() {
		let raw = [1_u8, 2, 3, 0, 4, 5, 6, 128, 7, 8, 9, 255, 10, 11, 12, 200];
		let file = fixture(lodepng::ColorType::RGBA, &raw, 2, 2);
		let (pixels, width, height, color) = ImagePng::decode(&file)
			.expect("Unable to decode fixture.");

		// RGBA sources should pass straight through.
		assert_eq!(width, 2);
		assert_eq!(height, 2);
		assert_eq!(color, ColorKind::Rgba);
		assert_eq!(pixels, raw);
	}

	#[test]
	fn t_decode_palette() {
		use rgb::RGBA8;

		// Palette images route transparency through auxiliary data; decoding
		// should bake it back into the pixels.
		let red = RGBA8::new(255, 0, 0, 255);
		let blue = RGBA8::new(0, 0, 255, 64);

		let mut enc = lodepng::Encoder::new();
		enc.set_auto_convert(false);
		{
			let raw = enc.info_raw_mut();
			raw.set_colortype(lodepng::ColorType::PALETTE);
			raw.set_bitdepth(8);
			raw.palette_add(red).expect("Unable to add palette entry.");
			raw.palette_add(blue).expect("Unable to add palette entry.");
		}
		{
			let png = &mut enc.info_png_mut().color;
			png.set_colortype(lodepng::ColorType::PALETTE);
			png.set_bitdepth(8);
			png.palette_add(red).expect("Unable to add palette entry.");
			png.palette_add(blue).expect("Unable to add palette entry.");
		}
		let file = enc.encode(&[0_u8, 1, 1, 0], 2, 2).expect("Unable to encode fixture.");

		let (pixels, width, height, color) = ImagePng::decode(&file)
			.expect("Unable to decode fixture.");

		assert_eq!(width, 2);
		assert_eq!(height, 2);
		assert_eq!(color, ColorKind::Palette);
		assert_eq!(
			pixels,
			[
				255, 0, 0, 255,  0, 0, 255, 64,
				0, 0, 255, 64,   255, 0, 0, 255,
			],
		);
	}

	#[test]
	fn t_decode_bad() {
		assert_eq!(ImagePng::decode(b"definitely not a png"), Err(EnalphaError::Image));

		// A valid header stapled to garbage should fail differently.
		let mut file = fixture(lodepng::ColorType::GREY, &[0], 1, 1);
		file.truncate(34);
		assert_eq!(ImagePng::decode(&file), Err(EnalphaError::Decode));
	}

	#[test]
	fn t_encode_rgba_always() {
		// Fully-opaque pixels would normally tempt an encoder into writing
		// RGB or palette; ours must stay RGBA regardless.
		let file = fixture(lodepng::ColorType::RGB, &[10, 20, 30, 40, 50, 60], 2, 1);
		let input = Input::try_from(file.as_slice()).expect("Unable to build input.");
		assert_eq!(input.color(), ColorKind::Rgb);

		let out = ImagePng::encode(&input).expect("Unable to encode.");
		let header = Header::try_from(out.as_slice()).expect("Unable to parse output.");
		assert_eq!(header.color(), ColorKind::Rgba);
		assert_eq!(header.depth(), 8);
		assert_eq!(header.width(), 2);
		assert_eq!(header.height(), 1);

		// The pixels should have gained full opacity, nothing else.
		let (pixels, ..) = ImagePng::decode(&out).expect("Unable to re-decode.");
		assert_eq!(pixels, [10, 20, 30, 255, 40, 50, 60, 255]);
	}

	#[test]
	fn t_encode_alpha_preserved() {
		let raw = [1_u8, 2, 3, 0, 4, 5, 6, 77, 7, 8, 9, 255, 10, 11, 12, 128];
		let file = fixture(lodepng::ColorType::RGBA, &raw, 2, 2);
		let input = Input::try_from(file.as_slice()).expect("Unable to build input.");

		let out = ImagePng::encode(&input).expect("Unable to encode.");
		let (pixels, width, height, color) = ImagePng::decode(&out)
			.expect("Unable to re-decode.");

		assert_eq!(width, 2);
		assert_eq!(height, 2);
		assert_eq!(color, ColorKind::Rgba);
		assert_eq!(pixels, raw);
	}
}
