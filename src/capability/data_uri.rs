use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine};
use image::{ImageFormat, RgbaImage};

use crate::error::QRResult;

const PNG_PREFIX: &str = "data:image/png;base64,";

/// PNG-encodes `img` as a `data:` URI, ready to hand to a download link.
pub fn to_data_uri(img: &RgbaImage) -> QRResult<String> {
    let mut png = Cursor::new(Vec::new());
    img.write_to(&mut png, ImageFormat::Png)?;

    let mut uri = String::from(PNG_PREFIX);
    STANDARD.encode_string(png.get_ref(), &mut uri);
    Ok(uri)
}
