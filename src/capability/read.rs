use encoding_rs::{SHIFT_JIS, WINDOWS_1252};
use image::{DynamicImage, GrayImage};
use tracing::{debug, warn};

use super::{Decoded, Decoder};
use crate::{
    analysis::SymbolMetadata,
    error::{QRError, QRResult},
};

/// [`Decoder`] backed by `rqrr`.
///
/// Tries the image as given and then inverted, so light-on-dark symbols are
/// found too.
#[derive(Debug, Copy, Clone)]
pub struct QrDecoder {
    try_inverted: bool,
}

impl Default for QrDecoder {
    fn default() -> Self {
        Self { try_inverted: true }
    }
}

impl QrDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_inverted(&mut self, try_inverted: bool) -> &mut Self {
        self.try_inverted = try_inverted;
        self
    }
}

impl Decoder for QrDecoder {
    fn decode(&self, img: &DynamicImage) -> QRResult<Decoded> {
        debug!("Preparing image...");
        let mut luma = img.to_luma8();

        if let Some(decoded) = read_first(&luma) {
            return Ok(decoded);
        }

        if self.try_inverted {
            debug!("Retrying with inverted image...");
            image::imageops::invert(&mut luma);
            if let Some(decoded) = read_first(&luma) {
                return Ok(decoded);
            }
        }

        Err(QRError::SymbolNotFound)
    }
}

fn read_first(luma: &GrayImage) -> Option<Decoded> {
    let (w, h) = luma.dimensions();
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(w as usize, h as usize, |x, y| {
        luma.get_pixel(x as u32, y as u32).0[0]
    });

    debug!("Detecting grids...");
    let grids = prepared.detect_grids();
    debug!("Found {} candidate grid(s)", grids.len());

    for (i, grid) in grids.iter().enumerate() {
        let mut bytes = Vec::new();
        match grid.decode_to(&mut bytes) {
            Ok(meta) => {
                debug!("Decoded grid {i}: version {}, mask {}", meta.version.0, meta.mask);
                return Some(Decoded {
                    text: decode_text(&bytes),
                    meta: Some(SymbolMetadata::new(
                        u32::try_from(meta.version.0).ok(),
                        u8::try_from(meta.mask).ok(),
                    )),
                });
            }
            Err(err) => warn!("Skipping grid {i}: {}", QRError::from(err)),
        }
    }

    None
}

/// Payload bytes as text: UTF-8 when valid, else Shift_JIS when it decodes
/// cleanly, else Latin-1.
fn decode_text(bytes: &[u8]) -> String {
    if let Ok(utf8) = std::str::from_utf8(bytes) {
        return utf8.to_string();
    }

    let (kanji, _, has_err) = SHIFT_JIS.decode(bytes);
    if !has_err {
        return kanji.into_owned();
    }

    let (latin1, _, _) = WINDOWS_1252.decode(bytes);
    latin1.into_owned()
}
