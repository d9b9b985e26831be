//! Encode and decode capabilities the payload core is wired to.
//!
//! Symbol construction and detection live behind [`Encoder`] and [`Decoder`];
//! [`QrEncoder`] and [`QrDecoder`] are the stock implementations.

mod config;
mod data_uri;
mod read;
mod render;

pub use config::{ECLevel, RenderConfig, Rgb};
pub use data_uri::to_data_uri;
pub use read::QrDecoder;
pub use render::QrEncoder;

use image::{DynamicImage, RgbaImage};

use crate::{analysis::SymbolMetadata, error::QRResult};

/// Text recovered from a symbol, plus whatever the decoder knows about it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Decoded {
    pub text: String,
    pub meta: Option<SymbolMetadata>,
}

pub trait Encoder {
    /// Renders `text` unchanged into a raster symbol.
    fn encode(&self, text: &str, config: &RenderConfig) -> QRResult<RgbaImage>;
}

pub trait Decoder {
    /// Reads the first symbol in `img`; `QRError::SymbolNotFound` when none decodes.
    fn decode(&self, img: &DynamicImage) -> QRResult<Decoded>;
}

impl<T: Encoder + ?Sized> Encoder for &T {
    fn encode(&self, text: &str, config: &RenderConfig) -> QRResult<RgbaImage> {
        (**self).encode(text, config)
    }
}

impl<T: Decoder + ?Sized> Decoder for &T {
    fn decode(&self, img: &DynamicImage) -> QRResult<Decoded> {
        (**self).decode(img)
    }
}
