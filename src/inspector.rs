use image::{DynamicImage, RgbaImage};
use tracing::debug;

use crate::{
    analysis::{analyze, AnalysisResult},
    capability::{to_data_uri, Decoder, Encoder, QrDecoder, QrEncoder, RenderConfig},
    error::QRResult,
};

/// A freshly generated symbol and the analysis of the text it carries.
#[derive(Debug, Clone)]
pub struct Generated {
    pub image: RgbaImage,
    pub analysis: AnalysisResult,
}

impl Generated {
    pub fn to_data_uri(&self) -> QRResult<String> {
        to_data_uri(&self.image)
    }
}

/// Wires the payload core to an encoder and a decoder.
#[derive(Debug, Clone)]
pub struct Inspector<E, D> {
    encoder: E,
    decoder: D,
}

impl Default for Inspector<QrEncoder, QrDecoder> {
    fn default() -> Self {
        Self::new(QrEncoder::new(), QrDecoder::new())
    }
}

impl<E: Encoder, D: Decoder> Inspector<E, D> {
    pub fn new(encoder: E, decoder: D) -> Self {
        Self { encoder, decoder }
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Encodes `text` as given and analyses it. No symbol metadata is
    /// attached since nothing was scanned.
    pub fn generate(&self, text: &str, config: &RenderConfig) -> QRResult<Generated> {
        let image = self.encoder.encode(text, config)?;
        debug!("Analysing generated payload...");
        Ok(Generated { image, analysis: analyze(text, None) })
    }

    /// Decodes the first symbol in `img` and analyses its payload.
    pub fn read(&self, img: &DynamicImage) -> QRResult<AnalysisResult> {
        debug!("Reading QR...");
        let decoded = self.decoder.decode(img)?;
        debug!("Analysing decoded payload...");
        Ok(analyze(&decoded.text, decoded.meta))
    }
}
