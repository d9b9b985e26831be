use image::RgbaImage;
use qrcode::{Color, QrCode};
use tracing::debug;

use super::{Encoder, RenderConfig};
use crate::error::{QRError, QRResult};

/// Modules of light margin around the symbol.
const QUIET_ZONE: u32 = 4;

/// [`Encoder`] backed by the `qrcode` crate.
#[derive(Debug, Default, Copy, Clone)]
pub struct QrEncoder;

impl QrEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Encoder for QrEncoder {
    fn encode(&self, text: &str, config: &RenderConfig) -> QRResult<RgbaImage> {
        debug!("Generating QR {}...", config.metadata());
        if text.trim().is_empty() {
            return Err(QRError::EmptyData);
        }

        debug!("Encoding data...");
        let ecl = config.error_correction().into();
        let code = QrCode::with_error_correction_level(text.as_bytes(), ecl)?;
        debug!("Encoded as {:?}, width {}", code.version(), code.width());

        debug!("Rendering symbol...");
        render(&code.to_colors(), code.width() as u32, config)
    }
}

/// Paints `modules` (row-major, `w × w`) centred on a `config`-sized canvas,
/// using the largest whole module size that fits symbol plus quiet zone.
fn render(modules: &[Color], w: u32, config: &RenderConfig) -> QRResult<RgbaImage> {
    let (width, height) = config.dimensions();
    let total_modules = w + 2 * QUIET_ZONE;
    let module_sz = width.min(height) / total_modules;
    if module_sz == 0 {
        return Err(QRError::InvalidDimensions);
    }

    let qr_sz = w * module_sz;
    let left = (width - qr_sz) / 2;
    let top = (height - qr_sz) / 2;

    let dark = config.foreground_color().to_rgba();
    let light = config.background_color().to_rgba();

    let mut canvas = RgbaImage::from_pixel(width, height, light);
    for i in 0..qr_sz {
        for j in 0..qr_sz {
            let r = i / module_sz;
            let c = j / module_sz;
            if modules[(r * w + c) as usize] == Color::Dark {
                canvas.put_pixel(left + j, top + i, dark);
            }
        }
    }

    Ok(canvas)
}

#[cfg(test)]
mod render_tests {
    use qrcode::Color;

    use super::{render, QrEncoder};
    use crate::{
        capability::{Encoder, RenderConfig, Rgb},
        error::QRError,
    };

    #[test]
    fn test_render_layout() {
        // 1x1 dark symbol: quiet zone of 4 on each side gives 9 modules
        let mut config = RenderConfig::new();
        config.width(90).height(90);
        let img = render(&[Color::Dark], 1, &config).unwrap();

        assert_eq!(img.dimensions(), (90, 90));
        assert_eq!(img.get_pixel(0, 0), &Rgb::WHITE.to_rgba());
        assert_eq!(img.get_pixel(40, 40), &Rgb::BLACK.to_rgba());
        assert_eq!(img.get_pixel(49, 49), &Rgb::BLACK.to_rgba());
        assert_eq!(img.get_pixel(50, 50), &Rgb::WHITE.to_rgba());
    }

    #[test]
    fn test_render_centres_on_wide_canvas() {
        let mut config = RenderConfig::new();
        config.width(120).height(90);
        let img = render(&[Color::Dark], 1, &config).unwrap();

        assert_eq!(img.dimensions(), (120, 90));
        assert_eq!(img.get_pixel(55, 40), &Rgb::BLACK.to_rgba());
        assert_eq!(img.get_pixel(40, 40), &Rgb::WHITE.to_rgba());
    }

    #[test]
    fn test_encode() {
        let img = QrEncoder.encode("Hello, world!🌎", &RenderConfig::new()).unwrap();
        assert_eq!(img.dimensions(), (300, 300));
        assert_eq!(img.get_pixel(0, 0), &Rgb::WHITE.to_rgba());
    }

    #[test]
    fn test_encode_colors() {
        let img = QrEncoder.encode("colors", &RenderConfig::dark()).unwrap();
        let fg = Rgb::WHITE.to_rgba();
        let bg = Rgb::CHARCOAL.to_rgba();
        assert!(img.pixels().all(|p| *p == fg || *p == bg));
        assert!(img.pixels().any(|p| *p == fg));
    }

    #[test]
    fn test_encode_empty() {
        assert!(matches!(QrEncoder.encode("  \n", &RenderConfig::new()), Err(QRError::EmptyData)));
    }

    #[test]
    fn test_encode_too_small() {
        let mut config = RenderConfig::new();
        config.size(20);
        let res = QrEncoder.encode("tiny canvas", &config);
        assert!(matches!(res, Err(QRError::InvalidDimensions)));
    }

    #[test]
    fn test_encode_too_long() {
        let data = "x".repeat(4000);
        let res = QrEncoder.encode(&data, &RenderConfig::new());
        assert!(matches!(res, Err(QRError::DataTooLong)));
    }
}
