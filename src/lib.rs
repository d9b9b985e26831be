//! # qrlens
//!
//! Generate QR codes and read them back into typed payloads.
//!
//! The interesting part lives in [`payload`]: a decoded string is classified as
//! one of a fixed set of conventions and the matching fields are pulled out.
//! Symbol construction and detection are delegated to the [`capability`]
//! traits, with stock implementations backed by `qrcode` and `rqrr`.
//!
//! ## Features
//!
//! - **Classification**: URL, WiFi, vCard contact, mailto, tel, SMS, geo,
//!   iCalendar event and WhatsApp payloads, falling back to plain text
//! - **Field extraction**: one structured record per kind, each with a short title
//! - **Byte view**: UTF-8 hex dump of the raw payload
//! - **Generation & reading**: render to a PNG raster or data URI, and decode
//!   from any image the `image` crate can load
//!
//! ## Quick Start
//!
//! ### Analysing text
//!
//! ```rust
//! use qrlens::{analyze, ParsedFields, PayloadKind};
//!
//! let res = analyze("WIFI:T:WPA;S:MyNet;P:secret;H:true;", None);
//! assert_eq!(res.kind, PayloadKind::WiFi);
//!
//! if let ParsedFields::WiFi(wifi) = &res.fields {
//!     assert_eq!(wifi.ssid, "MyNet");
//!     assert!(wifi.hidden);
//! }
//! ```
//!
//! ### Generating and reading a symbol
//!
//! ```rust
//! use qrlens::{Inspector, RenderConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let inspector = Inspector::default();
//! let generated = inspector.generate("https://example.com/path?x=1", &RenderConfig::new())?;
//!
//! let img = image::DynamicImage::ImageRgba8(generated.image);
//! let res = inspector.read(&img)?;
//! assert_eq!(res.fields.title(), "example.com");
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod capability;
pub mod error;
pub mod hex;
pub mod inspector;
pub mod payload;

pub use analysis::{analyze, assemble, AnalysisResult, SymbolMetadata, QR_FORMAT};
pub use capability::{
    to_data_uri, Decoded, Decoder, ECLevel, Encoder, QrDecoder, QrEncoder, RenderConfig, Rgb,
};
pub use error::{QRError, QRResult};
pub use hex::to_hex_bytes;
pub use inspector::{Generated, Inspector};
pub use payload::{classify, extract, normalize_date, parse, ParsedFields, PayloadKind};
