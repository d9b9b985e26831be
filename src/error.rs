use thiserror::Error;

// Error
//------------------------------------------------------------------------------

/// Failures raised at the encode/decode boundary.
///
/// Payload classification and field extraction never fail, so nothing in
/// [`crate::payload`] returns this type.
#[derive(Debug, Error)]
pub enum QRError {
    // Encoder
    #[error("Empty data")]
    EmptyData,
    #[error("Data too long")]
    DataTooLong,
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Invalid dimensions")]
    InvalidDimensions,
    #[error("Encoder failure: {0}")]
    Encoder(String),

    // Decoder
    #[error("Symbol not found")]
    SymbolNotFound,
    #[error("Decoder failure: {0}")]
    Decoder(String),

    // Raster I/O
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type QRResult<T> = Result<T, QRError>;

impl From<qrcode::types::QrError> for QRError {
    fn from(err: qrcode::types::QrError) -> Self {
        match err {
            qrcode::types::QrError::DataTooLong => Self::DataTooLong,
            other => Self::Encoder(other.to_string()),
        }
    }
}

impl From<rqrr::DeQRError> for QRError {
    fn from(err: rqrr::DeQRError) -> Self {
        Self::Decoder(err.to_string())
    }
}
