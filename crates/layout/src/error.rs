use parser::SignatureError;
use thiserror::Error;

/// Why a signature has no size to report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeError {
    #[error(transparent)]
    Invalid(#[from] SignatureError),

    /// Valid, but the encoded length depends on the value.
    #[error("signature is not fixed-size")]
    NotFixedSize,
}
