// Classification API
//
// Signature in, layout out. Every call parses the signature afresh and
// derives the layout from the resulting type tree; nothing is cached.

pub mod error;
pub mod framing;
pub mod layout;
pub mod placement;

pub use error::SizeError;
pub use framing::framing_word_size;
pub use layout::{Layout, round_up};
pub use placement::MemberPlacement;

use log::trace;
use parser::{ParseLimits, SignatureError};

/// Full layout of a signature under default parse limits.
pub fn classify(signature: &str) -> Result<Layout, SignatureError> {
    classify_with(signature, &ParseLimits::default())
}

pub fn classify_with(signature: &str, limits: &ParseLimits) -> Result<Layout, SignatureError> {
    let sequence = parser::parse_with(signature, limits)?;
    let layout = Layout::of_sequence(&sequence);
    trace!("signature {:?} has layout {:?}", signature, layout);
    Ok(layout)
}

/// Whether every value of the signature encodes to the same length.
pub fn is_fixed_size(signature: &str) -> Result<bool, SignatureError> {
    is_fixed_size_with(signature, &ParseLimits::default())
}

pub fn is_fixed_size_with(signature: &str, limits: &ParseLimits) -> Result<bool, SignatureError> {
    classify_with(signature, limits).map(|layout| layout.is_fixed())
}

/// Byte boundary the encoding must start on; defined for fixed and variable types alike.
pub fn get_alignment(signature: &str) -> Result<usize, SignatureError> {
    get_alignment_with(signature, &ParseLimits::default())
}

pub fn get_alignment_with(signature: &str, limits: &ParseLimits) -> Result<usize, SignatureError> {
    classify_with(signature, limits).map(|layout| layout.alignment)
}

/// Encoded length including padding; `NotFixedSize` selects the framed encoding path.
pub fn get_size(signature: &str) -> Result<usize, SizeError> {
    get_size_with(signature, &ParseLimits::default())
}

pub fn get_size_with(signature: &str, limits: &ParseLimits) -> Result<usize, SizeError> {
    classify_with(signature, limits)?
        .size
        .ok_or(SizeError::NotFixedSize)
}

/// Placement of each member of a struct signature, or of each type of a sequence.
pub fn member_placements(signature: &str) -> Result<Vec<MemberPlacement>, SignatureError> {
    member_placements_with(signature, &ParseLimits::default())
}

pub fn member_placements_with(
    signature: &str,
    limits: &ParseLimits,
) -> Result<Vec<MemberPlacement>, SignatureError> {
    let sequence = parser::parse_with(signature, limits)?;
    Ok(placement::place_members(placement::members_of(&sequence)))
}

#[cfg(test)]
mod tests;
