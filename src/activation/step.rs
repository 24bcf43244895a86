use crate::error::InvalidArgument;

/// Binary class label: 0 or 1.
pub type BinaryLabel = u8;

/// Heaviside step: fires (1) only for strictly positive input.
///
/// Zero, negative zero and NaN all map to 0.
pub fn step(x: f64) -> BinaryLabel {
    if x > 0.0 { 1 } else { 0 }
}

/// Rejects any target that is not a valid binary label.
pub fn validate_target(target: u8) -> Result<BinaryLabel, InvalidArgument> {
    match target {
        0 | 1 => Ok(target),
        other => Err(InvalidArgument::InvalidTarget(other)),
    }
}
