/// Numeric helpers.
///
/// This module collects the small numeric rules the engine applies in more
/// than one place: the non-finite-to-zero guard, sample clamping, tolerant
/// equality, truth values and exact grid-index conversion.
pub mod num;
