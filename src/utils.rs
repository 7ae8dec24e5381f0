//! Utility functions for the Solana wallet server

use serde::Serializer;

/// Serialize an amount the way a JSON client expects to read it back:
/// whole numbers without a fractional part (`2`), everything else as a float
/// (`1.5`).
pub fn serialize_amount<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && *value >= 0.0 && *value < u64::MAX as f64 {
        serializer.serialize_u64(*value as u64)
    } else {
        serializer.serialize_f64(*value)
    }
}
