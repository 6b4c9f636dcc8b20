//! Country code format checks.

/// True when `code` is exactly three ASCII uppercase letters.
///
/// Aggregates published alongside countries (`OWID_WRL`, regions without a
/// code) fail this check and are dropped by the normalizers.
pub fn is_iso3_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}
