//! Commonly used constants

/// Pattern of a UPI virtual payment address, `local-part@handle`.
///
/// Both parts are restricted to ASCII word characters, dots and hyphens.
pub const UPI_VPA_PATTERN: &str = r"^[A-Za-z0-9_.\-]+@[A-Za-z0-9_.\-]+$";

/// Separator between the local part and the handle of a UPI id.
pub const UPI_VPA_SEPARATOR: char = '@';
