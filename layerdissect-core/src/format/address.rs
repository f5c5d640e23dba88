//! Address-like formatting for 32-bit identifiers.
//!
//! OSPF router and area IDs are plain 32-bit numbers that are conventionally
//! written like IPv4 addresses. They are formatted, never validated as
//! reachable addresses.

use std::fmt::Write;

use compact_str::CompactString;

/// Format four octets as a dotted-decimal string.
///
/// # Example
///
/// ```
/// use layerdissect_core::format::format_dotted_quad;
///
/// assert_eq!(format_dotted_quad([192, 0, 2, 1]), "192.0.2.1");
/// assert_eq!(format_dotted_quad([0, 0, 0, 1]), "0.0.0.1");
/// ```
pub fn format_dotted_quad(octets: [u8; 4]) -> CompactString {
    let mut out = CompactString::default();
    // Writing into a CompactString cannot fail.
    let _ = write!(out, "{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3]);
    out
}
