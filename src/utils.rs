//! Small formatting helpers.

/// Format a count with the right noun form.
///
/// - `count_noun(1, "chart", "charts")` -> `"1 chart"`
/// - `count_noun(3, "entry", "entries")` -> `"3 entries"`
#[inline]
pub fn count_noun(n: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { plural })
}
