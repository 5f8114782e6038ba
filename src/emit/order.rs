//! Name ordering for emitted components.

use std::cmp::Ordering;

/// Compares icon names the way a default locale collation does.
///
/// Names are compared case-insensitively first. Names that differ only in
/// case are ordered by the first differing character, lowercase first, so
/// the result is total and does not depend on input order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();

    folded(a).cmp(&folded(b)).then_with(|| {
        a.chars()
            .zip(b.chars())
            .find(|(x, y)| x != y)
            .map_or(Ordering::Equal, |(x, y)| {
                x.is_uppercase().cmp(&y.is_uppercase()).then(x.cmp(&y))
            })
            .then_with(|| a.cmp(b))
    })
}
