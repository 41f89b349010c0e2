//! Engine naming-convention prefixes.

/// Marker the engine puts in front of boolean names (`bHidden`).
pub const BOOL_MARKER: &str = "b";

/// Marker the engine puts in front of input parameter names (`InActor`).
pub const INPUT_MARKER: &str = "In";

/// Strip stacked boolean and input markers from the front of a name.
///
/// A marker is only removed when an upper-case letter follows it, so
/// `bInValue` becomes `Value` while `Inside` and `bool` are left alone.
pub fn strip_prefix(name: &str) -> &str {
    let mut rest = name;
    loop {
        match strip_marker(rest, BOOL_MARKER).or_else(|| strip_marker(rest, INPUT_MARKER)) {
            Some(tail) => rest = tail,
            None => return rest,
        }
    }
}

fn strip_marker<'a>(name: &'a str, marker: &str) -> Option<&'a str> {
    let tail = name.strip_prefix(marker)?;
    tail.chars()
        .next()
        .filter(|c| c.is_uppercase())
        .map(|_| tail)
}
