//! Line and chunk views over raw puzzle input
//!
//! These are pure functions of the raw text. They neither fetch nor cache.

/// Split on `\n`, dropping the final element if it is empty
///
/// Only one trailing empty element is removed, so `"a\n"` and `"a"` both
/// yield `["a"]` while `"a\n\n"` yields `["a", ""]`.
pub fn lines(raw: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = raw.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Map every line through `mapper`, in order
///
/// The first failure aborts the whole call.
pub fn lines_mapped<T, E, F>(raw: &str, mapper: F) -> Result<Vec<T>, E>
where
    F: FnMut(&str) -> Result<T, E>,
{
    lines(raw).into_iter().map(mapper).collect()
}

/// Group consecutive non-empty lines into chunks
///
/// Empty lines separate chunks and are discarded. Empty chunks are never
/// produced, so input made only of blank lines yields no chunks at all.
pub fn chunks(raw: &str) -> Vec<Vec<&str>> {
    let mut result = Vec::new();
    let mut chunk = Vec::new();

    for line in lines(raw) {
        if line.is_empty() {
            if !chunk.is_empty() {
                result.push(std::mem::take(&mut chunk));
            }
            continue;
        }
        chunk.push(line);
    }

    if !chunk.is_empty() {
        result.push(chunk);
    }

    result
}

/// Map every chunk through `mapper`, in order
///
/// The first failure aborts the whole call.
pub fn chunks_mapped<T, E, F>(raw: &str, mut mapper: F) -> Result<Vec<T>, E>
where
    F: FnMut(&[&str]) -> Result<T, E>,
{
    chunks(raw)
        .iter()
        .map(|chunk| mapper(chunk.as_slice()))
        .collect()
}
