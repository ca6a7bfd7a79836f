//! Transform pipeline — trim, uppercase, drop-empty, dedup, in that order.

use std::borrow::Cow;
use std::fmt;

use crate::error::Result;
use crate::history::History;
use crate::profile::Profile;

/// Result of transforming one line.
///
/// `Empty` is a produced zero-length line (possible when `drop_empty` is
/// off) and is distinct from `Suppressed`, which produces nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Text(String),
    Empty,
    Suppressed,
}

/// Discriminant of an [`Output`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Suppressed,
    Empty,
    Text,
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputKind::Suppressed => write!(f, "suppressed"),
            OutputKind::Empty => write!(f, "empty"),
            OutputKind::Text => write!(f, "text"),
        }
    }
}

impl Output {
    pub fn kind(&self) -> OutputKind {
        match self {
            Output::Text(_) => OutputKind::Text,
            Output::Empty => OutputKind::Empty,
            Output::Suppressed => OutputKind::Suppressed,
        }
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, Output::Suppressed)
    }

    /// Produced text, `Some("")` for `Empty`, `None` when suppressed.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Output::Text(s) => Some(s),
            Output::Empty => Some(""),
            Output::Suppressed => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Output::Text(s) => Some(s),
            Output::Empty => Some(String::new()),
            Output::Suppressed => None,
        }
    }
}

/// Whitespace as the trim step sees it: space, `\t`, `\n`, `\x0C`, `\r`.
pub fn is_trim_whitespace(c: char) -> bool {
    c.is_ascii_whitespace()
}

pub fn trim(text: &str) -> &str {
    text.trim_matches(is_trim_whitespace)
}

/// Locale-independent ASCII uppercase. Borrows when nothing changes.
pub fn to_upper(text: &str) -> Result<Cow<'_, str>> {
    if !text.bytes().any(|b| b.is_ascii_lowercase()) {
        return Ok(Cow::Borrowed(text));
    }
    // one spare byte so `detach` never has to grow it
    let mut owned = String::new();
    owned.try_reserve_exact(text.len() + 1)?;
    owned.push_str(text);
    owned.make_ascii_uppercase();
    Ok(Cow::Owned(owned))
}

/// Steps 1–2 only: the normalized form of `line` under `profile`.
pub fn normalize<'a>(line: &'a str, profile: &Profile) -> Result<Cow<'a, str>> {
    let text = if profile.trim { trim(line) } else { line };
    if profile.to_upper {
        return to_upper(text);
    }
    Ok(Cow::Borrowed(text))
}

/// Decode `bytes` as UTF-8 and transform. Malformed input fails with
/// `InvalidEncoding` before any step runs.
pub fn transform_bytes(bytes: &[u8], profile: &Profile, history: &mut History) -> Result<Output> {
    let line = std::str::from_utf8(bytes)?;
    transform_line(line, profile, history)
}

/// Apply `profile` to a single line.
///
/// The output is allocated before the history is touched: when this returns
/// an error the history is exactly as it was.
pub fn transform_line(line: &str, profile: &Profile, history: &mut History) -> Result<Output> {
    let text = normalize(line, profile)?;

    if profile.drop_empty && text.is_empty() {
        return Ok(Output::Suppressed);
    }

    if profile.deduplicate && history.contains(&text) {
        return Ok(Output::Suppressed);
    }

    let produced = detach(text)?;
    if profile.deduplicate {
        history.insert(&produced)?;
    }

    if produced.is_empty() {
        return Ok(Output::Empty);
    }
    Ok(Output::Text(produced))
}

/// Owned copy with at least one byte of spare capacity, so a terminator can
/// be appended without reallocating.
fn detach(text: Cow<'_, str>) -> Result<String> {
    if text.is_empty() {
        return Ok(String::new());
    }
    match text {
        Cow::Owned(mut s) => {
            s.try_reserve_exact(1)?;
            Ok(s)
        }
        Cow::Borrowed(s) => {
            let mut out = String::new();
            out.try_reserve_exact(s.len() + 1)?;
            out.push_str(s);
            Ok(out)
        }
    }
}
