//! URL-safe slugs.

use deunicode::deunicode;
use once_cell::sync::Lazy;
use regex::Regex;

/// Characters turned into dashes before transliteration.
const SEPARATORS: &[char] = &['·', '/', '_', ',', ':', ';'];

static INVALID_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9 -]").expect("valid regex"));
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static DASH_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("valid regex"));

/// Converts a string into a slug without special characters.
///
/// Non-ASCII text is transliterated to its closest ASCII spelling, not only
/// accented Latin letters (`ñ` → `n`, `é` → `e`, `ß` → `ss`, `北京` → `bei jing`).
/// Separators such as `/`, `_` and `:` become dashes, anything else outside
/// `[a-z0-9]` is dropped, and runs of spaces or dashes collapse into a
/// single dash. Leading and trailing dashes are kept.
///
/// ```rust
/// use hostkit::slugify;
///
/// assert_eq!(slugify("  Crème Brûlée / Día_1 "), "creme-brulee-dia-1");
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// ```
pub fn slugify(input: &str) -> String {
    let separated: String = input
        .trim()
        .chars()
        .map(|c| if SEPARATORS.contains(&c) { '-' } else { c })
        .collect();

    let transliterated = deunicode(&separated).to_lowercase();
    let cleaned = INVALID_CHARS.replace_all(&transliterated, "");
    let dashed = WHITESPACE_RUNS.replace_all(&cleaned, "-");
    DASH_RUNS.replace_all(&dashed, "-").into_owned()
}
