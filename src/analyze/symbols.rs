use crate::analyze::strip_quotes;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Ephemeral name-to-literal mapping, rebuilt from scratch on every run
/// and discarded afterwards. Last assignment to a name wins.
pub type SymbolTable = HashMap<String, String>;

/// Ordered generic assignment recognizers, most specific first. Each line
/// gets one attempt per pattern; the first pattern that matches decides
/// the line.
fn assignment_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            // Keyword/type-prefixed declarations across the C/Java/let
            // families: `String x = "done";`, `let mut x = 5`,
            // `public static final int N = 4;`, `char *s = "ok";`
            r"^\s*(?:[A-Za-z_][\w<>\[\]*.]*\s+)+[*&]?\$?([A-Za-z_]\w*)\s*=\s*(.+?)\s*;?\s*$",
            // Colon-annotated or walrus forms: `x: i32 = 5`, `x := 5`
            r"^\s*\$?([A-Za-z_]\w*)\s*(?::\s*[\w<>\[\]*]+)?\s*:?=\s*(.+?)\s*;?\s*$",
            // Plain assignment: `x = "ready"`, `$total = 9;`
            r"^\s*\$?([A-Za-z_]\w*)\s*=\s*(.+?)\s*;?\s*$",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("invalid builtin assignment pattern"))
        .collect()
    })
}

/// Scan source text for assignment-like statements and build a
/// name-to-value map. Lines with no match are silently skipped.
pub fn build_symbols(source: &str) -> SymbolTable {
    let mut symbols = SymbolTable::new();

    for line in source.lines() {
        for pattern in assignment_patterns() {
            let Some(caps) = pattern.captures(line) else {
                continue;
            };
            let name = caps[1].to_string();
            let value = caps[2].trim().trim_end_matches(';').trim();
            // `x == y` parses as name `x`, value `= y`; drop comparisons.
            if value.is_empty() || value.starts_with('=') {
                break;
            }
            let value = strip_quotes(value).unwrap_or(value);
            symbols.insert(name, value.to_string());
            break;
        }
    }

    symbols
}
