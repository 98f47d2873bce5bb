//! Answer variant extraction for vocabulary cells.
//!
//! A cell may list several acceptable spellings:
//! ```text
//! go/went          -> ["go", "went"]
//! run, ran         -> ["run", "ran"]
//! colour\color     -> ["colour", "color"]
//! go (went)        -> ["go", "went"]
//! run/ran, runs    -> ["run", "ran", "runs"]
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that structure a cell and never belong to a variant.
pub const SEPARATORS: [char; 5] = ['/', ',', '\\', '(', ')'];

/// Pair shapes in priority order: slash, comma, backslash, parenthetical.
static SHAPES: Lazy<[Regex; 4]> = Lazy::new(|| {
    [
        Regex::new(r"([^/,\\()]+)/([^/,\\()]+)").expect("slash pattern"),
        Regex::new(r"([^/,\\()]+),\s*([^/,\\()]+)").expect("comma pattern"),
        Regex::new(r"([^/,\\()]+)\\([^/,\\()]+)").expect("backslash pattern"),
        Regex::new(r"([^/,\\()]+)\(([^/,\\()]+)\)").expect("parenthetical pattern"),
    ]
});

/// Extract every acceptable answer from a raw cell, in discovery order.
///
/// Returns an empty list for blank input. Case is preserved; matching is
/// case-insensitive at answer time.
pub fn parse_variants(raw: &str) -> Vec<String> {
    let original = raw.trim();
    if original.is_empty() {
        return Vec::new();
    }

    let mut found: Vec<String> = Vec::new();
    let mut working = original.to_string();

    // Each rewrite removes at least one separator, so this terminates.
    loop {
        let mut matched = false;

        for shape in SHAPES.iter() {
            let mut hit = false;
            for caps in shape.captures_iter(&working) {
                hit = true;
                push_unique(&mut found, caps[1].trim());
                push_unique(&mut found, caps[2].trim());
            }

            if hit {
                matched = true;
                working = shape.replace_all(&working, "$1").into_owned();
            }
        }

        if !matched {
            break;
        }
    }

    if found.is_empty() {
        found.push(original.to_string());
    } else {
        push_unique(&mut found, working.trim());
    }

    let mut cleaned = Vec::with_capacity(found.len());
    for candidate in &found {
        let stripped: String = candidate.chars().filter(|c| !SEPARATORS.contains(c)).collect();
        push_unique(&mut cleaned, stripped.trim());
    }

    if cleaned.is_empty() {
        cleaned.push(original.to_string());
    }
    cleaned
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !value.is_empty() && !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}
