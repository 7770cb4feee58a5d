// src/core/sanitize.rs

/// Make a person's name safe to use as a file stem.
///
/// Keeps letters and digits of any script (CJK names stay readable),
/// folds whitespace runs to `_`, keeps `-`/`_`/`.`, drops the rest.
/// Falls back to `fallback` when nothing usable is left.
pub fn sanitize_file_stem(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() || ch == '_' { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' || ch == '.' { out.push(ch); last_us = false; }
    }
    let out = out.trim_matches(|c| c == '_' || c == '.').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}
