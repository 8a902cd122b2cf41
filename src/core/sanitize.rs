// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&#36;", "$")
        .replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// `"$1,234.56"` → `"1234.56"`.
/// A line holding several amounts (`"$1.3T$1,323,456"`, abbreviated and full)
/// yields the longest one.
pub fn dollar_amount(line: &str) -> Option<String> {
    line.split('$')
        .map(|seg| seg.trim().replace(',', ""))
        .filter(|seg| !seg.is_empty())
        .max_by_key(|seg| seg.len())
}

/// `"1,234.5%"` → `"1234.5"`.
pub fn strip_percent(s: &str) -> String {
    s.trim().replace('%', "").replace(',', "").trim().to_string()
}
