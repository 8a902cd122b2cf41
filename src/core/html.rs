// src/core/html.rs
//
// Tolerant tag-block scanning. No DOM, no nesting awareness: a block runs
// from `<tag` to the first matching `</tag>` after it. Good enough for table
// rows and cells, which never nest inside themselves on the listing page.

use super::sanitize::{normalize_entities, normalize_ws};

/// ASCII-only lowercase. Byte offsets stay aligned with the input.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Iterator over `<tag …>…</tag>` blocks of one or more tag names, in
/// document order.
pub struct TagBlocks<'a> {
    src: &'a str,
    lc: String,
    // (open, close) per tag name
    tags: Vec<(String, String)>,
    pos: usize,
}

impl<'a> TagBlocks<'a> {
    pub fn new(src: &'a str, tags: &[&str]) -> Self {
        let tags = tags
            .iter()
            .map(|t| {
                let t = to_lower(t);
                (join!("<", &t), join!("</", &t, ">"))
            })
            .collect();
        Self { src, lc: to_lower(src), tags, pos: 0 }
    }

    /// Next `<tag` whose name ends right there (`<tr` must not match `<track`).
    fn find_open(&self, open: &str, from: usize) -> Option<usize> {
        let mut at = from;
        loop {
            let start = self.lc.get(at..)?.find(open)? + at;
            let after = start + open.len();
            match self.lc.as_bytes().get(after).copied() {
                Some(b'>' | b'/' | b' ' | b'\t' | b'\r' | b'\n') => return Some(start),
                Some(_) => at = after,
                None => return None,
            }
        }
    }
}

impl<'a> Iterator for TagBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let (start, close) = self
            .tags
            .iter()
            .filter_map(|(open, close)| Some((self.find_open(open, self.pos)?, close)))
            .min_by_key(|(start, _)| *start)?;
        let open_end = self.src[start..].find('>')? + start + 1;
        let end = self.lc[open_end..].find(close.as_str())? + open_end + close.len();
        self.pos = end;
        Some(&self.src[start..end])
    }
}

pub fn tag_blocks<'a>(s: &'a str, tag: &str) -> TagBlocks<'a> {
    TagBlocks::new(s, &[tag])
}

/// Blocks of any of `tags`, interleaved in document order.
pub fn any_tag_blocks<'a>(s: &'a str, tags: &[&str]) -> TagBlocks<'a> {
    TagBlocks::new(s, tags)
}

/// Everything between the opening tag and the final closing tag.
pub fn inner_after_open_tag(block: &str) -> &str {
    if let (Some(oe), Some(cs)) = (block.find('>'), block.rfind('<')) {
        if cs > oe {
            return &block[oe + 1..cs];
        }
    }
    ""
}

const BLOCK_TAGS: &[&str] = &[
    "p", "div", "br", "li", "ul", "ol", "tr", "table", "section", "article",
    "header", "footer", "h1", "h2", "h3", "h4", "h5", "h6",
];

const SKIPPED_TAGS: &[&str] = &["script", "style"];

/// Lowercased name of the tag starting at `s[0] == '<'`, without `/`.
fn tag_name(tag: &str) -> String {
    to_lower(
        &tag.trim_start_matches('<')
            .trim_start_matches('/')
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect::<String>(),
    )
}

/// Source newlines inside text nodes are plain whitespace.
fn push_text(out: &mut String, text: &str) {
    out.push_str(&normalize_entities(text).replace(['\n', '\r'], " "));
}

/// Visible text split into lines the way a browser lays it out:
/// block-level tags break lines, inline tags don't. Entities decoded,
/// whitespace collapsed, blank lines dropped.
pub fn text_lines(html: &str) -> Vec<String> {
    let mut raw = s!();
    let mut rest = html;

    while let Some(lt) = rest.find('<') {
        push_text(&mut raw, &rest[..lt]);
        let after = &rest[lt..];
        if let Some(comment) = after.strip_prefix("<!--") {
            rest = comment.find("-->").map_or("", |i| &comment[i + 3..]);
            continue;
        }
        let Some(gt) = after.find('>') else {
            rest = "";
            break;
        };
        let tag = &after[..=gt];
        let name = tag_name(tag);
        rest = &after[gt + 1..];

        if BLOCK_TAGS.contains(&name.as_str()) {
            raw.push('\n');
        } else if !tag.starts_with("</") && SKIPPED_TAGS.contains(&name.as_str()) {
            let close = join!("</", &name);
            rest = match to_lower(rest).find(&close) {
                Some(i) => &rest[i..],
                None => "",
            };
        }
    }
    push_text(&mut raw, rest);

    raw.split('\n')
        .map(normalize_ws)
        .filter(|l| !l.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_in_order_case_insensitive() {
        let doc = "<TR class=a><td>1</td></TR><tr><td>2</td></tr>";
        let rows: Vec<&str> = tag_blocks(doc, "tr").collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("<TR class=a>"));
        assert_eq!(inner_after_open_tag(rows[1]), "<td>2</td>");
    }

    #[test]
    fn open_must_end_at_tag_name() {
        let doc = "<track src=x></track><tr><td>x</td></tr>";
        let rows: Vec<&str> = tag_blocks(doc, "tr").collect();
        assert_eq!(rows, vec!["<tr><td>x</td></tr>"]);
    }

    #[test]
    fn unterminated_block_ends_iteration() {
        let doc = "<td>1</td><td>2";
        assert_eq!(tag_blocks(doc, "td").count(), 1);
    }

    #[test]
    fn block_tags_break_lines_inline_tags_dont() {
        let cell = r#"<div><p class="name">Bitcoin</p><p>BTC</p></div><span>$1</span><span>,000</span>"#;
        assert_eq!(text_lines(cell), vec!["Bitcoin", "BTC", "$1,000"]);
    }

    #[test]
    fn comments_scripts_and_entities() {
        let cell = "<span>1<!-- -->.<!-- -->5%</span><script>var x = '<p>';</script>&amp;&nbsp;co";
        assert_eq!(text_lines(cell), vec!["1.5%& co"]);
    }

    #[test]
    fn comment_with_angle_bracket_is_skipped_whole() {
        let cell = "<span>$<!-- a>b -->27.01</span><!-- unterminated > x";
        assert_eq!(text_lines(cell), vec!["$27.01"]);
    }

    #[test]
    fn mixed_cells_keep_document_order() {
        let tr = "<tr><th scope=row>1</th><td>Bitcoin</td><TH>x</TH><td>$10</td></tr>";
        let cells: Vec<&str> = any_tag_blocks(tr, &["td", "th"]).collect();
        assert_eq!(
            cells,
            vec!["<th scope=row>1</th>", "<td>Bitcoin</td>", "<TH>x</TH>", "<td>$10</td>"]
        );
    }

    #[test]
    fn thead_is_not_a_th_cell() {
        let doc = "<thead><tr><th>Name</th></tr></thead>";
        assert_eq!(tag_blocks(doc, "th").collect::<Vec<_>>(), vec!["<th>Name</th>"]);
    }

    #[test]
    fn source_newlines_are_whitespace() {
        assert_eq!(text_lines("Solana\n  SOL<br>x"), vec!["Solana SOL", "x"]);
    }
}
