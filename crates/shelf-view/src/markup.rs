//! Small markup helpers: escaping and attribute scanning.
//!
//! The scanner only understands the markup this crate renders itself
//! (double-quoted attributes, no nested `>` inside attribute values).

use std::ops::Range;

/// Escape text for use in element content or a double-quoted attribute.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Reverse of [`html_escape`] for attribute values read back from markup.
pub(crate) fn html_unescape(s: &str) -> String {
    s.replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&gt;", ">")
        .replace("&lt;", "<")
        .replace("&amp;", "&")
}

/// Encode a query-string value (spaces become `+`).
pub(crate) fn url_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            ' ' => result.push('+'),
            _ => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}

/// Byte ranges of the opening tags named `name`, without the angle brackets.
fn start_tag_spans<'a>(html: &'a str, name: &'a str) -> impl Iterator<Item = Range<usize>> + 'a {
    let mut offset = 0;
    std::iter::from_fn(move || loop {
        let rest = &html[offset..];
        let start = offset + rest.find('<')? + 1;
        let end = start + html[start..].find('>')?;
        offset = end + 1;

        let tag_name = html[start..end].split_whitespace().next().unwrap_or("");
        if tag_name == name {
            return Some(start..end);
        }
    })
}

/// Opening tags named `name` in document order, without the angle brackets.
pub(crate) fn start_tags<'a>(html: &'a str, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    start_tag_spans(html, name).map(move |span| &html[span])
}

/// Byte range of a double-quoted attribute value inside a start tag.
fn attr_span(tag: &str, name: &str) -> Option<Range<usize>> {
    let needle = format!(" {}=\"", name);
    let start = tag.find(&needle)? + needle.len();
    let len = tag[start..].find('"')?;
    Some(start..start + len)
}

/// Value of a double-quoted attribute inside a start tag.
pub(crate) fn attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    attr_span(tag, name).map(|span| &tag[span])
}

/// Replace the `name` attribute of the `index`-th `tag` element.
///
/// `value` is escaped. Returns `None` when there is no such element or it
/// lacks the attribute.
pub(crate) fn set_attr(
    html: &str,
    tag: &str,
    index: usize,
    name: &str,
    value: &str,
) -> Option<String> {
    let tag_span = start_tag_spans(html, tag).nth(index)?;
    let value_span = attr_span(&html[tag_span.clone()], name)?;
    let from = tag_span.start + value_span.start;
    let to = tag_span.start + value_span.end;
    Some(format!("{}{}{}", &html[..from], html_escape(value), &html[to..]))
}
