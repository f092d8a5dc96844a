//! Escaping of plain text for embedding into the inline markup understood by
//! [`crate::richtext::parse_markup`].
//!
//! Every markup-significant character is replaced by an entity reference.  Entity references that
//! are already present in the input are kept as they are, which makes [`escape_markup`]
//! idempotent: content that was escaped once upstream renders exactly like raw content.

use std::borrow::Cow;

/// Named entity references recognised by the markup parser.
const NAMED_ENTITIES: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
];

/// Longest accepted entity body between `&` and `;` (`#x10FFFF` is eight bytes).
const MAX_ENTITY_BODY: usize = 8;

/// Returns the entity reference used for a markup-significant character.
fn replacement(ch: char) -> Option<&'static str> {
    match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '*' => Some("&#42;"),
        '`' => Some("&#96;"),
        '[' => Some("&#91;"),
        ']' => Some("&#93;"),
        '{' => Some("&#123;"),
        '}' => Some("&#125;"),
        _ => None,
    }
}

/// Returns whether `ch` carries meaning in the inline markup.
pub fn is_markup_significant(ch: char) -> bool {
    replacement(ch).is_some()
}

/// Decodes the entity reference at the start of `input`.
///
/// On success, returns the decoded character together with the byte length of the reference
/// (including the leading `&` and trailing `;`).  Returns `None` if `input` does not start with a
/// well-formed entity reference.
pub fn decode_entity(input: &str) -> Option<(char, usize)> {
    let rest = input.strip_prefix('&')?;
    let end = rest
        .char_indices()
        .take(MAX_ENTITY_BODY + 1)
        .find(|(_, ch)| *ch == ';')
        .map(|(index, _)| index)?;
    let body = &rest[..end];
    let consumed = end + 2;

    if let Some(numeric) = body.strip_prefix('#') {
        let value = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) if !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()) => {
                u32::from_str_radix(hex, 16).ok()?
            }
            Some(_) => return None,
            None if !numeric.is_empty() && numeric.chars().all(|c| c.is_ascii_digit()) => {
                numeric.parse::<u32>().ok()?
            }
            None => return None,
        };
        return char::from_u32(value).map(|ch| (ch, consumed));
    }

    NAMED_ENTITIES
        .iter()
        .find(|(name, _)| *name == body)
        .map(|(_, ch)| (*ch, consumed))
}

/// Escapes `input` so that it renders as literal text when embedded in markup.
///
/// Existing entity references are preserved, so escaping twice yields the same result as
/// escaping once.  Inputs without markup-significant characters are returned borrowed.
pub fn escape_markup(input: &str) -> Cow<'_, str> {
    if !input.chars().any(is_markup_significant) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 16);
    let mut index = 0;
    while let Some(ch) = input[index..].chars().next() {
        if ch == '&' {
            if let Some((_, len)) = decode_entity(&input[index..]) {
                escaped.push_str(&input[index..index + len]);
                index += len;
                continue;
            }
        }

        match replacement(ch) {
            Some(entity) => escaped.push_str(entity),
            None => escaped.push(ch),
        }
        index += ch.len_utf8();
    }

    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape_markup("git status"), Cow::Borrowed("git status")));
    }

    #[test]
    fn script_tag_is_escaped() {
        assert_eq!(escape_markup("<script>"), "&lt;script&gt;");
    }

    #[test]
    fn markup_tokens_are_escaped() {
        assert_eq!(
            escape_markup("space-x-* [a]{b} `c`"),
            "space-x-&#42; &#91;a&#93;&#123;b&#125; &#96;c&#96;"
        );
    }

    #[test]
    fn escaping_is_idempotent() {
        let inputs = [
            "<script>",
            "git clone &lt;url&gt;",
            "Tom & Jerry",
            "&amp;&lt;",
            "stash@{<index>}",
            "&#;&#x;&unknown;",
            "Cache::lock('order')->get(function () {...})",
        ];
        for input in inputs {
            let once = escape_markup(input).into_owned();
            let twice = escape_markup(&once).into_owned();
            assert_eq!(once, twice, "escaping {input:?} twice changed the output");
        }
    }

    #[test]
    fn pre_escaped_and_raw_content_agree() {
        assert_eq!(
            escape_markup("git clone &lt;url&gt;"),
            escape_markup("git clone <url>")
        );
    }

    #[test]
    fn bare_ampersand_is_escaped() {
        assert_eq!(escape_markup("a && b"), "a &amp;&amp; b");
    }

    #[test]
    fn decodes_named_and_numeric_entities() {
        assert_eq!(decode_entity("&lt;rest"), Some(('<', 4)));
        assert_eq!(decode_entity("&#42;"), Some(('*', 5)));
        assert_eq!(decode_entity("&#x7B;"), Some(('{', 6)));
        assert_eq!(decode_entity("&bogus;"), None);
        assert_eq!(decode_entity("& x;"), None);
        assert_eq!(decode_entity("&#xD800;"), None);
    }

    #[test]
    fn escaped_text_parses_back_to_the_original() {
        let raw = "<div class=\"p-4\"> & [x] *not italic*";
        let spans =
            crate::richtext::parse_markup(&escape_markup(raw)).expect("escaped text parses");
        assert_eq!(crate::richtext::plain_text(&spans), raw);
    }
}
