//! Styled text fragments and the inline markup used by headings, table cells and callouts.
//!
//! The types in this module provide a light-weight representation of text "spans" that carry a
//! subset of the styling information supported by [`genpdf`][genpdf].  Every piece of text placed
//! into a cheat sheet goes through [`parse_markup`], so plain content has to be escaped with
//! [`crate::escape::escape_markup`] first.
//!
//! [genpdf]: https://docs.rs/genpdf/

use genpdf::fonts::{Font, FontFamily};
use genpdf::style::{Color, Style};
use thiserror::Error;

use crate::escape::decode_entity;

/// A slice of text together with inline style attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    text: String,
    bold: bool,
    italic: bool,
    monospace: bool,
    color: Option<Color>,
}

impl Span {
    /// Creates a new span with the provided text and no styles applied.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Returns the raw text contained in this span.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the span should be rendered in bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Returns whether the span should be rendered in italic.
    pub fn is_italic(&self) -> bool {
        self.italic
    }

    /// Returns whether the span should be rendered with the monospaced font family.
    pub fn is_monospace(&self) -> bool {
        self.monospace
    }

    /// Returns the configured color for the span, if any.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Sets the span color and returns the updated span.
    pub fn with_color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }

    /// Convenience shorthand that marks the span as bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Convenience shorthand that marks the span as italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Convenience shorthand that marks the span as monospaced.
    pub fn monospace(mut self) -> Self {
        self.monospace = true;
        self
    }

    /// Builds a [`Style`] for the span, switching to `monospace_family` for monospaced spans.
    ///
    /// When no monospaced family is installed the span keeps the document font and only the
    /// remaining attributes apply.
    pub fn to_style_with(&self, monospace_family: Option<FontFamily<Font>>) -> Style {
        let mut style = Style::new();
        if let Some(color) = self.color {
            style.set_color(color);
        }
        if self.bold {
            style.set_bold();
        }
        if self.italic {
            style.set_italic();
        }
        if self.monospace {
            if let Some(family) = monospace_family {
                style.set_font_family(family);
            }
        }
        style
    }
}

/// Concatenates the text of all spans, dropping the styling.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(Span::text).collect()
}

/// Parse errors produced by [`parse_markup`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message} (at byte {index})")]
pub struct ParseError {
    index: usize,
    message: String,
}

impl ParseError {
    fn new(index: usize, message: impl Into<String>) -> Self {
        Self {
            index,
            message: message.into(),
        }
    }

    /// Byte index in the original input string where the error was detected.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Human-readable description of the parsing error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct StyleState {
    bold: bool,
    italic: bool,
    monospace: bool,
    color: Option<Color>,
}

impl StyleState {
    fn to_span(self, text: impl Into<String>) -> Span {
        Span {
            text: text.into(),
            bold: self.bold,
            italic: self.italic,
            monospace: self.monospace,
            color: self.color,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Marker {
    Bold,
    Italic,
    Code,
    Color,
}

impl Marker {
    fn closing_token(self) -> &'static str {
        match self {
            Marker::Bold => "**",
            Marker::Italic => "*",
            Marker::Code => "`",
            Marker::Color => "}",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Marker::Bold => "bold span",
            Marker::Italic => "italic span",
            Marker::Code => "monospace span",
            Marker::Color => "color span",
        }
    }
}

/// Parses the inline markup into a list of [`Span`]s.
///
/// The supported constructs are:
///
/// - `**bold**` for bold text
/// - `*italic*` for italic text
/// - `` `code` `` for monospaced text
/// - `[color=#RRGGBB]{text}` for colored text, where `RRGGBB` is a hexadecimal RGB value
/// - entity references (`&lt;`, `&gt;`, `&amp;`, `&quot;`, `&apos;`, `&#NN;`, `&#xHH;`)
///
/// Raw `<` and `>` are rejected so that unescaped content cannot slip through.  A bare `&` that
/// does not start an entity reference is kept as literal text.
pub fn parse_markup(input: &str) -> Result<Vec<Span>, ParseError> {
    let (spans, _) = parse_inner(input, 0, StyleState::default(), None, 0)?;
    Ok(merge_adjacent(spans))
}

/// Deepest allowed stack of open markers.
const MAX_NESTING: usize = 16;

fn parse_inner(
    input: &str,
    mut index: usize,
    state: StyleState,
    closing_marker: Option<Marker>,
    depth: usize,
) -> Result<(Vec<Span>, usize), ParseError> {
    if depth > MAX_NESTING {
        return Err(ParseError::new(
            index,
            format!("markup is nested more than {MAX_NESTING} levels deep"),
        ));
    }

    let mut spans = Vec::new();
    let mut buffer = String::new();

    while let Some(ch) = input[index..].chars().next() {
        let rest = &input[index..];

        if let Some(marker) = closing_marker {
            if rest.starts_with(marker.closing_token()) {
                flush_buffer(&mut buffer, &mut spans, state);
                index += marker.closing_token().len();
                return Ok((spans, index));
            }
        }

        let opening = if rest.starts_with("**") {
            Some((Marker::Bold, 2))
        } else if ch == '*' {
            Some((Marker::Italic, 1))
        } else if ch == '`' {
            Some((Marker::Code, 1))
        } else {
            None
        };

        if let Some((marker, token_len)) = opening {
            flush_buffer(&mut buffer, &mut spans, state);
            let mut nested_state = state;
            match marker {
                Marker::Bold => nested_state.bold = true,
                Marker::Italic => nested_state.italic = true,
                Marker::Code => nested_state.monospace = true,
                Marker::Color => {}
            }
            let (nested, new_index) = parse_inner(
                input,
                index + token_len,
                nested_state,
                Some(marker),
                depth + 1,
            )?;
            spans.extend(nested);
            index = new_index;
            continue;
        }

        if rest.starts_with("[color=") {
            let (color, after_directive) = parse_color_directive(input, index)?;
            flush_buffer(&mut buffer, &mut spans, state);
            let mut nested_state = state;
            nested_state.color = Some(color);
            let (nested, new_index) = parse_inner(
                input,
                after_directive,
                nested_state,
                Some(Marker::Color),
                depth + 1,
            )?;
            spans.extend(nested);
            index = new_index;
            continue;
        }

        match ch {
            '&' => {
                if let Some((decoded, len)) = decode_entity(rest) {
                    buffer.push(decoded);
                    index += len;
                } else {
                    buffer.push('&');
                    index += 1;
                }
                continue;
            }
            '<' | '>' => {
                return Err(ParseError::new(
                    index,
                    format!("raw `{ch}` is not allowed; escape it as an entity reference"),
                ));
            }
            '}' => {
                return Err(ParseError::new(
                    index,
                    "unexpected closing token `}` without matching opening `[color=...]`",
                ));
            }
            ']' => return Err(ParseError::new(index, "unexpected closing token `]`")),
            '[' | '{' => {
                return Err(ParseError::new(
                    index,
                    "unsupported directive; expected `[color=#RRGGBB]{...}`",
                ));
            }
            _ => {}
        }

        buffer.push(ch);
        index += ch.len_utf8();
    }

    if let Some(marker) = closing_marker {
        Err(ParseError::new(
            index,
            format!("unterminated {}", marker.description()),
        ))
    } else {
        flush_buffer(&mut buffer, &mut spans, state);
        Ok((spans, index))
    }
}

fn flush_buffer(buffer: &mut String, spans: &mut Vec<Span>, state: StyleState) {
    if buffer.is_empty() {
        return;
    }
    spans.push(state.to_span(std::mem::take(buffer)));
}

/// Joins neighbouring spans that ended up with identical styling.
fn merge_adjacent(spans: Vec<Span>) -> Vec<Span> {
    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last)
                if last.bold == span.bold
                    && last.italic == span.italic
                    && last.monospace == span.monospace
                    && last.color == span.color =>
            {
                last.text.push_str(&span.text);
            }
            _ => merged.push(span),
        }
    }
    merged
}

/// Parses a `#RRGGBB` hexadecimal color value.
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn parse_color_directive(input: &str, index: usize) -> Result<(Color, usize), ParseError> {
    const PREFIX: &str = "[color=";
    let start_hex = index + PREFIX.len();
    if !input[start_hex..].starts_with('#') {
        return Err(ParseError::new(
            start_hex,
            "expected `#` followed by a hexadecimal RGB value",
        ));
    }

    let hex_end = start_hex + 7;
    let Some(candidate) = input.get(start_hex..hex_end) else {
        return Err(ParseError::new(
            start_hex + 1,
            "incomplete color specification; expected 6 hexadecimal digits",
        ));
    };

    let color = parse_hex_color(candidate).ok_or_else(|| {
        ParseError::new(
            start_hex + 1,
            "invalid RGB specification; use hexadecimal digits only",
        )
    })?;

    if !input[hex_end..].starts_with(']') {
        return Err(ParseError::new(
            hex_end,
            "expected `]` to close color directive",
        ));
    }

    let brace_index = hex_end + 1;
    if !input[brace_index..].starts_with('{') {
        return Err(ParseError::new(
            brace_index,
            "expected `{` to start the colored text",
        ));
    }

    Ok((color, brace_index + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_to_style_reflects_flags() {
        let span = Span::new("Hello")
            .bold()
            .italic()
            .with_color(Some(Color::Rgb(10, 20, 30)));
        let style = span.to_style_with(None);
        assert!(style.is_bold());
        assert!(style.is_italic());
        assert_eq!(style.color(), Some(Color::Rgb(10, 20, 30)));
    }

    #[test]
    fn parse_plain_text() {
        let spans = parse_markup("Hello world").expect("parse succeeds");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text(), "Hello world");
        assert!(!spans[0].is_bold());
    }

    #[test]
    fn parse_nested_styles() {
        let spans = parse_markup("This is **very *cool***!").expect("parse succeeds");
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0].text(), "This is ");
        assert!(!spans[0].is_bold());
        assert!(spans[1].is_bold());
        assert_eq!(spans[1].text(), "very ");
        assert!(spans[2].is_bold());
        assert!(spans[2].is_italic());
        assert_eq!(spans[2].text(), "cool");
        assert_eq!(spans[3].text(), "!");
        assert!(!spans[3].is_bold());
    }

    #[test]
    fn parse_color_directive() {
        let spans = parse_markup("[color=#ff0000]{Red} text").expect("parse succeeds");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text(), "Red");
        assert_eq!(spans[0].color(), Some(Color::Rgb(0xff, 0x00, 0x00)));
        assert_eq!(spans[1].text(), " text");
    }

    #[test]
    fn parse_code_inside_color() {
        let spans = parse_markup("[color=#E74C3C]{**`git reset --hard`**}").expect("parse succeeds");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text(), "git reset --hard");
        assert!(spans[0].is_bold());
        assert!(spans[0].is_monospace());
        assert_eq!(spans[0].color(), Some(Color::Rgb(0xE7, 0x4C, 0x3C)));
    }

    #[test]
    fn entities_decode_into_a_single_span() {
        let spans = parse_markup("git clone &lt;url&gt; &amp;&amp; cd").expect("parse succeeds");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text(), "git clone <url> && cd");
    }

    #[test]
    fn bare_ampersand_is_literal() {
        let spans = parse_markup("Tips & Tricks").expect("parse succeeds");
        assert_eq!(plain_text(&spans), "Tips & Tricks");
    }

    #[test]
    fn error_on_raw_angle_bracket() {
        let err = parse_markup("<script>").unwrap_err();
        assert_eq!(err.index(), 0);
        assert!(err.message().contains("raw `<`"));
    }

    #[test]
    fn error_on_unterminated_bold() {
        let err = parse_markup("**oops").unwrap_err();
        assert!(err.message().contains("unterminated bold"));
    }

    #[test]
    fn error_on_unterminated_code() {
        let err = parse_markup("`oops").unwrap_err();
        assert!(err.message().contains("unterminated monospace"));
    }

    #[test]
    fn error_on_invalid_color() {
        let err = parse_markup("[color=#12FG34]{x}").unwrap_err();
        assert!(err.message().contains("invalid RGB"));
    }

    #[test]
    fn error_on_truncated_color() {
        let err = parse_markup("[color=#12").unwrap_err();
        assert!(err.message().contains("incomplete color"));
    }

    #[test]
    fn deeply_alternating_markers_are_rejected() {
        let input = "*`".repeat(5_000);
        let err = parse_markup(&input).unwrap_err();
        assert!(err.message().contains("nested more than"));
        assert_eq!(err.index(), MAX_NESTING + 1);
    }

    #[test]
    fn moderate_nesting_still_parses() {
        let spans = parse_markup("[color=#112233]{**`*x*`**}").expect("parse succeeds");
        assert_eq!(spans.len(), 1);
        assert!(spans[0].is_italic() && spans[0].is_monospace() && spans[0].is_bold());
    }

    #[test]
    fn hex_colors_parse() {
        assert_eq!(parse_hex_color("#2E8B57"), Some(Color::Rgb(0x2E, 0x8B, 0x57)));
        assert_eq!(parse_hex_color("2E8B57"), None);
        assert_eq!(parse_hex_color("#2E8B5"), None);
    }
}
