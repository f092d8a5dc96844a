//! Custom element implementations built on top of `genpdf` primitives.
//!
//! `genpdf` has no notion of filled table rows, so [`ShadedTable`] measures each row, paints its
//! background from overlapping hairlines and then prints the wrapped cell text on top.  The
//! remaining helpers cover fixed vertical gaps and recording the page on which each section
//! starts.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use genpdf::elements::Paragraph;
use genpdf::error::{Error, ErrorKind};
use genpdf::fonts::{Font, FontCache, FontFamily};
use genpdf::style::{Color, Style, StyledString};
use genpdf::{render, Element, Margins, Mm, Position, RenderResult, Size};

use crate::richtext::Span;

pub(crate) fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

pub(crate) fn mm_to_f64(value: Mm) -> f64 {
    let mm: printpdf::Mm = value.into();
    mm.0
}

/// Page counter shared between the page decorator and the elements placed on the pages.
///
/// Cloning the tracker yields a handle to the same counter.
#[derive(Clone, Debug, Default)]
pub struct PageTracker {
    page: Rc<Cell<usize>>,
}

impl PageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves to the next page and returns its 1-based number.
    pub fn advance(&self) -> usize {
        let next = self.page.get() + 1;
        self.page.set(next);
        next
    }

    /// Returns the number of the page currently being rendered (0 before the first page).
    pub fn current(&self) -> usize {
        self.page.get()
    }
}

/// First page of every section, filled in while the document renders.
#[derive(Clone, Debug, Default)]
pub struct SectionPages {
    pages: Rc<RefCell<Vec<Option<usize>>>>,
}

impl SectionPages {
    pub fn new(sections: usize) -> Self {
        Self {
            pages: Rc::new(RefCell::new(vec![None; sections])),
        }
    }

    /// Records `page` for `section` unless a page is already known.
    pub fn record(&self, section: usize, page: usize) {
        let mut pages = self.pages.borrow_mut();
        if section >= pages.len() {
            pages.resize(section + 1, None);
        }
        if pages[section].is_none() {
            pages[section] = Some(page);
        }
    }

    pub fn to_vec(&self) -> Vec<Option<usize>> {
        self.pages.borrow().clone()
    }
}

/// Wraps a section heading and records the page it first lands on.
///
/// Renders that produce no visible output (the heading did not fit and moves on to the next page)
/// are not recorded.
pub struct SectionAnchor<E: Element> {
    inner: E,
    section: usize,
    tracker: PageTracker,
    pages: SectionPages,
}

impl<E: Element> SectionAnchor<E> {
    pub fn new(inner: E, section: usize, tracker: PageTracker, pages: SectionPages) -> Self {
        Self {
            inner,
            section,
            tracker,
            pages,
        }
    }
}

impl<E: Element> Element for SectionAnchor<E> {
    fn render(
        &mut self,
        context: &genpdf::Context,
        area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let result = self.inner.render(context, area, style)?;
        if mm_to_f64(result.size.height) > 0.0 {
            self.pages.record(self.section, self.tracker.current());
        }
        Ok(result)
    }
}

/// Fixed vertical gap.
///
/// Unlike `genpdf::elements::Break` the height is given in millimetres instead of lines.  A gap
/// that does not fit on the current page is truncated rather than carried over.
#[derive(Clone, Copy, Debug)]
pub struct VerticalSpace {
    height: Mm,
}

impl VerticalSpace {
    pub fn new(height_mm: f64) -> Self {
        Self {
            height: mm_from_f64(height_mm),
        }
    }
}

impl Element for VerticalSpace {
    fn render(
        &mut self,
        _context: &genpdf::Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let available = area.size().height;
        let height = if self.height > available {
            available
        } else {
            self.height
        };
        Ok(RenderResult {
            size: Size::new(0, height),
            has_more: false,
        })
    }
}

/// Width of the stroke `Area::draw_line` paints: one PDF point.
const HAIRLINE_MM: f64 = 0.3528;
/// Distance between neighbouring fill strokes, kept below the hairline width so they overlap.
const FILL_STEP_MM: f64 = 0.3;

/// Colour and weight of the lines around every cell of a [`ShadedTable`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rule {
    color: Color,
    passes: usize,
}

impl Rule {
    /// Approximates `thickness_mm` with nested hairline rectangles.
    pub fn new(color: Color, thickness_mm: f64) -> Self {
        let passes = (thickness_mm / HAIRLINE_MM).ceil().max(1.0) as usize;
        Self { color, passes }
    }
}

/// Wrapped content of one table cell: paragraphs of styled words and fixed gaps.
#[derive(Clone, Debug, Default)]
pub struct CellText {
    blocks: Vec<CellBlock>,
}

#[derive(Clone, Debug)]
enum CellBlock {
    Words(Vec<StyledString>),
    Gap(Mm),
}

/// A single output line, or a gap when `words` is empty.
struct CellLine {
    words: Vec<StyledString>,
    height: Mm,
}

impl CellText {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cell holding one paragraph.
    pub fn from_spans(spans: &[Span], monospace: Option<FontFamily<Font>>) -> Self {
        Self::new().with_spans(spans, monospace)
    }

    /// Appends a paragraph that starts on a new line.
    pub fn with_spans(mut self, spans: &[Span], monospace: Option<FontFamily<Font>>) -> Self {
        self.blocks.push(CellBlock::Words(styled_words(spans, monospace)));
        self
    }

    /// Appends an empty vertical gap.
    pub fn with_gap(mut self, height_mm: f64) -> Self {
        self.blocks.push(CellBlock::Gap(mm_from_f64(height_mm)));
        self
    }

    fn lay_out(&self, font_cache: &FontCache, width: Mm, style: Style) -> Vec<CellLine> {
        let base_height = style.line_height(font_cache);
        let mut lines = Vec::new();
        for block in &self.blocks {
            match block {
                CellBlock::Gap(height) => lines.push(CellLine {
                    words: Vec::new(),
                    height: *height,
                }),
                CellBlock::Words(words) => {
                    let merged: Vec<StyledString> = words
                        .iter()
                        .map(|word| StyledString::new(word.s.clone(), style.and(word.style)))
                        .collect();
                    for line in wrap_words(&merged, width, |word| word.width(font_cache)) {
                        let height = line
                            .iter()
                            .map(|word| word.style.line_height(font_cache))
                            .fold(base_height, Mm::max);
                        lines.push(CellLine {
                            words: line.to_vec(),
                            height,
                        });
                    }
                }
            }
        }
        lines
    }
}

/// Splits spans into words that keep their trailing space, the unit `genpdf` wraps on.
fn styled_words(spans: &[Span], monospace: Option<FontFamily<Font>>) -> Vec<StyledString> {
    spans
        .iter()
        .flat_map(|span| {
            let style = span.to_style_with(monospace);
            span.text()
                .split_inclusive(' ')
                .map(move |word| StyledString::new(word, style))
        })
        .collect()
}

/// Greedy line breaking.  A word wider than `max_width` gets a line of its own.
fn wrap_words<T>(words: &[T], max_width: Mm, width_of: impl Fn(&T) -> Mm) -> Vec<&[T]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut x = Mm::default();
    for (index, word) in words.iter().enumerate() {
        let width = width_of(word);
        if index > start && x + width > max_width {
            lines.push(&words[start..index]);
            start = index;
            x = Mm::default();
        }
        x += width;
    }
    if start < words.len() {
        lines.push(&words[start..]);
    }
    lines
}

/// Vertical positions of the strokes that cover `height_mm` completely.
fn fill_offsets(height_mm: f64) -> Vec<f64> {
    if height_mm <= 0.0 {
        return Vec::new();
    }
    let half = HAIRLINE_MM / 2.0;
    if height_mm <= HAIRLINE_MM {
        return vec![height_mm / 2.0];
    }

    let last = height_mm - half;
    let mut offsets = Vec::new();
    let mut y = half;
    while y < last {
        offsets.push(y);
        y += FILL_STEP_MM;
    }
    offsets.push(last);
    offsets
}

/// Paints a solid rectangle at the origin of `area`.
///
/// `Area` only strokes lines, so the rectangle is built from overlapping horizontal hairlines.
fn fill_rect(area: &render::Area<'_>, size: Size, color: Color) {
    let style = Style::new().with_color(color);
    for y in fill_offsets(mm_to_f64(size.height)) {
        let y = mm_from_f64(y);
        area.draw_line(vec![Position::new(0, y), Position::new(size.width, y)], style);
    }
}

fn stroke_rect(area: &render::Area<'_>, size: Size, rule: Rule) {
    let style = Style::new().with_color(rule.color);
    for pass in 0..rule.passes {
        let inset = mm_from_f64(pass as f64 * HAIRLINE_MM * 0.9);
        let (left, top) = (inset, inset);
        let (right, bottom) = (size.width - inset, size.height - inset);
        area.draw_line(
            vec![
                Position::new(left, top),
                Position::new(right, top),
                Position::new(right, bottom),
                Position::new(left, bottom),
                Position::new(left, top),
            ],
            style,
        );
    }
}

fn print_lines(
    context: &genpdf::Context,
    area: &render::Area<'_>,
    lines: &[CellLine],
    style: Style,
) -> Result<(), Error> {
    let mut y = Mm::default();
    for line in lines {
        if !line.words.is_empty() {
            let mut section = area
                .text_section(&context.font_cache, Position::new(0, y), style)
                .ok_or_else(|| {
                    Error::new(
                        "Cell text does not fit into its row",
                        ErrorKind::PageSizeExceeded,
                    )
                })?;
            for word in &line.words {
                section.print_str(&word.s, word.style)?;
            }
        }
        y += line.height;
    }
    Ok(())
}

/// Table whose rows carry a background fill.
///
/// Every row is measured before anything is drawn, so the fill goes down first and the text is
/// printed on top of it.  Rows are never split: a row that does not fit moves to the next page.
pub struct ShadedTable {
    column_weights: Vec<usize>,
    rows: Vec<ShadedRow>,
    render_idx: usize,
    padding: Margins,
    rule: Option<Rule>,
}

struct ShadedRow {
    cells: Vec<CellText>,
    fill: Option<Color>,
}

impl ShadedTable {
    pub fn new(column_weights: Vec<usize>) -> Self {
        Self {
            column_weights,
            rows: Vec::new(),
            render_idx: 0,
            padding: Margins::default(),
            rule: None,
        }
    }

    /// Space between the cell edges and the text.
    pub fn with_padding(mut self, padding: Margins) -> Self {
        self.padding = padding;
        self
    }

    /// Outlines every cell.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Adds a row.  `cells` must have one entry per column.
    pub fn push_row(&mut self, cells: Vec<CellText>, fill: Option<Color>) -> Result<(), Error> {
        if cells.len() != self.column_weights.len() {
            return Err(Error::new(
                format!(
                    "Expected {} cells in table row, received {}",
                    self.column_weights.len(),
                    cells.len()
                ),
                ErrorKind::InvalidData,
            ));
        }
        self.rows.push(ShadedRow { cells, fill });
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl Element for ShadedTable {
    fn render(
        &mut self,
        context: &genpdf::Context,
        mut area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let mut result = RenderResult::default();
        if self.column_weights.is_empty() {
            return Ok(result);
        }
        result.size.width = area.size().width;

        while let Some(row) = self.rows.get(self.render_idx) {
            let cell_areas = area.split_horizontally(&self.column_weights);
            let mut cells = Vec::with_capacity(cell_areas.len());
            let mut row_height = Mm::default();
            for (cell, cell_area) in row.cells.iter().zip(&cell_areas) {
                let mut inner = cell_area.clone();
                inner.add_margins(self.padding);
                let padding = cell_area.size().height - inner.size().height;
                let lines = cell.lay_out(&context.font_cache, inner.size().width, style);
                let height = lines.iter().map(|line| line.height).sum::<Mm>() + padding;
                row_height = row_height.max(height);
                cells.push((inner, lines));
            }

            if row_height > area.size().height {
                break;
            }

            if let Some(fill) = row.fill {
                fill_rect(&area, Size::new(area.size().width, row_height), fill);
            }
            for (inner, lines) in &cells {
                print_lines(context, inner, lines, style)?;
            }
            if let Some(rule) = self.rule {
                for cell_area in &cell_areas {
                    stroke_rect(cell_area, Size::new(cell_area.size().width, row_height), rule);
                }
            }

            result.size.height += row_height;
            area.add_offset(Position::new(0, row_height));
            self.render_idx += 1;
        }

        result.has_more = self.render_idx < self.rows.len();
        Ok(result)
    }
}

/// Builds a paragraph from parsed spans.
///
/// Monospaced spans use `monospace` when a monospaced family is installed in the document.
pub fn rich_paragraph(spans: &[Span], monospace: Option<FontFamily<Font>>) -> Paragraph {
    let mut paragraph = Paragraph::default();
    for span in spans {
        paragraph.push(StyledString::new(
            span.text().to_owned(),
            span.to_style_with(monospace),
        ));
    }
    paragraph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_handles_share_the_counter() {
        let tracker = PageTracker::new();
        let handle = tracker.clone();
        assert_eq!(tracker.current(), 0);
        assert_eq!(handle.advance(), 1);
        assert_eq!(handle.advance(), 2);
        assert_eq!(tracker.current(), 2);
    }

    #[test]
    fn section_pages_keep_first_page() {
        let pages = SectionPages::new(2);
        pages.record(0, 1);
        pages.record(0, 2);
        pages.record(3, 4);
        assert_eq!(pages.to_vec(), vec![Some(1), None, None, Some(4)]);
    }

    #[test]
    fn mm_conversion_round_trips() {
        assert!((mm_to_f64(mm_from_f64(12.5)) - 12.5).abs() < 1e-9);
    }

    #[test]
    fn words_keep_their_trailing_space_and_span_style() {
        let spans = [Span::new("git commit ").bold(), Span::new("-m msg")];
        let cell = CellText::from_spans(&spans, None);
        let CellBlock::Words(words) = &cell.blocks[0] else {
            panic!("expected a paragraph");
        };
        let texts: Vec<&str> = words.iter().map(|word| word.s.as_str()).collect();
        assert_eq!(texts, ["git ", "commit ", "-m ", "msg"]);
        assert!(words[1].style.is_bold());
        assert!(!words[2].style.is_bold());
    }

    #[test]
    fn lines_break_before_the_word_that_overflows() {
        let words = ["aaa ", "bb ", "cccc ", "d"];
        let width_of = |word: &&str| Mm::from(word.len() as i32);
        let lines = wrap_words(&words, Mm::from(8), width_of);
        assert_eq!(lines, vec![&words[0..2], &words[2..4]]);
    }

    #[test]
    fn overlong_words_get_a_line_of_their_own() {
        let words = ["a ", "abcdefghij ", "b"];
        let width_of = |word: &&str| Mm::from(word.len() as i32);
        let lines = wrap_words(&words, Mm::from(4), width_of);
        assert_eq!(lines, vec![&words[0..1], &words[1..2], &words[2..3]]);
    }

    #[test]
    fn fill_strokes_cover_the_whole_row() {
        let height = 6.4;
        let offsets = fill_offsets(height);
        let half = HAIRLINE_MM / 2.0;
        assert!((offsets[0] - half).abs() < 1e-9, "top edge covered");
        assert!((offsets[offsets.len() - 1] + half - height).abs() < 1e-9, "bottom edge covered");
        assert!(offsets
            .windows(2)
            .all(|pair| pair[1] - pair[0] <= HAIRLINE_MM && pair[1] > pair[0]));
    }

    #[test]
    fn thin_and_empty_rows_still_get_sensible_fills() {
        assert!(fill_offsets(0.0).is_empty());
        assert_eq!(fill_offsets(0.2), vec![0.1]);
    }

    #[test]
    fn thick_rules_use_several_passes() {
        let grey = Color::Rgb(200, 200, 200);
        assert_eq!(Rule::new(grey, 0.2).passes, 1);
        assert_eq!(Rule::new(grey, 1.0).passes, 3);
    }

    #[test]
    fn rows_must_match_the_column_count() {
        let mut table = ShadedTable::new(vec![3, 7]);
        table
            .push_row(vec![CellText::new(), CellText::new()], None)
            .expect("two cells fit two columns");
        let err = table
            .push_row(vec![CellText::new()], Some(Color::Rgb(1, 2, 3)))
            .unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidData));
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn callout_content_mixes_paragraphs_and_gaps() {
        let cell = CellText::new()
            .with_spans(&[Span::new("Tip")], None)
            .with_gap(2.5)
            .with_spans(&[Span::new("Use it")], None);
        assert_eq!(cell.blocks.len(), 3);
        assert!(matches!(cell.blocks[1], CellBlock::Gap(height) if height == mm_from_f64(2.5)));
    }

    #[test]
    fn rich_paragraph_accepts_styled_spans() {
        let spans = [Span::new("git ").bold(), Span::new("init").monospace()];
        let _paragraph = rich_paragraph(&spans, None);
    }
}
