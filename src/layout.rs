//! Layout planning: turns a [`Document`] into a fully resolved, renderer-agnostic [`Plan`].
//!
//! Planning is a single pass over the document.  Every text field is validated and escaped,
//! wrapped into the inline markup that carries its styling, and parsed back into [`Span`]s.
//! Column widths are resolved to millimetres and every table row gets its background shade.
//! The renderer in [`crate::assembler`] only translates the plan into `genpdf` elements, so all
//! [`FormatError`]s surface here, before any font is loaded or any byte is written.

use genpdf::style::Color;

use crate::error::FormatError;
use crate::escape::escape_markup;
use crate::model::{Block, Callout, Document, RowEntry, Section};
use crate::richtext::{parse_markup, plain_text, Span};
use crate::style::{hex, StyleConfig};

/// Markup text together with its parsed spans.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedText {
    markup: String,
    spans: Vec<Span>,
}

impl PlannedText {
    fn parse(markup: String, location: impl FnOnce() -> String) -> Result<Self, FormatError> {
        let spans = parse_markup(&markup).map_err(|source| FormatError::Markup {
            location: location(),
            source,
        })?;
        Ok(Self { markup, spans })
    }

    /// The markup the spans were parsed from, with all content escaped.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// The text as it appears on the page.
    pub fn plain(&self) -> String {
        plain_text(&self.spans)
    }
}

/// One table row with its background shade.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedRow {
    cells: Vec<PlannedText>,
    fill: Color,
}

impl PlannedRow {
    pub fn cells(&self) -> &[PlannedText] {
        &self.cells
    }

    pub fn fill(&self) -> Color {
        self.fill
    }
}

/// A section heading and its table.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedSection {
    index: usize,
    heading: PlannedText,
    heading_color: Color,
    widths_mm: Vec<f64>,
    header: Option<PlannedRow>,
    rows: Vec<PlannedRow>,
}

impl PlannedSection {
    /// Position of the section among all sections of the document.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn heading(&self) -> &PlannedText {
        &self.heading
    }

    pub fn heading_color(&self) -> Color {
        self.heading_color
    }

    /// Resolved column widths in millimetres.
    pub fn widths_mm(&self) -> &[f64] {
        &self.widths_mm
    }

    /// Column weights for [`crate::elements::ShadedTable`], in tenths of a millimetre.
    pub fn column_weights(&self) -> Vec<usize> {
        self.widths_mm
            .iter()
            .map(|width| ((width * 10.0).round() as usize).max(1))
            .collect()
    }

    pub fn header(&self) -> Option<&PlannedRow> {
        self.header.as_ref()
    }

    /// Data rows, excluding the header.
    pub fn rows(&self) -> &[PlannedRow] {
        &self.rows
    }

    /// Header row followed by the data rows.
    pub fn table_rows(&self) -> impl Iterator<Item = &PlannedRow> {
        self.header.iter().chain(self.rows.iter())
    }

    /// Total number of table rows including the header.
    pub fn table_row_count(&self) -> usize {
        self.rows.len() + usize::from(self.header.is_some())
    }
}

/// A callout panel.  `None` lines are vertical gaps.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedCallout {
    lines: Vec<Option<PlannedText>>,
    fill: Color,
    border: Color,
    text_color: Color,
}

impl PlannedCallout {
    pub fn lines(&self) -> &[Option<PlannedText>] {
        &self.lines
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn border(&self) -> Color {
        self.border
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PlannedBlock {
    Section(PlannedSection),
    Callout(PlannedCallout),
    PageBreak,
}

/// The resolved layout of a document.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    title: PlannedText,
    subtitle: Option<PlannedText>,
    blocks: Vec<PlannedBlock>,
    content_width_mm: f64,
}

impl Plan {
    pub fn title(&self) -> &PlannedText {
        &self.title
    }

    pub fn subtitle(&self) -> Option<&PlannedText> {
        self.subtitle.as_ref()
    }

    pub fn blocks(&self) -> &[PlannedBlock] {
        &self.blocks
    }

    /// Width between the left and right page margins.
    pub fn content_width_mm(&self) -> f64 {
        self.content_width_mm
    }

    pub fn sections(&self) -> impl Iterator<Item = &PlannedSection> {
        self.blocks.iter().filter_map(|block| match block {
            PlannedBlock::Section(section) => Some(section),
            _ => None,
        })
    }

    pub fn section_count(&self) -> usize {
        self.sections().count()
    }

    /// Plain-text section titles in document order.
    pub fn section_titles(&self) -> Vec<String> {
        self.sections().map(|section| section.heading.plain()).collect()
    }
}

/// Plans `document` with the given style.
pub fn plan(document: &Document, style: &StyleConfig) -> Result<Plan, FormatError> {
    check_text(document.title(), || "document title".to_owned())?;
    let title = PlannedText::parse(escape_markup(document.title()).into_owned(), || {
        "document title".to_owned()
    })?;

    let subtitle = match document.subtitle() {
        Some(subtitle) => {
            check_text(subtitle, || "document subtitle".to_owned())?;
            Some(PlannedText::parse(
                escape_markup(subtitle).into_owned(),
                || "document subtitle".to_owned(),
            )?)
        }
        None => None,
    };

    let mut blocks = Vec::with_capacity(document.blocks().len());
    let mut section_index = 0;
    let mut callout_index = 0;
    for block in document.blocks() {
        match block {
            Block::Section(section) => {
                blocks.push(PlannedBlock::Section(plan_section(
                    section,
                    section_index,
                    style,
                )?));
                section_index += 1;
            }
            Block::Callout(callout) => {
                blocks.push(PlannedBlock::Callout(plan_callout(
                    callout,
                    callout_index,
                    style,
                )?));
                callout_index += 1;
            }
            Block::PageBreak => {
                if !matches!(blocks.last(), None | Some(PlannedBlock::PageBreak)) {
                    blocks.push(PlannedBlock::PageBreak);
                }
            }
        }
    }
    while matches!(blocks.last(), Some(PlannedBlock::PageBreak)) {
        blocks.pop();
    }

    Ok(Plan {
        title,
        subtitle,
        blocks,
        content_width_mm: style.content_width_mm(),
    })
}

fn check_text(text: &str, location: impl FnOnce() -> String) -> Result<(), FormatError> {
    match text.chars().find(|ch| ch.is_control()) {
        Some(character) => Err(FormatError::ControlCharacter {
            location: location(),
            character,
        }),
        None => Ok(()),
    }
}

fn plan_section(
    section: &Section,
    index: usize,
    style: &StyleConfig,
) -> Result<PlannedSection, FormatError> {
    let name = section.title();
    check_text(name, || format!("title of section {index}"))?;

    let columns = section.columns();
    if section.rows().iter().any(|row| row.columns() != columns) {
        return Err(FormatError::MixedRowShapes {
            section: name.to_owned(),
        });
    }

    let widths = section.effective_widths();
    if widths.len() != columns {
        return Err(FormatError::ColumnCountMismatch {
            section: name.to_owned(),
            expected: columns,
            found: widths.len(),
        });
    }
    if !widths.is_valid() {
        return Err(FormatError::InvalidWidths {
            section: name.to_owned(),
        });
    }

    let heading = PlannedText::parse(format!("**{}**", escape_markup(name)), || {
        format!("title of section '{name}'")
    })?;

    let header = match section.header() {
        Some(cells) if cells.len() != columns => {
            return Err(FormatError::HeaderMismatch {
                section: name.to_owned(),
                expected: columns,
                found: cells.len(),
            });
        }
        Some(cells) => {
            let color = hex(style.palette.header_text);
            let cells = cells
                .iter()
                .enumerate()
                .map(|(column, cell)| {
                    let location = || format!("header cell {column} of section '{name}'");
                    check_text(cell, location)?;
                    PlannedText::parse(
                        format!("[color={color}]{{**{}**}}", escape_markup(cell)),
                        location,
                    )
                })
                .collect::<Result<Vec<_>, _>>()?;
            Some(PlannedRow {
                cells,
                fill: style.palette.header_fill,
            })
        }
        None => None,
    };

    let rows = section
        .rows()
        .iter()
        .enumerate()
        .map(|(row_index, row)| plan_row(row, row_index, name, style))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PlannedSection {
        index,
        heading,
        heading_color: section.accent().unwrap_or(style.palette.section),
        widths_mm: widths.resolve(style.content_width_mm()),
        header,
        rows,
    })
}

fn plan_row(
    row: &RowEntry,
    row_index: usize,
    section: &str,
    style: &StyleConfig,
) -> Result<PlannedRow, FormatError> {
    let location = |field: &str| format!("{field} of row {row_index} in section '{section}'");

    check_text(row.label(), || location("label"))?;
    check_text(row.description(), || location("description"))?;

    let mut cells = Vec::with_capacity(row.columns());
    let label_color = hex(style.labels.color_for(row.category()));
    cells.push(PlannedText::parse(
        format!("[color={label_color}]{{**`{}`**}}", escape_markup(row.label())),
        || location("label"),
    )?);

    if let Some(equivalent) = row.equivalent() {
        check_text(equivalent, || location("equivalent"))?;
        let color = hex(style.palette.equivalent);
        cells.push(PlannedText::parse(
            format!("[color={color}]{{**`{}`**}}", escape_markup(equivalent)),
            || location("equivalent"),
        )?);
    }

    let color = hex(style.palette.description);
    cells.push(PlannedText::parse(
        format!("[color={color}]{{{}}}", escape_markup(row.description())),
        || location("description"),
    )?);

    Ok(PlannedRow {
        cells,
        fill: style.palette.row_shades[row_index % 2],
    })
}

fn plan_callout(
    callout: &Callout,
    index: usize,
    style: &StyleConfig,
) -> Result<PlannedCallout, FormatError> {
    let lines = callout
        .lines()
        .iter()
        .enumerate()
        .map(|(line_index, line)| {
            let location = || format!("line {line_index} of callout {index}");
            check_text(line, location)?;
            if line.trim().is_empty() {
                Ok(None)
            } else {
                PlannedText::parse(line.clone(), location).map(Some)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PlannedCallout {
        lines,
        fill: callout.fill().unwrap_or(style.palette.callout_fill),
        border: callout.border().unwrap_or(style.palette.callout_border),
        text_color: style.palette.callout_text,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::model::{Category, ColumnWidths};
    use crate::style::rgb;

    fn git_section() -> Section {
        Section::new("Basic Git Operations").with_rows([
            ("git init", "Initialize a new repository"),
            ("git status", "Show working tree status"),
        ])
    }

    fn only_section(plan: &Plan) -> &PlannedSection {
        plan.sections().next().expect("plan has a section")
    }

    #[test]
    fn two_row_section_keeps_rows_in_order() {
        let document = Document::new("Git").with_section(git_section());
        let plan = plan(&document, &StyleConfig::default()).expect("plan succeeds");
        let section = only_section(&plan);

        assert_eq!(section.table_row_count(), 2);
        let pairs: Vec<(String, String)> = section
            .rows()
            .iter()
            .map(|row| (row.cells()[0].plain(), row.cells()[1].plain()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("git init".to_owned(), "Initialize a new repository".to_owned()),
                ("git status".to_owned(), "Show working tree status".to_owned()),
            ]
        );
    }

    #[test]
    fn header_adds_one_table_row() {
        let section = Section::new("Display")
            .with_header(["CSS Property", "Tailwind Class", "Description"])
            .with_rows([
                ("display: flex", "flex", "Flex container"),
                ("display: grid", "grid", "Grid container"),
                ("display: none", "hidden", "Hide element"),
            ]);
        let plan = plan(&Document::new("CSS").with_section(section), &StyleConfig::default())
            .expect("plan succeeds");
        let section = only_section(&plan);

        assert_eq!(section.rows().len(), 3);
        assert_eq!(section.table_row_count(), 4);
        let header = section.header().expect("header row");
        assert_eq!(header.cells()[1].plain(), "Tailwind Class");
        assert_eq!(header.fill(), StyleConfig::default().palette.header_fill);
    }

    #[test]
    fn script_label_is_escaped_not_interpreted() {
        let section = Section::new("Escaping").with_row(("<script>", "alert(1) & *more*"));
        let plan = plan(&Document::new("Doc").with_section(section), &StyleConfig::default())
            .expect("plan succeeds");
        let row = &only_section(&plan).rows()[0];

        assert!(row.cells()[0].markup().contains("&lt;script&gt;"));
        assert!(!row.cells()[0].markup().contains("<script>"));
        assert_eq!(row.cells()[0].plain(), "<script>");
        assert!(row.cells()[1].markup().contains("&amp; &#42;more&#42;"));
        assert_eq!(row.cells()[1].plain(), "alert(1) & *more*");
        assert!(row.cells()[1].spans().iter().all(|span| !span.is_italic()));
    }

    #[test]
    fn pre_escaped_content_is_not_double_escaped() {
        let section = Section::new("Clone").with_rows([
            ("git clone &lt;url&gt;", "Clone"),
            ("git clone <url>", "Clone"),
        ]);
        let plan = plan(&Document::new("Doc").with_section(section), &StyleConfig::default())
            .expect("plan succeeds");
        let rows = only_section(&plan).rows();

        assert_eq!(rows[0].cells()[0].markup(), rows[1].cells()[0].markup());
        assert_eq!(rows[0].cells()[0].plain(), "git clone <url>");
    }

    #[test]
    fn widths_sum_to_content_width() {
        let style = StyleConfig::default();
        let sections = [
            git_section(),
            git_section().with_widths(ColumnWidths::ratios([7.0, 8.0])),
            Section::new("Three").with_row(("a", "b", "c")),
            Section::new("Odd").with_row(("a", "b", "c")).with_widths(ColumnWidths::ratios([
                1.0, 2.5, 3.3,
            ])),
        ];
        let document = sections
            .into_iter()
            .fold(Document::new("Widths"), Document::with_section);
        let plan = plan(&document, &style).expect("plan succeeds");

        for section in plan.sections() {
            let sum: f64 = section.widths_mm().iter().sum();
            assert!(
                (sum - style.content_width_mm()).abs() < 1e-6,
                "widths of section {} sum to {sum}",
                section.index()
            );
            let weights: usize = section.column_weights().iter().sum();
            assert!(weights.abs_diff(1900) <= section.widths_mm().len());
        }

        let default_split = only_section(&plan).widths_mm();
        assert!((default_split[0] - 114.0).abs() < 1e-9);
        assert!((default_split[1] - 76.0).abs() < 1e-9);
    }

    #[test]
    fn rows_alternate_shades() {
        let style = StyleConfig::default();
        let section = Section::new("Many").with_rows((0..5).map(|i| (format!("cmd {i}"), "desc")));
        let plan = plan(&Document::new("Doc").with_section(section), &style).expect("plan");
        let fills: Vec<Color> = only_section(&plan).rows().iter().map(PlannedRow::fill).collect();
        let [even, odd] = style.palette.row_shades;
        assert_eq!(fills, vec![even, odd, even, odd, even]);
    }

    #[test]
    fn label_color_follows_category() {
        let style = StyleConfig::default();
        let section = git_section()
            .with_row(RowEntry::pair("git reset --hard", "Discard").with_category(Category::Dangerous));
        let plan = plan(&Document::new("Doc").with_section(section), &style).expect("plan");
        let rows = only_section(&plan).rows();

        let label_span = &rows[0].cells()[0].spans()[0];
        assert!(label_span.is_bold());
        assert!(label_span.is_monospace());
        assert_eq!(label_span.color(), Some(style.labels.default));
        assert_eq!(rows[2].cells()[0].spans()[0].color(), Some(rgb(0xE74C3C)));
    }

    #[test]
    fn mixed_row_shapes_are_rejected() {
        let section = git_section().with_row(("display: flex", "flex", "Flex container"));
        let err = plan(&Document::new("Doc").with_section(section), &StyleConfig::default())
            .unwrap_err();
        assert!(matches!(err, FormatError::MixedRowShapes { .. }));
    }

    #[test]
    fn width_problems_are_rejected() {
        let style = StyleConfig::default();
        let mismatched = git_section().with_widths(ColumnWidths::even(3));
        let err = plan(&Document::new("Doc").with_section(mismatched), &style).unwrap_err();
        assert_eq!(
            err,
            FormatError::ColumnCountMismatch {
                section: "Basic Git Operations".into(),
                expected: 2,
                found: 3,
            }
        );

        let negative = git_section().with_widths(ColumnWidths::ratios([1.0, -1.0]));
        let err = plan(&Document::new("Doc").with_section(negative), &style).unwrap_err();
        assert!(matches!(err, FormatError::InvalidWidths { .. }));
    }

    #[test]
    fn header_must_match_columns() {
        let section = git_section().with_header(["Command"]);
        let err = plan(&Document::new("Doc").with_section(section), &StyleConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            FormatError::HeaderMismatch {
                expected: 2,
                found: 1,
                ..
            }
        ));
    }

    #[test]
    fn control_characters_are_rejected() {
        let section = Section::new("Bad").with_row(("git\u{0}init", "desc"));
        let err = plan(&Document::new("Doc").with_section(section), &StyleConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            FormatError::ControlCharacter {
                character: '\u{0}',
                ..
            }
        ));
    }

    #[test]
    fn broken_callout_markup_is_reported() {
        let document = Document::new("Doc").with_callout(Callout::new(["**Tips", ""]));
        let err = plan(&document, &StyleConfig::default()).unwrap_err();
        assert!(matches!(err, FormatError::Markup { .. }));
    }

    #[test]
    fn callout_blank_lines_become_gaps() {
        let document = Document::new("Doc").with_callout(
            Callout::new(["**Tips:**", "", "Use `git stash` often"]).with_fill(rgb(0xF0F8E8)),
        );
        let plan = plan(&document, &StyleConfig::default()).expect("plan");
        let PlannedBlock::Callout(callout) = &plan.blocks()[0] else {
            panic!("expected a callout");
        };
        assert!(callout.lines()[1].is_none());
        assert_eq!(callout.fill(), rgb(0xF0F8E8));
        assert_eq!(callout.border(), StyleConfig::default().palette.callout_border);
    }

    #[test]
    fn trailing_and_leading_breaks_are_dropped() {
        let sections = (0..3).map(|i| Section::new(format!("S{i}")).with_row(("a", "b")));
        let document = Document::from_sections("Doc", sections, &BTreeSet::from([1, 2]));
        let plan = plan(&document, &StyleConfig::default()).expect("plan");

        assert!(!matches!(plan.blocks().last(), Some(PlannedBlock::PageBreak)));
        let breaks = plan
            .blocks()
            .iter()
            .filter(|block| matches!(block, PlannedBlock::PageBreak))
            .count();
        assert_eq!(breaks, 1);
        assert_eq!(plan.section_titles(), vec!["S0", "S1", "S2"]);
    }
}
