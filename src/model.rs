//! Data structures describing the logical content of a cheat sheet.
//!
//! A [`Document`] is an ordered list of [`Block`]s: titled [`Section`] tables, free-form
//! [`Callout`] panels and explicit page breaks.  The values are plain data built once per run and
//! never mutated by the renderer; turning them into PDF elements is the job of
//! [`crate::layout`] and [`crate::assembler`].

use std::collections::BTreeSet;

use genpdf::style::Color;
use log::warn;

/// Semantic tag attached to a row that selects the label highlight color.
///
/// The tag is cosmetic only.  Rows without a category use the default label color of the theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Commands every reader needs day to day.
    Essential,
    /// Commands for advanced usage.
    Advanced,
    /// Recently introduced features.
    NewFeature,
    /// Commands that destroy work or rewrite history.
    Dangerous,
}

/// One line item of a [`Section`].
///
/// Rows are either a label/description pair or a label/equivalent/description triple.  The shape
/// is fixed at construction time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowEntry {
    label: String,
    equivalent: Option<String>,
    description: String,
    category: Option<Category>,
}

impl RowEntry {
    /// Creates a two-column row.
    pub fn pair(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            equivalent: None,
            description: description.into(),
            category: None,
        }
    }

    /// Creates a three-column row with an equivalent between label and description.
    pub fn triple(
        label: impl Into<String>,
        equivalent: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            equivalent: Some(equivalent.into()),
            description: description.into(),
            category: None,
        }
    }

    /// Returns the label shown in the first column.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the equivalent shown in the middle column of three-column rows.
    pub fn equivalent(&self) -> Option<&str> {
        self.equivalent.as_deref()
    }

    /// Returns the description shown in the last column.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the category tag, if any.
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Number of columns this row occupies.
    pub fn columns(&self) -> usize {
        if self.equivalent.is_some() {
            3
        } else {
            2
        }
    }

    /// Sets the category tag and returns the updated row.
    pub fn with_category(mut self, category: impl Into<Option<Category>>) -> Self {
        self.category = category.into();
        self
    }
}

impl<L, D> From<(L, D)> for RowEntry
where
    L: Into<String>,
    D: Into<String>,
{
    fn from((label, description): (L, D)) -> Self {
        Self::pair(label, description)
    }
}

impl<L, E, D> From<(L, E, D)> for RowEntry
where
    L: Into<String>,
    E: Into<String>,
    D: Into<String>,
{
    fn from((label, equivalent, description): (L, E, D)) -> Self {
        Self::triple(label, equivalent, description)
    }
}

/// Relative column widths of a section table.
///
/// The ratios are resolved against the content width of the page when the document is planned.
/// Validation (matching column count, finite and positive values) happens at that point too.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnWidths {
    ratios: Vec<f64>,
}

impl ColumnWidths {
    /// Creates widths from arbitrary relative ratios, e.g. `[7.0, 8.0]`.
    pub fn ratios(ratios: impl IntoIterator<Item = f64>) -> Self {
        Self {
            ratios: ratios.into_iter().collect(),
        }
    }

    /// Creates `columns` equal widths.
    pub fn even(columns: usize) -> Self {
        Self {
            ratios: vec![1.0; columns],
        }
    }

    /// Default widths: a 60/40 split for two columns, equal widths otherwise.
    pub fn default_for(columns: usize) -> Self {
        match columns {
            2 => Self::ratios([0.6, 0.4]),
            n => Self::even(n),
        }
    }

    /// Returns the raw ratios.
    pub fn values(&self) -> &[f64] {
        &self.ratios
    }

    /// Number of columns described by these widths.
    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    /// Returns whether no widths are declared.
    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    /// Returns whether every ratio is finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        !self.ratios.is_empty() && self.ratios.iter().all(|r| r.is_finite() && *r > 0.0)
    }

    /// Distributes `total_mm` proportionally to the ratios.
    pub fn resolve(&self, total_mm: f64) -> Vec<f64> {
        let sum: f64 = self.ratios.iter().sum();
        self.ratios
            .iter()
            .map(|ratio| total_mm * ratio / sum)
            .collect()
    }
}

/// A titled group of rows rendered as a heading followed by one table.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    title: String,
    rows: Vec<RowEntry>,
    widths: Option<ColumnWidths>,
    header: Option<Vec<String>>,
    accent: Option<Color>,
}

impl Section {
    /// Creates an empty section with the provided title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
            widths: None,
            header: None,
            accent: None,
        }
    }

    /// Returns the title of the section.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the rows in display order.
    pub fn rows(&self) -> &[RowEntry] {
        &self.rows
    }

    /// Returns the explicitly declared column widths, if any.
    pub fn widths(&self) -> Option<&ColumnWidths> {
        self.widths.as_ref()
    }

    /// Returns the header cells, if the section declares a header row.
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    /// Returns the heading color override, if any.
    pub fn accent(&self) -> Option<Color> {
        self.accent
    }

    /// Number of table columns, derived from the first row (or the header for empty sections).
    pub fn columns(&self) -> usize {
        match (self.rows.first(), &self.header) {
            (Some(row), _) => row.columns(),
            (None, Some(header)) => header.len(),
            (None, None) => 2,
        }
    }

    /// Widths used when rendering: the declared ones or the default for the column count.
    pub fn effective_widths(&self) -> ColumnWidths {
        self.widths
            .clone()
            .unwrap_or_else(|| ColumnWidths::default_for(self.columns()))
    }

    /// Appends a row and returns the updated section.
    pub fn with_row(mut self, row: impl Into<RowEntry>) -> Self {
        self.rows.push(row.into());
        self
    }

    /// Extends the section with multiple rows and returns the updated instance.
    pub fn with_rows<I>(mut self, rows: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<RowEntry>,
    {
        self.rows.extend(rows.into_iter().map(Into::into));
        self
    }

    /// Sets the column widths and returns the updated section.
    pub fn with_widths(mut self, widths: impl Into<Option<ColumnWidths>>) -> Self {
        self.widths = widths.into();
        self
    }

    /// Declares a header row and returns the updated section.
    pub fn with_header<I, S>(mut self, header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = Some(header.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the heading color and returns the updated section.
    pub fn with_accent(mut self, accent: impl Into<Option<Color>>) -> Self {
        self.accent = accent.into();
        self
    }

    /// Tags every row whose label contains one of `patterns` with `category`.
    pub fn flag_matching(mut self, patterns: &[&str], category: Category) -> Self {
        for row in &mut self.rows {
            if patterns.iter().any(|pattern| row.label.contains(pattern)) {
                row.category = Some(category);
            }
        }
        self
    }
}

/// A bordered, tinted free-text panel used for tips, legends and worked examples.
///
/// Every line is inline markup (see [`crate::richtext::parse_markup`]); an empty line renders as
/// a vertical gap.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Callout {
    lines: Vec<String>,
    fill: Option<Color>,
    border: Option<Color>,
}

impl Callout {
    /// Creates a callout from the given markup lines.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Returns the markup lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the fill color override, if any.
    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    /// Returns the border color override, if any.
    pub fn border(&self) -> Option<Color> {
        self.border
    }

    /// Appends a line and returns the updated callout.
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Sets the fill color and returns the updated callout.
    pub fn with_fill(mut self, fill: impl Into<Option<Color>>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the border color and returns the updated callout.
    pub fn with_border(mut self, border: impl Into<Option<Color>>) -> Self {
        self.border = border.into();
        self
    }
}

/// Top-level content blocks of a [`Document`].
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    /// A heading followed by a table.
    Section(Section),
    /// A tinted text panel.
    Callout(Callout),
    /// Explicit page break request.
    PageBreak,
}

/// A complete cheat sheet: title block plus ordered content blocks.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    title: String,
    subtitle: Option<String>,
    blocks: Vec<Block>,
}

impl Document {
    /// Creates an empty document with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            blocks: Vec::new(),
        }
    }

    /// Builds a document from sections, breaking the page after every index in
    /// `page_breaks_after`.
    ///
    /// Indices that point at the last section or past the end would only add blank pages; they
    /// are ignored with a warning.
    pub fn from_sections<I>(
        title: impl Into<String>,
        sections: I,
        page_breaks_after: &BTreeSet<usize>,
    ) -> Self
    where
        I: IntoIterator<Item = Section>,
    {
        let sections: Vec<Section> = sections.into_iter().collect();
        let count = sections.len();

        for &index in page_breaks_after.range(count.saturating_sub(1)..) {
            warn!(
                "Ignoring page break after section {}: the document has {} section(s)",
                index, count
            );
        }

        let mut document = Self::new(title);
        for (index, section) in sections.into_iter().enumerate() {
            document = document.with_section(section);
            if index + 1 < count && page_breaks_after.contains(&index) {
                document = document.with_page_break();
            }
        }
        document
    }

    /// Returns the document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the subtitle, if any.
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Returns the content blocks in order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Iterates over the sections in document order, skipping callouts and page breaks.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Section(section) => Some(section),
            _ => None,
        })
    }

    /// Sets the subtitle and returns the updated document.
    pub fn with_subtitle(mut self, subtitle: impl Into<Option<String>>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Appends a section and returns the updated document.
    pub fn with_section(mut self, section: Section) -> Self {
        self.blocks.push(Block::Section(section));
        self
    }

    /// Appends a callout and returns the updated document.
    pub fn with_callout(mut self, callout: Callout) -> Self {
        self.blocks.push(Block::Callout(callout));
        self
    }

    /// Appends a page break and returns the updated document.
    ///
    /// Breaks are never stacked and a break before any content is dropped.
    pub fn with_page_break(mut self) -> Self {
        match self.blocks.last() {
            None | Some(Block::PageBreak) => {}
            Some(_) => self.blocks.push(Block::PageBreak),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(title: &str) -> Section {
        Section::new(title).with_row(("a", "b"))
    }

    #[test]
    fn row_shape_is_fixed_at_construction() {
        assert_eq!(RowEntry::pair("git init", "Initialize").columns(), 2);
        assert_eq!(RowEntry::triple("display: flex", "flex", "Flex container").columns(), 3);
        let row: RowEntry = ("a", "b", "c").into();
        assert_eq!(row.equivalent(), Some("b"));
    }

    #[test]
    fn default_widths_follow_column_count() {
        assert_eq!(ColumnWidths::default_for(2).values(), &[0.6, 0.4]);
        assert_eq!(ColumnWidths::default_for(3).values(), &[1.0, 1.0, 1.0]);
        assert_eq!(Section::new("Empty").columns(), 2);
        assert_eq!(
            Section::new("Header only")
                .with_header(["CSS Property", "Tailwind Class", "Description"])
                .columns(),
            3
        );
    }

    #[test]
    fn widths_resolve_proportionally() {
        let widths = ColumnWidths::ratios([7.0, 8.0]).resolve(150.0);
        assert!((widths[0] - 70.0).abs() < 1e-9);
        assert!((widths[1] - 80.0).abs() < 1e-9);
    }

    #[test]
    fn widths_validation() {
        assert!(ColumnWidths::ratios([1.0, 2.0]).is_valid());
        assert!(!ColumnWidths::ratios([1.0, 0.0]).is_valid());
        assert!(!ColumnWidths::ratios([1.0, f64::NAN]).is_valid());
        assert!(!ColumnWidths::ratios([]).is_valid());
    }

    #[test]
    fn flag_matching_tags_only_matching_rows() {
        let section = Section::new("Branching")
            .with_rows([
                ("git branch", "List local branches"),
                ("git rebase <branch-name>", "Rebase current branch"),
                ("git push --force", "Force push"),
            ])
            .flag_matching(&["reset --hard", "push --force", "rebase"], Category::Dangerous);

        let categories: Vec<_> = section.rows().iter().map(RowEntry::category).collect();
        assert_eq!(
            categories,
            vec![None, Some(Category::Dangerous), Some(Category::Dangerous)]
        );
    }

    #[test]
    fn page_breaks_are_not_stacked() {
        let document = Document::new("Doc")
            .with_page_break()
            .with_section(section("A"))
            .with_page_break()
            .with_page_break()
            .with_section(section("B"));

        let breaks = document
            .blocks()
            .iter()
            .filter(|block| matches!(block, Block::PageBreak))
            .count();
        assert_eq!(breaks, 1);
        assert!(matches!(document.blocks().first(), Some(Block::Section(_))));
    }

    #[test]
    fn from_sections_places_breaks_after_indices() {
        let sections = (0..5).map(|i| section(&format!("S{i}")));
        let document = Document::from_sections("Doc", sections, &BTreeSet::from([2, 4, 9]));

        let layout: Vec<&str> = document
            .blocks()
            .iter()
            .map(|block| match block {
                Block::Section(section) => section.title(),
                Block::Callout(_) => "callout",
                Block::PageBreak => "break",
            })
            .collect();
        assert_eq!(layout, vec!["S0", "S1", "S2", "break", "S3", "S4"]);
        assert_eq!(document.sections().count(), 5);
    }
}
