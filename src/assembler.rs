//! The document assembler: turns a [`Document`] into PDF bytes and output files.
//!
//! Rendering happens in two steps.  [`Assembler::plan`] validates and resolves the document into a
//! [`Plan`] without touching fonts or files; the render step then maps every planned block onto
//! `genpdf` elements, lets `genpdf` paginate them and encodes the result.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use genpdf::elements::{LinearLayout, PageBreak, StyledElement};
use genpdf::fonts::{Font, FontFamily};
use genpdf::style::Style;
use genpdf::{Alignment, Element, Margins};
use log::{debug, info};

use crate::builder::DocumentBuilder;
use crate::elements::{
    mm_from_f64, rich_paragraph, CellText, PageTracker, Rule, SectionAnchor, SectionPages,
    ShadedTable, VerticalSpace,
};
use crate::error::{Error, FormatError};
use crate::fonts::{self, FontSet};
use crate::layout::{self, Plan, PlannedBlock, PlannedCallout, PlannedSection};
use crate::model::{Document, Section};
use crate::style::StyleConfig;

/// Output of a successful render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedPdf {
    /// The encoded PDF document.
    pub bytes: Vec<u8>,
    /// Number of pages in the document.
    pub page_count: usize,
    /// First page (1-based) of every section, in document order.
    pub section_pages: Vec<Option<usize>>,
}

/// Renders documents with one fixed [`StyleConfig`].
#[derive(Clone, Debug, Default)]
pub struct Assembler {
    style: StyleConfig,
}

impl Assembler {
    /// Creates an assembler that renders every document with `style`.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style this assembler renders with.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Validates `document` and resolves its layout.
    pub fn plan(&self, document: &Document) -> Result<Plan, FormatError> {
        layout::plan(document, &self.style)
    }

    /// Renders `document` into memory.
    pub fn render(&self, document: &Document) -> Result<RenderedPdf, Error> {
        let plan = self.plan(document)?;
        debug!(
            "Planned '{}': {} block(s), {} section(s)",
            document.title(),
            plan.blocks().len(),
            plan.section_count()
        );
        let fonts = fonts::load_font_set().map_err(Error::FontLoad)?;
        self.render_plan(&plan, fonts)
    }

    /// Renders `document` and writes it to `path`, replacing any existing file.
    pub fn render_to_path(
        &self,
        document: &Document,
        path: impl AsRef<Path>,
    ) -> Result<RenderedPdf, Error> {
        let rendered = self.render(document)?;
        write_output(path.as_ref(), &rendered)?;
        Ok(rendered)
    }

    /// Renders `sections` under `title`, breaking the page after every index in
    /// `page_breaks_after`, and writes the result to `path`.
    pub fn render_sections(
        &self,
        title: &str,
        sections: &[Section],
        page_breaks_after: &BTreeSet<usize>,
        path: impl AsRef<Path>,
    ) -> Result<RenderedPdf, Error> {
        let document = Document::from_sections(title, sections.iter().cloned(), page_breaks_after);
        self.render_to_path(&document, path)
    }

    /// Renders `document` and adds one outline entry per section.
    #[cfg(feature = "bookmarks")]
    pub fn render_with_bookmarks(&self, document: &Document) -> Result<RenderedPdf, Error> {
        let mut rendered = self.render(document)?;
        let titles: Vec<String> = document
            .sections()
            .map(|section| section.title().to_owned())
            .collect();
        rendered.bytes = crate::bookmarks::apply_section_bookmarks(
            &rendered.bytes,
            &titles,
            &rendered.section_pages,
        )?;
        Ok(rendered)
    }

    fn render_plan(&self, plan: &Plan, fonts: FontSet) -> Result<RenderedPdf, Error> {
        let style = &self.style;
        let tracker = PageTracker::new();
        let section_pages = SectionPages::new(plan.section_count());

        let mut document = DocumentBuilder::new(plan.title().plain(), style)
            .with_page_tracker(tracker.clone())
            .build(fonts.regular);
        let monospace = fonts
            .monospace
            .map(|family| document.add_font_family(family));

        self.push_title(&mut document, plan, monospace);
        for block in plan.blocks() {
            match block {
                PlannedBlock::Section(section) => {
                    let elements = self
                        .section_elements(section, monospace, &tracker, &section_pages)
                        .map_err(Error::Render)?;
                    document.push(elements);
                }
                PlannedBlock::Callout(callout) => {
                    let panel = self
                        .callout_element(callout, monospace)
                        .map_err(Error::Render)?;
                    document.push(panel);
                    document.push(VerticalSpace::new(style.spacing.after_table_mm));
                }
                PlannedBlock::PageBreak => document.push(PageBreak::new()),
            }
        }

        let mut bytes = Vec::new();
        document.render(&mut bytes).map_err(Error::Render)?;

        let rendered = RenderedPdf {
            bytes,
            page_count: tracker.current(),
            section_pages: section_pages.to_vec(),
        };
        debug!(
            "Rendered '{}': {} page(s), {} byte(s)",
            plan.title().plain(),
            rendered.page_count,
            rendered.bytes.len()
        );
        Ok(rendered)
    }

    fn push_title(
        &self,
        document: &mut genpdf::Document,
        plan: &Plan,
        monospace: Option<FontFamily<Font>>,
    ) {
        let style = &self.style;
        document.push(
            rich_paragraph(plan.title().spans(), monospace)
                .aligned(Alignment::Center)
                .styled(
                    Style::new()
                        .bold()
                        .with_font_size(style.typography.title_size)
                        .with_color(style.palette.title),
                ),
        );
        if let Some(subtitle) = plan.subtitle() {
            document.push(VerticalSpace::new(1.5));
            document.push(
                rich_paragraph(subtitle.spans(), monospace)
                    .aligned(Alignment::Center)
                    .styled(
                        Style::new()
                            .italic()
                            .with_font_size(style.typography.subtitle_size)
                            .with_color(style.palette.subtitle),
                    ),
            );
        }
        document.push(VerticalSpace::new(style.spacing.after_title_mm));
    }

    fn section_elements(
        &self,
        section: &PlannedSection,
        monospace: Option<FontFamily<Font>>,
        tracker: &PageTracker,
        section_pages: &SectionPages,
    ) -> Result<LinearLayout, genpdf::error::Error> {
        let style = &self.style;
        let mut layout = LinearLayout::vertical();

        let heading = rich_paragraph(section.heading().spans(), monospace).styled(
            Style::new()
                .with_font_size(style.typography.section_size)
                .with_color(section.heading_color()),
        );
        layout.push(VerticalSpace::new(style.spacing.before_section_mm));
        layout.push(SectionAnchor::new(
            heading,
            section.index(),
            tracker.clone(),
            section_pages.clone(),
        ));
        layout.push(VerticalSpace::new(style.spacing.after_heading_mm));

        if section.table_row_count() > 0 {
            let spacing = &style.spacing;
            let mut table = ShadedTable::new(section.column_weights())
                .with_padding(Margins::vh(
                    mm_from_f64(spacing.cell_padding_vertical_mm),
                    mm_from_f64(spacing.cell_padding_horizontal_mm),
                ))
                .with_rule(Rule::new(style.palette.grid, spacing.grid_thickness_mm));
            for row in section.table_rows() {
                let cells = row
                    .cells()
                    .iter()
                    .map(|cell| CellText::from_spans(cell.spans(), monospace))
                    .collect();
                table.push_row(cells, Some(row.fill()))?;
            }
            layout.push(table.styled(Style::new().with_font_size(style.typography.body_size)));
            layout.push(VerticalSpace::new(style.spacing.after_table_mm));
        }

        Ok(layout)
    }

    /// A one-cell table tinted with the callout colours.
    fn callout_element(
        &self,
        callout: &PlannedCallout,
        monospace: Option<FontFamily<Font>>,
    ) -> Result<StyledElement<ShadedTable>, genpdf::error::Error> {
        let style = &self.style;
        let content = callout
            .lines()
            .iter()
            .fold(CellText::new(), |content, line| match line {
                Some(text) => content.with_spans(text.spans(), monospace),
                None => content.with_gap(2.5),
            });

        let mut panel = ShadedTable::new(vec![1])
            .with_padding(Margins::all(mm_from_f64(style.spacing.callout_padding_mm)))
            .with_rule(Rule::new(callout.border(), style.spacing.callout_border_mm));
        panel.push_row(vec![content], Some(callout.fill()))?;

        Ok(panel.styled(
            Style::new()
                .with_font_size(style.typography.callout_size)
                .with_color(callout.text_color()),
        ))
    }
}

fn write_output(path: &Path, rendered: &RenderedPdf) -> Result<(), Error> {
    fs::write(path, &rendered.bytes).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "Wrote {} ({} bytes, {} page(s))",
        path.display(),
        rendered.bytes.len(),
        rendered.page_count
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Callout;

    #[test]
    fn plan_uses_the_configured_geometry() {
        let style = StyleConfig::default().with_geometry(
            crate::style::PageGeometry::a4().with_margins(20.0, 12.0, 15.0, 12.0),
        );
        let assembler = Assembler::new(style);
        let document = Document::new("Docker")
            .with_section(Section::new("Containers").with_row(("docker ps", "List containers")));

        let plan = assembler.plan(&document).expect("plan succeeds");
        assert!((plan.content_width_mm() - 186.0).abs() < 1e-9);
    }

    #[test]
    fn format_errors_surface_before_fonts_are_loaded() {
        let assembler = Assembler::default();
        let document = Document::new("Broken").with_callout(Callout::new(["[color=#zzzzzz]{x}"]));

        let err = assembler.render(&document).unwrap_err();
        assert!(matches!(err, Error::Format(FormatError::Markup { .. })));
    }
}
