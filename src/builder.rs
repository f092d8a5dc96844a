//! Page setup for cheat sheet documents.
//!
//! [`DocumentBuilder`] turns the geometry of a [`StyleConfig`] into a `genpdf::Document` whose
//! page decorator applies the margins, advances a [`PageTracker`] for every new page and, when
//! page numbers are enabled, stamps `Page N` into a strip reserved at the bottom.

use genpdf::elements::Paragraph;
use genpdf::error::{Error, ErrorKind};
use genpdf::fonts::{FontData, FontFamily};
use genpdf::render::Area;
use genpdf::style::Style;
use genpdf::{Alignment, Context, Element, Margins, Mm, PageDecorator, Position, Size};

use crate::elements::{mm_from_f64, PageTracker};
use crate::style::StyleConfig;

/// Builds the `genpdf::Document` a cheat sheet is rendered into.
pub struct DocumentBuilder {
    title: String,
    paper_size: Size,
    margins: Margins,
    footer: Option<PageNumberFooter>,
    tracker: PageTracker,
}

impl DocumentBuilder {
    /// Takes paper size, margins and the optional page number footer from `style`.
    pub fn new(title: impl Into<String>, style: &StyleConfig) -> Self {
        let footer = style.page_numbers.then(|| PageNumberFooter {
            height: mm_from_f64(style.spacing.footer_height_mm),
            style: Style::new()
                .with_font_size(style.typography.footer_size)
                .with_color(style.palette.footer),
        });

        Self {
            title: title.into(),
            paper_size: style.geometry.paper_size(),
            margins: style.geometry.margins(),
            footer,
            tracker: PageTracker::default(),
        }
    }

    /// Shares `tracker` with the page decorator.
    pub fn with_page_tracker(mut self, tracker: PageTracker) -> Self {
        self.tracker = tracker;
        self
    }

    /// Creates the document with `font_family` as its default font.
    ///
    /// XMP metadata is switched off: it carries the wall-clock time and random document ids, so
    /// two renders of the same sheet would never match byte for byte.
    pub fn build(self, font_family: FontFamily<FontData>) -> genpdf::Document {
        let mut document = genpdf::Document::new(font_family);
        document.set_minimal_conformance();
        document.set_title(self.title);
        document.set_paper_size(self.paper_size);
        document.set_page_decorator(SheetDecorator {
            margins: self.margins,
            footer: self.footer,
            tracker: self.tracker,
        });
        document
    }
}

/// The `Page N` strip at the bottom of every page.
struct PageNumberFooter {
    height: Mm,
    style: Style,
}

impl PageNumberFooter {
    fn render(&self, context: &Context, area: &mut Area<'_>, page: usize) -> Result<(), Error> {
        let available = area.size().height;
        if self.height > available {
            return Err(Error::new(
                "Page number footer is taller than the page body",
                ErrorKind::InvalidData,
            ));
        }

        let mut strip = area.clone();
        strip.add_offset(Position::new(0, available - self.height));
        let result = Paragraph::new(format!("Page {page}"))
            .aligned(Alignment::Center)
            .render(context, strip, self.style)?;
        if result.has_more {
            return Err(Error::new(
                "Page number does not fit into the footer",
                ErrorKind::PageSizeExceeded,
            ));
        }

        area.set_height(available - self.height);
        Ok(())
    }
}

struct SheetDecorator {
    margins: Margins,
    footer: Option<PageNumberFooter>,
    tracker: PageTracker,
}

impl PageDecorator for SheetDecorator {
    fn decorate_page<'a>(
        &mut self,
        context: &Context,
        mut area: Area<'a>,
        _style: Style,
    ) -> Result<Area<'a>, Error> {
        let page = self.tracker.advance();
        area.add_margins(self.margins);
        if let Some(footer) = &self.footer {
            footer.render(context, &mut area, page)?;
        }
        Ok(area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_follows_the_page_number_switch() {
        let plain = DocumentBuilder::new("Sheet", &StyleConfig::default());
        assert!(plain.footer.is_none());

        let numbered =
            DocumentBuilder::new("Sheet", &StyleConfig::default().with_page_numbers(true));
        let footer = numbered.footer.expect("footer configured");
        assert_eq!(footer.height, mm_from_f64(5.0));
    }

    #[test]
    fn geometry_comes_from_the_style() {
        let style = StyleConfig::default();
        let builder = DocumentBuilder::new("Sheet", &style);
        assert_eq!(builder.paper_size.width, style.geometry.paper_size().width);
        assert_eq!(builder.margins, style.geometry.margins());
        assert_eq!(builder.margins, Margins::trbl(15, 10, 10, 10));
        assert_eq!(builder.title, "Sheet");
    }

    #[test]
    fn narrower_margins_reach_the_builder() {
        let geometry = crate::style::PageGeometry::a4().with_margins(20.0, 12.0, 15.0, 12.0);
        let builder = DocumentBuilder::new("Sheet", &StyleConfig::default().with_geometry(geometry));
        assert_eq!(builder.margins, Margins::trbl(20, 12, 15, 12));
        assert_ne!(builder.margins, StyleConfig::default().geometry.margins());
    }
}
