//! Immutable visual configuration handed to the [`Assembler`](crate::assembler::Assembler).
//!
//! A [`StyleConfig`] bundles page geometry, colors, font sizes and spacing.  It is built once
//! (usually through the `with_*` methods on top of [`StyleConfig::default`]) and never changes
//! while a document is rendered.

use genpdf::style::Color;
use genpdf::{Margins, Size};

use crate::elements::mm_from_f64;
use crate::model::Category;

/// Builds an RGB color from a `0xRRGGBB` literal.
pub const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Formats a color as `#RRGGBB` for use in inline markup.
pub fn hex(color: Color) -> String {
    let (r, g, b) = match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Greyscale(v) => (v, v, v),
        Color::Cmyk(c, m, y, k) => {
            let channel = |v: u8| {
                let value = 255.0 * (1.0 - f64::from(v) / 255.0) * (1.0 - f64::from(k) / 255.0);
                value.round() as u8
            };
            (channel(c), channel(m), channel(y))
        }
    };
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Paper size and margins in millimetres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f64,
    pub height_mm: f64,
    pub margin_top_mm: f64,
    pub margin_right_mm: f64,
    pub margin_bottom_mm: f64,
    pub margin_left_mm: f64,
}

impl PageGeometry {
    /// A4 portrait with 10 mm side margins, 15 mm top and 10 mm bottom margin.
    pub const fn a4() -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_top_mm: 15.0,
            margin_right_mm: 10.0,
            margin_bottom_mm: 10.0,
            margin_left_mm: 10.0,
        }
    }

    /// Replaces the margins (top, right, bottom, left) and returns the updated geometry.
    pub fn with_margins(mut self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.margin_top_mm = top;
        self.margin_right_mm = right;
        self.margin_bottom_mm = bottom;
        self.margin_left_mm = left;
        self
    }

    /// Width available to content between the left and right margins.
    pub fn content_width_mm(&self) -> f64 {
        self.width_mm - self.margin_left_mm - self.margin_right_mm
    }

    pub fn paper_size(&self) -> Size {
        Size::new(mm_from_f64(self.width_mm), mm_from_f64(self.height_mm))
    }

    pub fn margins(&self) -> Margins {
        Margins::trbl(
            mm_from_f64(self.margin_top_mm),
            mm_from_f64(self.margin_right_mm),
            mm_from_f64(self.margin_bottom_mm),
            mm_from_f64(self.margin_left_mm),
        )
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// Document-wide colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub title: Color,
    pub subtitle: Color,
    pub section: Color,
    pub header_fill: Color,
    pub header_text: Color,
    pub description: Color,
    pub equivalent: Color,
    pub grid: Color,
    /// Alternating data row backgrounds, starting with the first data row.
    pub row_shades: [Color; 2],
    pub callout_fill: Color,
    pub callout_border: Color,
    pub callout_text: Color,
    pub footer: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            title: rgb(0xF14E32),
            subtitle: rgb(0x2C3E50),
            section: rgb(0x2E8B57),
            header_fill: rgb(0x2E8B57),
            header_text: rgb(0xFFFFFF),
            description: rgb(0x2C3E50),
            equivalent: rgb(0x6C5CE7),
            grid: rgb(0x2E8B57),
            row_shades: [rgb(0xFFFFFF), rgb(0xF8F9FA)],
            callout_fill: rgb(0xE8F4FD),
            callout_border: rgb(0x2E8B57),
            callout_text: rgb(0x1B4F72),
            footer: rgb(0x7F8C8D),
        }
    }
}

/// Label colors per [`Category`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPalette {
    pub default: Color,
    pub essential: Color,
    pub advanced: Color,
    pub new_feature: Color,
    pub dangerous: Color,
}

impl LabelPalette {
    /// Returns the label color for a row tagged with `category`.
    pub fn color_for(&self, category: Option<Category>) -> Color {
        match category {
            None => self.default,
            Some(Category::Essential) => self.essential,
            Some(Category::Advanced) => self.advanced,
            Some(Category::NewFeature) => self.new_feature,
            Some(Category::Dangerous) => self.dangerous,
        }
    }
}

impl Default for LabelPalette {
    fn default() -> Self {
        Self {
            default: rgb(0xFF6B35),
            essential: rgb(0x3498DB),
            advanced: rgb(0xE74C3C),
            new_feature: rgb(0x27AE60),
            dangerous: rgb(0xE74C3C),
        }
    }
}

/// Font sizes in points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Typography {
    pub title_size: u8,
    pub subtitle_size: u8,
    pub section_size: u8,
    pub body_size: u8,
    pub callout_size: u8,
    pub footer_size: u8,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            title_size: 24,
            subtitle_size: 12,
            section_size: 14,
            body_size: 9,
            callout_size: 9,
            footer_size: 7,
        }
    }
}

/// Vertical spacing and paddings in millimetres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spacing {
    pub after_title_mm: f64,
    pub before_section_mm: f64,
    pub after_heading_mm: f64,
    pub after_table_mm: f64,
    pub cell_padding_vertical_mm: f64,
    pub cell_padding_horizontal_mm: f64,
    pub callout_padding_mm: f64,
    pub grid_thickness_mm: f64,
    pub callout_border_mm: f64,
    pub footer_height_mm: f64,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            after_title_mm: 5.0,
            before_section_mm: 3.0,
            after_heading_mm: 1.5,
            after_table_mm: 3.0,
            cell_padding_vertical_mm: 1.2,
            cell_padding_horizontal_mm: 2.0,
            callout_padding_mm: 3.5,
            grid_thickness_mm: 0.2,
            callout_border_mm: 0.35,
            footer_height_mm: 5.0,
        }
    }
}

/// Complete visual configuration of a document.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StyleConfig {
    pub geometry: PageGeometry,
    pub palette: Palette,
    pub labels: LabelPalette,
    pub typography: Typography,
    pub spacing: Spacing,
    /// Prints `Page N` centered in the bottom margin area.
    pub page_numbers: bool,
}

impl StyleConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_labels(mut self, labels: LabelPalette) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_typography(mut self, typography: Typography) -> Self {
        self.typography = typography;
        self
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Enables or disables the page number footer.
    pub fn with_page_numbers(mut self, page_numbers: bool) -> Self {
        self.page_numbers = page_numbers;
        self
    }

    /// Width available to content between the left and right margins.
    pub fn content_width_mm(&self) -> f64 {
        self.geometry.content_width_mm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_splits_channels() {
        assert_eq!(rgb(0xF14E32), Color::Rgb(0xF1, 0x4E, 0x32));
    }

    #[test]
    fn hex_formats_uppercase() {
        assert_eq!(hex(rgb(0x2e8b57)), "#2E8B57");
        assert_eq!(hex(Color::Greyscale(0x10)), "#101010");
        assert_eq!(hex(Color::Cmyk(0, 0, 0, 0)), "#FFFFFF");
    }

    #[test]
    fn a4_content_width() {
        assert!((StyleConfig::default().content_width_mm() - 190.0).abs() < f64::EPSILON);
        let narrow = PageGeometry::a4().with_margins(20.0, 12.0, 15.0, 12.0);
        assert!((narrow.content_width_mm() - 186.0).abs() < f64::EPSILON);
    }

    #[test]
    fn label_colors_follow_category() {
        let labels = LabelPalette::default();
        assert_eq!(labels.color_for(None), rgb(0xFF6B35));
        assert_eq!(labels.color_for(Some(Category::Dangerous)), rgb(0xE74C3C));
        assert_eq!(labels.color_for(Some(Category::NewFeature)), rgb(0x27AE60));
    }
}
