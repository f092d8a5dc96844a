//! Built-in cheat sheet topics.
//!
//! Every [`Topic`] supplies a [`Document`] with its sections, callouts and page breaks, and the
//! [`StyleConfig`] theme it is rendered with.  Row data is written as plain text; the layout pass
//! escapes it, so command placeholders such as `<branch-name>` need no special treatment.

use std::fmt;

use genpdf::style::Color;

use crate::escape::escape_markup;
use crate::model::{Callout, Category, ColumnWidths, Document, RowEntry, Section};
use crate::style::{hex, rgb, LabelPalette, Palette, StyleConfig, Typography};

mod css_basics;
mod docker;
mod flexbox;
mod git;
mod grid;
mod laravel;

/// The cheat sheets shipped with the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Topic {
    Git,
    Docker,
    Laravel,
    CssBasics,
    Flexbox,
    Grid,
}

impl Topic {
    const ALL: [Topic; 6] = [
        Topic::Git,
        Topic::Docker,
        Topic::Laravel,
        Topic::CssBasics,
        Topic::Flexbox,
        Topic::Grid,
    ];

    /// Every topic, in the order `all` renders them.
    pub fn all() -> &'static [Topic] {
        &Self::ALL
    }

    /// Short command-line name of the topic.
    pub fn name(self) -> &'static str {
        match self {
            Topic::Git => "git",
            Topic::Docker => "docker",
            Topic::Laravel => "laravel",
            Topic::CssBasics => "css-basics",
            Topic::Flexbox => "flexbox",
            Topic::Grid => "grid",
        }
    }

    /// File name used when no output path is given.
    pub fn default_file_name(self) -> &'static str {
        match self {
            Topic::Git => "git_cheat_sheet.pdf",
            Topic::Docker => "docker_cheat_sheet.pdf",
            Topic::Laravel => "laravel_cheat_sheet.pdf",
            Topic::CssBasics => "basic_css_tailwind_cheat_sheet.pdf",
            Topic::Flexbox => "flexbox_cheat_sheet.pdf",
            Topic::Grid => "grid_cheat_sheet.pdf",
        }
    }

    /// Builds the topic's document.
    pub fn document(self) -> Document {
        match self {
            Topic::Git => git::document(),
            Topic::Docker => docker::document(),
            Topic::Laravel => laravel::document(),
            Topic::CssBasics => css_basics::document(),
            Topic::Flexbox => flexbox::document(),
            Topic::Grid => grid::document(),
        }
    }

    /// Returns the theme the topic is rendered with.
    pub fn style(self) -> StyleConfig {
        match self {
            Topic::Git => git::style(),
            Topic::Docker => docker::style(),
            Topic::Laravel => laravel::style(),
            Topic::CssBasics => css_basics::style(),
            Topic::Flexbox => flexbox::style(),
            Topic::Grid => grid::style(),
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Header shared by the CSS vs Tailwind comparison tables.
const COMPARISON_HEADER: [&str; 3] = ["CSS Property", "Tailwind Class", "Description"];

/// A two-column command table.
fn commands(title: &str, rows: &[(&str, &str)]) -> Section {
    Section::new(title).with_rows(rows.iter().copied())
}

/// A two-column command table whose rows carry a label category.
fn tagged(title: &str, rows: &[(&str, &str, Category)]) -> Section {
    Section::new(title).with_rows(
        rows.iter()
            .map(|&(label, description, category)| {
                RowEntry::pair(label, description).with_category(category)
            }),
    )
}

/// A `CSS Property | Tailwind Class | Description` table.
fn comparison(title: &str, rows: &[(&str, &str, &str)]) -> Section {
    Section::new(title)
        .with_header(COMPARISON_HEADER)
        .with_widths(ColumnWidths::ratios([6.0, 5.0, 6.0]))
        .with_rows(rows.iter().copied())
}

/// Colors shared by the CSS vs Tailwind comparison sheets.
struct ComparisonTheme {
    header: Color,
    section: Color,
    css: Color,
    tailwind: Color,
    accent: Color,
}

impl ComparisonTheme {
    fn style(&self) -> StyleConfig {
        StyleConfig::default()
            .with_palette(Palette {
                title: self.header,
                subtitle: rgb(0x374151),
                section: self.section,
                header_fill: self.header,
                description: rgb(0x374151),
                equivalent: self.tailwind,
                grid: self.section,
                row_shades: [rgb(0xFFFFFF), rgb(0xF9FAFB)],
                callout_fill: rgb(0xFEF3C7),
                callout_border: self.accent,
                callout_text: rgb(0x374151),
                ..Palette::default()
            })
            .with_labels(LabelPalette {
                default: self.css,
                ..LabelPalette::default()
            })
            .with_typography(Typography {
                section_size: 16,
                callout_size: 8,
                ..Typography::default()
            })
    }

    /// Bold Tailwind class markup for callout text.
    fn class(&self, text: &str) -> String {
        colored(self.tailwind, &format!("**{}**", escape_markup(text)))
    }

    /// A named pattern with its CSS and Tailwind spelling; `note` trails both lines.
    fn pattern(&self, name: &str, css: &str, tailwind: &str, note: Option<&str>) -> [String; 3] {
        let note = note
            .map(|note| format!(" {}", escape_markup(note)))
            .unwrap_or_default();
        [
            heading(name),
            format!("CSS: {}{note}", colored(self.css, &escape_markup(css))),
            format!(
                "Tailwind: {}{note}",
                colored(self.tailwind, &escape_markup(tailwind))
            ),
        ]
    }

    /// The tinted panel listing worked examples.
    fn examples(&self, title: &str, patterns: &[[String; 3]]) -> Callout {
        let mut callout = Callout::new([heading(title)])
            .with_fill(rgb(0xF0FDF4))
            .with_border(self.section);
        for pattern in patterns {
            callout = callout.with_line(String::new());
            for line in pattern {
                callout = callout.with_line(line.clone());
            }
        }
        callout
    }
}

/// Builds a tips panel from titled groups of bullet markup.
fn tips_panel(title: &str, groups: &[(&str, Vec<String>)]) -> Callout {
    let mut callout = Callout::new([heading(title)]);
    for (group, items) in groups {
        callout = callout
            .with_line(String::new())
            .with_line(heading(group));
        for item in items {
            callout = callout.with_line(bullet(item));
        }
    }
    callout
}

/// Callout markup for a bold line.
fn heading(text: &str) -> String {
    format!("**{}**", escape_markup(text))
}

/// Callout markup for a monospaced fragment.
fn code(text: &str) -> String {
    format!("`{}`", escape_markup(text))
}

/// Wraps already formatted markup in a color span.
fn colored(color: Color, markup: &str) -> String {
    format!("[color={}]{{{}}}", hex(color), markup)
}

/// Callout markup for a bulleted line; `markup` is inserted as is.
fn bullet(markup: &str) -> String {
    format!("\u{2022} {markup}")
}

/// Callout markup for a bulleted line of plain text.
fn bullet_text(text: &str) -> String {
    bullet(&escape_markup(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;
    use crate::Assembler;

    #[test]
    fn every_topic_plans_without_format_errors() {
        for &topic in Topic::all() {
            let assembler = Assembler::new(topic.style());
            let plan = assembler
                .plan(&topic.document())
                .unwrap_or_else(|err| panic!("{topic} failed to plan: {err}"));
            assert!(plan.section_count() > 0, "{topic} has no sections");
        }
    }

    #[test]
    fn names_and_file_names_are_unique() {
        let mut names: Vec<_> = Topic::all().iter().map(|topic| topic.name()).collect();
        let mut files: Vec<_> = Topic::all()
            .iter()
            .map(|topic| topic.default_file_name())
            .collect();
        names.sort_unstable();
        names.dedup();
        files.sort_unstable();
        files.dedup();
        assert_eq!(names.len(), Topic::all().len());
        assert_eq!(files.len(), Topic::all().len());
        assert!(files.iter().all(|file| file.ends_with(".pdf")));
    }

    #[test]
    fn page_breaks_follow_the_printed_layout() {
        let breaks = |topic: Topic| {
            topic
                .document()
                .blocks()
                .iter()
                .filter(|block| matches!(block, Block::PageBreak))
                .count()
        };
        assert_eq!(breaks(Topic::Git), 1);
        assert_eq!(breaks(Topic::Docker), 1);
        assert_eq!(breaks(Topic::Laravel), 4);
        assert_eq!(breaks(Topic::CssBasics), 0);
        assert_eq!(breaks(Topic::Flexbox), 0);
        assert_eq!(breaks(Topic::Grid), 0);
    }

    #[test]
    fn comparison_tables_declare_a_header() {
        for topic in [Topic::CssBasics, Topic::Flexbox, Topic::Grid] {
            for section in topic.document().sections() {
                assert_eq!(section.columns(), 3);
                assert_eq!(
                    section.header().map(<[String]>::len),
                    Some(COMPARISON_HEADER.len())
                );
            }
        }
    }

    #[test]
    fn callout_helpers_escape_their_input() {
        assert_eq!(code("a*b"), "`a&#42;b`");
        assert_eq!(heading("Tips"), "**Tips**");
        assert_eq!(bullet_text("x < y"), "\u{2022} x &lt; y");
        assert_eq!(
            colored(crate::style::rgb(0x7C3AED), "**flex**"),
            "[color=#7C3AED]{**flex**}"
        );
    }
}
