use crate::model::{Callout, Document};
use crate::style::{rgb, StyleConfig};

use super::{comparison, tips_panel, ComparisonTheme};

const THEME: ComparisonTheme = ComparisonTheme {
    header: rgb(0x10B981),
    section: rgb(0xF59E0B),
    css: rgb(0xEF4444),
    tailwind: rgb(0x8B5CF6),
    accent: rgb(0x06B6D4),
};

pub(super) fn style() -> StyleConfig {
    THEME.style()
}

pub(super) fn document() -> Document {
    Document::new("CSS Grid vs Tailwind CSS")
        .with_subtitle("Face-to-Face Comparison Cheat Sheet".to_owned())
        .with_section(comparison(
            "Grid Container Properties",
            &[
                ("display: grid", "grid", "Makes element a grid container"),
                ("grid-template-columns: repeat(3, 1fr)", "grid-cols-3", "3 equal-width columns"),
                ("grid-template-columns: repeat(4, 1fr)", "grid-cols-4", "4 equal-width columns"),
                ("grid-template-columns: 1fr 2fr", "grid-cols-[1fr_2fr]", "Custom column sizes"),
                (
                    "grid-template-columns: 100px 1fr 100px",
                    "grid-cols-[100px_1fr_100px]",
                    "Fixed and flexible columns",
                ),
                ("grid-template-rows: repeat(2, 100px)", "grid-rows-2", "2 rows of 100px height"),
                ("grid-template-rows: 1fr 2fr 1fr", "grid-rows-[1fr_2fr_1fr]", "Custom row sizes"),
                ("gap: 1rem", "gap-4", "1rem gap between grid items"),
                ("gap: 0.5rem", "gap-2", "0.5rem gap between grid items"),
                ("grid-auto-flow: column", "grid-flow-col", "Items flow horizontally"),
                ("grid-auto-flow: row", "grid-flow-row", "Items flow vertically (default)"),
                ("grid-auto-flow: dense", "grid-flow-dense", "Dense packing algorithm"),
                ("justify-items: start", "justify-items-start", "Items align to start of column"),
                ("justify-items: center", "justify-items-center", "Items align to center of column"),
                ("justify-items: end", "justify-items-end", "Items align to end of column"),
                (
                    "justify-items: stretch",
                    "justify-items-stretch",
                    "Items stretch to fill column (default)",
                ),
                ("align-items: start", "items-start", "Items align to start of row"),
                ("align-items: center", "items-center", "Items align to center of row"),
                ("align-items: end", "items-end", "Items align to end of row"),
                ("align-items: stretch", "items-stretch", "Items stretch to fill row (default)"),
                ("justify-content: start", "justify-start", "Grid aligns to start of container"),
                ("justify-content: center", "justify-center", "Grid aligns to center of container"),
                ("justify-content: end", "justify-end", "Grid aligns to end of container"),
                ("justify-content: space-between", "justify-between", "Grid items evenly distributed"),
                ("justify-content: space-around", "justify-around", "Grid items with space around"),
                ("justify-content: space-evenly", "justify-evenly", "Grid items with equal space"),
                ("align-content: start", "content-start", "Grid aligns to start of container"),
                ("align-content: center", "content-center", "Grid aligns to center of container"),
                ("align-content: end", "content-end", "Grid aligns to end of container"),
                ("align-content: space-between", "content-between", "Grid rows evenly distributed"),
                ("align-content: space-around", "content-around", "Grid rows with space around"),
            ],
        ))
        .with_section(comparison(
            "Grid Item Properties",
            &[
                ("grid-column: span 2", "col-span-2", "Item spans 2 columns"),
                ("grid-column: span 3", "col-span-3", "Item spans 3 columns"),
                ("grid-column: span full", "col-span-full", "Item spans all columns"),
                ("grid-row: span 2", "row-span-2", "Item spans 2 rows"),
                ("grid-row: span 3", "row-span-3", "Item spans 3 rows"),
                ("grid-row: span full", "row-span-full", "Item spans all rows"),
                ("grid-column-start: 1", "col-start-1", "Item starts at column line 1"),
                ("grid-column-start: 2", "col-start-2", "Item starts at column line 2"),
                ("grid-column-end: 3", "col-end-3", "Item ends at column line 3"),
                ("grid-column-end: 4", "col-end-4", "Item ends at column line 4"),
                ("grid-row-start: 1", "row-start-1", "Item starts at row line 1"),
                ("grid-row-start: 2", "row-start-2", "Item starts at row line 2"),
                ("grid-row-end: 3", "row-end-3", "Item ends at row line 3"),
                ("grid-row-end: 4", "row-end-4", "Item ends at row line 4"),
                ("grid-column: 1 / 3", "col-span-2", "Item spans from column 1 to 3"),
                ("grid-row: 1 / 3", "row-span-2", "Item spans from row 1 to 3"),
                ("justify-self: start", "justify-self-start", "Item aligns to start of its column"),
                ("justify-self: center", "justify-self-center", "Item aligns to center of its column"),
                ("justify-self: end", "justify-self-end", "Item aligns to end of its column"),
                ("justify-self: stretch", "justify-self-stretch", "Item stretches to fill its column"),
                ("align-self: start", "self-start", "Item aligns to start of its row"),
                ("align-self: center", "self-center", "Item aligns to center of its row"),
                ("align-self: end", "self-end", "Item aligns to end of its row"),
                ("align-self: stretch", "self-stretch", "Item stretches to fill its row"),
                ("place-self: center", "place-self-center", "Item centers in both directions"),
                ("place-self: start", "place-self-start", "Item aligns to start in both directions"),
                ("place-self: end", "place-self-end", "Item aligns to end in both directions"),
                ("place-self: stretch", "place-self-stretch", "Item stretches in both directions"),
            ],
        ))
        .with_callout(examples())
        .with_callout(tips())
}

fn examples() -> Callout {
    THEME.examples(
        "Common Grid Patterns:",
        &[
            THEME.pattern(
                "Simple 3-Column Layout:",
                "display:grid; grid-template-columns:repeat(3,1fr); gap:1rem",
                "grid grid-cols-3 gap-4",
                None,
            ),
            THEME.pattern(
                "Sidebar + Main Content:",
                "display:grid; grid-template-columns:250px 1fr; gap:2rem",
                "grid grid-cols-[250px_1fr] gap-8",
                None,
            ),
            THEME.pattern(
                "Card Grid:",
                "display:grid; grid-template-columns:repeat(auto-fit,minmax(300px,1fr)); gap:1rem",
                "grid grid-cols-[repeat(auto-fit,minmax(300px,1fr))] gap-4",
                None,
            ),
            THEME.pattern(
                "Header + Content + Footer:",
                "display:grid; grid-template-rows:auto 1fr auto; min-h:100vh",
                "grid grid-rows-[auto_1fr_auto] min-h-screen",
                None,
            ),
            THEME.pattern(
                "Full-Width Header:",
                "grid-column:1/-1",
                "col-span-full",
                Some("(on header item)"),
            ),
            THEME.pattern(
                "Centered Content:",
                "place-self:center",
                "place-self-center",
                Some("(on item)"),
            ),
        ],
    )
}

fn tips() -> Callout {
    let class = |text| THEME.class(text);
    tips_panel(
        "Tips & Best Practices:",
        &[
            (
                "Getting Started:",
                vec![
                    format!("Always start with {} class to enable CSS Grid", class("grid")),
                    format!("Use {} for predefined column counts", class("grid-cols-*")),
                    format!("Use {} for custom column definitions", class("grid-cols-[...]")),
                ],
            ),
            (
                "Common Patterns:",
                vec![
                    format!(
                        "{} to {} for standard layouts",
                        class("grid-cols-1"),
                        class("grid-cols-12")
                    ),
                    format!("{} to make items span multiple columns", class("col-span-*")),
                    format!("{} to make items span multiple rows", class("row-span-*")),
                ],
            ),
            (
                "Responsive Design:",
                vec![
                    format!("{} for responsive grids", class("md:grid-cols-2 lg:grid-cols-3")),
                    format!(
                        "{} for responsive item spans",
                        class("sm:col-span-1 md:col-span-2")
                    ),
                    format!("Combine with {} for consistent spacing", class("gap-*")),
                ],
            ),
            (
                "Advanced Techniques:",
                vec![
                    format!(
                        "Use {} to fill gaps in irregular layouts",
                        class("grid-flow-dense")
                    ),
                    format!(
                        "{} combines justify-self and align-self",
                        class("place-self-center")
                    ),
                    format!("{} makes item span entire grid width", class("col-span-full")),
                ],
            ),
            (
                "Performance:",
                vec![
                    "CSS Grid is hardware-accelerated in modern browsers".to_owned(),
                    "Avoid changing grid structure frequently".to_owned(),
                    "Use implicit grids for dynamic content".to_owned(),
                ],
            ),
            (
                "Debugging:",
                vec![
                    "Add background colors to visualize grid areas".to_owned(),
                    "Use browser dev tools grid inspector".to_owned(),
                    "Remember: grid only affects direct children".to_owned(),
                ],
            ),
        ],
    )
}
