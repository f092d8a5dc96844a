use crate::model::{Callout, Document};
use crate::style::{rgb, StyleConfig};

use super::{comparison, tips_panel, ComparisonTheme};

const THEME: ComparisonTheme = ComparisonTheme {
    header: rgb(0x2563EB),
    section: rgb(0x059669),
    css: rgb(0xDC2626),
    tailwind: rgb(0x7C3AED),
    accent: rgb(0xF59E0B),
};

pub(super) fn style() -> StyleConfig {
    THEME.style()
}

pub(super) fn document() -> Document {
    Document::new("CSS Flexbox vs Tailwind CSS")
        .with_subtitle("Face-to-Face Comparison Cheat Sheet".to_owned())
        .with_section(comparison(
            "Flex Container Properties",
            &[
                ("display: flex", "flex", "Makes element a flex container"),
                ("flex-direction: row", "flex-row", "Items flow horizontally (default)"),
                ("flex-direction: row-reverse", "flex-row-reverse", "Items flow horizontally in reverse"),
                ("flex-direction: column", "flex-col", "Items flow vertically"),
                ("flex-direction: column-reverse", "flex-col-reverse", "Items flow vertically in reverse"),
                ("flex-wrap: nowrap", "flex-nowrap", "Items stay on single line (default)"),
                ("flex-wrap: wrap", "flex-wrap", "Items wrap to next line if needed"),
                ("flex-wrap: wrap-reverse", "flex-wrap-reverse", "Items wrap in reverse order"),
                ("justify-content: flex-start", "justify-start", "Items align to start of container"),
                ("justify-content: flex-end", "justify-end", "Items align to end of container"),
                ("justify-content: center", "justify-center", "Items align to center of container"),
                (
                    "justify-content: space-between",
                    "justify-between",
                    "Items evenly distributed with space between",
                ),
                (
                    "justify-content: space-around",
                    "justify-around",
                    "Items evenly distributed with space around",
                ),
                (
                    "justify-content: space-evenly",
                    "justify-evenly",
                    "Items evenly distributed with equal space",
                ),
                (
                    "align-items: stretch",
                    "items-stretch",
                    "Items stretch to fill container height (default)",
                ),
                ("align-items: flex-start", "items-start", "Items align to top of container"),
                ("align-items: flex-end", "items-end", "Items align to bottom of container"),
                ("align-items: center", "items-center", "Items align to vertical center of container"),
                ("align-items: baseline", "items-baseline", "Items align to their baselines"),
                ("align-content: stretch", "content-stretch", "Lines stretch to fill container (default)"),
                ("align-content: flex-start", "content-start", "Lines align to start of container"),
                ("align-content: flex-end", "content-end", "Lines align to end of container"),
                ("align-content: center", "content-center", "Lines align to center of container"),
                (
                    "align-content: space-between",
                    "content-between",
                    "Lines evenly distributed with space between",
                ),
                (
                    "align-content: space-around",
                    "content-around",
                    "Lines evenly distributed with space around",
                ),
            ],
        ))
        .with_section(comparison(
            "Flex Item Properties",
            &[
                ("flex-grow: 0", "flex-grow-0", "Item doesn't grow (default)"),
                ("flex-grow: 1", "flex-grow", "Item grows to fill available space"),
                ("flex-shrink: 1", "flex-shrink", "Item can shrink if needed (default)"),
                ("flex-shrink: 0", "flex-shrink-0", "Item doesn't shrink"),
                ("flex-basis: auto", "flex-auto", "Item size based on content or width/height"),
                ("flex-basis: 0", "flex-initial", "Item size based on content only"),
                ("flex: 1", "flex-1", "flex: 1 1 0% (grows, shrinks, no basis)"),
                ("flex: none", "flex-none", "flex: 0 0 auto (no grow/shrink)"),
                ("align-self: auto", "self-auto", "Item uses parent's align-items (default)"),
                ("align-self: flex-start", "self-start", "Item aligns to start of cross axis"),
                ("align-self: flex-end", "self-end", "Item aligns to end of cross axis"),
                ("align-self: center", "self-center", "Item aligns to center of cross axis"),
                ("align-self: stretch", "self-stretch", "Item stretches to fill cross axis"),
                ("align-self: baseline", "self-baseline", "Item aligns to baseline"),
                ("order: 0", "order-0", "Item appears in normal order (default)"),
                ("order: 1", "order-1", "Item appears after items with lower order"),
                ("order: -1", "order-first", "Item appears before all other items"),
                ("order: 9999", "order-last", "Item appears after all other items"),
            ],
        ))
        .with_callout(examples())
        .with_callout(tips())
}

fn examples() -> Callout {
    THEME.examples(
        "Common Patterns:",
        &[
            THEME.pattern(
                "Perfect Centering:",
                "display:flex; justify-content:center; align-items:center; min-h:100vh",
                "flex justify-center items-center min-h-screen",
                None,
            ),
            THEME.pattern(
                "Navigation Bar:",
                "display:flex; justify-content:space-between; align-items:center; padding:1rem",
                "flex justify-between items-center p-4",
                None,
            ),
            THEME.pattern(
                "Card Layout:",
                "display:flex; flex-direction:column; justify-content:space-between; height:300px",
                "flex flex-col justify-between h-72",
                None,
            ),
            THEME.pattern(
                "Responsive Grid:",
                "display:flex; flex-wrap:wrap; gap:1rem; justify-content:center",
                "flex flex-wrap gap-4 justify-center",
                None,
            ),
            THEME.pattern(
                "Equal Width Columns:",
                "display:flex; flex:1",
                "flex-1",
                Some("(on each item)"),
            ),
            THEME.pattern(
                "Sticky Footer:",
                "display:flex; flex-direction:column; min-h:100vh; flex:1",
                "flex flex-col min-h-screen flex-1",
                Some("(on main)"),
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
                    format!("Always start with {} class to enable flexbox", class("flex")),
                    format!(
                        "Default direction is row (horizontal), use {} for vertical",
                        class("flex-col")
                    ),
                    format!("Items stretch by default, use {} to prevent", class("items-start")),
                ],
            ),
            (
                "Axis Understanding:",
                vec![
                    format!("{} controls main axis (direction of flex)", class("justify-*")),
                    format!("{} controls cross axis (perpendicular to main)", class("items-*")),
                    format!("When {}, main axis becomes vertical", class("flex-col")),
                ],
            ),
            (
                "Common Techniques:",
                vec![
                    format!("Use {} for equal-width/height growing items", class("flex-1")),
                    format!("{} prevents growing/shrinking", class("flex-none")),
                    format!("{} adds spacing between items (modern browsers)", class("gap-*")),
                ],
            ),
            (
                "Responsive Design:",
                vec![
                    format!("{} for responsive layouts", class("md:flex-col lg:flex-row")),
                    format!(
                        "{} for breakpoint-specific alignment",
                        class("sm:justify-start md:justify-center")
                    ),
                    "Test on different screen sizes to ensure proper behavior".to_owned(),
                ],
            ),
            (
                "Performance:",
                vec![
                    "Flexbox is hardware-accelerated in modern browsers".to_owned(),
                    "Avoid changing flex direction frequently".to_owned(),
                    format!("Use {} for responsive multi-line layouts", class("flex-wrap")),
                ],
            ),
            (
                "Debugging:",
                vec![
                    "Add background colors to visualize containers and items".to_owned(),
                    "Use browser dev tools to inspect flex properties".to_owned(),
                    "Remember: flexbox only affects direct children".to_owned(),
                ],
            ),
        ],
    )
}
