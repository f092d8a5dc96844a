use crate::escape::escape_markup;
use crate::model::{Callout, Document};
use crate::style::{rgb, StyleConfig};

use super::{comparison, tips_panel, ComparisonTheme};

const THEME: ComparisonTheme = ComparisonTheme {
    header: rgb(0x3B82F6),
    section: rgb(0x10B981),
    css: rgb(0xDC2626),
    tailwind: rgb(0x7C3AED),
    accent: rgb(0xF59E0B),
};

pub(super) fn style() -> StyleConfig {
    THEME.style()
}

pub(super) fn document() -> Document {
    Document::new("Basic CSS vs Tailwind CSS")
        .with_subtitle("Essential Styling Properties Cheat Sheet".to_owned())
        .with_section(comparison(
            "Layout & Positioning",
            &[
                ("display: block", "block", "Element takes full width, starts new line"),
                ("display: inline", "inline", "Element only takes necessary width"),
                ("display: inline-block", "inline-block", "Inline element with block properties"),
                ("display: none", "hidden", "Element is completely hidden"),
                ("display: flex", "flex", "Creates a flex container"),
                ("display: grid", "grid", "Creates a grid container"),
                ("position: static", "static", "Default positioning"),
                ("position: relative", "relative", "Positioned relative to normal position"),
                (
                    "position: absolute",
                    "absolute",
                    "Positioned relative to nearest positioned parent",
                ),
                ("position: fixed", "fixed", "Positioned relative to viewport"),
                ("position: sticky", "sticky", "Switches between relative and fixed"),
                ("float: left", "float-left", "Element floats to the left"),
                ("float: right", "float-right", "Element floats to the right"),
                ("clear: both", "clear-both", "Clears floated elements on both sides"),
            ],
        ))
        .with_section(comparison(
            "Spacing (Margin & Padding)",
            &[
                ("margin: 0", "m-0", "No margin on all sides"),
                ("margin: 1rem", "m-4", "1rem margin on all sides"),
                ("margin-top: 0.5rem", "mt-2", "0.5rem margin on top"),
                ("margin-bottom: 1rem", "mb-4", "1rem margin on bottom"),
                ("margin-left: 2rem", "ml-8", "2rem margin on left"),
                ("margin-right: 2rem", "mr-8", "2rem margin on right"),
                ("margin: 0 auto", "mx-auto", "Horizontal centering"),
                ("padding: 0", "p-0", "No padding on all sides"),
                ("padding: 1rem", "p-4", "1rem padding on all sides"),
                ("padding-top: 0.5rem", "pt-2", "0.5rem padding on top"),
                ("padding-bottom: 1rem", "pb-4", "1rem padding on bottom"),
                ("padding-left: 2rem", "pl-8", "2rem padding on left"),
                ("padding-right: 2rem", "pr-8", "2rem padding on right"),
                ("padding: 1rem 2rem", "px-8 py-4", "Horizontal and vertical padding"),
            ],
        ))
        .with_section(comparison(
            "Sizing (Width & Height)",
            &[
                ("width: 100%", "w-full", "Full width"),
                ("width: 50%", "w-1/2", "Half width"),
                ("width: 25%", "w-1/4", "Quarter width"),
                ("width: auto", "w-auto", "Auto width"),
                ("width: 100px", "w-24", "Fixed width (100px \u{2248} 6rem)"),
                ("max-width: 100%", "max-w-full", "Maximum width 100%"),
                ("min-width: 0", "min-w-0", "Minimum width 0"),
                ("height: 100%", "h-full", "Full height"),
                ("height: 100vh", "h-screen", "Full viewport height"),
                ("height: 50%", "h-1/2", "Half height"),
                ("height: auto", "h-auto", "Auto height"),
                ("max-height: 100vh", "max-h-screen", "Maximum height of viewport"),
                ("min-height: 100vh", "min-h-screen", "Minimum height of viewport"),
            ],
        ))
        .with_section(comparison(
            "Typography & Text",
            &[
                ("color: black", "text-black", "Black text color"),
                ("color: white", "text-white", "White text color"),
                ("color: red", "text-red-500", "Red text color"),
                ("font-size: 12px", "text-xs", "Extra small font size"),
                ("font-size: 14px", "text-sm", "Small font size"),
                ("font-size: 16px", "text-base", "Base font size (default)"),
                ("font-size: 18px", "text-lg", "Large font size"),
                ("font-size: 24px", "text-2xl", "Extra large font size"),
                ("font-weight: normal", "font-normal", "Normal font weight"),
                ("font-weight: bold", "font-bold", "Bold font weight"),
                ("text-align: left", "text-left", "Left align text"),
                ("text-align: center", "text-center", "Center align text"),
                ("text-align: right", "text-right", "Right align text"),
                ("text-decoration: underline", "underline", "Underlined text"),
                ("text-decoration: none", "no-underline", "Remove text decoration"),
                ("line-height: 1.5", "leading-6", "Line height 1.5"),
                ("letter-spacing: 1px", "tracking-wide", "Wide letter spacing"),
            ],
        ))
        .with_section(comparison(
            "Background & Borders",
            &[
                ("background-color: white", "bg-white", "White background"),
                ("background-color: black", "bg-black", "Black background"),
                ("background-color: blue", "bg-blue-500", "Blue background"),
                ("background-color: transparent", "bg-transparent", "Transparent background"),
                ("border: 1px solid black", "border border-black", "1px solid black border"),
                ("border: 2px solid red", "border-2 border-red-500", "2px solid red border"),
                ("border: none", "border-none", "No border"),
                ("border-radius: 4px", "rounded", "Rounded corners"),
                ("border-radius: 8px", "rounded-lg", "Large rounded corners"),
                ("border-radius: 50%", "rounded-full", "Fully rounded (circle)"),
                ("box-shadow: 0 4px 6px rgba(0,0,0,0.1)", "shadow-md", "Medium shadow"),
                ("box-shadow: none", "shadow-none", "No shadow"),
                ("opacity: 0.5", "opacity-50", "50% opacity"),
                ("opacity: 1", "opacity-100", "Full opacity"),
            ],
        ))
        .with_callout(examples())
        .with_callout(tips())
}

fn examples() -> Callout {
    THEME.examples(
        "Common Patterns & Examples:",
        &[
            THEME.pattern(
                "Center a Div:",
                "margin: 0 auto; width: fit-content;",
                "mx-auto w-fit",
                None,
            ),
            THEME.pattern(
                "Card Component:",
                "background: white; padding: 1rem; border-radius: 8px; \
                 box-shadow: 0 4px 6px rgba(0,0,0,0.1);",
                "bg-white p-4 rounded-lg shadow-md",
                None,
            ),
            THEME.pattern(
                "Button Style:",
                "background: blue; color: white; padding: 0.5rem 1rem; border: none; \
                 border-radius: 4px;",
                "bg-blue-500 text-white py-2 px-4 border-none rounded",
                None,
            ),
            THEME.pattern(
                "Full Height Container:",
                "min-height: 100vh; display: flex; flex-direction: column;",
                "min-h-screen flex flex-col",
                None,
            ),
            responsive_text(),
            THEME.pattern(
                "Hide on Mobile:",
                "@media (max-width: 768px) { display: none; }",
                "hidden md:block",
                None,
            ),
            THEME.pattern(
                "Hover Effects:",
                "transition: all 0.3s ease; &:hover { transform: scale(1.05); }",
                "transition-all duration-300 hover:scale-105",
                None,
            ),
        ],
    )
}

/// The only pattern whose note applies to the CSS line alone.
fn responsive_text() -> [String; 3] {
    let [name, css, tailwind] = THEME.pattern(
        "Responsive Text:",
        "font-size: 1rem;",
        "text-base md:text-lg lg:text-xl",
        None,
    );
    [name, format!("{css} {}", escape_markup("+ media queries")), tailwind]
}

fn tips() -> Callout {
    let class = |text| THEME.class(text);
    tips_panel(
        "Tips & Best Practices:",
        &[
            (
                "Getting Started with Tailwind:",
                vec![
                    format!(
                        "Add Tailwind CDN: {}",
                        class("<script src=\"https://cdn.tailwindcss.com\"></script>")
                    ),
                    format!("Or install via npm: {}", class("npm install tailwindcss")),
                    format!(
                        "Classes are applied directly in HTML: {}",
                        class("<div class=\"bg-blue-500 text-white p-4\">")
                    ),
                ],
            ),
            (
                "Spacing Scale:",
                vec![
                    format!(
                        "{} = 0px, {} = 0.25rem (4px), {} = 0.5rem (8px), {} = 1rem (16px)",
                        class("0"),
                        class("1"),
                        class("2"),
                        class("4")
                    ),
                    format!(
                        "{} = 2rem (32px), {} = 4rem (64px), {} = 8rem (128px)",
                        class("8"),
                        class("16"),
                        class("32")
                    ),
                    format!(
                        "Use consistent spacing: {} for harmonious layouts",
                        class("p-4 m-2 gap-4")
                    ),
                ],
            ),
            (
                "Color System:",
                vec![
                    "Colors range from 50 (lightest) to 950 (darkest)".to_owned(),
                    format!(
                        "{} (very light) to {} (very dark)",
                        class("blue-100"),
                        class("blue-900")
                    ),
                    format!("Use {} as the default shade for most colors", class("500")),
                ],
            ),
            (
                "Responsive Design:",
                vec![
                    format!(
                        "{} \u{2265}640px, {} \u{2265}768px, {} \u{2265}1024px, {} \u{2265}1280px",
                        class("sm:"),
                        class("md:"),
                        class("lg:"),
                        class("xl:")
                    ),
                    "Mobile-first: start with base classes, add breakpoint prefixes".to_owned(),
                    format!("Example: {}", class("text-sm md:text-base lg:text-lg")),
                ],
            ),
            (
                "Common Mistakes:",
                vec![
                    "Don't mix CSS and Tailwind classes unnecessarily".to_owned(),
                    format!(
                        "Use {} and {} for consistent spacing between children",
                        class("space-x-*"),
                        class("space-y-*")
                    ),
                    "Remember: Tailwind classes are purged in production (unused classes removed)"
                        .to_owned(),
                ],
            ),
            (
                "Debugging:",
                vec![
                    format!(
                        "Add background colors to visualize layouts: {}",
                        class("bg-red-200")
                    ),
                    "Use browser dev tools to see applied styles".to_owned(),
                    "Tailwind CSS IntelliSense extension for VS Code is very helpful".to_owned(),
                ],
            ),
        ],
    )
}
