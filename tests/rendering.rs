use std::collections::BTreeSet;
use std::env;
use std::fs;

use cheatsheet::content::Topic;
use cheatsheet::fonts::{self, FONTS_DIR_ENV};
use cheatsheet::{
    Assembler, Callout, Document, Error, ErrorClass, RenderedPdf, Section, StyleConfig,
};
use sha2::{Digest, Sha256};

/// Skips font-gated tests, unless a fonts directory was configured explicitly.
fn fonts_available() -> bool {
    if fonts::default_fonts_available() {
        return true;
    }
    if let Some(dir) = env::var_os(FONTS_DIR_ENV) {
        panic!(
            "{FONTS_DIR_ENV} points at {} but the fonts there could not be loaded",
            dir.to_string_lossy()
        );
    }
    eprintln!("Skipping rendering assertions: bundled fonts are not installed");
    false
}

fn sample_document() -> Document {
    Document::new("Sample").with_section(
        Section::new("Basics")
            .with_row(("git init", "Initialize a new repository"))
            .with_row(("git status", "Show working tree status")),
    )
}

fn render(document: &Document) -> RenderedPdf {
    Assembler::new(StyleConfig::default())
        .render(document)
        .expect("render sample document")
}

fn scrub_pdf(bytes: &[u8]) -> Vec<u8> {
    fn scrub_segment(data: &mut [u8], tag: &[u8], terminator: u8) {
        let mut index = 0;
        while index + tag.len() < data.len() {
            if data[index..].starts_with(tag) {
                let mut cursor = index + tag.len();
                while cursor < data.len() {
                    let byte = data[cursor];
                    if byte == terminator {
                        break;
                    }
                    if terminator == b')'
                        || !matches!(byte, b'<' | b'>' | b' ' | b'\n' | b'\r' | b'\t')
                    {
                        data[cursor] = b'0';
                    }
                    cursor += 1;
                }
                index = cursor;
            } else {
                index += 1;
            }
        }
    }

    let mut normalized = bytes.to_vec();
    scrub_segment(&mut normalized, b"/CreationDate(", b')');
    scrub_segment(&mut normalized, b"/ModDate(", b')');
    scrub_segment(&mut normalized, b"/ID[", b']');
    scrub_segment(&mut normalized, b"/Producer(", b')');
    normalized
}

fn normalized_hash(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(scrub_pdf(bytes)).into()
}

#[test]
fn renders_non_empty_output() {
    if !fonts_available() {
        return;
    }
    let rendered = render(&sample_document());
    assert!(rendered.bytes.starts_with(b"%PDF"));
    assert_eq!(rendered.page_count, 1);
    assert_eq!(rendered.section_pages, vec![Some(1)]);
}

#[test]
fn rendering_is_deterministic() {
    if !fonts_available() {
        return;
    }
    let first = render(&sample_document());
    let second = render(&sample_document());

    let has_xmp = |bytes: &[u8]| bytes.windows(7).any(|window| window == b"xmpmeta");
    assert!(!has_xmp(&first.bytes), "XMP metadata carries timestamps and random ids");
    assert_eq!(first.bytes.len(), second.bytes.len(), "PDF sizes should match");
    assert_eq!(
        normalized_hash(&first.bytes),
        normalized_hash(&second.bytes),
        "PDF renders must be deterministic after metadata normalization"
    );
}

#[test]
fn page_breaks_start_the_next_section_on_a_new_page() {
    if !fonts_available() {
        return;
    }
    let sections: Vec<Section> = (1..=5)
        .map(|index| Section::new(format!("Section {index}")).with_row(("cmd", "description")))
        .collect();
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("breaks.pdf");

    let rendered = Assembler::new(StyleConfig::default())
        .render_sections("Breaks", &sections, &BTreeSet::from([2]), &path)
        .expect("render sections");

    let pages: Vec<usize> = rendered
        .section_pages
        .iter()
        .map(|page| page.expect("every section is placed"))
        .collect();
    assert_eq!(pages.len(), 5);
    assert!(pages.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(pages[3] > pages[2], "section after the break starts a new page");
    assert_eq!(rendered.page_count, 2);
    assert_eq!(fs::read(&path).expect("read output"), rendered.bytes);
}

#[test]
fn long_tables_continue_on_the_next_page() {
    if !fonts_available() {
        return;
    }
    let section = (0..120).fold(Section::new("Many rows"), |section, index| {
        section.with_row((
            format!("command {index}"),
            "a description long enough to wrap onto a second line inside its narrow column \
             so that rows are taller than a single line of text",
        ))
    });
    let document = Document::new("Long").with_section(section.clone()).with_section(section);

    let rendered = render(&document);
    assert!(rendered.page_count >= 3, "120 wrapped rows need several pages");
    assert_eq!(rendered.section_pages[0], Some(1));
    assert!(rendered.section_pages[1] > rendered.section_pages[0]);
}

#[test]
fn tall_callout_panels_move_to_a_new_page() {
    if !fonts_available() {
        return;
    }
    let rows = (0..30).fold(Section::new("Filler"), |section, index| {
        section.with_row((format!("filler {index}"), "keeps the first page busy"))
    });
    let tall_callout = Callout::new((0..30).map(|index| format!("Tip number {index}")));
    let document = Document::new("Callouts")
        .with_section(rows)
        .with_callout(tall_callout);

    let rendered = render(&document);
    assert_eq!(rendered.page_count, 2, "the panel moves to a fresh page as a whole");
}

#[test]
fn existing_output_is_replaced() {
    if !fonts_available() {
        return;
    }
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("sample.pdf");
    fs::write(&path, b"stale contents that are not a pdf").expect("seed output");

    let rendered = Assembler::new(StyleConfig::default())
        .render_to_path(&sample_document(), &path)
        .expect("render over existing file");

    assert_eq!(fs::read(&path).expect("read output"), rendered.bytes);
}

#[test]
fn unwritable_destination_is_a_generation_failure() {
    if !fonts_available() {
        return;
    }
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("missing").join("sample.pdf");

    let err = Assembler::new(StyleConfig::default())
        .render_to_path(&sample_document(), &path)
        .expect_err("parent directory does not exist");

    assert!(matches!(&err, Error::Io { path: failed, .. } if failed == &path));
    assert_eq!(err.class(), ErrorClass::GenerationFailure);
    assert!(!path.exists());
}

#[test]
fn invalid_text_fails_before_fonts_are_needed() {
    let document = Document::new("Broken").with_section(
        Section::new("Control").with_row(("bell\u{7}", "rings the terminal bell")),
    );

    let err = Assembler::new(StyleConfig::default())
        .render(&document)
        .expect_err("control characters are rejected");

    assert!(matches!(err, Error::Format(_)));
    assert_eq!(err.class(), ErrorClass::GenerationFailure);
}

#[test]
fn every_topic_renders() {
    if !fonts_available() {
        return;
    }
    for &topic in Topic::all() {
        let rendered = Assembler::new(topic.style())
            .render(&topic.document())
            .unwrap_or_else(|err| panic!("{topic} failed to render: {err}"));
        assert!(rendered.page_count >= 1, "{topic} produced no pages");
        assert!(
            rendered.section_pages.iter().all(Option::is_some),
            "{topic} left a section unplaced"
        );
    }
}

#[test]
fn laravel_pages_follow_its_breaks() {
    if !fonts_available() {
        return;
    }
    let rendered = Assembler::new(Topic::Laravel.style())
        .render(&Topic::Laravel.document())
        .expect("render laravel");
    assert!(rendered.page_count >= 5);
}
