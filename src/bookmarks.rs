//! Section outline entries, added to rendered bytes with `lopdf`.
//!
//! `genpdf` cannot write an outline, so the finished document is reloaded, one outline item per
//! placed section is appended under a new `/Outlines` root and the document is saved again.

use lopdf::{dictionary, Document, Object, ObjectId};
use thiserror::Error;

/// Failures while adding the section outline to a rendered document.
#[derive(Debug, Error)]
pub enum BookmarkError {
    #[error("rendered PDF could not be reloaded")]
    Pdf(#[from] lopdf::Error),

    #[error("rendered PDF could not be saved")]
    Save(#[from] std::io::Error),

    #[error("rendered PDF has no usable document catalog")]
    MissingCatalog,

    /// A section was placed on a page the document does not have.
    #[error("section {section} starts on page {page}, but the document has {page_count} page(s)")]
    PageOutOfRange {
        section: usize,
        page: usize,
        page_count: usize,
    },
}

/// Adds one outline item per section that was placed on a page.
///
/// `titles` and `section_pages` are parallel; every item jumps to its section's first page with
/// a `/Fit` view.  When no section was placed, the bytes are returned unchanged.
pub fn apply_section_bookmarks(
    pdf_bytes: &[u8],
    titles: &[String],
    section_pages: &[Option<usize>],
) -> Result<Vec<u8>, BookmarkError> {
    let mut pdf = Document::load_mem(pdf_bytes)?;
    let pages = pdf.get_pages();

    let targets = titles
        .iter()
        .zip(section_pages)
        .enumerate()
        .filter_map(|(section, (title, page))| page.map(|page| (section, title, page)))
        .map(|(section, title, page)| {
            u32::try_from(page)
                .ok()
                .and_then(|number| pages.get(&number).copied())
                .map(|page_id| (title.as_str(), page_id))
                .ok_or(BookmarkError::PageOutOfRange {
                    section,
                    page,
                    page_count: pages.len(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if targets.is_empty() {
        return Ok(pdf_bytes.to_vec());
    }

    let root = pdf.new_object_id();
    let items: Vec<ObjectId> = targets.iter().map(|_| pdf.new_object_id()).collect();

    for (index, (&(title, page_id), &item_id)) in targets.iter().zip(&items).enumerate() {
        let mut item = dictionary! {
            "Title" => Object::string_literal(title),
            "Parent" => root,
            "Dest" => vec![page_id.into(), Object::Name(b"Fit".to_vec())],
        };
        if index > 0 {
            item.set("Prev", items[index - 1]);
        }
        if let Some(&next) = items.get(index + 1) {
            item.set("Next", next);
        }
        pdf.objects.insert(item_id, Object::Dictionary(item));
    }

    pdf.objects.insert(
        root,
        Object::Dictionary(dictionary! {
            "Type" => "Outlines",
            "First" => items[0],
            "Last" => items[items.len() - 1],
            "Count" => items.len() as i64,
        }),
    );

    let catalog_id = pdf
        .trailer
        .get(b"Root")
        .and_then(Object::as_reference)
        .map_err(|_| BookmarkError::MissingCatalog)?;
    let catalog = pdf
        .get_object_mut(catalog_id)
        .and_then(Object::as_dict_mut)
        .map_err(|_| BookmarkError::MissingCatalog)?;
    catalog.set("Outlines", root);
    catalog.set("PageMode", Object::Name(b"UseOutlines".to_vec()));

    let mut buffer = Vec::new();
    pdf.save_to(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A font-free document with `count` empty pages.
    fn blank_pdf(count: usize) -> Vec<u8> {
        let mut pdf = Document::with_version("1.5");
        let pages_id = pdf.new_object_id();
        let kids: Vec<Object> = (0..count)
            .map(|_| {
                pdf.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "MediaBox" => vec![
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Integer(595),
                        Object::Integer(842),
                    ],
                })
                .into()
            })
            .collect();
        pdf.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count as i64,
            }),
        );
        let catalog_id = pdf.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        pdf.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        pdf.save_to(&mut bytes).expect("save blank pdf");
        bytes
    }

    fn outline_count(bytes: &[u8]) -> i64 {
        let pdf = Document::load_mem(bytes).expect("reload");
        let catalog_id = pdf
            .trailer
            .get(b"Root")
            .and_then(Object::as_reference)
            .expect("catalog reference");
        let root = pdf
            .get_dictionary(catalog_id)
            .and_then(|catalog| catalog.get(b"Outlines"))
            .and_then(Object::as_reference)
            .expect("outline root");
        pdf.get_dictionary(root)
            .and_then(|outline| outline.get(b"Count"))
            .and_then(Object::as_i64)
            .expect("outline count")
    }

    #[test]
    fn unparsable_bytes_are_reported() {
        let err = apply_section_bookmarks(b"not a pdf", &["Intro".to_owned()], &[Some(1)])
            .unwrap_err();
        assert!(matches!(err, BookmarkError::Pdf(_)));
    }

    #[test]
    fn placed_sections_become_outline_items() {
        let titles = ["Basics", "Branching", "Unplaced"].map(str::to_owned);
        let bytes = apply_section_bookmarks(&blank_pdf(2), &titles, &[Some(1), Some(2), None])
            .expect("add outline");
        assert_eq!(outline_count(&bytes), 2);
    }

    #[test]
    fn nothing_placed_leaves_the_bytes_alone() {
        let original = blank_pdf(1);
        let bytes = apply_section_bookmarks(&original, &["Basics".to_owned()], &[None])
            .expect("no outline needed");
        assert_eq!(bytes, original);
    }

    #[test]
    fn pages_past_the_end_are_rejected() {
        let err = apply_section_bookmarks(&blank_pdf(1), &["Late".to_owned()], &[Some(3)])
            .unwrap_err();
        assert!(matches!(
            err,
            BookmarkError::PageOutOfRange {
                section: 0,
                page: 3,
                page_count: 1
            }
        ));
    }
}
