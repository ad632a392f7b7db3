// src/source/pdf.rs
//
// PDF text backends. Both read the whole file up front so the handle is
// closed before any parsing happens.

use std::panic;
use std::path::Path;

use super::TextExtractor;
use crate::error::{Result, ScrapeError};

/// Form feed between pages in `pdf-extract` output.
const PAGE_BREAK: char = '\x0C';

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| ScrapeError::unavailable(path.display().to_string(), e))
}

/// `pdf-extract`: whole-document text, split back into pages on form feeds.
pub struct PdfExtractBackend;

impl TextExtractor for PdfExtractBackend {
    fn name(&self) -> &str {
        "pdf-extract"
    }

    fn extract_pages(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = read_bytes(path)?;
        // pdf-extract panics on some malformed font dictionaries.
        let text = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(&bytes))
            .map_err(|payload| {
                logd!("{}: pdf-extract panicked: {}", path.display(), panic_message(&*payload));
                ScrapeError::unavailable(path.display().to_string(), "pdf-extract panicked")
            })?
            .map_err(|e| ScrapeError::unavailable(path.display().to_string(), e))?;
        Ok(split_pages(&text))
    }
}

/// `lopdf`: page-by-page text from the content streams.
pub struct LopdfBackend;

impl TextExtractor for LopdfBackend {
    fn name(&self) -> &str {
        "lopdf"
    }

    fn extract_pages(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = read_bytes(path)?;
        let doc = lopdf::Document::load_mem(&bytes)
            .map_err(|e| ScrapeError::unavailable(path.display().to_string(), e))?;

        let mut pages = Vec::new();
        for page_no in doc.get_pages().keys() {
            match doc.extract_text(&[*page_no]) {
                Ok(t) => pages.push(t),
                Err(e) => {
                    // One unreadable page should not cost the rest of the sheet.
                    logd!("{}: lopdf page {page_no}: {e}", path.display());
                    pages.push(s!());
                }
            }
        }
        Ok(pages)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

fn split_pages(text: &str) -> Vec<String> {
    text.split(PAGE_BREAK).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_split_on_form_feed() {
        assert_eq!(split_pages("one\n\x0Ctwo\n"), vec!["one\n", "two\n"]);
        assert_eq!(split_pages("single"), vec!["single"]);
    }

    #[test]
    fn garbage_bytes_are_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("bad.pdf");
        std::fs::write(&p, b"not a pdf at all").unwrap();

        let err = LopdfBackend.extract_pages(&p).unwrap_err();
        assert!(matches!(err, ScrapeError::DocumentUnavailable { .. }));
    }

    /// One page of text whose `/F1` font dictionary has no `/Subtype`.
    fn pdf_with_broken_font() -> Vec<u8> {
        use lopdf::content::{Content, Operation};
        use lopdf::{dictionary, Document, Object, Stream};

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal("PL NAME TEAM TIME")]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn broken_font_does_not_unwind_through_the_chain() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("broken_font.pdf");
        std::fs::write(&p, pdf_with_broken_font()).unwrap();

        // Either an error or text, never a panic.
        let _ = PdfExtractBackend.extract_pages(&p);

        let chain = crate::source::ExtractorChain::from_names(&[s!("pdf-extract"), s!("lopdf")]).unwrap();
        match chain.extract_pages(&p) {
            Ok(_) => {}
            Err(e) => assert!(matches!(e, ScrapeError::DocumentUnavailable { .. }), "{e}"),
        }
    }

    #[test]
    fn panic_payloads_become_messages() {
        let boxed: Box<dyn std::any::Any + Send> = Box::new("bad font");
        assert_eq!(panic_message(&*boxed), "bad font");
        let boxed: Box<dyn std::any::Any + Send> = Box::new(s!("missing DescendantFonts"));
        assert_eq!(panic_message(&*boxed), "missing DescendantFonts");
        let boxed: Box<dyn std::any::Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(&*boxed), "non-string panic payload");
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = PdfExtractBackend.extract_pages(Path::new("/no/such.pdf")).unwrap_err();
        assert!(matches!(err, ScrapeError::DocumentUnavailable { .. }));
    }
}
