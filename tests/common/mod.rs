// Fixture builders shared by the integration tests.
//
// PDFs are generated with lopdf at test time so no binary fixtures live in
// the repository.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{
    dictionary, Document, EncryptionState, EncryptionVersion, Object, ObjectId, Permissions,
    Stream,
};
use std::path::{Path, PathBuf};

/// Page contents: one entry per line, each line a list of separate `Tj`
/// text runs shown one after another.
pub type Page<'a> = &'a [&'a [&'a str]];

struct Builder {
    doc: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    kids: Vec<Object>,
}

impl Builder {
    fn new() -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        Self {
            doc,
            pages_id,
            resources_id,
            kids: Vec::new(),
        }
    }

    fn add_page_stream(&mut self, stream: Stream) {
        let content_id = self.doc.add_object(stream);
        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        self.kids.push(page_id.into());
    }

    fn add_page(&mut self, lines: Page) {
        let mut operations = Vec::new();
        for (i, runs) in lines.iter().enumerate() {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
            operations.push(Operation::new(
                "Td",
                vec![72.into(), (760 - 20 * i as i64).into()],
            ));
            for run in runs.iter() {
                operations.push(Operation::new("Tj", vec![Object::string_literal(*run)]));
            }
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        self.add_page_stream(Stream::new(dictionary! {}, content.encode().unwrap()));
    }

    /// A page whose content claims Flate compression but holds garbage.
    fn add_corrupt_page(&mut self) {
        let stream = Stream::new(
            dictionary! { "Filter" => "FlateDecode" },
            b"this is not deflate data".to_vec(),
        );
        self.add_page_stream(stream);
    }

    fn finish(mut self) -> Document {
        let count = self.kids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => self.kids,
                "Count" => count,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);
        self.doc.trailer.set(
            "ID",
            Object::Array(vec![
                Object::string_literal(b"busqueitor"),
                Object::string_literal(b"fixture"),
            ]),
        );
        self.doc
    }
}

fn save(mut doc: Document) -> Vec<u8> {
    let mut out = Vec::new();
    doc.save_to(&mut out).unwrap();
    out
}

/// Build a PDF with one page per entry of `pages`, each page showing its
/// lines top to bottom.
pub fn pdf_bytes(pages: &[&[&str]]) -> Vec<u8> {
    let mut builder = Builder::new();
    for lines in pages {
        // Trailing space keeps words on consecutive lines apart in the
        // extracted text.
        let padded: Vec<String> = lines.iter().map(|line| format!("{line} ")).collect();
        let runs: Vec<[&str; 1]> = padded.iter().map(|line| [line.as_str()]).collect();
        let page: Vec<&[&str]> = runs.iter().map(|r| r.as_slice()).collect();
        builder.add_page(&page);
    }
    save(builder.finish())
}

/// Build a single-page PDF from separate text runs, with no padding between
/// them.
pub fn pdf_bytes_from_runs(lines: Page) -> Vec<u8> {
    let mut builder = Builder::new();
    builder.add_page(lines);
    save(builder.finish())
}

/// Build a PDF with no pages at all.
pub fn empty_pdf_bytes() -> Vec<u8> {
    save(Builder::new().finish())
}

/// Build a two-page PDF: `lines` on page 1, an undecodable stream on page 2.
pub fn pdf_bytes_with_corrupt_page(lines: &[&str]) -> Vec<u8> {
    let mut builder = Builder::new();
    let runs: Vec<[&str; 1]> = lines.iter().map(|line| [*line]).collect();
    let page: Vec<&[&str]> = runs.iter().map(|r| r.as_slice()).collect();
    builder.add_page(&page);
    builder.add_corrupt_page();
    save(builder.finish())
}

/// Build a single-page PDF that cannot be opened without `user_password`.
pub fn encrypted_pdf_bytes(lines: &[&str], user_password: &str) -> Vec<u8> {
    let mut builder = Builder::new();
    let runs: Vec<[&str; 1]> = lines.iter().map(|line| [*line]).collect();
    let page: Vec<&[&str]> = runs.iter().map(|r| r.as_slice()).collect();
    builder.add_page(&page);
    let mut doc = builder.finish();

    let version = EncryptionVersion::V2 {
        document: &doc,
        owner_password: "owner",
        user_password,
        key_length: 40,
        permissions: Permissions::all(),
    };
    let state = EncryptionState::try_from(version).unwrap();
    doc.encrypt(&state).unwrap();
    save(doc)
}

/// Write a single-page PDF with `lines` to `dir/name`.
pub fn write_pdf(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, pdf_bytes(&[lines])).unwrap();
    path
}

/// Write bytes that are not a PDF under a `.pdf` name.
pub fn write_corrupt_pdf(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"not a pdf").unwrap();
    path
}
