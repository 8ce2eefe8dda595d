//! End-to-end: build decks, write them to disk, read the packages back.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use slidecraft::model::{Shape, ShapeKind};
use slidecraft::{
    BulletSlide, DeckError, Presentation, PptxWriter, SectionSlide, TableSlide, TitleSlide,
    WriteError, khuta,
};

fn sample() -> Presentation {
    let mut deck = Presentation::default();
    deck.add(TitleSlide::new("Khuta").subtitle("ADHD Assessment App"))
        .unwrap()
        .add(BulletSlide::new("About", ["one", "two", "three"]))
        .unwrap()
        .add(TableSlide::new(
            "Stack",
            ["Component", "Technology"],
            [["Frontend", "Flutter"], ["Backend", "Firebase"]],
        ))
        .unwrap();
    deck
}

fn read_part(path: &Path, name: &str) -> String {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut out = String::new();
    part.read_to_string(&mut out).unwrap();
    out
}

#[test]
fn small_deck_has_expected_shapes() {
    let deck = sample();
    assert_eq!(deck.len(), 3);
    let counts: Vec<usize> = deck.slides().iter().map(|s| s.len()).collect();
    assert_eq!(counts, [3, 3, 3]);

    let content = &deck.slides()[1];
    let body = content.shapes()[2].body().unwrap();
    assert_eq!(body.len(), 3);

    let table_shape = &deck.slides()[2].shapes()[2];
    assert_eq!(table_shape.kind(), ShapeKind::Table);
    let table = table_shape.as_table().unwrap();
    assert_eq!((table.row_count(), table.column_count()), (3, 2));

    // Header, then striped and plain data rows
    let theme = deck.theme();
    let fills: Vec<_> = table.rows().iter().map(|row| row[0].fill).collect();
    assert_eq!(fills, [Some(theme.primary), Some(theme.light_gray), None]);
}

#[test]
fn same_content_builds_identical_slides() {
    let a = sample();
    let b = sample();
    assert_eq!(a.slides(), b.slides());

    let a = khuta::build().unwrap();
    let b = khuta::build().unwrap();
    assert_eq!(a.slides(), b.slides());
}

#[test]
fn finalize_writes_a_readable_package() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.pptx");
    sample().finalize(&path).unwrap();

    assert!(std::fs::metadata(&path).unwrap().len() > 0);
    let archive = zip::ZipArchive::new(File::open(&path).unwrap()).unwrap();
    let names: Vec<&str> = archive.file_names().collect();
    for expected in [
        "[Content_Types].xml",
        "ppt/presentation.xml",
        "ppt/slides/slide1.xml",
        "ppt/slides/slide3.xml",
        "ppt/theme/theme1.xml",
    ] {
        assert!(names.contains(&expected), "missing {expected}");
    }

    let slide = read_part(&path, "ppt/slides/slide3.xml");
    assert!(slide.contains("<a:tbl>"));
    assert!(slide.contains("Flutter"));

    let pres = read_part(&path, "ppt/presentation.xml");
    assert_eq!(pres.matches("<p:sldId ").count(), 3);
}

#[test]
fn finalize_overwrites_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.pptx");
    std::fs::write(&path, b"stale").unwrap();

    let deck = sample();
    deck.finalize(&path).unwrap();
    let first = std::fs::read(&path).unwrap();
    deck.finalize(&path).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_ne!(first, b"stale");
    assert_eq!(first, second);
    assert_eq!(first, PptxWriter::new().to_bytes(&deck).unwrap());
}

#[test]
fn failed_write_leaves_nothing_behind() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-dir");
    let path = missing.join("deck.pptx");

    let err = sample().finalize(&path).unwrap_err();
    assert!(matches!(err, DeckError::Write(WriteError::Io { .. })), "{err:?}");
    assert!(!path.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn empty_deck_still_writes() {
    let bytes = PptxWriter::new().to_bytes(&Presentation::default()).unwrap();
    let archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    assert!(archive.file_names().all(|n| !n.starts_with("ppt/slides/")));
}

#[test]
fn section_only_deck_round_trips_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sections.pptx");
    let mut deck = Presentation::default();
    deck.add(SectionSlide::new("نظرة عامة - Overview")).unwrap();
    deck.finalize(&path).unwrap();
    assert!(read_part(&path, "ppt/slides/slide1.xml").contains("نظرة عامة - Overview"));
}

#[test]
fn khuta_deck_builds_and_writes() {
    let deck = khuta::build().unwrap();
    assert_eq!(deck.len(), 28);
    for slide in deck.slides() {
        assert!(slide.out_of_bounds(&deck.canvas()).is_empty());
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(khuta::OUTPUT_FILE);
    deck.finalize(&path).unwrap();
    let archive = zip::ZipArchive::new(File::open(&path).unwrap()).unwrap();
    assert!(archive.file_names().any(|n| n == "ppt/slides/slide28.xml"));
}
