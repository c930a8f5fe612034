mod common;

use blockframe::{
    DocumentConfig, DocumentError, LayoutConfig, LayoutError, Margins, PageGeometry,
    RecordingSink, TextBlock,
};
use common::{TestResult, fixed_document, paragraph_of};

#[test]
fn long_paragraph_continues_across_pages() -> TestResult {
    // 21 words a line and 60 lines a page.
    let mut document = fixed_document(DocumentConfig::default());
    document.write(paragraph_of(3000));

    let mut sink = RecordingSink::new();
    let pages = document.finalize(&mut sink)?;

    assert_eq!(pages, 3);
    let recorded = sink.into_pages();
    assert_eq!(recorded[0].texts().len(), 21 * 60);
    assert_eq!(recorded[1].texts().len(), 21 * 60);
    assert_eq!(recorded[2].texts().len(), 3000 - 2 * 21 * 60);
    assert_eq!(recorded[1].texts()[0], format!("w{:03}", 1260 % 1000));
    Ok(())
}

#[test]
fn every_block_lands_exactly_once() -> TestResult {
    let mut document = fixed_document(DocumentConfig::default());
    for index in 0..500 {
        document.write(TextBlock::new(format!("line {index}")));
    }

    let mut sink = RecordingSink::new();
    document.finalize(&mut sink)?;

    let texts: Vec<String> = sink
        .pages()
        .iter()
        .flat_map(|page| page.texts())
        .map(str::to_string)
        .collect();
    let expected: Vec<String> = (0..500).map(|index| format!("line {index}")).collect();
    assert_eq!(texts, expected);
    Ok(())
}

#[test]
fn smaller_pages_need_more_of_them() -> TestResult {
    let config = DocumentConfig {
        page: PageGeometry::new(300.0, 400.0).with_margins(Margins::all(20.0)),
        ..DocumentConfig::default()
    };
    let mut document = fixed_document(config);
    for index in 0..100 {
        document.write(TextBlock::new(format!("{index}")));
    }

    let mut sink = RecordingSink::new();
    let pages = document.finalize(&mut sink)?;

    // 360 points of content height, 30 lines a page.
    assert_eq!(pages, 4);
    assert!(sink.pages().iter().all(|page| page.geometry.width == 300.0));
    Ok(())
}

#[test]
fn page_limit_stops_runaway_documents() {
    let config = DocumentConfig {
        layout: LayoutConfig::with_max_pages(2),
        ..DocumentConfig::default()
    };
    let mut document = fixed_document(config);
    document.write(paragraph_of(5000));

    let result = document.finalize(&mut RecordingSink::new());

    assert!(matches!(
        result,
        Err(DocumentError::Layout(LayoutError::PageLimitExceeded(2)))
    ));
}
