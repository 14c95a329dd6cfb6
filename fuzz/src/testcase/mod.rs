use metascrape::interpreters::microdata::MicrodataInterpreter;
use metascrape::{normalize_text, Interpreter, Page};
use pretty_assertions::assert_eq;

/// Extract a page from arbitrary bytes and check the properties that must hold for any input.
pub fn run(s: &[u8]) {
    // reading raw bytes must never panic, whatever the encoding. we rely on running in debug mode
    // such that this is not just simply optimized away
    let page = Page::read(s).unwrap();
    check_page(&page);

    if let Ok(data) = std::str::from_utf8(s) {
        let mut microdata = MicrodataInterpreter::default();
        let parsed = Page::parse_with(data, &mut [&mut microdata as &mut dyn Interpreter]);
        assert_eq!(parsed, page);

        // a second microdata interpreter sees the same stream and ends up balanced
        assert_eq!(microdata.depth(), (0, 0));
        assert_eq!(microdata.items(), parsed.microdata());
    }
}

fn check_page(page: &Page) {
    for meta in page.metadata() {
        for extra in &meta.extra {
            assert!(extra.extra.is_empty(), "meta nested too deep: {:?}", meta);
        }
    }

    assert_eq!(normalize_text(&page.text), page.text);
}
