// Real-time trend source: seeds for the deep-dive mode.
//
// Scrapes a public trend ranking page. It's a best-effort input: when the
// page can't be fetched or parsed, a fixed list of evergreen keywords is
// used instead.

pub mod scraper;
