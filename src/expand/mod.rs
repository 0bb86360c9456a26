// Keyword expansion: seed keyword to long-tail candidates.
//
// Broad umbrella topics are first brainstormed into curated sub-topics, then
// every target gets a pool of search-intent suffixes picked by what kind of
// keyword it looks like.

pub mod expander;
pub mod tables;
