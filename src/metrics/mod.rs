// Keyword metrics: trait-based abstraction over the Naver APIs.
//
// The MetricsSource trait is what the pipeline talks to. MetricsClient
// implements it with two HTTP clients: the signed Search Ad keyword tool
// (search volumes, related keywords) and the blog search API (document
// counts). Lookups never fail outright; they report Found or Degraded.

pub mod blog;
pub mod client;
pub mod searchad;
pub mod signing;
pub mod traits;
