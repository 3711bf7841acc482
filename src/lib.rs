// docscope: keyword-in-context search, summaries and word statistics for
// uploaded documents.
//
// This is the library root. `analysis` is the pure text engine; the other
// modules get documents into it (ingest, store), expose it (service, web)
// and print its results (output).

pub mod analysis;
pub mod config;
pub mod ingest;
pub mod output;
pub mod service;
pub mod store;

#[cfg(feature = "web")]
pub mod web;
