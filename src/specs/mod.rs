// src/specs/mod.rs
//! # Page "specs"
//!
//! Page-specific knowledge: *where the ground truth lives in the HTML* and
//! *how to read it tolerantly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of an already-fetched document. No I/O.
//! - **Column choice & precedence**: header text when the table has a usable
//!   `<thead>`, positional/content heuristics otherwise.
//! - **Light shaping** into `data::PriceRecord`.
//!
//! ## What does **not** live here
//! - Fetching (browser / HTTP / file) – see `core::browser`, `core::net`, `scrape`.
//! - Export formatting and terminal output – see `csv`, `file`, `table`.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::collect_prices → fetch page (source)
//!                                 → specs::listing::listing_rows
//!                                 → specs::listing::to_record (per row)
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against inline snippets and a saved fixture page
//! (`tests/fixtures/listing.html`).
pub mod listing;
