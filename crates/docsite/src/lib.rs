// SPDX-FileCopyrightText: 2026 Circuitdocs Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! # Docsite — documentation-site components for Circuitdocs
//!
//! Immutable site configuration plus the Maud-rendered homepage
//! "quick links" card panel. Routing, search indexing and theming belong
//! to the hosting framework; this crate owns the card data and the HTML
//! fragments built from it.
//!
//! ## Usage
//!
//! ```rust
//! use docsite::{cards, layouts};
//!
//! let set = cards::quick_links_cards();
//! let html = layouts::quick_links("Quick Links", &set).into_string();
//! assert!(html.contains("class=\"row\""));
//! ```

pub mod cards;
pub mod config;
pub mod layouts;
pub mod markdown;

pub use cards::{CardDescriptor, CardSet, EmphasisKind};
pub use config::SiteConfig;
