//! CLI operation handlers.
//!
//! - [`render_cards`]: Load product records and write rendered cards
//! - [`io`]: Input and output plumbing shared by handlers

pub mod io;
pub mod render_cards;
