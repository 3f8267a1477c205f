//! Bingo Card PDF Generator
//!
//! Turns a plain-text list of items (one per line) into a multi-page PDF
//! of randomized bingo cards, one card per page. Each card is an
//! independently shuffled rows×cols grid, with an optional free space at
//! the center of odd×odd grids.
//!
//! - [`items`] - Item pool loading and line filtering
//! - [`card`] - Card layout generation and configuration validation
//! - [`pdf`] - PDF page rendering
//! - [`error`] - Error types

pub mod card;
pub mod error;
pub mod items;
pub mod pdf;

pub use card::{generate_cards, BingoConfig, Card};
pub use error::AppError;
pub use items::{load_items, parse_items};
pub use pdf::render_pdf;
