//! Product card rendering for the shoe catalog.
//!
//! This crate turns raw catalog fields into a host-independent display tree:
//!
//! - **Variant**: on-sale / new-release / default, resolved from sale price and release date
//! - **Render**: maps the variant and product fields to a [`DisplayTree`]
//! - **Format**: price, pluralization and recency collaborators behind traits
//! - **Html**: paints display trees to HTML for server-side rendering
//!
//! # Example
//!
//! ```rust,ignore
//! use shoe_card::prelude::*;
//!
//! let config = CardConfig::load("card.toml")?;
//! let renderer = CardRenderer::from_config(&config);
//!
//! let shoes = ProductCardInput::parse_catalog(&catalog_json)?;
//! let cards = renderer.render_all(&shoes);
//! let html = render_grid_html(&cards);
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod html;
pub mod input;
pub mod money;
pub mod render;
pub mod tokens;
pub mod tree;
pub mod variant;

pub use config::CardConfig;
pub use error::{CardError, Result};
pub use input::ProductCardInput;
pub use render::CardRenderer;
pub use tree::DisplayTree;
pub use variant::{resolve, Variant};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::CardConfig;
    pub use crate::error::{CardError, Result};
    pub use crate::input::ProductCardInput;
    pub use crate::money::{Currency, Money};
    pub use crate::variant::{resolve, Variant};

    // Collaborators
    pub use crate::format::{
        CurrencyFormatter, EnglishPluralizer, Pluralizer, PriceFormatter, ReleaseRecency,
        ReleaseWindow,
    };

    // Rendering
    pub use crate::html::{render_card_html, render_grid_html};
    pub use crate::render::CardRenderer;
    pub use crate::tokens::{Color, FontWeight};
    pub use crate::tree::{
        DisplayTree, ImageNode, TagNode, TagStyle, TextDecoration, TextNode, TextStyle,
    };
}
