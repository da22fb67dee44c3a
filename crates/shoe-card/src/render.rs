//! Card renderer: product fields to display tree.

use tracing::debug;

use crate::config::CardConfig;
use crate::format::{
    CurrencyFormatter, EnglishPluralizer, Pluralizer, PriceFormatter, ReleaseRecency,
    ReleaseWindow,
};
use crate::input::ProductCardInput;
use crate::tokens::{self, FontWeight};
use crate::tree::{DisplayTree, ImageNode, TagNode, TagStyle, TextDecoration, TextNode, TextStyle};
use crate::variant::{self, Variant};

/// Renders product cards through pluggable collaborators.
#[derive(Debug, Clone)]
pub struct CardRenderer<P = CurrencyFormatter, L = EnglishPluralizer, R = ReleaseWindow> {
    prices: P,
    plurals: L,
    recency: R,
    path_prefix: String,
    color_label: String,
}

impl CardRenderer {
    /// Build a renderer with the default collaborators from config.
    ///
    /// The recency reference time is taken now.
    pub fn from_config(config: &CardConfig) -> Self {
        Self::new(
            CurrencyFormatter::new(config.currency),
            EnglishPluralizer,
            ReleaseWindow::days(config.recency_window_days),
        )
        .with_path_prefix(config.path_prefix.clone())
        .with_color_label(config.color_label.clone())
    }
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::from_config(&CardConfig::default())
    }
}

impl<P, L, R> CardRenderer<P, L, R>
where
    P: PriceFormatter,
    L: Pluralizer,
    R: ReleaseRecency,
{
    pub fn new(prices: P, plurals: L, recency: R) -> Self {
        let defaults = CardConfig::default();
        Self {
            prices,
            plurals,
            recency,
            path_prefix: defaults.path_prefix,
            color_label: defaults.color_label,
        }
    }

    pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix = prefix.into();
        self
    }

    pub fn with_color_label(mut self, label: impl Into<String>) -> Self {
        self.color_label = label.into();
        self
    }

    /// Resolve the variant for an input.
    pub fn resolve(&self, input: &ProductCardInput) -> Variant {
        variant::resolve(input.sale_price, input.release_date, &self.recency)
    }

    /// Render one card.
    pub fn render(&self, input: &ProductCardInput) -> DisplayTree {
        let variant = self.resolve(input);
        debug!(slug = %input.slug, variant = %variant, "rendering shoe card");

        let tag = variant.tag().map(|spec| TagNode {
            text: spec.text.to_string(),
            style: TagStyle {
                color: spec.color,
                background_color: spec.background_color,
                font_weight: FontWeight::Bold,
            },
        });

        let decoration = if variant.strikes_price() {
            TextDecoration::LineThrough
        } else {
            TextDecoration::None
        };

        let sale_price = input
            .sale_price
            .filter(|_| variant.shows_sale_price())
            .map(|amount| {
                TextNode::new(
                    self.prices.format_price(amount),
                    TextStyle::default()
                        .color(tokens::PRIMARY)
                        .weight(FontWeight::Medium),
                )
            });

        DisplayTree {
            variant,
            href: format!("{}{}", self.path_prefix, input.slug),
            image: ImageNode {
                src: input.image_src.clone(),
                alt: String::new(),
            },
            tag,
            name: TextNode::new(
                input.name.clone(),
                TextStyle::default()
                    .color(tokens::GRAY_900)
                    .weight(FontWeight::Medium),
            ),
            price: TextNode::new(
                self.prices.format_price(input.price),
                TextStyle::default().decoration(decoration),
            ),
            color_info: TextNode::new(
                self.plurals.pluralize(&self.color_label, input.num_of_colors),
                TextStyle::default().color(tokens::GRAY_700),
            ),
            sale_price,
        }
    }

    /// Render a listing. Cards are independent of each other.
    pub fn render_all(&self, inputs: &[ProductCardInput]) -> Vec<DisplayTree> {
        inputs.iter().map(|input| self.render(input)).collect()
    }
}
