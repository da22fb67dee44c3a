//! Host-independent display tree for a rendered card.

use serde::Serialize;

use crate::tokens::{Color, FontWeight};
use crate::variant::Variant;

/// Text decoration line for a text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    #[default]
    None,
    LineThrough,
}

impl TextDecoration {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextDecoration::None => "none",
            TextDecoration::LineThrough => "line-through",
        }
    }
}

/// Typed style properties for a text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextStyle {
    pub color: Option<Color>,
    pub font_weight: Option<FontWeight>,
    pub text_decoration: TextDecoration,
}

impl TextStyle {
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn decoration(mut self, decoration: TextDecoration) -> Self {
        self.text_decoration = decoration;
        self
    }

    /// Inline CSS declarations. Unset properties are left out.
    pub fn to_css(&self) -> String {
        let mut decls = Vec::new();
        if let Some(color) = self.color {
            decls.push(format!("color: {}", color.to_css()));
        }
        if let Some(weight) = self.font_weight {
            decls.push(format!("font-weight: {}", weight.value()));
        }
        if self.text_decoration != TextDecoration::None {
            decls.push(format!(
                "text-decoration-line: {}",
                self.text_decoration.as_css()
            ));
        }
        decls.join("; ")
    }
}

/// Tag colors and weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagStyle {
    pub color: Color,
    pub background_color: Color,
    pub font_weight: FontWeight,
}

impl TagStyle {
    pub fn to_css(&self) -> String {
        format!(
            "color: {}; background-color: {}; font-weight: {}",
            self.color.to_css(),
            self.background_color.to_css(),
            self.font_weight.value()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextNode {
    pub text: String,
    pub style: TextStyle,
}

impl TextNode {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagNode {
    pub text: String,
    pub style: TagStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageNode {
    pub src: String,
    /// Empty for the decorative product shot.
    pub alt: String,
}

/// A rendered product card.
///
/// Layout, top to bottom: image with optional corner tag, a row with name and
/// price, a row with color count and optional sale price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayTree {
    pub variant: Variant,
    /// Navigation target for the whole card.
    pub href: String,
    pub image: ImageNode,
    pub tag: Option<TagNode>,
    pub name: TextNode,
    pub price: TextNode,
    pub color_info: TextNode,
    pub sale_price: Option<TextNode>,
}

impl DisplayTree {
    /// Whether the primary price is struck through.
    pub fn is_price_struck(&self) -> bool {
        self.price.style.text_decoration == TextDecoration::LineThrough
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens;

    #[test]
    fn test_text_style_css() {
        let style = TextStyle::default()
            .color(tokens::PRIMARY)
            .weight(FontWeight::Medium);
        assert_eq!(
            style.to_css(),
            "color: hsl(340deg 65% 47%); font-weight: 600"
        );
    }

    #[test]
    fn test_text_style_css_line_through() {
        let style = TextStyle::default().decoration(TextDecoration::LineThrough);
        assert_eq!(style.to_css(), "text-decoration-line: line-through");
        assert_eq!(TextStyle::default().to_css(), "");
    }

    #[test]
    fn test_tag_style_css() {
        let style = TagStyle {
            color: tokens::WHITE,
            background_color: tokens::SECONDARY,
            font_weight: FontWeight::Bold,
        };
        assert_eq!(
            style.to_css(),
            "color: hsl(0deg 0% 100%); background-color: hsl(240deg 60% 63%); font-weight: 800"
        );
    }
}
