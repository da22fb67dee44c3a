//! HTML painter for display trees (server-side rendering).

use crate::tree::{DisplayTree, TextNode};

/// Render one card as an HTML fragment.
pub fn render_card_html(card: &DisplayTree) -> String {
    let tag = card
        .tag
        .as_ref()
        .map(|tag| {
            format!(
                r#"<div class="shoe-card-tag" style="{}">{}</div>"#,
                html_escape(&tag.style.to_css()),
                html_escape(&tag.text)
            )
        })
        .unwrap_or_default();

    let sale_price = card
        .sale_price
        .as_ref()
        .map(|node| render_text("span", "shoe-card-sale-price", node))
        .unwrap_or_default();

    format!(
        r#"<a href="{href}" class="shoe-card-link">
    <article class="shoe-card" data-variant="{variant}">
        <div class="shoe-card-image">
            {tag}
            <img src="{src}" alt="{alt}">
        </div>
        <div class="shoe-card-row">
            {name}
            {price}
        </div>
        <div class="shoe-card-row">
            {color_info}
            {sale_price}
        </div>
    </article>
</a>"#,
        href = html_escape(&card.href),
        variant = card.variant,
        tag = tag,
        src = html_escape(&card.image.src),
        alt = html_escape(&card.image.alt),
        name = render_text("h3", "shoe-card-name", &card.name),
        price = render_text("span", "shoe-card-price", &card.price),
        color_info = render_text("p", "shoe-card-colors", &card.color_info),
        sale_price = sale_price,
    )
}

/// Render a listing of cards.
pub fn render_grid_html(cards: &[DisplayTree]) -> String {
    let cards_html: String = cards.iter().map(render_card_html).collect();

    format!(
        r#"<section class="shoe-grid" data-count="{}">
    {}
</section>"#,
        cards.len(),
        cards_html
    )
}

fn render_text(element: &str, class: &str, node: &TextNode) -> String {
    let css = node.style.to_css();
    if css.is_empty() {
        format!(
            r#"<{element} class="{class}">{}</{element}>"#,
            html_escape(&node.text)
        )
    } else {
        format!(
            r#"<{element} class="{class}" style="{}">{}</{element}>"#,
            html_escape(&css),
            html_escape(&node.text)
        )
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{CurrencyFormatter, EnglishPluralizer, ReleaseWindow};
    use crate::input::ProductCardInput;
    use crate::render::CardRenderer;
    use chrono::{Duration, TimeZone, Utc};

    fn card(sale_price: Option<i64>, released_days_ago: i64) -> DisplayTree {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let renderer = CardRenderer::new(
            CurrencyFormatter::default(),
            EnglishPluralizer,
            ReleaseWindow::days(30).as_of(now),
        );
        let mut input = ProductCardInput::new(
            "pegasus",
            "Air Zoom Pegasus",
            "/assets/pegasus.jpg",
            12000,
            now - Duration::days(released_days_ago),
            3,
        );
        input.sale_price = sale_price;
        renderer.render(&input)
    }

    #[test]
    fn test_on_sale_card_html() {
        let html = render_card_html(&card(Some(9900), 400));

        assert!(html.contains(r#"href="/shoe/pegasus""#));
        assert!(html.contains(r#"data-variant="on-sale""#));
        assert!(html.contains(">Sale</div>"));
        assert!(html.contains("background-color: hsl(340deg 65% 47%)"));
        assert!(html.contains(
            r#"<span class="shoe-card-price" style="text-decoration-line: line-through">$120</span>"#
        ));
        assert!(html.contains(r#"class="shoe-card-sale-price""#));
        assert!(html.contains(">$99</span>"));
        assert!(html.contains(">3 Colors</p>"));
    }

    #[test]
    fn test_new_release_card_html() {
        let html = render_card_html(&card(None, 2));

        assert!(html.contains(r#"data-variant="new-release""#));
        assert!(html.contains(">Just Released!</div>"));
        assert!(html.contains(r#"<span class="shoe-card-price">$120</span>"#));
        assert!(!html.contains("shoe-card-sale-price"));
    }

    #[test]
    fn test_default_card_html_has_no_tag() {
        let html = render_card_html(&card(None, 400));

        assert!(html.contains(r#"data-variant="default""#));
        assert!(!html.contains("shoe-card-tag"));
        assert!(!html.contains("line-through"));
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let mut tree = card(None, 400);
        tree.name.text = "<Court> & \"Co\"".to_string();
        tree.image.src = "/img?a=1&b=\"2\"".to_string();

        let html = render_card_html(&tree);
        assert!(html.contains("&lt;Court&gt; &amp; &quot;Co&quot;"));
        assert!(html.contains(r#"src="/img?a=1&amp;b=&quot;2&quot;""#));
    }

    #[test]
    fn test_grid_html() {
        let cards = vec![card(None, 400), card(Some(100), 400)];
        let html = render_grid_html(&cards);

        assert!(html.starts_with(r#"<section class="shoe-grid" data-count="2">"#));
        assert_eq!(html.matches(r#"<article class="shoe-card""#).count(), 2);
    }

    #[test]
    fn test_empty_grid_html() {
        let html = render_grid_html(&[]);
        assert!(html.contains(r#"data-count="0""#));
        assert!(!html.contains("<article"));
    }
}
