//! Leptos components for shoe cards.
//!
//! The components only paint a [`DisplayTree`]; variant resolution and
//! formatting happen in `shoe-card` before the view is built.

use leptos::prelude::*;
use shoe_card::tree::{DisplayTree, TextNode};

/// A single product card linking to the shoe's page.
#[component]
pub fn ShoeCard(card: DisplayTree) -> impl IntoView {
    let DisplayTree {
        variant,
        href,
        image,
        tag,
        name,
        price,
        color_info,
        sale_price,
    } = card;

    let tag = tag.map(|tag| {
        view! {
            <div class="shoe-card-tag" style={tag.style.to_css()}>
                {tag.text}
            </div>
        }
    });

    let sale_price = sale_price.map(|node| text_span("shoe-card-sale-price", node));

    view! {
        <a href={href} class="shoe-card-link">
            <article class="shoe-card" data-variant={variant.as_str()}>
                <div class="shoe-card-image">
                    {tag}
                    <img src={image.src} alt={image.alt}/>
                </div>
                <div class="shoe-card-row">
                    {text_heading("shoe-card-name", name)}
                    {text_span("shoe-card-price", price)}
                </div>
                <div class="shoe-card-row">
                    {text_paragraph("shoe-card-colors", color_info)}
                    {sale_price}
                </div>
            </article>
        </a>
    }
}

/// A listing of cards.
#[component]
pub fn ShoeGrid(cards: Vec<DisplayTree>) -> impl IntoView {
    let count = cards.len().to_string();

    view! {
        <section class="shoe-grid" data-count={count}>
            {cards.into_iter().map(|card| {
                view! {
                    <ShoeCard card=card/>
                }
            }).collect::<Vec<_>>()}
        </section>
    }
}

// Unstyled nodes get no `style` attribute at all.

fn text_span(class: &'static str, node: TextNode) -> AnyView {
    let css = node.style.to_css();
    if css.is_empty() {
        view! { <span class=class>{node.text}</span> }.into_any()
    } else {
        view! { <span class=class style=css>{node.text}</span> }.into_any()
    }
}

fn text_heading(class: &'static str, node: TextNode) -> AnyView {
    let css = node.style.to_css();
    if css.is_empty() {
        view! { <h3 class=class>{node.text}</h3> }.into_any()
    } else {
        view! { <h3 class=class style=css>{node.text}</h3> }.into_any()
    }
}

fn text_paragraph(class: &'static str, node: TextNode) -> AnyView {
    let css = node.style.to_css();
    if css.is_empty() {
        view! { <p class=class>{node.text}</p> }.into_any()
    } else {
        view! { <p class=class style=css>{node.text}</p> }.into_any()
    }
}
