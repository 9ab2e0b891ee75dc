// SPDX-FileCopyrightText: 2026 Circuitdocs Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Maud HTML fragments for the homepage quick-links panel.
//!
//! Every function here is a pure transformation of card data into markup:
//! no state, no I/O, recomputed in full on each call. The grid uses the
//! Infima column classes the hosting theme styles.

use crate::cards::{CardDescriptor, CardSet};
use crate::config::SiteConfig;
use crate::markdown::render_markdown;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Circuitdocs version baked into generated HTML as `<meta name="generator">`.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render one card: header, body, and a footer button linking to the
/// card's destination.
pub fn card(card: &CardDescriptor) -> Markup {
    let button_class = format!("button {} button--block", card.emphasis.button_class());
    html! {
        div class="col col--4 margin-top--md" {
            div class="card-demo" {
                div class="card" {
                    div class="card__header" {
                        h3 { (card.title) }
                    }
                    div class="card__body" {
                        (PreEscaped(render_markdown(&card.description)))
                    }
                    div class="card__footer" {
                        a class=(button_class) href=(card.destination) {
                            (card.action_label)
                        }
                    }
                }
            }
        }
    }
}

/// Render an ordered sequence of cards into a responsive row.
///
/// One card per descriptor, input order preserved. An empty slice yields
/// an empty (but valid) row.
pub fn card_grid(cards: &[CardDescriptor]) -> Markup {
    html! {
        div class="row" {
            @for c in cards {
                (card(c))
            }
        }
    }
}

/// The quick-links section: heading, rule, and the card grid.
pub fn quick_links(heading: &str, set: &CardSet) -> Markup {
    html! {
        section class="margin-top--lg margin-bottom--lg" {
            div class="container" {
                h1 { (heading) }
                hr;
                (card_grid(&set.cards))
            }
        }
    }
}

/// A complete homepage document: head metadata from the site config, an
/// optional announcement bar, and the quick-links panel.
///
/// This is a document shell in the same shape as any other page the
/// hosting framework emits — not a theme.
pub fn homepage(config: &SiteConfig, set: &CardSet) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(config.i18n.default_locale) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="generator" content=(format!("Circuitdocs v{}", VERSION));
                meta name="description" content=(config.site.tagline);
                title {
                    @if config.site.tagline.is_empty() {
                        (config.site.title)
                    } @else {
                        (config.site.title) " — " (config.site.tagline)
                    }
                }
                link rel="icon" href=(config.site.favicon);
            }
            body {
                @if let Some(bar) = &config.announcement {
                    div class="announcement-bar"
                        id=(bar.id)
                        style=(format!(
                            "background-color:{};color:{}",
                            bar.background_color, bar.text_color
                        )) {
                        (PreEscaped(render_markdown(&bar.content)))
                    }
                }
                main {
                    (quick_links("Quick Links", set))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDescriptor, EmphasisKind, quick_links_cards};
    use crate::config::SiteConfig;

    fn one_card() -> CardDescriptor {
        CardDescriptor::new("A", "/x", "d1", "Go", EmphasisKind::Primary)
    }

    #[test]
    fn test_card_structure() {
        let html = card(&one_card()).into_string();
        assert!(html.contains("card__header"));
        assert!(html.contains("<h3>A</h3>"));
        assert!(html.contains("card__body"));
        assert!(html.contains("<p>d1</p>"));
        assert!(html.contains("card__footer"));
        assert!(html.contains(r#"class="button button--primary button--block""#));
        assert!(html.contains(r#"href="/x""#));
        assert!(html.contains(">Go</a>"));
    }

    #[test]
    fn test_grid_count_and_order() {
        let set = quick_links_cards();
        let html = card_grid(&set.cards).into_string();
        assert_eq!(html.matches("card__header").count(), set.len());

        // Input order is display order
        let first = html.find("Getting Started").unwrap();
        let last = html.find("Playground").unwrap();
        assert!(first < last);
    }

    #[test]
    fn test_empty_grid() {
        let html = card_grid(&[]).into_string();
        assert_eq!(html, r#"<div class="row"></div>"#);
    }

    #[test]
    fn test_grid_is_idempotent() {
        let set = quick_links_cards();
        let first = card_grid(&set.cards).into_string();
        let second = card_grid(&set.cards).into_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_destinations_stay_independent() {
        let cards = vec![
            CardDescriptor::new("One", "/same", "a", "Go", EmphasisKind::Primary),
            CardDescriptor::new("Two", "/same", "b", "Go", EmphasisKind::Danger),
        ];
        let html = card_grid(&cards).into_string();
        assert_eq!(html.matches(r#"href="/same""#).count(), 2);
        assert!(html.contains("One"));
        assert!(html.contains("Two"));
    }

    #[test]
    fn test_quick_links_section() {
        let set = quick_links_cards();
        let html = quick_links("Quick Links", &set).into_string();
        assert!(html.contains("<section"));
        assert!(html.contains("<h1>Quick Links</h1>"));
        assert!(html.contains("<hr>"));
        assert!(html.contains(r#"class="row""#));
    }

    #[test]
    fn test_homepage_document() {
        let config = SiteConfig::default();
        let set = quick_links_cards();
        let html = homepage(&config, &set).into_string();
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains(&format!("Circuitdocs v{}", VERSION)));
        assert!(html.contains("Quick Links"));
        assert_eq!(html.matches("card__footer").count(), set.len());
    }

    #[test]
    fn test_homepage_title_carries_tagline() {
        let mut config = SiteConfig::default();
        let set = quick_links_cards();

        // No tagline configured: bare site title
        let html = homepage(&config, &set).into_string();
        assert!(html.contains("<title>Circuitdocs</title>"));

        config.site.tagline = "Design circuits".to_string();
        let html = homepage(&config, &set).into_string();
        assert!(html.contains("<title>Circuitdocs — Design circuits</title>"));
    }

    #[test]
    fn test_description_markdown_passthrough() {
        // Descriptions may embed raw HTML fragments
        let c = CardDescriptor::new(
            "Rich",
            "/rich",
            "Plain text with <strong>markup</strong> and *emphasis*.",
            "Open",
            EmphasisKind::Info,
        );
        let html = card(&c).into_string();
        assert!(html.contains("<strong>markup</strong>"));
        assert!(html.contains("<em>emphasis</em>"));
    }
}
