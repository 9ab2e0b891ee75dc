// SPDX-FileCopyrightText: 2026 Circuitdocs Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Card descriptors for the homepage quick-links panel.
//!
//! Descriptors are plain data: defined once at startup, never mutated, and
//! rendered in insertion order by [`crate::layouts::card_grid`]. A set's
//! identity is its name; any number of sets can feed the same renderer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Visual emphasis for a card's action button.
///
/// Styling only — navigation behaves identically for every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmphasisKind {
    Primary,
    Secondary,
    Success,
    Info,
    Warning,
    Danger,
    Link,
}

impl EmphasisKind {
    /// CSS modifier class for the action button (Infima naming).
    pub fn button_class(self) -> &'static str {
        match self {
            EmphasisKind::Primary => "button--primary",
            EmphasisKind::Secondary => "button--secondary",
            EmphasisKind::Success => "button--success",
            EmphasisKind::Info => "button--info",
            EmphasisKind::Warning => "button--warning",
            EmphasisKind::Danger => "button--danger",
            EmphasisKind::Link => "button--link",
        }
    }
}

/// One navigable card: title, destination, body copy, and the call to
/// action shown in the footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDescriptor {
    /// Short label shown in the card header.
    pub title: String,
    /// Path or absolute URL the action button navigates to.
    pub destination: String,
    /// Body copy, markdown source. Raw HTML fragments pass through.
    pub description: String,
    /// Text on the action button.
    pub action_label: String,
    /// Visual treatment of the action button.
    pub emphasis: EmphasisKind,
}

impl CardDescriptor {
    pub fn new(
        title: impl Into<String>,
        destination: impl Into<String>,
        description: impl Into<String>,
        action_label: impl Into<String>,
        emphasis: EmphasisKind,
    ) -> Self {
        Self {
            title: title.into(),
            destination: destination.into(),
            description: description.into(),
            action_label: action_label.into(),
            emphasis,
        }
    }
}

/// Authoring-time card set errors.
#[derive(Debug, Error)]
pub enum CardError {
    #[error("card '{title}' in set '{set}' has an empty destination")]
    EmptyDestination { set: String, title: String },
}

/// A named, ordered, immutable collection of cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSet {
    pub name: String,
    pub cards: Vec<CardDescriptor>,
}

impl CardSet {
    pub fn new(name: impl Into<String>, cards: Vec<CardDescriptor>) -> Self {
        Self {
            name: name.into(),
            cards,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CardDescriptor> {
        self.cards.iter()
    }

    /// Check that every card has somewhere to go.
    ///
    /// This is an authoring aid for startup code. Rendering never calls
    /// it — a bad destination degrades to a broken link, not a render
    /// failure.
    pub fn validate(&self) -> Result<(), CardError> {
        for card in &self.cards {
            if card.destination.is_empty() {
                diagnostics::log_warn!(
                    "card {title} in set {set} has an empty destination",
                    title: card.title.as_str(),
                    set: self.name.as_str()
                );
                return Err(CardError::EmptyDestination {
                    set: self.name.clone(),
                    title: card.title.clone(),
                });
            }
        }
        Ok(())
    }
}

/// The built-in homepage "Quick Links" set.
///
/// Content for the circuit-library documentation homepage. Other homepages
/// build their own `CardSet` and reuse the same renderer.
pub fn quick_links_cards() -> CardSet {
    CardSet::new(
        "quick-links",
        vec![
            CardDescriptor::new(
                "🏁 Getting Started",
                "/category/how-to",
                "Create and verify your first zk-SNARK. The quickest way to \
                 write, debug and profile circuits.",
                "Go to guides",
                EmphasisKind::Success,
            ),
            CardDescriptor::new(
                "💭 Concepts",
                "/category/concepts",
                "Check out some general concepts on constraint systems, \
                 proving schemes and zk-SNARKs.",
                "Go to concepts",
                EmphasisKind::Secondary,
            ),
            CardDescriptor::new(
                "👨‍💻 Reference",
                "/Reference/api",
                "Find API documentation and GoDoc links in the Reference \
                 section.",
                "Go to reference",
                EmphasisKind::Info,
            ),
            CardDescriptor::new(
                "🛴 Playground",
                "https://play.gnark.io",
                "Compile and run circuits in your browser. Check out the \
                 examples for a quick tour.",
                "play.gnark.io",
                EmphasisKind::Link,
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_set_is_valid() {
        let set = quick_links_cards();
        assert_eq!(set.len(), 4);
        set.validate().expect("built-in set validates");
    }

    #[test]
    fn builtin_set_preserves_authoring_order() {
        let set = quick_links_cards();
        let titles: Vec<&str> = set.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles[0], "🏁 Getting Started");
        assert_eq!(titles[3], "🛴 Playground");
    }

    #[test]
    fn validate_rejects_empty_destination() {
        let set = CardSet::new(
            "broken",
            vec![CardDescriptor::new(
                "Nowhere",
                "",
                "d",
                "Go",
                EmphasisKind::Primary,
            )],
        );
        let err = set.validate().unwrap_err();
        assert!(matches!(err, CardError::EmptyDestination { .. }));
        assert!(err.to_string().contains("Nowhere"));
    }

    #[test]
    fn empty_set_validates() {
        let set = CardSet::new("empty", vec![]);
        assert!(set.is_empty());
        set.validate().expect("nothing to reject");
    }

    #[test]
    fn emphasis_serde_is_lowercase() {
        let json = serde_json::to_string(&EmphasisKind::Danger).unwrap();
        assert_eq!(json, "\"danger\"");
        let kind: EmphasisKind = serde_json::from_str("\"link\"").unwrap();
        assert_eq!(kind, EmphasisKind::Link);
    }

    #[test]
    fn emphasis_button_classes() {
        assert_eq!(EmphasisKind::Primary.button_class(), "button--primary");
        assert_eq!(EmphasisKind::Link.button_class(), "button--link");
    }
}
