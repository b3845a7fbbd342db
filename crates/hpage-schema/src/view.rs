//! # Render Model
//!
//! The projection of validated content handed to a template layer.
//! Optional sections stay optional so a template can omit them; nothing
//! is filled with placeholder text. Feature and action order is exactly
//! the authored order.

use std::collections::BTreeMap;

use serde::Serialize;
use url::Url;

use crate::model::{ActionTheme, ImageRef, Layout};
use crate::validate::ValidatedContent;

/// Render-ready home page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    /// Template to render with.
    pub layout: Layout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroView>,
    pub features: Vec<FeatureView>,
    /// Unrecognized front-matter keys, passed through for the renderer.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Hero banner as rendered. Absent fields are omitted from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    /// Call-to-action buttons in authored order.
    pub actions: Vec<ActionView>,
}

/// A call-to-action button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionView {
    /// Button emphasis. `None` leaves the choice to the template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ActionTheme>,
    /// Button label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub link: Link,
}

/// A feature card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Description paragraphs; empty when the feature has none.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

/// Where a link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// A path within the site (`/guide/`, `./intro`).
    Internal,
    /// A URL naming a host (`https://…`, `//cdn…`), or a `mailto:` or
    /// `tel:` address.
    External,
}

/// An action target, carried verbatim and classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Target exactly as authored.
    pub href: String,
    pub kind: LinkKind,
}

impl Link {
    /// Classify `href`. Never rejects.
    ///
    /// A scheme alone does not make a link external: `guide:intro` and
    /// `localhost:3000/app` parse as URLs but name no host, so they stay
    /// site paths.
    pub fn classify(href: impl Into<String>) -> Self {
        let href = href.into();
        let kind = if href.starts_with("//") || leaves_site(href.trim()) {
            LinkKind::External
        } else {
            LinkKind::Internal
        };
        Self { href, kind }
    }
}

fn leaves_site(href: &str) -> bool {
    Url::parse(href)
        .map(|url| url.has_host() || matches!(url.scheme(), "mailto" | "tel"))
        .unwrap_or(false)
}

/// Project validated content into a [`RenderModel`].
///
/// Pure: the same content always yields an equal model.
pub fn to_view_model(content: &ValidatedContent) -> RenderModel {
    let hero = content.hero.as_ref().map(|hero| HeroView {
        name: hero.name.clone(),
        text: hero.text.clone(),
        tagline: hero.tagline.clone(),
        image: hero.image.clone(),
        actions: hero
            .actions
            .iter()
            .map(|action| ActionView {
                theme: action.theme.as_ref().and_then(|theme| theme.known()),
                text: action.text.clone(),
                link: Link::classify(action.link.clone().unwrap_or_default()),
            })
            .collect(),
    });

    let features = content
        .features
        .iter()
        .map(|feature| FeatureView {
            icon: feature.icon.clone(),
            title: feature.title.clone(),
            details: feature
                .details
                .as_ref()
                .map(|details| details.as_slice().to_vec())
                .unwrap_or_default(),
        })
        .collect();

    RenderModel {
        layout: content.layout(),
        hero,
        features,
        extra: content.extra.clone(),
    }
}
