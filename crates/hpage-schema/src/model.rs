//! # Content Model
//!
//! The parsed, not-yet-validated shape of a home-page front-matter block.
//!
//! Enumerated fields are held as [`Tag`]s so that an unknown value
//! survives parsing and is reported by validation with its field path,
//! instead of being silently defaulted or failing as a parse error.
//! Unrecognized top-level keys are kept in [`HomePageContent::extra`].

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// A closed set of string tags such as [`Layout`] or [`ActionTheme`].
pub trait TagSet: Sized + Copy + 'static {
    /// Human-readable name of the set, used in error messages.
    const NAME: &'static str;

    /// Every member of the set.
    const VARIANTS: &'static [Self];

    /// The tag as written in front matter.
    fn as_str(self) -> &'static str;

    /// Look up a member by its exact (case-sensitive) tag.
    fn from_tag(raw: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.as_str() == raw)
    }

    /// Comma-separated list of accepted tags.
    fn expected() -> String {
        Self::VARIANTS
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A tag as authored: either a member of `T` or an unknown value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag<T> {
    /// A recognized member.
    Known(T),
    /// A value outside the set, kept verbatim for error reporting.
    Unrecognized(String),
}

impl<T: TagSet> Tag<T> {
    /// Classify a raw tag string.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        match T::from_tag(&raw) {
            Some(known) => Self::Known(known),
            None => Self::Unrecognized(raw),
        }
    }

    /// The member, if recognized.
    pub fn known(&self) -> Option<T> {
        match self {
            Self::Known(t) => Some(*t),
            Self::Unrecognized(_) => None,
        }
    }

    /// The tag as authored.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(t) => t.as_str(),
            Self::Unrecognized(raw) => raw,
        }
    }
}

/// Page template selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Landing page with hero banner and feature grid.
    Home,
}

impl TagSet for Layout {
    const NAME: &'static str = "layout";
    const VARIANTS: &'static [Self] = &[Self::Home];

    fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual emphasis of a hero call-to-action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionTheme {
    /// Primary, brand-colored button.
    Brand,
    /// Secondary button.
    Alt,
}

impl TagSet for ActionTheme {
    const NAME: &'static str = "action theme";
    const VARIANTS: &'static [Self] = &[Self::Brand, Self::Alt];

    fn as_str(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Alt => "alt",
        }
    }
}

impl fmt::Display for ActionTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to an image asset. The path is carried, never resolved.
///
/// Authored either as a bare path (`image: /logo.svg`) or a mapping
/// (`image: { src: /logo.svg, alt: Logo }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    /// Asset path or URL.
    pub src: String,
    /// Alternative text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// A hero call-to-action link.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Action {
    /// Button emphasis. Absent means the renderer's default.
    pub theme: Option<Tag<ActionTheme>>,
    /// Button label.
    pub text: Option<String>,
    /// Target URI, internal path or absolute URL. Required by validation.
    pub link: Option<String>,
}

/// The top banner of the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hero {
    /// Product name.
    pub name: Option<String>,
    /// Headline.
    pub text: Option<String>,
    /// Secondary description under the headline.
    pub tagline: Option<String>,
    /// Banner image.
    pub image: Option<ImageRef>,
    /// Call-to-action links in display order.
    pub actions: Vec<Action>,
}

/// Paragraphs of a feature description.
///
/// Authored either as a single string or a list of strings; both become an
/// ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Details(Vec<String>);

impl Details {
    pub fn new(paragraphs: Vec<String>) -> Self {
        Self(paragraphs)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One highlighted capability.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Feature {
    /// Short string or glyph.
    pub icon: Option<String>,
    /// Feature heading.
    pub title: Option<String>,
    /// Description paragraphs. When present, must not be empty.
    pub details: Option<Details>,
}

/// Root record of a home-page front-matter block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomePageContent {
    /// Template selector. Required; checked by validation.
    pub layout: Option<Tag<Layout>>,
    /// Top banner.
    pub hero: Option<Hero>,
    /// Features in rendering order.
    pub features: Vec<Feature>,
    /// Unrecognized top-level keys, preserved verbatim.
    pub extra: BTreeMap<String, serde_yaml::Value>,
}
