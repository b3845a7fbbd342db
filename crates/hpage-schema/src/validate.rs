//! # Content Validation
//!
//! Applies the home-page invariants to a parsed [`HomePageContent`]:
//!
//! - `layout` is present and a known [`Layout`].
//! - Every hero action has a non-empty `link`, and a known theme if any.
//! - Every feature's `details`, when present, has at least one entry.
//!
//! Checks run in document order and the first violation is returned. A
//! page is accepted or rejected whole; there is no partial recovery.

use std::ops::Deref;

use hpage_core::{FieldPath, ValidationError};

use crate::model::{Action, Feature, HomePageContent, Layout, Tag, TagSet};

/// Content that has passed [`validate`]. Read-only from here on.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedContent {
    layout: Layout,
    content: HomePageContent,
}

impl ValidatedContent {
    /// The resolved page layout.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The underlying record.
    pub fn content(&self) -> &HomePageContent {
        &self.content
    }

    /// Give up the validation guarantee and take the record back.
    pub fn into_inner(self) -> HomePageContent {
        self.content
    }
}

impl Deref for ValidatedContent {
    type Target = HomePageContent;

    fn deref(&self) -> &Self::Target {
        &self.content
    }
}

/// Validate parsed content.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found, carrying the path of the
/// offending field.
pub fn validate(content: HomePageContent) -> Result<ValidatedContent, ValidationError> {
    let root = FieldPath::root();

    let layout = require_tag(content.layout.as_ref(), root.key("layout"))?;

    if let Some(hero) = &content.hero {
        let actions = root.key("hero").key("actions");
        for (i, action) in hero.actions.iter().enumerate() {
            check_action(action, actions.index(i))?;
        }
    }

    let features = root.key("features");
    for (i, feature) in content.features.iter().enumerate() {
        check_feature(feature, features.index(i))?;
    }

    tracing::debug!(%layout, features = content.features.len(), "content validated");
    Ok(ValidatedContent { layout, content })
}

fn require_tag<T: TagSet>(tag: Option<&Tag<T>>, path: FieldPath) -> Result<T, ValidationError> {
    match tag {
        None => Err(ValidationError::new(path, format!("{} is required", T::NAME))),
        Some(tag) => known_tag(tag, path),
    }
}

fn known_tag<T: TagSet>(tag: &Tag<T>, path: FieldPath) -> Result<T, ValidationError> {
    tag.known().ok_or_else(|| {
        ValidationError::new(
            path,
            format!(
                "unrecognized {} '{}' (expected one of: {})",
                T::NAME,
                tag.as_str(),
                T::expected()
            ),
        )
    })
}

fn check_action(action: &Action, path: FieldPath) -> Result<(), ValidationError> {
    if let Some(theme) = &action.theme {
        known_tag(theme, path.key("theme"))?;
    }
    match action.link.as_deref() {
        None => Err(ValidationError::new(path.key("link"), "action link is required")),
        Some(link) if link.trim().is_empty() => Err(ValidationError::new(
            path.key("link"),
            "action link must not be empty",
        )),
        Some(_) => Ok(()),
    }
}

fn check_feature(feature: &Feature, path: FieldPath) -> Result<(), ValidationError> {
    match &feature.details {
        Some(details) if details.is_empty() => Err(ValidationError::new(
            path.key("details"),
            "details must contain at least one entry",
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ActionTheme, Details, Hero};
    use crate::parse::parse;

    fn home() -> HomePageContent {
        HomePageContent {
            layout: Some(Tag::Known(Layout::Home)),
            ..HomePageContent::default()
        }
    }

    fn action(link: Option<&str>) -> Action {
        Action {
            theme: Some(Tag::Known(ActionTheme::Brand)),
            text: Some("Go".to_string()),
            link: link.map(str::to_string),
        }
    }

    fn with_actions(actions: Vec<Action>) -> HomePageContent {
        HomePageContent {
            hero: Some(Hero {
                actions,
                ..Hero::default()
            }),
            ..home()
        }
    }

    #[test]
    fn minimal_home_is_valid() {
        let validated = validate(home()).unwrap();
        assert_eq!(validated.layout(), Layout::Home);
        assert!(validated.hero.is_none());
    }

    #[test]
    fn missing_layout_is_rejected() {
        let err = validate(HomePageContent::default()).unwrap_err();
        assert_eq!(err.field, "layout");
        assert!(err.reason.contains("required"));
    }

    #[test]
    fn unknown_layout_is_rejected() {
        let content = parse("layout: unknown\n").unwrap();
        let err = validate(content).unwrap_err();
        assert_eq!(err.field, "layout");
        assert!(err.reason.contains("'unknown'"));
        assert!(err.reason.contains("home"));
    }

    #[test]
    fn empty_details_are_rejected_with_index() {
        let content = HomePageContent {
            features: vec![
                Feature {
                    details: Some(Details::new(vec!["ok".to_string()])),
                    ..Feature::default()
                },
                Feature {
                    details: Some(Details::default()),
                    ..Feature::default()
                },
            ],
            ..home()
        };
        let err = validate(content).unwrap_err();
        assert_eq!(err.field, "features[1].details");
    }

    #[test]
    fn absent_details_are_allowed() {
        let content = HomePageContent {
            features: vec![Feature {
                title: Some("Fast".to_string()),
                ..Feature::default()
            }],
            ..home()
        };
        assert!(validate(content).is_ok());
    }

    #[test]
    fn empty_link_is_rejected() {
        let err = validate(with_actions(vec![action(Some("/a")), action(Some(""))])).unwrap_err();
        assert_eq!(err.field, "hero.actions[1].link");
        assert!(err.reason.contains("must not be empty"));
    }

    #[test]
    fn whitespace_link_is_rejected() {
        let err = validate(with_actions(vec![action(Some("   "))])).unwrap_err();
        assert_eq!(err.field, "hero.actions[0].link");
    }

    #[test]
    fn missing_link_is_rejected() {
        let err = validate(with_actions(vec![action(None)])).unwrap_err();
        assert_eq!(err.field, "hero.actions[0].link");
        assert!(err.reason.contains("required"));
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let mut bad = action(Some("/a"));
        bad.theme = Some(Tag::Unrecognized("ghost".to_string()));
        let err = validate(with_actions(vec![bad])).unwrap_err();
        assert_eq!(err.field, "hero.actions[0].theme");
        assert!(err.reason.contains("brand, alt"));
    }

    #[test]
    fn absent_theme_is_allowed() {
        let mut plain = action(Some("/a"));
        plain.theme = None;
        assert!(validate(with_actions(vec![plain])).is_ok());
    }

    #[test]
    fn first_violation_wins() {
        let content = HomePageContent {
            layout: None,
            features: vec![Feature {
                details: Some(Details::default()),
                ..Feature::default()
            }],
            ..with_actions(vec![action(None)])
        };
        let err = validate(content).unwrap_err();
        assert_eq!(err.field, "layout");
    }

    #[test]
    fn actions_checked_before_features() {
        let content = HomePageContent {
            features: vec![Feature {
                details: Some(Details::default()),
                ..Feature::default()
            }],
            ..with_actions(vec![action(Some(""))])
        };
        let err = validate(content).unwrap_err();
        assert_eq!(err.field, "hero.actions[0].link");
    }

    #[test]
    fn into_inner_round_trips() {
        let content = with_actions(vec![action(Some("/guide/"))]);
        let validated = validate(content.clone()).unwrap();
        assert_eq!(validated.content(), &content);
        assert_eq!(validated.into_inner(), content);
    }

    #[test]
    fn validation_is_deterministic() {
        let content = with_actions(vec![action(Some(""))]);
        let first = validate(content.clone()).unwrap_err();
        let second = validate(content).unwrap_err();
        assert_eq!(first, second);
    }
}
