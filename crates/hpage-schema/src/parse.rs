//! # Front-Matter Parsing
//!
//! Reads a YAML front-matter block into a [`HomePageContent`]. The block is
//! first read as a generic YAML tree, so syntax errors carry a line and
//! column. The tree is then walked field by field, so a value of the wrong
//! shape is reported at its full path (`hero.actions[1].text`).
//!
//! Parsing checks shape only. Content invariants (known layout, non-empty
//! links, non-empty details) belong to [`crate::validate`]. Tags therefore
//! accept any scalar: `layout: 1` parses, and validation rejects it.
//!
//! Text fields take any scalar as its text, so `name: 2024` reads as
//! `"2024"`. Unknown keys below the top level are ignored.

use serde_yaml::{Mapping, Value};

use hpage_core::{FieldPath, MalformedInputError};

use crate::model::{Action, Details, Feature, Hero, HomePageContent, ImageRef, Tag, TagSet};

const LAYOUT: &str = "layout";
const HERO: &str = "hero";
const FEATURES: &str = "features";

/// Parse a front-matter block.
///
/// An empty block yields an empty record. Unrecognized top-level keys are
/// moved into [`HomePageContent::extra`] unchanged.
///
/// # Errors
///
/// Returns [`MalformedInputError`] when the block is not valid YAML, its
/// root is not a mapping, a top-level key is not a string, a recognized
/// field holds a value of the wrong shape, or a pass-through value uses a
/// mapping key that cannot be emitted as JSON.
pub fn parse(raw: &str) -> Result<HomePageContent, MalformedInputError> {
    if raw.trim().is_empty() {
        return Ok(HomePageContent::default());
    }

    let root: Value = serde_yaml::from_str(raw).map_err(syntax_error)?;
    let mapping = match root {
        Value::Null => return Ok(HomePageContent::default()),
        Value::Mapping(mapping) => mapping,
        other => {
            return Err(MalformedInputError::at_root(format!(
                "front matter must be a mapping, found {}",
                kind_of(&other)
            )))
        }
    };

    let mut content = HomePageContent::default();
    for (key, value) in mapping {
        let key = match key {
            Value::String(key) => key,
            other => {
                return Err(MalformedInputError::at_root(format!(
                    "top-level keys must be strings, found {}",
                    kind_of(&other)
                )))
            }
        };
        let path = FieldPath::root().key(key.as_str());

        match key.as_str() {
            LAYOUT => content.layout = tag(value, &path)?,
            HERO => content.hero = hero(value, &path)?,
            FEATURES => content.features = sequence(value, &path, feature)?,
            _ => {
                check_pass_through(&value, &path)?;
                tracing::debug!(key = %key, "keeping unrecognized front-matter key");
                content.extra.insert(key, value);
            }
        }
    }

    tracing::debug!(
        features = content.features.len(),
        extra = content.extra.len(),
        "parsed front matter"
    );
    Ok(content)
}

fn hero(value: Value, path: &FieldPath) -> Result<Option<Hero>, MalformedInputError> {
    let Some(mapping) = mapping(value, path)? else {
        return Ok(None);
    };

    let mut hero = Hero::default();
    for (key, value) in entries(mapping) {
        let at = path.key(key.as_str());
        match key.as_str() {
            "name" => hero.name = text(value, &at)?,
            "text" => hero.text = text(value, &at)?,
            "tagline" => hero.tagline = text(value, &at)?,
            "image" => hero.image = image(value, &at)?,
            "actions" => hero.actions = sequence(value, &at, action)?,
            _ => {}
        }
    }
    Ok(Some(hero))
}

fn action(value: Value, path: &FieldPath) -> Result<Action, MalformedInputError> {
    let mut action = Action::default();
    if let Some(mapping) = mapping(value, path)? {
        for (key, value) in entries(mapping) {
            let at = path.key(key.as_str());
            match key.as_str() {
                "theme" => action.theme = tag(value, &at)?,
                "text" => action.text = text(value, &at)?,
                "link" => action.link = text(value, &at)?,
                _ => {}
            }
        }
    }
    Ok(action)
}

fn image(value: Value, path: &FieldPath) -> Result<Option<ImageRef>, MalformedInputError> {
    match value {
        Value::Null => Ok(None),
        Value::Mapping(mapping) => {
            let mut src = None;
            let mut alt = None;
            for (key, value) in entries(mapping) {
                let at = path.key(key.as_str());
                match key.as_str() {
                    "src" => src = text(value, &at)?,
                    "alt" => alt = text(value, &at)?,
                    _ => {}
                }
            }
            let src = src.ok_or_else(|| {
                MalformedInputError::at_field(path.key("src"), "image mapping needs a src")
            })?;
            Ok(Some(ImageRef { src, alt }))
        }
        other => match scalar_text(&other) {
            Some(src) => Ok(Some(ImageRef { src, alt: None })),
            None => Err(shape(path, "a path or a mapping", &other)),
        },
    }
}

fn feature(value: Value, path: &FieldPath) -> Result<Feature, MalformedInputError> {
    let mut feature = Feature::default();
    if let Some(mapping) = mapping(value, path)? {
        for (key, value) in entries(mapping) {
            let at = path.key(key.as_str());
            match key.as_str() {
                "icon" => feature.icon = text(value, &at)?,
                "title" => feature.title = text(value, &at)?,
                "details" => feature.details = details(value, &at)?,
                _ => {}
            }
        }
    }
    Ok(feature)
}

fn details(value: Value, path: &FieldPath) -> Result<Option<Details>, MalformedInputError> {
    match value {
        Value::Null => Ok(None),
        Value::Sequence(_) => Ok(Some(Details::new(sequence(value, path, paragraph)?))),
        other => match scalar_text(&other) {
            Some(paragraph) => Ok(Some(Details::new(vec![paragraph]))),
            None => Err(shape(path, "a string or a sequence of strings", &other)),
        },
    }
}

fn paragraph(value: Value, path: &FieldPath) -> Result<String, MalformedInputError> {
    scalar_text(&value).ok_or_else(|| shape(path, "a string", &value))
}

fn text(value: Value, path: &FieldPath) -> Result<Option<String>, MalformedInputError> {
    match value {
        Value::Null => Ok(None),
        other => paragraph(other, path).map(Some),
    }
}

fn tag<T: TagSet>(value: Value, path: &FieldPath) -> Result<Option<Tag<T>>, MalformedInputError> {
    Ok(text(value, path)?.map(Tag::from_raw))
}

fn sequence<T, F>(value: Value, path: &FieldPath, element: F) -> Result<Vec<T>, MalformedInputError>
where
    F: Fn(Value, &FieldPath) -> Result<T, MalformedInputError>,
{
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Sequence(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| element(item, &path.index(i)))
            .collect(),
        other => Err(shape(path, "a sequence", &other)),
    }
}

fn mapping(value: Value, path: &FieldPath) -> Result<Option<Mapping>, MalformedInputError> {
    match value {
        Value::Null => Ok(None),
        Value::Mapping(mapping) => Ok(Some(mapping)),
        other => Err(shape(path, "a mapping", &other)),
    }
}

/// String-keyed entries of a nested mapping. Other keys are not part of
/// the schema and are skipped like any unknown key.
fn entries(mapping: Mapping) -> impl Iterator<Item = (String, Value)> {
    mapping.into_iter().filter_map(|(key, value)| match key {
        Value::String(key) => Some((key, value)),
        _ => None,
    })
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Pass-through values reach the renderer as JSON, whose object keys are
/// strings. String and integer keys are accepted; anything else is not.
fn check_pass_through(value: &Value, path: &FieldPath) -> Result<(), MalformedInputError> {
    match value {
        Value::Sequence(items) => {
            for (i, item) in items.iter().enumerate() {
                check_pass_through(item, &path.index(i))?;
            }
        }
        Value::Mapping(mapping) => {
            for (key, item) in mapping {
                let key = match key {
                    Value::String(key) => key.clone(),
                    Value::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
                    other => {
                        return Err(MalformedInputError::at_field(
                            path.clone(),
                            format!(
                                "mapping keys must be strings or integers, found {}",
                                kind_of(other)
                            ),
                        ))
                    }
                };
                check_pass_through(item, &path.key(key))?;
            }
        }
        Value::Tagged(tagged) => check_pass_through(&tagged.value, path)?,
        _ => {}
    }
    Ok(())
}

fn shape(path: &FieldPath, expected: &str, found: &Value) -> MalformedInputError {
    MalformedInputError::at_field(
        path.clone(),
        format!("expected {expected}, found {}", kind_of(found)),
    )
}

fn syntax_error(err: serde_yaml::Error) -> MalformedInputError {
    match err.location() {
        Some(location) => {
            MalformedInputError::at_position(location.line(), location.column(), err.to_string())
        }
        None => MalformedInputError::at_root(err.to_string()),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
