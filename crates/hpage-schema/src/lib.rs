//! # hpage-schema — Home-Page Content Schema
//!
//! Turns the front-matter block of a documentation home page into a
//! validated, render-ready model. The pipeline has three stages, each a
//! pure function:
//!
//! ```text
//! parse(raw) -> HomePageContent -> validate -> ValidatedContent -> to_view_model -> RenderModel
//! ```
//!
//! [`load_page`] runs the whole pipeline over a content file, splitting off
//! the prose body first and handing it back untouched alongside the model.
//!
//! ## Modules
//!
//! - [`model`]: the parsed content record (hero, actions, features).
//! - [`parse`]: YAML front matter to [`HomePageContent`].
//! - [`validate`]: content invariants, first violation wins.
//! - [`view`]: the [`RenderModel`] handed to a template layer.
//! - [`page`]: file-level pipeline.
//!
//! ## Crate Policy
//!
//! - Depends only on `hpage-core` internally.
//! - No I/O. Callers read files; this crate only sees strings.
//! - A page is accepted or rejected as a whole. There is no partial model.

pub mod model;
pub mod page;
pub mod parse;
pub mod validate;
pub mod view;

pub use hpage_core::{FieldPath, HpageError, Location, MalformedInputError, ValidationError};
pub use model::{
    Action, ActionTheme, Details, Feature, Hero, HomePageContent, ImageRef, Layout, Tag, TagSet,
};
pub use page::{load_page, Page};
pub use parse::parse;
pub use validate::{validate, ValidatedContent};
pub use view::{to_view_model, ActionView, FeatureView, HeroView, Link, LinkKind, RenderModel};
