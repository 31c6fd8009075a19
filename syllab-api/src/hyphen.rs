//! Fragment joiners
//!
//! A joiner turns the fragments of a split word or text back into one
//! string with a visible or invisible hyphen between them.

use std::fmt::Debug;

/// Soft hyphen, U+00AD
pub const SOFT_HYPHEN: &str = "\u{AD}";

/// HTML entity for the soft hyphen
pub const SOFT_HYPHEN_ENTITY: &str = "&shy;";

/// Joins fragments with a hyphen marker.
pub trait Hyphen: Debug + Send + Sync {
    /// Marker placed between fragments.
    fn marker(&self) -> &str;

    /// Join `fragments` with the marker.
    fn join(&self, fragments: &[String]) -> String {
        fragments.join(self.marker())
    }
}

/// Arbitrary text between fragments (`-` by default).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextHyphen(pub String);

impl Default for TextHyphen {
    fn default() -> Self {
        TextHyphen("-".to_string())
    }
}

impl Hyphen for TextHyphen {
    fn marker(&self) -> &str {
        &self.0
    }
}

/// U+00AD between fragments; invisible unless the line breaks there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SoftHyphen;

impl Hyphen for SoftHyphen {
    fn marker(&self) -> &str {
        SOFT_HYPHEN
    }
}

/// `&shy;` between fragments, for HTML output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntityHyphen;

impl Hyphen for EntityHyphen {
    fn marker(&self) -> &str {
        SOFT_HYPHEN_ENTITY
    }
}

/// Pick a joiner from a user-facing name.
///
/// `soft` and `entity` select the soft-hyphen joiners; anything else is
/// used literally as the marker.
pub fn hyphen_from_name(name: &str) -> Box<dyn Hyphen> {
    match name {
        "soft" => Box::new(SoftHyphen),
        "entity" => Box::new(EntityHyphen),
        text => Box::new(TextHyphen(text.to_string())),
    }
}
