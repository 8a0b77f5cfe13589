//! HAL envelope shared by all paydirekt resources.
//!
//! Every resource body may carry `_embedded` sub-resources and `_links`
//! keyed by relation name. Resources hold a [`HalEnvelope`] by value and
//! flatten it into their own JSON object.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{PaydirektError, Result};

/// Relation name of the link pointing at the resource itself.
const SELF_REL: &str = "self";

/// A hyperlink to a related or actionable resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    /// Target URI, or URI template when `templated` is set.
    href: String,
    /// Whether `href` is a URI template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    templated: Option<bool>,
    /// Media type hint for the target.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    media_type: Option<String>,
    /// Secondary key for selecting among links with the same relation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// Human-readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

impl Link {
    /// Creates a plain link with only an `href`.
    #[inline]
    #[must_use]
    pub fn new<T: Into<String>>(href: T) -> Self {
        Self {
            href: href.into(),
            templated: None,
            media_type: None,
            name: None,
            title: None,
        }
    }

    /// Returns the target URI.
    #[inline]
    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Returns `true` if `href` is a URI template.
    #[inline]
    #[must_use]
    pub const fn is_templated(&self) -> bool {
        matches!(self.templated, Some(true))
    }

    /// Returns the media type hint, if any.
    #[inline]
    #[must_use]
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    /// Returns the link name, if any.
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the link title, if any.
    #[inline]
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// Embedded resources and links of a HAL resource.
///
/// Both maps default to empty when the key is missing or `null` in the body
/// and are left out of the output when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalEnvelope {
    /// Related sub-resources keyed by relation name.
    #[serde(
        rename = "_embedded",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "HashMap::is_empty"
    )]
    embedded: HashMap<String, Value>,
    /// Hyperlinks keyed by relation name.
    #[serde(
        rename = "_links",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "HashMap::is_empty"
    )]
    links: HashMap<String, Link>,
}

/// Decodes a relation map, treating `null` like a missing key.
fn null_as_empty<'de, D, V>(deserializer: D) -> core::result::Result<HashMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    Option::<HashMap<String, V>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl HalEnvelope {
    /// Creates an envelope from already decoded maps.
    #[inline]
    #[must_use]
    pub const fn new(embedded: HashMap<String, Value>, links: HashMap<String, Link>) -> Self {
        Self { embedded, links }
    }

    /// Returns all embedded resources.
    #[inline]
    #[must_use]
    pub const fn embedded(&self) -> &HashMap<String, Value> {
        &self.embedded
    }

    /// Returns all links.
    #[inline]
    #[must_use]
    pub const fn links(&self) -> &HashMap<String, Link> {
        &self.links
    }

    /// Looks up a link by relation name.
    #[inline]
    #[must_use]
    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links.get(rel)
    }

    /// Returns the `self` link.
    #[inline]
    #[must_use]
    pub fn self_link(&self) -> Option<&Link> {
        self.link(SELF_REL)
    }

    /// Looks up an embedded resource by relation name without decoding it.
    #[inline]
    #[must_use]
    pub fn embedded_resource(&self, rel: &str) -> Option<&Value> {
        self.embedded.get(rel)
    }

    /// Decodes the embedded resource under `rel` into `T`.
    ///
    /// Returns `Ok(None)` if no resource is embedded under that relation.
    ///
    /// # Errors
    ///
    /// Returns [`PaydirektError::MalformedResponse`] if the embedded JSON does
    /// not match `T`.
    #[inline]
    #[tracing::instrument(skip(self), level = "trace")]
    pub fn embedded_as<T: DeserializeOwned>(&self, rel: &str) -> Result<Option<T>> {
        let Some(value) = self.embedded.get(rel) else {
            tracing::trace!("no embedded resource");
            return Ok(None);
        };
        T::deserialize(value)
            .map(Some)
            .map_err(PaydirektError::MalformedResponse)
    }
}
