//! Hypermedia representations: a stored record plus navigation links.
//!
//! Every response body for a single resource is a [`Representation`], which
//! serializes as the record's own fields with an extra `links` array:
//!
//! ```json
//! { "id": 1, "name": "Carrinho", "links": [{ "rel": "self", "href": "/brinquedos/1" }] }
//! ```

use serde::Serialize;

use crate::types::DbId;

/// Relation name of the link pointing at the resource itself.
pub const REL_SELF: &str = "self";

/// Relation name of the link pointing at the list endpoint.
pub const REL_COLLECTION: &str = "collection";

/// A single `{rel, href}` navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn new(rel: &str, href: String) -> Self {
        Self {
            rel: rel.to_string(),
            href,
        }
    }
}

/// A record paired with its navigation links. Request-scoped, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Representation<T> {
    #[serde(flatten)]
    pub record: T,
    pub links: Vec<Link>,
}

impl<T> Representation<T> {
    /// Find a link by relation name.
    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.rel == rel)
    }

    /// The `self` href. Always present on representations produced by
    /// [`LinkBuilder::build`].
    pub fn self_href(&self) -> Option<&str> {
        self.link(REL_SELF).map(|l| l.href.as_str())
    }
}

/// Records addressable by a store-assigned key.
pub trait Identified {
    fn id(&self) -> DbId;
}

/// Resolves hrefs for one resource collection and wraps records into
/// [`Representation`]s.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    /// Public origin prefix, without trailing slash. Empty yields
    /// root-relative hrefs.
    base_url: String,
    /// Path of the list endpoint, e.g. `/brinquedos`.
    collection_path: &'static str,
}

impl LinkBuilder {
    pub fn new(base_url: &str, collection_path: &'static str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            collection_path,
        }
    }

    /// Href of the list endpoint.
    pub fn collection_href(&self) -> String {
        format!("{}{}", self.base_url, self.collection_path)
    }

    /// Href of the single-resource endpoint for `id`.
    pub fn item_href(&self, id: DbId) -> String {
        format!("{}{}/{id}", self.base_url, self.collection_path)
    }

    /// Wrap `record` with a `self` link and, when requested, a `collection`
    /// link.
    pub fn build<T: Identified>(
        &self,
        record: T,
        include_collection_link: bool,
    ) -> Representation<T> {
        let mut links = vec![Link::new(REL_SELF, self.item_href(record.id()))];
        if include_collection_link {
            links.push(Link::new(REL_COLLECTION, self.collection_href()));
        }
        Representation { record, links }
    }
}
