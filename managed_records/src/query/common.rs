//! The [`Query`] trait shared by query builders.

use url::Url;

/// Trait implemented by query builders. Serializes the query onto a URL.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}
