pub mod http;

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::ResolveError;
use crate::item::Item;

pub use http::HttpSource;

/// Future returned by a remote resolution
pub type ResolveFuture = Pin<Box<dyn Future<Output = Result<Vec<Item>, ResolveError>> + Send>>;

/// Something that resolves a query to candidate items asynchronously
pub trait RemoteSource: Send + Sync {
    /// Where queries are sent (used for diagnostics)
    fn endpoint(&self) -> &str;

    /// Resolve a lowercased query into the candidate list
    fn resolve(&self, query: &str) -> ResolveFuture;
}

/// Where a field's candidates come from. Chosen once at construction.
#[derive(Clone)]
pub enum DataSource {
    /// A fixed list filtered in place
    Local(Vec<Item>),
    /// Every query is sent to a remote endpoint
    Remote(Arc<dyn RemoteSource>),
}

impl DataSource {
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

impl fmt::Debug for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(items) => f.debug_tuple("Local").field(&items.len()).finish(),
            Self::Remote(source) => f.debug_tuple("Remote").field(&source.endpoint()).finish(),
        }
    }
}

/// Items whose name contains `query`, ignoring case. Order is preserved and an
/// empty query keeps every item.
pub fn filter_local(items: &[Item], query: &str) -> Vec<Item> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
