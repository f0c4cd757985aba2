//! Article record produced by the dump reader.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One encyclopedia page's normalized content record.
///
/// Produced exactly once per qualifying `<page>` element. Articles are
/// transient: the reader hands each one to the consumer by value and keeps
/// no copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Page id: the first nonzero `id` element in the page subtree.
    pub id: u64,

    /// Page title.
    pub title: String,

    /// Cleansed article body (wiki markup stripped).
    pub content: String,

    /// Last modification timestamp of the page.
    pub last_modified: DateTime<Utc>,
}
