use serde::{Deserialize, Serialize};

use super::{Record, RecordId};

/// An open record annotated with whether its color is primary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenRecord {
    #[serde(flatten)]
    pub record: Record,
    pub is_primary: bool,
}

/// One page of records and the aggregates derived from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrieveResult {
    /// Ids of every record on the page, in server order.
    pub ids: Vec<RecordId>,
    /// Records with disposition `open`, in server order.
    pub open: Vec<OpenRecord>,
    /// Closed records whose color is primary.
    pub closed_primary_count: usize,
    /// `None` on the first page.
    pub previous_page: Option<u32>,
    /// `None` when no lookahead record came back.
    pub next_page: Option<u32>,
}
