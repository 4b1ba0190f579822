//! Turns one over-fetched page of records into a [`RetrieveResult`].

use crate::types::{OpenRecord, Record, RetrieveResult};

/// Field computed by [`transform`]; a server-sent value is discarded.
const IS_PRIMARY_FIELD: &str = "isPrimary";

/// Derives cursors, ids, open records and the closed-primary count from a
/// page fetched with `limit = page_size + 1`.
///
/// If exactly `page_size + 1` records came back, the last one is the
/// lookahead: it only signals that a next page exists and is dropped before
/// anything else is computed.
pub fn transform(mut records: Vec<Record>, requested_page: u32, page_size: u32) -> RetrieveResult {
    let lookahead_len = page_size as usize + 1;
    let next_page = if records.len() == lookahead_len {
        records.pop();
        Some(requested_page.saturating_add(1))
    } else {
        if records.len() > lookahead_len {
            tracing::warn!(
                "Received {} records for page {}, more than the requested limit of {}",
                records.len(),
                requested_page,
                lookahead_len
            );
        }
        None
    };

    let previous_page = if requested_page <= 1 {
        None
    } else {
        Some(requested_page - 1)
    };

    let ids = records.iter().map(|r| r.id.clone()).collect();

    let closed_primary_count = records
        .iter()
        .filter(|r| r.is_closed() && r.is_primary())
        .count();

    let open = records
        .into_iter()
        .filter(Record::is_open)
        .map(|mut record| {
            record.extra.remove(IS_PRIMARY_FIELD);
            let is_primary = record.is_primary();
            OpenRecord { record, is_primary }
        })
        .collect();

    RetrieveResult {
        ids,
        open,
        closed_primary_count,
        previous_page,
        next_page,
    }
}
