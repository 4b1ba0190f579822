mod common;
pub use self::common::Query;

mod record;
pub use self::record::{build_query_href, RecordQuery};
