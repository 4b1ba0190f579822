mod record;
pub use self::record::{is_primary, Disposition, Record, RecordId, PRIMARY_COLORS};

mod options;
pub use self::options::RetrieveOptions;

mod result;
pub use self::result::{OpenRecord, RetrieveResult};
