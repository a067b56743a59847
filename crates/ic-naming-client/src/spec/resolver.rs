use crate::spec::prelude::*;

/// A `(key, value)` record attached to a name.
pub type RecordPair = (String, String);

pub type GetRecordValueResponse = NamingResult<Vec<RecordPair>>;
