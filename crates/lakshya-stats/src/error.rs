use jiff::civil::Date;
use thiserror::Error;

use lakshya_storage::error::StorageError;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("week ending {end} reaches before the earliest supported date")]
    DateOutOfRange {
        end: Date,
        #[source]
        source: jiff::Error,
    },
}
