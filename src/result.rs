use crate::error::Error as DerpiErr;

/// Result returned by every endpoint of this crate.
pub type Result<T> = std::result::Result<T, DerpiErr>;
