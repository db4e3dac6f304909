/// Errors reported by trials and by [`StateBox`][crate::factory::StateBox] down-casts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: sample count must be positive")]
    ZeroCount,

    #[error("Invalid argument: sampling range is reversed (min = {min}, max = {max})")]
    InvalidRange { min: i64, max: i64 },

    #[error("Invalid argument: window [{min}, {max}] is too wide to scan (limit {limit})")]
    WindowTooWide { min: i64, max: i64, limit: u64 },

    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

impl Error {
    /// Returns `true` for errors caused by a bad trial configuration or window.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::ZeroCount | Error::InvalidRange { .. } | Error::WindowTooWide { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
