use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    /// Rejects a `start..end` pair. `kind` must agree with the bounds.
    pub fn invalid_range(kind: RangeErrorKind, start: i64, end: i64) -> Error {
        debug_assert_eq!(RangeErrorKind::classify(start, end), Some(kind));
        Error(ErrorKind::InvalidRange { kind, start, end }.into())
    }

    pub fn invalid_card_indexes(values: Vec<i64>) -> Error {
        let kind = match values.as_slice() {
            [value] => ErrorKind::InvalidCardIndex { value: *value },
            _ => ErrorKind::InvalidCardIndexes { values },
        };
        Error(kind.into())
    }

    pub fn card_index_does_not_exist(value: i64, stack_alias: impl Into<String>) -> Error {
        Error(
            ErrorKind::CardIndexDoesNotExist {
                value,
                stack_alias: stack_alias.into(),
            }
            .into(),
        )
    }

    pub fn duplicate_card_indexes(values: Vec<i64>, stack_alias: impl Into<String>) -> Error {
        Error(
            ErrorKind::DuplicateCardIndexes {
                values,
                stack_alias: stack_alias.into(),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("Invalid range {start}..{end}: {kind}")]
    InvalidRange {
        kind: RangeErrorKind,
        start: i64,
        end: i64,
    },

    #[error("Invalid card index {value}: should be non-negative integer")]
    InvalidCardIndex { value: i64 },

    #[error(
        "Invalid card indexes {}: all should be non-negative integers",
        .values.iter().join(", ")
    )]
    InvalidCardIndexes { values: Vec<i64> },

    #[error("Card with index {value} doesn't exist in card stack {stack_alias}")]
    CardIndexDoesNotExist { value: i64, stack_alias: String },

    #[error(
        "Duplicate card indexes {} in card stack {stack_alias}",
        .values.iter().join(", ")
    )]
    DuplicateCardIndexes {
        values: Vec<i64>,
        stack_alias: String,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

/// The ways a two-sided `start..end` range can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeErrorKind {
    StartGreaterThanEnd,
    StartEqualsEnd,
}

impl RangeErrorKind {
    /// Returns the failure for `start..end`, or `None` when `start < end`.
    pub fn classify(start: i64, end: i64) -> Option<RangeErrorKind> {
        match start.cmp(&end) {
            std::cmp::Ordering::Less => None,
            std::cmp::Ordering::Equal => Some(RangeErrorKind::StartEqualsEnd),
            std::cmp::Ordering::Greater => Some(RangeErrorKind::StartGreaterThanEnd),
        }
    }
}

impl std::fmt::Display for RangeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeErrorKind::StartGreaterThanEnd => {
                f.write_str("start value is greater than end value")
            }
            RangeErrorKind::StartEqualsEnd => f.write_str("start value equals end value"),
        }
    }
}
