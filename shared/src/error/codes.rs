//! Unified error codes for the billing desk
//!
//! This module defines all error codes surfaced by the billing engine to its
//! UI collaborators. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Bill entry errors
//! - 2xxx: Query and table errors
//! - 3xxx: Export errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Invalid format
    InvalidFormat = 4,
    /// Value out of range
    ValueOutOfRange = 5,

    // ==================== 1xxx: Bill entry ====================
    /// Amount is zero, negative, or not a number
    InvalidAmount = 1001,
    /// A required form field was left empty
    MissingRequiredField = 1002,
    /// Submission attempted before the current amount was calculated
    NotYetCalculated = 1003,
    /// Bill range end is before its start
    InvalidBillRange = 1004,
    /// Category slug is not one of the known categories
    UnknownCategory = 1005,

    // ==================== 2xxx: Query ====================
    /// Page size is zero or not one of the offered sizes
    InvalidPageSize = 2001,
    /// Preset name is not recognised
    UnknownPreset = 2002,
    /// Date string could not be parsed
    InvalidDate = 2003,
    /// Sort field name is not recognised
    UnknownSortField = 2004,

    // ==================== 3xxx: Export ====================
    /// Writing the export file failed
    ExportFailed = 3001,
    /// Export directory does not exist
    ExportDirMissing = 3002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Bill entry
            ErrorCode::InvalidAmount => "Please enter a valid total amount",
            ErrorCode::MissingRequiredField => "Please fill in all required fields",
            ErrorCode::NotYetCalculated => {
                "Please calculate the billing fields before submitting"
            }
            ErrorCode::InvalidBillRange => "Bill range end must not be before its start",
            ErrorCode::UnknownCategory => "Unknown billing category",

            // Query
            ErrorCode::InvalidPageSize => "Invalid page size",
            ErrorCode::UnknownPreset => "Unknown date preset",
            ErrorCode::InvalidDate => "Invalid date",
            ErrorCode::UnknownSortField => "Unknown sort field",

            // Export
            ErrorCode::ExportFailed => "Export failed",
            ErrorCode::ExportDirMissing => "Export directory does not exist",
        }
    }

    /// Short notification title shown with the message (toast heading)
    pub const fn title(&self) -> &'static str {
        match self {
            ErrorCode::InvalidAmount => "Invalid Input",
            ErrorCode::MissingRequiredField => "Missing Fields",
            ErrorCode::NotYetCalculated => "Calculate First",
            ErrorCode::InvalidBillRange => "Invalid Bill Range",
            ErrorCode::Success => "Success",
            _ => "Error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            4 => Ok(ErrorCode::InvalidFormat),
            5 => Ok(ErrorCode::ValueOutOfRange),

            // Bill entry
            1001 => Ok(ErrorCode::InvalidAmount),
            1002 => Ok(ErrorCode::MissingRequiredField),
            1003 => Ok(ErrorCode::NotYetCalculated),
            1004 => Ok(ErrorCode::InvalidBillRange),
            1005 => Ok(ErrorCode::UnknownCategory),

            // Query
            2001 => Ok(ErrorCode::InvalidPageSize),
            2002 => Ok(ErrorCode::UnknownPreset),
            2003 => Ok(ErrorCode::InvalidDate),
            2004 => Ok(ErrorCode::UnknownSortField),

            // Export
            3001 => Ok(ErrorCode::ExportFailed),
            3002 => Ok(ErrorCode::ExportDirMissing),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
