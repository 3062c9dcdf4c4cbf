//! Capacity units for size reporting.
//!
//! Pure scale factors (powers of 1024) used to divide a byte count for
//! display; no other behavior.

use serde::{Deserialize, Serialize};

/// Scale factor applied to an aggregate byte count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CapacityUnit {
    Byte,
    #[default]
    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
    Petabyte,
}

impl CapacityUnit {
    /// Number of bytes this unit represents.
    pub const fn bytes(self) -> u64 {
        match self {
            Self::Byte => 1,
            Self::Kilobyte => 1 << 10,
            Self::Megabyte => 1 << 20,
            Self::Gigabyte => 1 << 30,
            Self::Terabyte => 1 << 40,
            Self::Petabyte => 1 << 50,
        }
    }
}
