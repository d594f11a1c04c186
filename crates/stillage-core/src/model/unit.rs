// ── Measurement unit domain type ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::Keyed;

/// Classification of a measurement unit. Numeric on the wire:
/// 0 = Default, 1 = Mass, 2 = Capacity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum UnitKind {
    #[default]
    Default,
    Mass,
    Capacity,
}

impl UnitKind {
    /// Decode the wire code, falling back to `Default`.
    pub fn from_code(code: Option<u8>) -> Self {
        match code {
            Some(1) => Self::Mass,
            Some(2) => Self::Capacity,
            _ => Self::Default,
        }
    }

    /// The numeric wire code.
    pub fn code(self) -> u8 {
        match self {
            Self::Default => 0,
            Self::Mass => 1,
            Self::Capacity => 2,
        }
    }
}

/// A measurement unit (e.g. liters) with a type classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: i64,
    pub title: String,
    pub kind: UnitKind,
}

impl Keyed for Unit {
    fn key(&self) -> i64 {
        self.id
    }
}
