//! Calculator domain model.
//!
//! # Responsibility
//! - Define the persisted calculator record and its mutable-field patch.
//! - Map battery technology codes between the typed enum and the bare
//!   integers stored on disk.
//!
//! # Invariants
//! - `oid` is the unique collection key and is immutable after creation.
//! - Persisted field names are exactly `oid`, `manufacturer`, `grade`
//!   and `batteryType`; `batteryType` serializes as the integer 1, 2
//!   or 3.

use crate::repo::KeyedRecord;
use serde::{Deserialize, Serialize};

/// Battery technology codes used by the calculator inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BatteryType {
    /// Disposable cells.
    Disposable,
    /// Rechargeable pack.
    Rechargeable,
    /// Solar cell.
    Solar,
}

impl From<BatteryType> for u8 {
    fn from(value: BatteryType) -> Self {
        match value {
            BatteryType::Disposable => 1,
            BatteryType::Rechargeable => 2,
            BatteryType::Solar => 3,
        }
    }
}

impl TryFrom<u8> for BatteryType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Disposable),
            2 => Ok(Self::Rechargeable),
            3 => Ok(Self::Solar),
            other => Err(format!(
                "invalid battery type code `{other}`; expected 1, 2 or 3"
            )),
        }
    }
}

/// Persisted calculator record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculator {
    /// Unique inventory key.
    pub oid: i64,
    /// Manufacturer name.
    pub manufacturer: String,
    /// Condition grade on the 0..=10 scale.
    pub grade: u8,
    /// Battery technology code.
    #[serde(rename = "batteryType")]
    pub battery_type: BatteryType,
}

/// Mutable-field subset applied by calculator updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorPatch {
    /// Replacement manufacturer name.
    pub manufacturer: String,
    /// Replacement condition grade.
    pub grade: u8,
    /// Replacement battery technology code.
    pub battery_type: BatteryType,
}

impl Calculator {
    /// Creates a calculator from already-validated fields.
    pub fn new(
        oid: i64,
        manufacturer: impl Into<String>,
        grade: u8,
        battery_type: BatteryType,
    ) -> Self {
        Self {
            oid,
            manufacturer: manufacturer.into(),
            grade,
            battery_type,
        }
    }
}

impl KeyedRecord for Calculator {
    type Key = i64;
    type Patch = CalculatorPatch;

    fn key(&self) -> &Self::Key {
        &self.oid
    }

    fn apply(&mut self, patch: Self::Patch) {
        self.manufacturer = patch.manufacturer;
        self.grade = patch.grade;
        self.battery_type = patch.battery_type;
    }
}

#[cfg(test)]
mod tests {
    use super::BatteryType;

    #[test]
    fn battery_type_round_trips_through_codes() {
        for (code, expected) in [
            (1u8, BatteryType::Disposable),
            (2u8, BatteryType::Rechargeable),
            (3u8, BatteryType::Solar),
        ] {
            let parsed = BatteryType::try_from(code).expect("known code should parse");
            assert_eq!(parsed, expected);
            assert_eq!(u8::from(parsed), code);
        }
    }

    #[test]
    fn battery_type_rejects_unknown_codes() {
        for code in [0u8, 4u8, 255u8] {
            let error = BatteryType::try_from(code).expect_err("unknown code must fail");
            assert!(error.contains("battery type"));
        }
    }
}
