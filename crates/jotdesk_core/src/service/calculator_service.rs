//! Calculator use-case service.
//!
//! # Responsibility
//! - Validate raw calculator form input, including integer coercion and
//!   range checks.
//! - Drive the calculator collection store on behalf of the controller
//!   layer.
//!
//! # Invariants
//! - `oid` must parse as an exact integer; `grade` must lie in 0..=10;
//!   `batteryType` must be one of the codes 1, 2, 3.
//! - A rejected form is echoed back with its raw values untouched.

use crate::model::calculator::{BatteryType, Calculator, CalculatorPatch};
use crate::repo::{CollectionStore, RepoError};
use crate::service::{required_integer, required_text};
use crate::store::StoreError;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

const GRADE_RANGE: std::ops::RangeInclusive<i64> = 0..=10;

/// Raw calculator form fields as submitted, before any normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorForm {
    /// Submitted inventory key value, if any.
    pub oid: Option<String>,
    /// Submitted manufacturer value, if any.
    pub manufacturer: Option<String>,
    /// Submitted grade value, if any.
    pub grade: Option<String>,
    /// Submitted battery type code, if any.
    pub battery_type: Option<String>,
}

/// Service error for calculator use-cases.
#[derive(Debug)]
pub enum CalculatorServiceError {
    /// Form failed validation; carries the raw input for redisplay.
    Invalid(CalculatorForm),
    /// A calculator with the submitted `oid` already exists.
    DuplicateOid(i64),
    /// Unrecovered storage fault on the write path.
    Storage(StoreError),
}

impl Display for CalculatorServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(_) => write!(f, "calculator form failed validation"),
            Self::DuplicateOid(oid) => write!(f, "calculator oid `{oid}` already exists"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CalculatorServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError<i64>> for CalculatorServiceError {
    fn from(value: RepoError<i64>) -> Self {
        match value {
            RepoError::DuplicateKey(oid) => Self::DuplicateOid(oid),
            RepoError::Storage(err) => Self::Storage(err),
        }
    }
}

/// Calculator service facade over a collection store.
pub struct CalculatorService<S: CollectionStore<Calculator>> {
    store: S,
}

impl<S: CollectionStore<Calculator>> CalculatorService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lists all calculators in on-disk order.
    pub fn list_calculators(&self) -> Vec<Calculator> {
        self.store.list()
    }

    /// Gets one calculator by inventory key.
    pub fn get_calculator(&self, oid: i64) -> Option<Calculator> {
        self.store.get_by_key(&oid)
    }

    /// Validates a submitted form and creates a calculator.
    ///
    /// # Errors
    /// - `Invalid` when any field is absent, unparseable or out of
    ///   range; the store is never called in that case.
    /// - `DuplicateOid` when the parsed `oid` is already in use.
    /// - `Storage` when the write fails.
    pub fn create_calculator(
        &self,
        form: CalculatorForm,
    ) -> Result<Calculator, CalculatorServiceError> {
        let Some(fields) = validate_form(&form) else {
            warn!("event=calculator_validate module=service status=rejected op=create");
            return Err(CalculatorServiceError::Invalid(form));
        };

        Ok(self.store.add(Calculator::new(
            fields.oid,
            fields.manufacturer,
            fields.grade,
            fields.battery_type,
        ))?)
    }

    /// Validates the mutable fields and updates the calculator in
    /// place.
    ///
    /// The `oid` is the immutable key and is taken from the call, not
    /// the form. Returns `Ok(None)` when no calculator has the given
    /// key.
    ///
    /// # Errors
    /// - `Invalid` when a mutable field is absent, unparseable or out
    ///   of range.
    /// - `Storage` when the write fails.
    pub fn update_calculator(
        &self,
        oid: i64,
        form: CalculatorForm,
    ) -> Result<Option<Calculator>, CalculatorServiceError> {
        let Some(patch) = validate_patch(&form) else {
            warn!("event=calculator_validate module=service status=rejected op=update");
            return Err(CalculatorServiceError::Invalid(form));
        };

        Ok(self.store.update(&oid, patch)?)
    }

    /// Deletes one calculator by inventory key; `false` when no record
    /// matched.
    ///
    /// # Errors
    /// - `Storage` when the write fails.
    pub fn delete_calculator(&self, oid: i64) -> Result<bool, CalculatorServiceError> {
        Ok(self.store.delete(&oid)?)
    }
}

/// Normalized, typed calculator fields produced by validation.
struct ValidCalculatorFields {
    oid: i64,
    manufacturer: String,
    grade: u8,
    battery_type: BatteryType,
}

fn validate_form(form: &CalculatorForm) -> Option<ValidCalculatorFields> {
    let oid = required_integer(form.oid.as_deref())?;
    let manufacturer = required_text(form.manufacturer.as_deref())?;
    let grade = bounded_grade(form.grade.as_deref())?;
    let battery_type = battery_type_code(form.battery_type.as_deref())?;
    Some(ValidCalculatorFields {
        oid,
        manufacturer,
        grade,
        battery_type,
    })
}

fn validate_patch(form: &CalculatorForm) -> Option<CalculatorPatch> {
    let manufacturer = required_text(form.manufacturer.as_deref())?;
    let grade = bounded_grade(form.grade.as_deref())?;
    let battery_type = battery_type_code(form.battery_type.as_deref())?;
    Some(CalculatorPatch {
        manufacturer,
        grade,
        battery_type,
    })
}

fn bounded_grade(value: Option<&str>) -> Option<u8> {
    let grade = required_integer(value)?;
    if GRADE_RANGE.contains(&grade) {
        u8::try_from(grade).ok()
    } else {
        None
    }
}

fn battery_type_code(value: Option<&str>) -> Option<BatteryType> {
    let code = required_integer(value)?;
    let code = u8::try_from(code).ok()?;
    BatteryType::try_from(code).ok()
}

#[cfg(test)]
mod tests {
    use super::{bounded_grade, battery_type_code, validate_form, CalculatorForm};
    use crate::model::calculator::BatteryType;

    fn form(oid: &str, manufacturer: &str, grade: &str, battery: &str) -> CalculatorForm {
        CalculatorForm {
            oid: Some(oid.to_string()),
            manufacturer: Some(manufacturer.to_string()),
            grade: Some(grade.to_string()),
            battery_type: Some(battery.to_string()),
        }
    }

    #[test]
    fn validate_form_normalizes_all_fields() {
        let fields =
            validate_form(&form(" 7 ", "  Acme  ", "10", "2")).expect("form should validate");
        assert_eq!(fields.oid, 7);
        assert_eq!(fields.manufacturer, "Acme");
        assert_eq!(fields.grade, 10);
        assert_eq!(fields.battery_type, BatteryType::Rechargeable);
    }

    #[test]
    fn bounded_grade_enforces_inclusive_range() {
        assert_eq!(bounded_grade(Some("0")), Some(0));
        assert_eq!(bounded_grade(Some("10")), Some(10));
        assert_eq!(bounded_grade(Some("11")), None);
        assert_eq!(bounded_grade(Some("-1")), None);
        assert_eq!(bounded_grade(Some("5.5")), None);
    }

    #[test]
    fn battery_type_code_accepts_known_codes_only() {
        assert_eq!(battery_type_code(Some("1")), Some(BatteryType::Disposable));
        assert_eq!(battery_type_code(Some("3")), Some(BatteryType::Solar));
        assert_eq!(battery_type_code(Some("0")), None);
        assert_eq!(battery_type_code(Some("4")), None);
        assert_eq!(battery_type_code(Some("two")), None);
    }

    #[test]
    fn validate_form_rejects_fractional_oid() {
        assert!(validate_form(&form("7.5", "Acme", "5", "1")).is_none());
        assert!(validate_form(&form("seven", "Acme", "5", "1")).is_none());
    }
}
