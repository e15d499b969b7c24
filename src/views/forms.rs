//! Form-boundary validation and payload shaping.
//!
//! Validation happens here and only here: the store accepts whatever these
//! submit functions produce, mirroring the UI contract where required
//! fields are checked by the form and nothing re-checks them deeper in.

use chrono::{NaiveDate, Utc};

use crate::errors::AppError;
use crate::models::{CreateEquipment, CreateRequest, Priority, RequestStatus, RequestType};
use crate::models::{SignupData, UserRole};
use crate::store::AppStore;

/// Unit attached to the estimated-duration input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Min,
    Hrs,
    Days,
}

impl DurationUnit {
    /// Convert a value in this unit to hours. Days assume an 8-hour shift.
    pub fn to_hours(self, value: f64) -> f64 {
        match self {
            DurationUnit::Min => value / 60.0,
            DurationUnit::Hrs => value,
            DurationUnit::Days => value * 8.0,
        }
    }
}

impl Default for DurationUnit {
    fn default() -> Self {
        DurationUnit::Hrs
    }
}

/// Category and team surfaced beside the equipment picker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AutoFill {
    pub category: String,
    pub team: String,
}

/// Look up the display-only details for a picked equipment. Unknown ids
/// yield blanks.
pub fn equipment_autofill(store: &AppStore, equipment_id: &str) -> AutoFill {
    match store.get_equipment_by_id(equipment_id) {
        Some(eq) => AutoFill {
            category: eq.category.clone(),
            team: eq.maintenance_team.clone(),
        },
        None => AutoFill::default(),
    }
}

/// State of the new-ticket form. Text inputs stay `String`, blanks
/// included; pickers are typed.
#[derive(Debug, Clone, Default)]
pub struct RequestForm {
    pub subject: String,
    pub request_type: RequestType,
    pub equipment_id: String,
    pub scheduled_date: Option<NaiveDate>,
    pub duration: Option<f64>,
    pub duration_unit: DurationUnit,
    pub priority: Priority,
    pub description: String,
    pub assigned_team: String,
    pub assigned_technician: String,
}

impl RequestForm {
    /// Record an equipment choice and fill the team from it when the team
    /// field is still blank.
    pub fn apply_equipment(&mut self, store: &AppStore, equipment_id: &str) {
        self.equipment_id = equipment_id.to_string();
        if let Some(eq) = store.get_equipment_by_id(equipment_id) {
            if self.assigned_team.is_empty() && !eq.maintenance_team.is_empty() {
                self.assigned_team = eq.maintenance_team.clone();
            }
        }
    }

    /// Validate and shape the form into a creation payload.
    ///
    /// A subject and an equipment choice are required. A blank schedule
    /// becomes today, the duration is converted to hours per its unit, and
    /// the equipment name is snapshotted from the store.
    pub fn submit(self, store: &AppStore) -> Result<CreateRequest, AppError> {
        if self.subject.trim().is_empty() {
            return Err(AppError::Validation("subject is required".to_string()));
        }
        if self.equipment_id.is_empty() {
            return Err(AppError::Validation("equipment is required".to_string()));
        }
        let equipment_name = store
            .get_equipment_by_id(&self.equipment_id)
            .map(|e| e.name.clone())
            .unwrap_or_default();
        let hours_spent = self.duration.map(|d| self.duration_unit.to_hours(d));
        Ok(CreateRequest {
            subject: self.subject,
            equipment_id: self.equipment_id,
            equipment_name,
            request_type: self.request_type,
            scheduled_date: self.scheduled_date.or_else(|| Some(Utc::now().date_naive())),
            duration: self.duration,
            hours_spent,
            priority: self.priority,
            status: Some(RequestStatus::New),
            assigned_team: non_empty(self.assigned_team),
            assigned_technician: non_empty(self.assigned_technician),
            description: self.description,
        })
    }
}

/// State of the equipment registration form.
#[derive(Debug, Clone, Default)]
pub struct EquipmentForm {
    pub name: String,
    pub serial_number: String,
    pub category: String,
    pub department: String,
    pub employee: String,
    pub location: String,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_info: String,
    pub maintenance_team: String,
    pub assigned_technician: String,
}

impl EquipmentForm {
    /// Validate and shape into a creation payload. Name and serial number
    /// are required; everything else may stay blank.
    pub fn submit(self) -> Result<CreateEquipment, AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".to_string()));
        }
        if self.serial_number.trim().is_empty() {
            return Err(AppError::Validation(
                "serial number is required".to_string(),
            ));
        }
        Ok(CreateEquipment {
            name: self.name,
            serial_number: self.serial_number,
            category: self.category,
            department: self.department,
            employee: non_empty(self.employee),
            location: self.location,
            purchase_date: self.purchase_date,
            warranty_info: self.warranty_info,
            maintenance_team: self.maintenance_team,
            assigned_technician: non_empty(self.assigned_technician),
        })
    }
}

/// State of the signup form, confirmation field included.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: UserRole,
    pub team: String,
}

impl SignupForm {
    /// Validate the password rules and shape into a signup payload.
    pub fn submit(self) -> Result<SignupData, AppError> {
        if self.password != self.confirm_password {
            return Err(AppError::Validation("Passwords do not match".to_string()));
        }
        if self.password.len() < 6 {
            return Err(AppError::Validation(
                "Password must be at least 6 characters long".to_string(),
            ));
        }
        Ok(SignupData {
            name: self.name,
            email: self.email,
            password: self.password,
            role: self.role,
            team: self.team,
        })
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_unit_to_hours() {
        assert_eq!(DurationUnit::Min.to_hours(90.0), 1.5);
        assert_eq!(DurationUnit::Hrs.to_hours(2.5), 2.5);
        assert_eq!(DurationUnit::Days.to_hours(2.0), 16.0);
    }

    #[test]
    fn test_equipment_form_required_fields() {
        let blank = EquipmentForm::default();
        assert!(blank.submit().is_err());

        let mut form = EquipmentForm {
            name: "Lathe 7".to_string(),
            ..Default::default()
        };
        assert!(form.clone().submit().is_err());

        form.serial_number = "LT-07-2024".to_string();
        let payload = form.submit().unwrap();
        assert_eq!(payload.name, "Lathe 7");
        assert_eq!(payload.employee, None);
        assert_eq!(payload.assigned_technician, None);
    }

    #[test]
    fn test_signup_form_password_rules() {
        let mut form = SignupForm {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret2".to_string(),
            role: UserRole::Manager,
            team: String::new(),
        };

        let err = form.clone().submit().unwrap_err();
        assert_eq!(err.to_string(), "validation error: Passwords do not match");

        form.password = "short".to_string();
        form.confirm_password = "short".to_string();
        let err = form.clone().submit().unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation error: Password must be at least 6 characters long"
        );

        form.password = "secret1".to_string();
        form.confirm_password = "secret1".to_string();
        let data = form.submit().unwrap();
        assert_eq!(data.email, "jane@example.com");
        assert_eq!(data.role, UserRole::Manager);
    }
}
