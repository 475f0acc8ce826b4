// Workforce survey records - roster, shifts and the per-nurse tables derived from them
// Nested records are flattened, so a feedback row starts with its shift's columns

use chrono::NaiveDate;
use serde::Serialize;

/// Roster entry; `nurse_id` is the sequential `N0001` form
#[derive(Debug, Clone, Serialize)]
pub struct RosterNurse {
    pub nurse_id: String,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub gender: &'static str,
    pub age: u8,
    pub race_ethnicity: &'static str,
    pub education_nurse: &'static str,
    pub years_licensed: u8,
    pub license_type: &'static str,
    pub primary_setting: &'static str,
    pub specialty: &'static str,
    pub multistate_license: bool,
    pub full_time: bool,
    pub hire_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct Shift {
    pub shift_id: String,
    pub nurse_id: String,
    pub date: NaiveDate,
    pub unit: &'static str,
    pub shift_type: &'static str,
    pub hours: u8,
    pub patients: u8,
    pub acuity: u8,
    pub admissions: u32,
    pub discharges: u32,
    pub overtime: bool,
    pub call_in: bool,
}

/// Self-reported wellbeing for one sampled shift
#[derive(Debug, Clone, Serialize)]
pub struct ShiftFeedback {
    #[serde(flatten)]
    pub shift: Shift,
    pub feedback_id: String,
    pub reported_stress: &'static str,
    pub reported_fatigue: &'static str,
    pub burnout_freq: &'static str,
    pub emotionally_drained: bool,
    pub used_up: bool,
    pub workload_change: &'static str,
    pub intent_to_leave: bool,
    pub satisfaction: u8,
    pub comments: String,
}

/// Supervisor assessment attached to a sampled feedback row
#[derive(Debug, Clone, Serialize)]
pub struct SupervisorFeedback {
    #[serde(flatten)]
    pub feedback: ShiftFeedback,
    pub supervisor_id: String,
    pub performance_score: u8,
    pub reliability: &'static str,
    pub teamwork: &'static str,
    pub clinical_decision: &'static str,
    pub remarks: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthRecord {
    pub record_id: String,
    pub nurse_id: String,
    pub date: NaiveDate,
    pub health_status: &'static str,
    pub absence_type: &'static str,
    pub days_off: u8,
    pub return_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct PayRecord {
    pub nurse_id: String,
    pub primary_setting: &'static str,
    pub specialty: &'static str,
    pub education_nurse: &'static str,
    pub full_time: bool,
    pub annual_salary: i64,
    pub overtime_rate: f64,
    pub bonus: u32,
}

/// `mode` is empty unless telehealth was used
#[derive(Debug, Clone, Serialize)]
pub struct TelehealthRecord {
    pub nurse_id: String,
    pub used_telehealth: bool,
    pub mode: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrainingRecord {
    pub training_id: String,
    pub nurse_id: String,
    pub date: NaiveDate,
    pub module: &'static str,
    pub completed: bool,
    pub cert_expiry: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct MultistatePractice {
    pub nurse_id: String,
    pub multistate_license: bool,
    pub used_multistate_license: bool,
    pub purpose: &'static str,
}
