// Knowledge-graph node records
// Field order is column order in the written CSV files

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::{ClinicId, CommentId, FamilyId, IncidentId, InterventionId, NurseId, PostId, TeamId};

#[derive(Debug, Clone, Serialize)]
pub struct Clinic {
    pub clinic_id: ClinicId,
    pub clinic_name: String,
    pub clinic_type: &'static str,
    pub location: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Family {
    pub family_id: FamilyId,
    pub family_type: &'static str,
    pub num_dependents: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct Team {
    pub team_id: TeamId,
    pub team_name: String,
    pub department: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Intervention {
    pub intervention_id: InterventionId,
    #[serde(rename = "type")]
    pub intervention_type: &'static str,
    pub description: String,
    pub scope: &'static str,
}

/// A nurse with survey-style wellbeing scores.
///
/// Likert fields are 1..=5. `department`, `marital_status` and
/// `num_dependents` are copied from the nurse's team and family.
#[derive(Debug, Clone, Serialize)]
pub struct Nurse {
    pub nurse_id: NurseId,
    pub clinic_id: ClinicId,
    pub team_id: TeamId,
    pub family_id: FamilyId,
    pub name: String,
    pub age: u8,
    pub gender: &'static str,
    pub ethnicity: &'static str,
    pub department: &'static str,
    pub years_experience: u8,
    pub shift_type: &'static str,
    pub marital_status: &'static str,
    pub num_dependents: u8,
    pub has_chronic_disease: bool,
    pub resilience_score: u8,
    pub peer_recognition: u8,
    pub job_satisfaction: u8,
    pub burnout_score: u8,
    pub stress_score: u8,
    pub physical_health: u8,
    pub mental_health: u8,
    pub violence_experience: bool,
    pub support_access: bool,
    pub financial_insecurity: bool,
    pub work_life_balance: u8,
    #[serde(flatten)]
    pub research: ResearchFactors,
}

/// Psychological, behavioral and workload factors appended to every nurse
#[derive(Debug, Clone, Serialize)]
pub struct ResearchFactors {
    pub position_type: &'static str,
    pub psychological_distress: u8,
    pub intention_to_leave: bool,
    pub intention_reason: &'static str,
    pub substance_use: Vec<&'static str>,
    pub wsi_score: u8,
    pub workload_intensity: u8,
    pub preferred_shift_length: &'static str,
    pub rest_hours_between_shifts: u8,
    pub sleep_quality: u8,
    pub fatigue_score: u8,
    pub autonomy_in_schedule: u8,
    pub depression_score: u8,
    pub suicide_risk_flag: bool,
    pub support_utilized: bool,
    pub doctor_nurse_relationship: u8,
    pub patient_conflict_score: u8,
    pub income_satisfaction: u8,
    pub respect_perception: u8,
    pub work_family_conflict: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct Incident {
    pub incident_id: IncidentId,
    pub clinic_id: ClinicId,
    pub department: &'static str,
    #[serde(rename = "type")]
    pub incident_type: &'static str,
    pub severity: u8,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub comment_id: CommentId,
    pub incident_id: IncidentId,
    pub nurse_id: NurseId,
    pub text: String,
}

/// One nurse's review of a teammate
#[derive(Debug, Clone, Serialize)]
pub struct PeerRating {
    pub from_nurse_id: NurseId,
    pub to_nurse_id: NurseId,
    pub rating: u8,
    pub review_comment: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MisinformationPost {
    pub post_id: PostId,
    pub topic: &'static str,
    pub text: String,
    pub credibility_score: f64,
}
