// Generated record types - knowledge-graph nodes, their relationships, and workforce survey rows

pub mod associations;
pub mod graph_models;
pub mod workforce_models;

pub use associations::{
    CommentIncident, IncidentClinic, NurseClinic, NurseFamily, NurseIncident, NurseIntervention,
    NursePostEngagement, NurseTeam,
};
pub use graph_models::{
    Clinic, Comment, Family, Incident, Intervention, MisinformationPost, Nurse, PeerRating,
    ResearchFactors, Team,
};
pub use workforce_models::{
    HealthRecord, MultistatePractice, PayRecord, RosterNurse, Shift, ShiftFeedback,
    SupervisorFeedback, TelehealthRecord, TrainingRecord,
};
