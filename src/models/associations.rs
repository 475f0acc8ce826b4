// Knowledge-graph relationship records - foreign-key pairs between generated nodes

use serde::Serialize;

use crate::core::{ClinicId, CommentId, FamilyId, IncidentId, InterventionId, NurseId, PostId, TeamId};

#[derive(Debug, Clone, Serialize)]
pub struct NurseIntervention {
    pub nurse_id: NurseId,
    pub intervention_id: InterventionId,
}

#[derive(Debug, Clone, Serialize)]
pub struct NurseFamily {
    pub nurse_id: NurseId,
    pub family_id: FamilyId,
}

#[derive(Debug, Clone, Serialize)]
pub struct NurseIncident {
    pub nurse_id: NurseId,
    pub incident_id: IncidentId,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentIncident {
    pub comment_id: CommentId,
    pub incident_id: IncidentId,
}

#[derive(Debug, Clone, Serialize)]
pub struct NurseClinic {
    pub nurse_id: NurseId,
    pub clinic_id: ClinicId,
}

#[derive(Debug, Clone, Serialize)]
pub struct IncidentClinic {
    pub incident_id: IncidentId,
    pub clinic_id: ClinicId,
}

#[derive(Debug, Clone, Serialize)]
pub struct NurseTeam {
    pub nurse_id: NurseId,
    pub team_id: TeamId,
}

/// How a nurse interacted with a misinformation post
#[derive(Debug, Clone, Serialize)]
pub struct NursePostEngagement {
    pub nurse_id: NurseId,
    pub post_id: PostId,
    pub engagement_type: &'static str,
}
