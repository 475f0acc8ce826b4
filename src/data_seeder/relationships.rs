// Knowledge-graph relationship generators
// Every id written here is taken from a collection that already exists

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, info, warn};

use super::GraphSeeder;
use crate::core::distributions::{sample_distinct, Choices};
use crate::models::{
    Comment, CommentIncident, Incident, IncidentClinic, Intervention, MisinformationPost, Nurse,
    NurseClinic, NurseFamily, NurseIncident, NurseIntervention, NursePostEngagement, NurseTeam,
    PeerRating, Team,
};

/// Upper bound on how many teammates one nurse rates
pub const MAX_PEERS_RATED: usize = 3;

const REVIEW_COMMENTS: Choices<&str> = Choices::new(&[
    "Excellent teamwork.",
    "Needs to improve time management.",
    "Great under pressure.",
    "Supportive to colleagues.",
    "Effective leader.",
    "Could communicate more proactively.",
]);

const ENGAGEMENT_TYPES: Choices<&str> = Choices::new(&["commented", "shared", "flagged", "ignored"]);

/// Link collections derived from already-generated nodes
#[derive(Debug, Clone, Default)]
pub struct GraphRelationships {
    pub nurse_intervention: Vec<NurseIntervention>,
    pub nurse_family: Vec<NurseFamily>,
    pub nurse_incident: Vec<NurseIncident>,
    pub comment_incident: Vec<CommentIncident>,
    pub nurse_clinic: Vec<NurseClinic>,
    pub incident_clinic: Vec<IncidentClinic>,
    pub nurse_team: Vec<NurseTeam>,
}

impl GraphSeeder {
    /// Each nurse rates up to [`MAX_PEERS_RATED`] distinct teammates.
    ///
    /// Teams are visited in order and members in nurse order; a member with
    /// fewer than three teammates rates all of them.
    pub fn generate_peer_ratings(&mut self, nurses: &[Nurse], teams: &[Team]) -> Vec<PeerRating> {
        let mut ratings = Vec::new();
        for team in teams {
            let members: Vec<&Nurse> = nurses.iter().filter(|n| n.team_id == team.team_id).collect();
            debug!("Team {} has {} members", team.team_id, members.len());

            for rater in &members {
                let peers: Vec<&Nurse> = members
                    .iter()
                    .copied()
                    .filter(|peer| peer.nurse_id != rater.nurse_id)
                    .collect();
                for index in sample_distinct(&mut self.rng, peers.len(), MAX_PEERS_RATED) {
                    ratings.push(PeerRating {
                        from_nurse_id: rater.nurse_id,
                        to_nurse_id: peers[index].nurse_id,
                        rating: self.rng.random_range(1..=5),
                        review_comment: REVIEW_COMMENTS.pick(&mut self.rng),
                    });
                }
            }
        }
        info!("Generated {} peer ratings", ratings.len());
        ratings
    }

    /// `nurses.len() / 2` engagements, each pairing a random nurse with a random post
    pub fn generate_nurse_post_engagement(
        &mut self,
        nurses: &[Nurse],
        posts: &[MisinformationPost],
    ) -> Vec<NursePostEngagement> {
        let n = nurses.len() / 2;
        if posts.is_empty() {
            if n > 0 {
                warn!("Skipping {} post engagements: no misinformation post to reference", n);
            }
            return Vec::new();
        }

        let mut engagements = Vec::with_capacity(n);
        for _ in 0..n {
            let (Some(nurse), Some(post)) = (nurses.choose(&mut self.rng), posts.choose(&mut self.rng))
            else {
                break;
            };
            engagements.push(NursePostEngagement {
                nurse_id: nurse.nurse_id,
                post_id: post.post_id,
                engagement_type: ENGAGEMENT_TYPES.pick(&mut self.rng),
            });
        }
        info!("Generated {} nurse-post engagements", engagements.len());
        engagements
    }

    /// Relationship collections in the order their draws are made:
    /// nurse_intervention (one draw per nurse), nurse_incident (one nurse and
    /// one incident draw per incident); the rest copy foreign keys already held
    /// by the records and draw nothing.
    pub fn generate_relationships(
        &mut self,
        nurses: &[Nurse],
        incidents: &[Incident],
        comments: &[Comment],
        interventions: &[Intervention],
    ) -> GraphRelationships {
        let nurse_intervention = if interventions.is_empty() {
            if !nurses.is_empty() {
                warn!("Skipping nurse_intervention: no intervention to reference");
            }
            Vec::new()
        } else {
            nurses
                .iter()
                .filter_map(|nurse| {
                    interventions.choose(&mut self.rng).map(|intervention| NurseIntervention {
                        nurse_id: nurse.nurse_id,
                        intervention_id: intervention.intervention_id,
                    })
                })
                .collect()
        };

        let mut nurse_incident = Vec::with_capacity(incidents.len());
        if !nurses.is_empty() {
            for _ in 0..incidents.len() {
                let (Some(nurse), Some(incident)) =
                    (nurses.choose(&mut self.rng), incidents.choose(&mut self.rng))
                else {
                    break;
                };
                nurse_incident.push(NurseIncident {
                    nurse_id: nurse.nurse_id,
                    incident_id: incident.incident_id,
                });
            }
        }

        let relationships = GraphRelationships {
            nurse_intervention,
            nurse_family: nurses
                .iter()
                .map(|n| NurseFamily { nurse_id: n.nurse_id, family_id: n.family_id })
                .collect(),
            nurse_incident,
            comment_incident: comments
                .iter()
                .map(|c| CommentIncident { comment_id: c.comment_id, incident_id: c.incident_id })
                .collect(),
            nurse_clinic: nurses
                .iter()
                .map(|n| NurseClinic { nurse_id: n.nurse_id, clinic_id: n.clinic_id })
                .collect(),
            incident_clinic: incidents
                .iter()
                .map(|i| IncidentClinic { incident_id: i.incident_id, clinic_id: i.clinic_id })
                .collect(),
            nurse_team: nurses
                .iter()
                .map(|n| NurseTeam { nurse_id: n.nurse_id, team_id: n.team_id })
                .collect(),
        };
        info!(
            "Generated relationships: {} nurse_intervention, {} nurse_incident, {} comment_incident",
            relationships.nurse_intervention.len(),
            relationships.nurse_incident.len(),
            relationships.comment_incident.len()
        );
        relationships
    }
}
