// Knowledge-graph entity generators
// Independent entities first; dependent ones only sample from collections passed in

use chrono::{Datelike, Duration, NaiveDate};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{info, warn};

use super::GraphSeeder;
use crate::core::distributions::{round_to, Choices};
use crate::core::{
    ClinicId, CommentId, EntityKind, FamilyId, IncidentId, InterventionId, Lexicon, NurseId,
    PostId, TeamId,
};
use crate::models::{
    Clinic, Comment, Family, Incident, Intervention, MisinformationPost, Nurse, ResearchFactors,
    Team,
};

pub const DEPARTMENTS: Choices<&str> = Choices::new(&[
    "Emergency",
    "ICU",
    "Outpatient",
    "Pediatrics",
    "Surgical",
    "Oncology",
    "General Medicine",
    "Maternity",
]);

pub const CLINIC_TYPES: Choices<&str> =
    Choices::new(&["Hospital", "Clinic", "Community Center", "Long-term Care"]);

pub const FAMILY_TYPES: Choices<&str> = Choices::new(&[
    "Single",
    "Single Parent",
    "Married",
    "Married with Children",
    "Extended",
]);

pub const INTERVENTION_TYPES: Choices<&str> = Choices::new(&[
    "Counseling",
    "Resilience Training",
    "Peer Review",
    "Staffing Policy",
    "Recognition Program",
    "Wellness Program",
    "Flexible Scheduling",
    "Supervisor Check-In",
    "Mental Health App",
    "Yoga Sessions",
]);

const INTERVENTION_SCOPES: Choices<&str> = Choices::new(&["Department", "Hospital", "System"]);

const GENDERS: Choices<&str> = Choices::new(&["Female", "Male", "Other"]);
const ETHNICITIES: Choices<&str> = Choices::new(&["White", "Black", "Asian", "Hispanic", "Other"]);
const SHIFT_TYPES: Choices<&str> = Choices::new(&["Day", "Night", "Rotating", "Weekend"]);

/// One in three
const ONE_IN_THREE: Choices<bool> = Choices::new(&[true, false, false]);
/// One in four
const ONE_IN_FOUR: Choices<bool> = Choices::new(&[true, false, false, false]);
const COIN: Choices<bool> = Choices::new(&[true, false]);

const POSITIONS: Choices<&str> = Choices::new(&[
    "Staff Nurse",
    "Charge Nurse",
    "Administrator",
    "Educator/Researcher",
    "APRN",
]);
const SUBSTANCE_TYPES: Choices<&str> = Choices::new(&[
    "None",
    "Nicotine",
    "Alcohol",
    "Caffeine",
    "Energy Drinks",
    "Prescription Misuse",
]);
const INTENTION_REASONS: Choices<&str> = Choices::new(&[
    "High stress",
    "Low pay",
    "Workload imbalance",
    "Better opportunity",
    "Personal reasons",
]);
const SHIFT_LENGTHS: Choices<&str> = Choices::new(&["8-hour", "12-hour"]);

pub const INCIDENT_TYPES: Choices<&str> = Choices::new(&[
    "Equipment Failure",
    "Staff Shortage",
    "Patient Aggression",
    "Critical Decision",
    "Policy Change",
    "Breaks Missed",
    "Teamwork Success",
    "Bullying",
    "Error Reported",
    "Patient Death",
    "Praise Received",
]);

const COMMENT_REMARKS: Choices<&str> = Choices::new(&[
    "Felt stressed and unsupported.",
    "Team pulled together and handled the crisis.",
    "Peer review highlighted strengths in leadership.",
    "Struggled communicating with management.",
    "Appreciated supervisor's recognition.",
    "Difficult shift but grateful for colleagues.",
    "Needed more support from peer team.",
    "Peer feedback: manages patient loads well.",
]);

pub const POST_TOPICS: Choices<&str> = Choices::new(&[
    "Vaccines",
    "Mental Health",
    "Pain Management",
    "Nutrition",
    "Substance Use",
]);

impl GraphSeeder {
    pub fn generate_clinics(&mut self, n: usize) -> Vec<Clinic> {
        let clinics: Vec<Clinic> = (0..n)
            .map(|_| Clinic {
                clinic_id: ClinicId(self.ids.next_id(EntityKind::Clinic, &mut self.rng)),
                clinic_name: Lexicon::company(&mut self.rng),
                clinic_type: CLINIC_TYPES.pick(&mut self.rng),
                location: Lexicon::city(&mut self.rng),
            })
            .collect();
        info!("Generated {} clinics", clinics.len());
        clinics
    }

    pub fn generate_families(&mut self, n: usize) -> Vec<Family> {
        let families: Vec<Family> = (0..n)
            .map(|_| Family {
                family_id: FamilyId(self.ids.next_id(EntityKind::Family, &mut self.rng)),
                family_type: FAMILY_TYPES.pick(&mut self.rng),
                num_dependents: self.rng.random_range(0..=5),
            })
            .collect();
        info!("Generated {} families", families.len());
        families
    }

    pub fn generate_teams(&mut self, n: usize) -> Vec<Team> {
        let teams: Vec<Team> = (0..n)
            .map(|_| Team {
                team_id: TeamId(self.ids.next_id(EntityKind::Team, &mut self.rng)),
                team_name: Lexicon::catch_phrase(&mut self.rng),
                department: DEPARTMENTS.pick(&mut self.rng),
            })
            .collect();
        info!("Generated {} teams", teams.len());
        teams
    }

    pub fn generate_interventions(&mut self, n: usize) -> Vec<Intervention> {
        let interventions: Vec<Intervention> = (0..n)
            .map(|_| Intervention {
                intervention_id: InterventionId(
                    self.ids.next_id(EntityKind::Intervention, &mut self.rng),
                ),
                intervention_type: INTERVENTION_TYPES.pick(&mut self.rng),
                description: Lexicon::sentence(&mut self.rng, 15),
                scope: INTERVENTION_SCOPES.pick(&mut self.rng),
            })
            .collect();
        info!("Generated {} interventions", interventions.len());
        interventions
    }

    /// Nurses assigned to a uniformly drawn team, family and clinic (drawn in that order).
    ///
    /// Returns an empty collection when any parent collection is empty.
    pub fn generate_nurses(
        &mut self,
        n: usize,
        clinics: &[Clinic],
        families: &[Family],
        teams: &[Team],
    ) -> Vec<Nurse> {
        if clinics.is_empty() || families.is_empty() || teams.is_empty() {
            if n > 0 {
                warn!(
                    "Skipping {} nurses: no clinic, family or team to reference (clinics={}, families={}, teams={})",
                    n,
                    clinics.len(),
                    families.len(),
                    teams.len()
                );
            }
            return Vec::new();
        }

        let mut nurses = Vec::with_capacity(n);
        for _ in 0..n {
            let (Some(team), Some(family), Some(clinic)) = (
                teams.choose(&mut self.rng),
                families.choose(&mut self.rng),
                clinics.choose(&mut self.rng),
            ) else {
                break;
            };

            let rng = &mut self.rng;
            let nurse_id = NurseId(self.ids.next_id(EntityKind::Nurse, rng));
            nurses.push(Nurse {
                nurse_id,
                clinic_id: clinic.clinic_id,
                team_id: team.team_id,
                family_id: family.family_id,
                name: Lexicon::person_name(rng),
                age: rng.random_range(22..=65),
                gender: GENDERS.pick(rng),
                ethnicity: ETHNICITIES.pick(rng),
                department: team.department,
                years_experience: rng.random_range(1..=39),
                shift_type: SHIFT_TYPES.pick(rng),
                marital_status: family.family_type,
                num_dependents: family.num_dependents,
                has_chronic_disease: ONE_IN_THREE.pick(rng),
                resilience_score: rng.random_range(1..=5),
                peer_recognition: rng.random_range(1..=5),
                job_satisfaction: rng.random_range(1..=5),
                burnout_score: rng.random_range(1..=5),
                stress_score: rng.random_range(1..=5),
                physical_health: rng.random_range(1..=5),
                mental_health: rng.random_range(1..=5),
                violence_experience: ONE_IN_THREE.pick(rng),
                support_access: COIN.pick(rng),
                financial_insecurity: COIN.pick(rng),
                work_life_balance: rng.random_range(1..=5),
                research: research_factors(rng),
            });
        }
        info!("Generated {} nurses", nurses.len());
        nurses
    }

    /// Incidents dated between January 1st of the reference year and the reference date
    pub fn generate_incidents(&mut self, n: usize, clinics: &[Clinic]) -> Vec<Incident> {
        if clinics.is_empty() {
            if n > 0 {
                warn!("Skipping {} incidents: no clinic to reference", n);
            }
            return Vec::new();
        }

        let year_start = NaiveDate::from_ymd_opt(self.reference_date.year(), 1, 1)
            .unwrap_or(self.reference_date);
        let span_days = (self.reference_date - year_start).num_days();

        let mut incidents = Vec::with_capacity(n);
        for _ in 0..n {
            let incident_id = IncidentId(self.ids.next_id(EntityKind::Incident, &mut self.rng));
            let Some(clinic) = clinics.choose(&mut self.rng) else {
                break;
            };
            let rng = &mut self.rng;
            incidents.push(Incident {
                incident_id,
                clinic_id: clinic.clinic_id,
                department: DEPARTMENTS.pick(rng),
                incident_type: INCIDENT_TYPES.pick(rng),
                severity: rng.random_range(1..=5),
                date: year_start + Duration::days(rng.random_range(0..=span_days)),
            });
        }
        info!("Generated {} incidents", incidents.len());
        incidents
    }

    pub fn generate_comments(
        &mut self,
        n: usize,
        incidents: &[Incident],
        nurses: &[Nurse],
    ) -> Vec<Comment> {
        if incidents.is_empty() || nurses.is_empty() {
            if n > 0 {
                warn!(
                    "Skipping {} comments: no incident or nurse to reference (incidents={}, nurses={})",
                    n,
                    incidents.len(),
                    nurses.len()
                );
            }
            return Vec::new();
        }

        let mut comments = Vec::with_capacity(n);
        for _ in 0..n {
            let comment_id = CommentId(self.ids.next_id(EntityKind::Comment, &mut self.rng));
            let (Some(incident), Some(nurse)) = (
                incidents.choose(&mut self.rng),
                nurses.choose(&mut self.rng),
            ) else {
                break;
            };
            let rng = &mut self.rng;
            let nb_words = rng.random_range(10..=20);
            let text = format!(
                "{} {}",
                Lexicon::sentence(rng, nb_words),
                COMMENT_REMARKS.pick(rng)
            );
            comments.push(Comment {
                comment_id,
                incident_id: incident.incident_id,
                nurse_id: nurse.nurse_id,
                text,
            });
        }
        info!("Generated {} comments", comments.len());
        comments
    }

    pub fn generate_misinformation_posts(&mut self, n: usize) -> Vec<MisinformationPost> {
        let posts: Vec<MisinformationPost> = (0..n)
            .map(|_| MisinformationPost {
                post_id: PostId(self.ids.next_id(EntityKind::Post, &mut self.rng)),
                topic: POST_TOPICS.pick(&mut self.rng),
                text: Lexicon::sentence(&mut self.rng, 25),
                credibility_score: round_to(self.rng.random::<f64>(), 2),
            })
            .collect();
        info!("Generated {} misinformation posts", posts.len());
        posts
    }
}

/// Psychological, behavioral and workload factors, drawn in column order
fn research_factors<R: Rng + ?Sized>(rng: &mut R) -> ResearchFactors {
    let position_type = POSITIONS.pick(rng);
    let psychological_distress = rng.random_range(1..=5);
    let intention_to_leave = ONE_IN_THREE.pick(rng);
    let intention_reason = INTENTION_REASONS.pick(rng);
    // With replacement, so a nurse may list the same substance twice
    let substance_count = rng.random_range(1..=2);
    let substance_use = (0..substance_count)
        .map(|_| SUBSTANCE_TYPES.pick(rng))
        .collect();

    ResearchFactors {
        position_type,
        psychological_distress,
        intention_to_leave,
        intention_reason,
        substance_use,
        wsi_score: rng.random_range(1..=10),
        workload_intensity: rng.random_range(1..=5),
        preferred_shift_length: SHIFT_LENGTHS.pick(rng),
        rest_hours_between_shifts: rng.random_range(8..=14),
        sleep_quality: rng.random_range(1..=5),
        fatigue_score: rng.random_range(1..=5),
        autonomy_in_schedule: rng.random_range(1..=5),
        depression_score: rng.random_range(1..=5),
        suicide_risk_flag: ONE_IN_FOUR.pick(rng),
        support_utilized: COIN.pick(rng),
        doctor_nurse_relationship: rng.random_range(1..=5),
        patient_conflict_score: rng.random_range(1..=5),
        income_satisfaction: rng.random_range(1..=5),
        respect_perception: rng.random_range(1..=5),
        work_family_conflict: rng.random_range(1..=5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn seeder() -> GraphSeeder {
        GraphSeeder::new(Some(42), NaiveDate::from_ymd_opt(2025, 8, 15).unwrap())
    }

    #[test]
    fn test_nurses_copy_team_and_family_attributes() {
        let mut seeder = seeder();
        let clinics = seeder.generate_clinics(3);
        let families = seeder.generate_families(4);
        let teams = seeder.generate_teams(2);
        let nurses = seeder.generate_nurses(30, &clinics, &families, &teams);

        assert_eq!(nurses.len(), 30);
        for nurse in &nurses {
            let team = teams.iter().find(|t| t.team_id == nurse.team_id).unwrap();
            let family = families.iter().find(|f| f.family_id == nurse.family_id).unwrap();
            assert_eq!(nurse.department, team.department);
            assert_eq!(nurse.marital_status, family.family_type);
            assert_eq!(nurse.num_dependents, family.num_dependents);
            assert!((22..=65).contains(&nurse.age));
            assert!((1..=5).contains(&nurse.burnout_score));
            assert!((1..=2).contains(&nurse.research.substance_use.len()));
            assert!((8..=14).contains(&nurse.research.rest_hours_between_shifts));
        }
    }

    #[test]
    fn test_missing_parents_yield_empty_collections() {
        let mut seeder = seeder();
        let clinics = seeder.generate_clinics(2);
        let families = seeder.generate_families(2);
        let teams = seeder.generate_teams(0);

        assert!(teams.is_empty());
        assert!(seeder.generate_nurses(10, &clinics, &families, &teams).is_empty());
        assert!(seeder.generate_incidents(5, &[]).is_empty());
        assert!(seeder.generate_comments(5, &[], &[]).is_empty());
    }

    #[test]
    fn test_incident_dates_stay_in_reference_year() {
        let mut seeder = seeder();
        let clinics = seeder.generate_clinics(2);
        let incidents = seeder.generate_incidents(200, &clinics);
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();

        assert_eq!(incidents.len(), 200);
        assert!(incidents.iter().all(|i| i.date >= start && i.date <= end));
        assert!(incidents.iter().all(|i| (1..=5).contains(&i.severity)));
        let clinic_ids: HashSet<_> = clinics.iter().map(|c| c.clinic_id).collect();
        assert!(incidents.iter().all(|i| clinic_ids.contains(&i.clinic_id)));
    }

    #[test]
    fn test_comment_text_ends_with_remark() {
        let mut seeder = seeder();
        let clinics = seeder.generate_clinics(1);
        let families = seeder.generate_families(1);
        let teams = seeder.generate_teams(1);
        let nurses = seeder.generate_nurses(3, &clinics, &families, &teams);
        let incidents = seeder.generate_incidents(3, &clinics);
        let comments = seeder.generate_comments(20, &incidents, &nurses);

        assert_eq!(comments.len(), 20);
        for comment in &comments {
            assert!(COMMENT_REMARKS
                .values()
                .iter()
                .any(|remark| comment.text.ends_with(remark)));
        }
    }

    #[test]
    fn test_post_credibility_has_two_decimals() {
        let mut seeder = seeder();
        for post in seeder.generate_misinformation_posts(50) {
            assert!((0.0..=1.0).contains(&post.credibility_score));
            assert_eq!(round_to(post.credibility_score, 2), post.credibility_score);
        }
    }
}
