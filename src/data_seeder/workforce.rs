// Workforce survey seeding - roster, shifts, wellbeing feedback and per-nurse HR tables
//
// Draw order: roster, shifts, nurse feedback, supervisor feedback, health,
// pay, telehealth, training, multistate practice. Within each table records
// are drawn nurse by nurse, attributes in column order.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, Poisson};
use tracing::{info, warn};

use super::RunReport;
use crate::config::WorkforceConfig;
use crate::core::distributions::{chance, sample_distinct, Choices, Weighted};
use crate::error::{AppError, AppResult};
use crate::infrastructure::{CsvSink, RunManifest};
use crate::models::{
    HealthRecord, MultistatePractice, PayRecord, RosterNurse, Shift, ShiftFeedback,
    SupervisorFeedback, TelehealthRecord, TrainingRecord,
};

const FIRST_NAMES: Choices<&str> = Choices::new(&[
    "Alex", "Taylor", "Jamie", "Morgan", "Sam", "Jordan", "Chris", "Jess", "Drew", "Casey",
]);
const LAST_NAMES: Choices<&str> = Choices::new(&[
    "Smith", "Brown", "Lee", "Patel", "Garcia", "Davis", "Chen", "Nguyen", "Wong", "Martinez",
]);
pub const GENDERS: Weighted<&str> =
    Weighted::new(&[("Female", 0.88), ("Male", 0.11), ("Nonbinary", 0.01)]);
const RACE_ETHNICITIES: Weighted<&str> = Weighted::new(&[
    ("White", 0.73),
    ("Black", 0.09),
    ("Asian", 0.09),
    ("Hispanic", 0.07),
    ("Other", 0.01),
    ("Multiracial", 0.01),
]);
const EDUCATION: Weighted<&str> = Weighted::new(&[
    ("Diploma", 0.04),
    ("Associate", 0.20),
    ("Baccalaureate", 0.60),
    ("Masters", 0.13),
    ("Doctorate", 0.03),
]);
const LICENSE_TYPES: Weighted<&str> = Weighted::new(&[("RN", 0.80), ("APRN", 0.13), ("LPN", 0.07)]);
const PRIMARY_SETTINGS: Weighted<&str> = Weighted::new(&[
    ("Hospital", 0.60),
    ("Nursing home", 0.13),
    ("Home health", 0.11),
    ("Clinic", 0.09),
    ("Ambulatory", 0.07),
]);
const SPECIALTIES: Choices<&str> = Choices::new(&[
    "Med-surg", "Emergency", "Geriatrics", "Pediatrics", "Psychiatry", "Cardiac", "Other",
]);
const MULTISTATE: Weighted<bool> = Weighted::new(&[(true, 0.35), (false, 0.65)]);
const FULL_TIME: Weighted<bool> = Weighted::new(&[(true, 0.72), (false, 0.28)]);

/// Shifts cover weeks 40 through 52 after this date
const SHIFT_WEEKS: std::ops::RangeInclusive<i64> = 40..=52;
const SHIFTS_PER_WEEK: Choices<u8> = Choices::new(&[3, 4, 5, 6]);
const SHIFT_START_HOURS: Choices<u32> = Choices::new(&[7, 19]);
const UNITS: Choices<&str> = Choices::new(&["ICU", "Surgery", "Medical", "ED", "Peds"]);
const SHIFT_TYPES: Weighted<&str> =
    Weighted::new(&[("Day", 0.45), ("Evening", 0.12), ("Night", 0.43)]);
const SHIFT_HOURS: Weighted<u8> = Weighted::new(&[(8, 0.21), (10, 0.08), (12, 0.71)]);
const ADMISSIONS_PER_SHIFT: f64 = 1.1;
const DISCHARGES_PER_SHIFT: f64 = 0.7;

/// Share of shifts that receive self-reported feedback
pub const FEEDBACK_FRACTION: f64 = 0.6;
/// Share of feedback rows that also receive a supervisor assessment
pub const SUPERVISOR_FRACTION: f64 = 0.45;

const STRESS: Weighted<&str> = Weighted::new(&[("Low", 0.38), ("Medium", 0.41), ("High", 0.21)]);
const FATIGUE: Weighted<&str> =
    Weighted::new(&[("None", 0.33), ("Moderate", 0.53), ("Severe", 0.14)]);
const BURNOUT_FREQ: Weighted<&str> = Weighted::new(&[
    ("Never", 0.19),
    ("Monthly", 0.19),
    ("Weekly", 0.27),
    ("Every day", 0.35),
]);
const EMOTIONALLY_DRAINED: Weighted<bool> = Weighted::new(&[(true, 0.18), (false, 0.82)]);
const USED_UP: Weighted<bool> = Weighted::new(&[(true, 0.23), (false, 0.77)]);
const WORKLOAD_CHANGE: Weighted<&str> =
    Weighted::new(&[("More", 0.53), ("No change", 0.37), ("Less", 0.10)]);
const INTENT_TO_LEAVE: Weighted<bool> = Weighted::new(&[(true, 0.33), (false, 0.67)]);

const RELIABILITY: Weighted<&str> = Weighted::new(&[
    ("Below avg", 0.06),
    ("Average", 0.27),
    ("Good", 0.39),
    ("Excellent", 0.28),
]);
const TEAMWORK: Weighted<&str> =
    Weighted::new(&[("Low", 0.06), ("Moderate", 0.35), ("High", 0.59)]);
const CLINICAL_DECISION: Weighted<&str> = Weighted::new(&[
    ("Appropriate", 0.69),
    ("Needs improvement", 0.15),
    ("Outstanding", 0.16),
]);

const HEALTH_STATUS: Weighted<&str> = Weighted::new(&[
    ("Healthy", 0.82),
    ("Sick", 0.12),
    ("Injured", 0.02),
    ("Exhausted", 0.04),
]);
const ABSENCE_TYPES: Weighted<&str> = Weighted::new(&[
    ("None", 0.63),
    ("Sick leave", 0.18),
    ("Vacation", 0.13),
    ("Family", 0.05),
    ("Health incident", 0.01),
]);
const DAYS_OFF: Choices<u8> = Choices::new(&[1, 2, 3, 5, 7, 14]);

const SALARY_MEAN: f64 = 88_500.0;
const SALARY_STD_DEV: f64 = 17_000.0;
const PART_TIME_FACTOR: f64 = 0.60;
const BONUSES: Weighted<u32> = Weighted::new(&[(0, 0.64), (500, 0.21), (900, 0.10), (1800, 0.05)]);

const USED_TELEHEALTH: Weighted<bool> = Weighted::new(&[(true, 0.22), (false, 0.78)]);
const TELEHEALTH_MODES: Choices<&str> = Choices::new(&["Phone", "Video", "Text", "Mixed"]);

pub const TRAINING_MODULES: Choices<&str> = Choices::new(&[
    "Resilience",
    "Infection control",
    "Ethics",
    "Leadership",
    "Tech",
    "Patient Safety",
    "Emergency Response",
]);

const COIN: Choices<bool> = Choices::new(&[true, false]);
const MULTISTATE_PURPOSES: Choices<&str> =
    Choices::new(&["Telehealth", "Education", "Disaster response", "Other"]);

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Every table produced by one workforce run
#[derive(Debug, Clone, Default)]
pub struct WorkforceDataset {
    pub nurses: Vec<RosterNurse>,
    pub shifts: Vec<Shift>,
    pub nurses_feedback: Vec<ShiftFeedback>,
    pub supervisors_feedback: Vec<SupervisorFeedback>,
    pub health: Vec<HealthRecord>,
    pub pay: Vec<PayRecord>,
    pub telehealth: Vec<TelehealthRecord>,
    pub training: Vec<TrainingRecord>,
    pub practice_multistate: Vec<MultistatePractice>,
}

impl WorkforceDataset {
    pub fn write_all(&self, sink: &mut CsvSink) -> AppResult<()> {
        sink.write("nurses", &self.nurses)?;
        sink.write("shifts", &self.shifts)?;
        sink.write("nurses_feedback", &self.nurses_feedback)?;
        sink.write("supervisors_feedback", &self.supervisors_feedback)?;
        sink.write("health", &self.health)?;
        sink.write("pay", &self.pay)?;
        sink.write("telehealth", &self.telehealth)?;
        sink.write("training", &self.training)?;
        sink.write("practice_multistate", &self.practice_multistate)?;
        Ok(())
    }
}

#[derive(Debug)]
pub struct WorkforceSeeder {
    rng: StdRng,
    admissions: Poisson<f64>,
    discharges: Poisson<f64>,
    salary: Normal<f64>,
}

impl WorkforceSeeder {
    pub fn new(seed: Option<u64>) -> AppResult<Self> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            rng,
            admissions: Poisson::new(ADMISSIONS_PER_SHIFT).map_err(distribution_error)?,
            discharges: Poisson::new(DISCHARGES_PER_SHIFT).map_err(distribution_error)?,
            salary: Normal::new(SALARY_MEAN, SALARY_STD_DEV).map_err(distribution_error)?,
        })
    }

    pub fn generate(&mut self, nurse_count: usize, supervisors: usize) -> WorkforceDataset {
        let nurses = self.generate_roster(nurse_count);
        let shifts = self.generate_shifts(&nurses);
        let nurses_feedback = self.generate_feedback(&shifts);
        let supervisors_feedback = self.generate_supervisor_feedback(&nurses_feedback, supervisors);
        let health = self.generate_health(&nurses);
        let pay = self.generate_pay(&nurses);
        let telehealth = self.generate_telehealth(&nurses);
        let training = self.generate_training(&nurses);
        let practice_multistate = self.generate_multistate(&nurses);

        WorkforceDataset {
            nurses,
            shifts,
            nurses_feedback,
            supervisors_feedback,
            health,
            pay,
            telehealth,
            training,
            practice_multistate,
        }
    }

    /// Roster with sequential `N0001`-style ids
    pub fn generate_roster(&mut self, n: usize) -> Vec<RosterNurse> {
        let hire_epoch = ymd(2008, 1, 1);
        let rng = &mut self.rng;
        let nurses: Vec<RosterNurse> = (0..n)
            .map(|i| RosterNurse {
                nurse_id: format!("N{:04}", i + 1),
                first_name: FIRST_NAMES.pick(rng),
                last_name: LAST_NAMES.pick(rng),
                gender: GENDERS.sample(rng),
                age: rng.random_range(21..=64),
                race_ethnicity: RACE_ETHNICITIES.sample(rng),
                education_nurse: EDUCATION.sample(rng),
                years_licensed: rng.random_range(1..=41),
                license_type: LICENSE_TYPES.sample(rng),
                primary_setting: PRIMARY_SETTINGS.sample(rng),
                specialty: SPECIALTIES.pick(rng),
                multistate_license: MULTISTATE.sample(rng),
                full_time: FULL_TIME.sample(rng),
                hire_date: hire_epoch + Duration::days(rng.random_range(0..=16 * 365)),
            })
            .collect();
        info!("Generated {} roster nurses", nurses.len());
        nurses
    }

    pub fn generate_shifts(&mut self, nurses: &[RosterNurse]) -> Vec<Shift> {
        let year_start = ymd(2025, 1, 1);
        let (admissions, discharges) = (&self.admissions, &self.discharges);
        let rng = &mut self.rng;
        let mut shifts = Vec::new();

        for nurse in nurses {
            for week in SHIFT_WEEKS {
                let week_start = year_start + Duration::weeks(week);
                for _ in 0..SHIFTS_PER_WEEK.pick(rng) {
                    let day = week_start + Duration::days(rng.random_range(0..7));
                    let hour = SHIFT_START_HOURS.pick(rng);
                    let start = day.and_hms_opt(hour, 0, 0).unwrap_or_default();
                    shifts.push(Shift {
                        shift_id: format!("S{}-{}", nurse.nurse_id, start.format("%j%H")),
                        nurse_id: nurse.nurse_id.clone(),
                        date: day,
                        unit: UNITS.pick(rng),
                        shift_type: SHIFT_TYPES.sample(rng),
                        hours: SHIFT_HOURS.sample(rng),
                        patients: rng.random_range(2..=8),
                        acuity: rng.random_range(1..=10),
                        admissions: count(admissions, rng),
                        discharges: count(discharges, rng),
                        overtime: chance(rng, 0.09),
                        call_in: chance(rng, 0.04),
                    });
                }
            }
        }
        info!("Generated {} shifts", shifts.len());
        shifts
    }

    /// Self-reported feedback for a random [`FEEDBACK_FRACTION`] of shifts, in sampled order
    pub fn generate_feedback(&mut self, shifts: &[Shift]) -> Vec<ShiftFeedback> {
        let picked = sample_fraction(&mut self.rng, shifts.len(), FEEDBACK_FRACTION);
        let rng = &mut self.rng;
        let feedback: Vec<ShiftFeedback> = picked
            .into_iter()
            .enumerate()
            .map(|(position, index)| ShiftFeedback {
                shift: shifts[index].clone(),
                feedback_id: format!("F{}", position + 1),
                reported_stress: STRESS.sample(rng),
                reported_fatigue: FATIGUE.sample(rng),
                burnout_freq: BURNOUT_FREQ.sample(rng),
                emotionally_drained: EMOTIONALLY_DRAINED.sample(rng),
                used_up: USED_UP.sample(rng),
                workload_change: WORKLOAD_CHANGE.sample(rng),
                intent_to_leave: INTENT_TO_LEAVE.sample(rng),
                satisfaction: rng.random_range(1..=5),
                comments: String::new(),
            })
            .collect();
        info!("Generated {} shift feedback rows", feedback.len());
        feedback
    }

    /// Supervisor assessments for a random [`SUPERVISOR_FRACTION`] of feedback rows
    pub fn generate_supervisor_feedback(
        &mut self,
        feedback: &[ShiftFeedback],
        supervisors: usize,
    ) -> Vec<SupervisorFeedback> {
        if supervisors == 0 {
            if !feedback.is_empty() {
                warn!("Skipping supervisor feedback: no supervisors configured");
            }
            return Vec::new();
        }

        let picked = sample_fraction(&mut self.rng, feedback.len(), SUPERVISOR_FRACTION);
        let rng = &mut self.rng;
        let rows: Vec<SupervisorFeedback> = picked
            .into_iter()
            .map(|index| SupervisorFeedback {
                feedback: feedback[index].clone(),
                supervisor_id: format!("SUP{}", rng.random_range(1..=supervisors)),
                performance_score: rng.random_range(2..=5),
                reliability: RELIABILITY.sample(rng),
                teamwork: TEAMWORK.sample(rng),
                clinical_decision: CLINICAL_DECISION.sample(rng),
                remarks: String::new(),
            })
            .collect();
        info!("Generated {} supervisor feedback rows", rows.len());
        rows
    }

    /// Zero to four absence records per nurse
    pub fn generate_health(&mut self, nurses: &[RosterNurse]) -> Vec<HealthRecord> {
        let rng = &mut self.rng;
        let mut records = Vec::new();
        for (idx, nurse) in nurses.iter().enumerate() {
            for m in 0..rng.random_range(0..=4) {
                let start = nurse.hire_date + Duration::days(rng.random_range(100..=6000));
                let days_off = DAYS_OFF.pick(rng);
                records.push(HealthRecord {
                    record_id: format!("HL{:04}{}", idx, m + 1),
                    nurse_id: nurse.nurse_id.clone(),
                    date: start,
                    health_status: HEALTH_STATUS.sample(rng),
                    absence_type: ABSENCE_TYPES.sample(rng),
                    days_off,
                    return_date: start + Duration::days(i64::from(days_off)),
                });
            }
        }
        info!("Generated {} health records", records.len());
        records
    }

    /// Salary drawn from a normal distribution, scaled down for part-time staff
    pub fn generate_pay(&mut self, nurses: &[RosterNurse]) -> Vec<PayRecord> {
        let salary = &self.salary;
        let rng = &mut self.rng;
        nurses
            .iter()
            .map(|nurse| {
                let factor = if nurse.full_time { 1.0 } else { PART_TIME_FACTOR };
                PayRecord {
                    nurse_id: nurse.nurse_id.clone(),
                    primary_setting: nurse.primary_setting,
                    specialty: nurse.specialty,
                    education_nurse: nurse.education_nurse,
                    full_time: nurse.full_time,
                    annual_salary: (salary.sample(rng) * factor) as i64,
                    overtime_rate: rng.random_range(1.1..1.8),
                    bonus: BONUSES.sample(rng),
                }
            })
            .collect()
    }

    pub fn generate_telehealth(&mut self, nurses: &[RosterNurse]) -> Vec<TelehealthRecord> {
        let rng = &mut self.rng;
        nurses
            .iter()
            .map(|nurse| {
                let used = USED_TELEHEALTH.sample(rng);
                TelehealthRecord {
                    nurse_id: nurse.nurse_id.clone(),
                    used_telehealth: used,
                    mode: if used { TELEHEALTH_MODES.pick(rng) } else { "" },
                }
            })
            .collect()
    }

    /// One to four distinct modules per nurse
    pub fn generate_training(&mut self, nurses: &[RosterNurse]) -> Vec<TrainingRecord> {
        let modules = TRAINING_MODULES.values();
        let expiry_base = ymd(2026, 12, 31);
        let rng = &mut self.rng;
        let mut records = Vec::new();

        for (idx, nurse) in nurses.iter().enumerate() {
            let amount = rng.random_range(1..=4);
            for module_index in sample_distinct(rng, modules.len(), amount) {
                let module = modules[module_index];
                let prefix: String = module.chars().take(2).collect::<String>().to_uppercase();
                records.push(TrainingRecord {
                    training_id: format!("T{}{}", idx + 1, prefix),
                    nurse_id: nurse.nurse_id.clone(),
                    date: nurse.hire_date + Duration::days(rng.random_range(300..=5500)),
                    module,
                    completed: rng.random::<f64>() > 0.07,
                    cert_expiry: expiry_base + Duration::days(rng.random_range(0..=720)),
                });
            }
        }
        info!("Generated {} training records", records.len());
        records
    }

    /// Multistate use is only drawn for licensed nurses, purpose only when used
    pub fn generate_multistate(&mut self, nurses: &[RosterNurse]) -> Vec<MultistatePractice> {
        let rng = &mut self.rng;
        nurses
            .iter()
            .map(|nurse| {
                let used = nurse.multistate_license && COIN.pick(rng);
                MultistatePractice {
                    nurse_id: nurse.nurse_id.clone(),
                    multistate_license: nurse.multistate_license,
                    used_multistate_license: used,
                    purpose: if used { MULTISTATE_PURPOSES.pick(rng) } else { "" },
                }
            })
            .collect()
    }
}

/// Indices of a random `round(len * fraction)` subset, halves to even, in sampled order
fn sample_fraction<R: Rng + ?Sized>(rng: &mut R, len: usize, fraction: f64) -> Vec<usize> {
    let amount = (len as f64 * fraction).round_ties_even() as usize;
    sample_distinct(rng, len, amount)
}

fn count<R: Rng + ?Sized>(dist: &Poisson<f64>, rng: &mut R) -> u32 {
    let draw: f64 = dist.sample(rng);
    draw as u32
}

fn distribution_error(err: impl std::fmt::Display) -> AppError {
    AppError::Configuration(format!("invalid workforce distribution: {}", err))
}

/// Generate the workforce survey tables and write them under `config.output_dir`
pub fn run_workforce(config: &WorkforceConfig) -> AppResult<RunReport> {
    config.validate()?;
    info!("Generating workforce survey data (seed={:?})", config.seed);

    let mut seeder = WorkforceSeeder::new(config.seed)?;
    let dataset = seeder.generate(config.nurses, config.supervisors);

    let mut sink = CsvSink::new(&config.output_dir)?;
    dataset.write_all(&mut sink)?;

    let manifest = RunManifest::from_sink("workforce", config.seed, None, config, &sink);
    let manifest_path = manifest.write_to(sink.output_dir())?;
    info!("All files written under {}", config.output_dir.display());

    Ok(RunReport {
        output_dir: config.output_dir.clone(),
        manifest_path,
        collections: manifest.collections,
        warnings: manifest.warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_roster_ids_and_ranges() {
        let mut seeder = WorkforceSeeder::new(Some(42)).unwrap();
        let roster = seeder.generate_roster(12);

        assert_eq!(roster[0].nurse_id, "N0001");
        assert_eq!(roster[11].nurse_id, "N0012");
        for nurse in &roster {
            assert!((21..=64).contains(&nurse.age));
            assert!((1..=41).contains(&nurse.years_licensed));
            assert!(nurse.hire_date >= ymd(2008, 1, 1));
            assert!(nurse.hire_date <= ymd(2008, 1, 1) + Duration::days(16 * 365));
        }
    }

    #[test]
    fn test_shifts_per_nurse_week() {
        let mut seeder = WorkforceSeeder::new(Some(1)).unwrap();
        let roster = seeder.generate_roster(3);
        let shifts = seeder.generate_shifts(&roster);

        let weeks = SHIFT_WEEKS.count();
        for nurse in &roster {
            let count = shifts.iter().filter(|s| s.nurse_id == nurse.nurse_id).count();
            assert!(count >= 3 * weeks && count <= 6 * weeks, "{} shifts", count);
        }
        for shift in &shifts {
            assert!(shift.shift_id.starts_with(&format!("S{}-", shift.nurse_id)));
            assert!([8, 10, 12].contains(&shift.hours));
            assert!((2..=8).contains(&shift.patients));
            assert!(shift.date >= ymd(2025, 1, 1) + Duration::weeks(40));
        }
    }

    #[test]
    fn test_feedback_and_supervisor_sample_sizes() {
        let mut seeder = WorkforceSeeder::new(Some(2)).unwrap();
        let roster = seeder.generate_roster(5);
        let shifts = seeder.generate_shifts(&roster);
        let feedback = seeder.generate_feedback(&shifts);
        let supervised = seeder.generate_supervisor_feedback(&feedback, 12);

        assert_eq!(feedback.len(), (shifts.len() as f64 * 0.6).round_ties_even() as usize);
        assert_eq!(supervised.len(), (feedback.len() as f64 * 0.45).round_ties_even() as usize);
        assert_eq!(feedback[0].feedback_id, "F1");

        let shift_ids: HashSet<_> = feedback.iter().map(|f| f.shift.shift_id.clone()).collect();
        let feedback_ids: HashSet<_> = feedback.iter().map(|f| f.feedback_id.clone()).collect();
        assert_eq!(feedback_ids.len(), feedback.len());
        for row in &supervised {
            assert!(shift_ids.contains(&row.feedback.shift.shift_id));
            let n: usize = row.supervisor_id.trim_start_matches("SUP").parse().unwrap();
            assert!((1..=12).contains(&n));
        }

        assert!(seeder.generate_supervisor_feedback(&feedback, 0).is_empty());
    }

    #[test]
    fn test_per_nurse_tables() {
        let mut seeder = WorkforceSeeder::new(Some(3)).unwrap();
        let dataset = seeder.generate(20, 12);

        assert_eq!(dataset.pay.len(), 20);
        assert_eq!(dataset.telehealth.len(), 20);
        assert_eq!(dataset.practice_multistate.len(), 20);
        assert!(dataset.health.len() <= 20 * 4);

        for row in &dataset.telehealth {
            assert_eq!(row.used_telehealth, !row.mode.is_empty());
        }
        for row in &dataset.practice_multistate {
            assert!(row.multistate_license || !row.used_multistate_license);
            assert_eq!(row.used_multistate_license, !row.purpose.is_empty());
        }
        for record in &dataset.health {
            assert_eq!(record.return_date - record.date, Duration::days(record.days_off as i64));
        }

        for nurse in &dataset.nurses {
            let modules: Vec<_> = dataset
                .training
                .iter()
                .filter(|t| t.nurse_id == nurse.nurse_id)
                .map(|t| t.module)
                .collect();
            let distinct: HashSet<_> = modules.iter().collect();
            assert!((1..=4).contains(&modules.len()));
            assert_eq!(distinct.len(), modules.len());
        }
    }

    #[test]
    fn test_training_id_prefix() {
        let mut seeder = WorkforceSeeder::new(Some(4)).unwrap();
        let roster = seeder.generate_roster(1);
        for record in seeder.generate_training(&roster) {
            let expected: String = record.module.chars().take(2).collect::<String>().to_uppercase();
            assert_eq!(record.training_id, format!("T1{}", expected));
        }
    }

    #[test]
    fn test_sample_fraction_rounds_halves_to_even() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(sample_fraction(&mut rng, 10, SUPERVISOR_FRACTION).len(), 4);
        assert_eq!(sample_fraction(&mut rng, 5, 0.5).len(), 2);
        assert_eq!(sample_fraction(&mut rng, 7, 0.5).len(), 4);
        assert_eq!(sample_fraction(&mut rng, 5, FEEDBACK_FRACTION).len(), 3);
        assert!(sample_fraction(&mut rng, 0, FEEDBACK_FRACTION).is_empty());
    }

    #[test]
    fn test_shift_counts_follow_poisson_rates() {
        let mut seeder = WorkforceSeeder::new(Some(6)).unwrap();
        let roster = seeder.generate_roster(40);
        let shifts = seeder.generate_shifts(&roster);

        let n = shifts.len() as f64;
        let admissions = shifts.iter().map(|s| f64::from(s.admissions)).sum::<f64>() / n;
        let discharges = shifts.iter().map(|s| f64::from(s.discharges)).sum::<f64>() / n;
        assert!((admissions - ADMISSIONS_PER_SHIFT).abs() < 0.1, "admissions mean {}", admissions);
        assert!((discharges - DISCHARGES_PER_SHIFT).abs() < 0.1, "discharges mean {}", discharges);
    }

    #[test]
    fn test_full_time_salary_centres_on_mean() {
        let mut seeder = WorkforceSeeder::new(Some(8)).unwrap();
        let roster = seeder.generate_roster(2000);
        let pay = seeder.generate_pay(&roster);

        let full_time: Vec<f64> = pay
            .iter()
            .filter(|p| p.full_time)
            .map(|p| p.annual_salary as f64)
            .collect();
        let mean = full_time.iter().sum::<f64>() / full_time.len() as f64;
        assert!((mean - SALARY_MEAN).abs() < 2_000.0, "salary mean {}", mean);
    }
}
