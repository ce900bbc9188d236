use std::sync::LazyLock;

use crate::questionnaires::common::{self, NONE_OF_THE_ABOVE, NO, YES, YES_NO};
use crate::rules::{Disqualifier, DisqualifyRule, SkipRule};
use crate::segment::{Field, FieldRule, Segment};
use crate::Questionnaire;

/// Erectile dysfunction treatment intake.
/// Nitrate users and patients with listed cardiovascular conditions are
/// ineligible for PDE5 inhibitors.
pub struct ErectileDysfunction;

pub const NITRATES: &str = "nitrates";
pub const NITRATES_MEDICATION: &str = "nitratesMedication";
pub const CARDIOVASCULAR: &str = "cardiovascular";
pub const HEART_CONDITIONS: &str = "heartConditions";
pub const PREVIOUS_TREATMENT: &str = "previous_treatment";
pub const PREVIOUS_ED_MEDICATION: &str = "previousEdMedication";

impl Questionnaire for ErectileDysfunction {
    fn id(&self) -> &str {
        "erectile_dysfunction"
    }

    fn name(&self) -> &str {
        "Erectile Dysfunction"
    }

    fn segments(&self) -> &[Segment] {
        static SEGMENTS: LazyLock<Vec<Segment>> = LazyLock::new(|| {
            vec![
                common::age_verification(),
                Segment::new(
                    "personal_info",
                    "Personal Information",
                    vec![
                        Field::required("firstName", "First name"),
                        Field::required("lastName", "Last name"),
                        Field::required("email", "Email address"),
                        common::date_of_birth(),
                    ],
                ),
                common::state(),
                Segment::new(
                    "symptoms",
                    "Symptoms",
                    vec![
                        Field::one_of(
                            "edFrequency",
                            "How often do you have trouble getting or keeping an erection?",
                            &["rarely", "sometimes", "often", "always"],
                        ),
                        Field::one_of(
                            "edDuration",
                            "How long has this been happening?",
                            &["less_than_3_months", "3_to_12_months", "over_a_year"],
                        ),
                    ],
                ),
                Segment::new("about_treatment", "About Treatment", vec![]),
                Segment::new(
                    NITRATES,
                    "Nitrate Medications",
                    vec![Field::one_of(
                        NITRATES_MEDICATION,
                        "Do you take any nitrate medication (e.g., nitroglycerin)?",
                        YES_NO,
                    )],
                ),
                Segment::new(
                    CARDIOVASCULAR,
                    "Heart Health",
                    vec![Field::new(
                        HEART_CONDITIONS,
                        "Have you been diagnosed with any of the following?",
                        vec![FieldRule::NonEmptySelection],
                    )],
                ),
                Segment::new(
                    PREVIOUS_TREATMENT,
                    "Previous Treatment",
                    vec![Field::one_of(
                        PREVIOUS_ED_MEDICATION,
                        "Have you taken ED medication before?",
                        YES_NO,
                    )],
                ),
                Segment::new(
                    "previous_treatment_details",
                    "Previous Treatment Details",
                    vec![
                        Field::required("previousEdMedicationName", "Which medication?"),
                        Field::one_of(
                            "previousEdMedicationEffective",
                            "Did it work for you?",
                            &["yes", "no", "somewhat"],
                        ),
                    ],
                ),
                Segment::new(
                    "medication_preference",
                    "Medication Preference",
                    vec![Field::one_of(
                        "preferredMedication",
                        "Which medication would you prefer?",
                        &["sildenafil", "tadalafil", "no_preference"],
                    )],
                ),
                common::id_upload(),
                common::consent(),
            ]
        });
        &SEGMENTS
    }

    fn disqualifiers(&self) -> &[Disqualifier] {
        static DISQUALIFIERS: LazyLock<Vec<Disqualifier>> = LazyLock::new(|| {
            vec![
                common::age_disqualifier(),
                Disqualifier::new(
                    NITRATES,
                    DisqualifyRule::equals(NITRATES_MEDICATION, YES),
                    "ED medications can cause a dangerous drop in blood pressure when combined with nitrates.",
                ),
                Disqualifier::new(
                    CARDIOVASCULAR,
                    DisqualifyRule::any_other_than(HEART_CONDITIONS, NONE_OF_THE_ABOVE),
                    "Your heart health history needs an in-person evaluation before ED treatment.",
                ),
            ]
        });
        &DISQUALIFIERS
    }

    fn skip_rules(&self) -> &[SkipRule] {
        static SKIPS: LazyLock<Vec<SkipRule>> = LazyLock::new(|| {
            vec![SkipRule::new(PREVIOUS_TREATMENT, PREVIOUS_ED_MEDICATION, NO, 1)]
        });
        &SKIPS
    }
}
