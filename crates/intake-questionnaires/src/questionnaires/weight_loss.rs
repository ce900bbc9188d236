use std::sync::LazyLock;

use crate::questionnaires::common::{self, NONE_OF_THE_ABOVE, NO, YES, YES_NO};
use crate::rules::{Disqualifier, DisqualifyRule, SkipRule};
use crate::segment::{Field, FieldRule, Segment};
use crate::Questionnaire;

/// GLP-1 weight management intake.
/// Twelve segments; prior GLP-1 users get a details page, everyone else
/// skips it.
pub struct WeightLoss;

pub const PREVIOUS_MEDICATION: &str = "previous_medication";
pub const PREVIOUS_GLP1_MEDICATION: &str = "previousGlp1Medication";

impl Questionnaire for WeightLoss {
    fn id(&self) -> &str {
        "weight_loss"
    }

    fn name(&self) -> &str {
        "GLP-1 Weight Management"
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
                        common::date_of_birth(),
                        Field::required("email", "Email address"),
                        Field::one_of("sex", "Sex assigned at birth", &["male", "female"]),
                    ],
                ),
                common::state(),
                Segment::new(
                    "body_metrics",
                    "Height & Weight",
                    vec![
                        Field::required("heightFeet", "Height (feet)"),
                        Field::required("heightInches", "Height (inches)"),
                        Field::required("currentWeight", "Current weight (lbs)"),
                        Field::required("goalWeight", "Goal weight (lbs)"),
                    ],
                ),
                Segment::new(
                    "medical_conditions",
                    "Medical History",
                    vec![Field::new(
                        "medicalConditions",
                        "Do any of the following apply to you?",
                        vec![FieldRule::NonEmptySelection],
                    )],
                ),
                Segment::new(
                    "pregnancy",
                    "Pregnancy",
                    vec![Field::one_of(
                        "pregnantOrBreastfeeding",
                        "Are you pregnant, breastfeeding, or planning to become pregnant?",
                        YES_NO,
                    )],
                ),
                Segment::new(
                    PREVIOUS_MEDICATION,
                    "Previous GLP-1 Use",
                    vec![Field::one_of(
                        PREVIOUS_GLP1_MEDICATION,
                        "Have you taken a GLP-1 medication before?",
                        YES_NO,
                    )],
                ),
                Segment::new(
                    "previous_medication_details",
                    "Previous GLP-1 Details",
                    vec![
                        Field::one_of(
                            "previousGlp1Name",
                            "Which medication?",
                            &["semaglutide", "tirzepatide", "liraglutide", "other"],
                        ),
                        Field::new("lastDoseDate", "Date of last dose", vec![FieldRule::Date]),
                    ],
                ),
                Segment::new(
                    "current_medications",
                    "Current Medications",
                    vec![Field::required(
                        "currentMedications",
                        "List any medications you currently take, or write \"none\"",
                    )],
                ),
                Segment::new(
                    "photo_upload",
                    "Full-Body Photo",
                    vec![Field::new(
                        "bodyPhotoUrl",
                        "Upload a recent full-body photo",
                        vec![FieldRule::Upload],
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
                    "medical_conditions",
                    DisqualifyRule::any_other_than("medicalConditions", NONE_OF_THE_ABOVE),
                    "Based on your medical history, GLP-1 treatment is not a safe option for you.",
                ),
                Disqualifier::new(
                    "pregnancy",
                    DisqualifyRule::equals("pregnantOrBreastfeeding", YES),
                    "GLP-1 medications are not prescribed during pregnancy or breastfeeding.",
                ),
            ]
        });
        &DISQUALIFIERS
    }

    fn skip_rules(&self) -> &[SkipRule] {
        static SKIPS: LazyLock<Vec<SkipRule>> = LazyLock::new(|| {
            vec![SkipRule::new(PREVIOUS_MEDICATION, PREVIOUS_GLP1_MEDICATION, NO, 1)]
        });
        &SKIPS
    }
}
