//! Segments and sentinels shared by every questionnaire.

use crate::rules::{Disqualifier, DisqualifyRule};
use crate::segment::{Field, FieldRule, Segment};

pub const YES: &str = "yes";
pub const NO: &str = "no";
pub const YES_NO: &[&str] = &[YES, NO];

/// Safe option of every contraindication checklist.
pub const NONE_OF_THE_ABOVE: &str = "None of the above";

pub const AGE_VERIFICATION: &str = "age_verification";
pub const AGE_CONFIRMATION: &str = "ageConfirmation";
pub const DATE_OF_BIRTH: &str = "dateOfBirth";
pub const ID_PHOTO_URL: &str = "idPhotoUrl";
pub const CONSENT: &str = "consent";

/// Minimum patient age in whole years.
pub const ADULT_AGE: u8 = 18;

pub fn age_verification() -> Segment {
    Segment::new(
        AGE_VERIFICATION,
        "Age Verification",
        vec![Field::one_of(
            AGE_CONFIRMATION,
            "Are you 18 years of age or older?",
            YES_NO,
        )],
    )
}

/// Anything but an explicit "yes" on the age question ends the wizard.
pub fn age_disqualifier() -> Disqualifier {
    Disqualifier::new(
        AGE_VERIFICATION,
        DisqualifyRule::unless(AGE_CONFIRMATION, YES),
        "You must be 18 or older to use this service.",
    )
}

pub fn date_of_birth() -> Field {
    Field::new(
        DATE_OF_BIRTH,
        "Date of birth",
        vec![FieldRule::Date, FieldRule::MinimumAge(ADULT_AGE)],
    )
}

pub fn state() -> Segment {
    Segment::new(
        "state",
        "State of Residence",
        vec![Field::required("state", "Which state do you live in?")],
    )
}

pub fn id_upload() -> Segment {
    Segment::new(
        "id_upload",
        "Photo ID",
        vec![Field::new(
            ID_PHOTO_URL,
            "Upload a government-issued photo ID",
            vec![FieldRule::Upload],
        )],
    )
}

pub fn consent() -> Segment {
    Segment::new(
        "consent",
        "Review & Consent",
        vec![Field::new(
            CONSENT,
            "I confirm my answers are accurate and consent to telehealth treatment",
            vec![FieldRule::Accepted],
        )],
    )
}
