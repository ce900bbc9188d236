use intake_core::models::envelope::ApiEnvelope;
use intake_core::models::submission::IntakeSubmission;
use intake_core::models::tracking::AbandonmentEvent;

use crate::error::ClientError;

/// The external endpoints a questionnaire session talks to.
pub trait IntakeApi {
    /// Create the patient record. A transport failure or non-2xx status is an
    /// `Err`; a well-formed `{ success: false }` reply is returned as-is.
    fn save_patient(&self, submission: &IntakeSubmission) -> Result<ApiEnvelope, ClientError>;

    /// Send one abandonment analytics event.
    fn track(&self, event: &AbandonmentEvent) -> Result<(), ClientError>;
}

impl<T: IntakeApi + ?Sized> IntakeApi for &T {
    fn save_patient(&self, submission: &IntakeSubmission) -> Result<ApiEnvelope, ClientError> {
        (**self).save_patient(submission)
    }

    fn track(&self, event: &AbandonmentEvent) -> Result<(), ClientError> {
        (**self).track(event)
    }
}
