use uuid::Uuid;

/// Identifies one wizard run for abandonment analytics.
///
/// Created when the wizard mounts and cleared once the submission succeeds.
/// A failed submission leaves the id in place so the retry is tracked under
/// the same session.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    session_id: Option<Uuid>,
}

impl SessionContext {
    pub fn start() -> Self {
        Self {
            session_id: Some(Uuid::new_v4()),
        }
    }

    pub fn id(&self) -> Option<Uuid> {
        self.session_id
    }

    pub fn is_active(&self) -> bool {
        self.session_id.is_some()
    }

    pub fn clear(&mut self) {
        self.session_id = None;
    }
}
