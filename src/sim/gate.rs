use crate::model::{PoliticalSnapshot, PolicyTemplate};

/// Host-defined veto on admission, checked before capacity and requirements.
///
/// Typical use is feature gating: a host that only unlocks some policy
/// categories for certain players installs a gate that rejects the rest.
pub trait AdmissionGate: Send + Sync {
    /// `Err(reason)` rejects the submission.
    fn check(&self, template: &PolicyTemplate, snapshot: &PoliticalSnapshot) -> Result<(), String>;
}

impl<F> AdmissionGate for F
where
    F: Fn(&PolicyTemplate, &PoliticalSnapshot) -> Result<(), String> + Send + Sync,
{
    fn check(&self, template: &PolicyTemplate, snapshot: &PoliticalSnapshot) -> Result<(), String> {
        self(template, snapshot)
    }
}
