//! Political admission preconditions.

use crate::model::{PoliticalSnapshot, PolicyTemplate};

#[derive(Debug, Clone, PartialEq)]
pub struct RequirementCheck {
    pub allowed: bool,
    pub unmet_reasons: Vec<String>,
}

pub fn check(template: &PolicyTemplate, snapshot: &PoliticalSnapshot) -> RequirementCheck {
    let Some(requirements) = template.requirements else {
        return RequirementCheck {
            allowed: true,
            unmet_reasons: Vec::new(),
        };
    };

    let mut unmet_reasons = Vec::new();
    if snapshot.approval < requirements.approval {
        unmet_reasons.push(format!(
            "approval {:.1} is below the required {:.1}",
            snapshot.approval, requirements.approval
        ));
    }
    let coalition_support = snapshot.coalition_support();
    if coalition_support < requirements.coalition_support {
        unmet_reasons.push(format!(
            "coalition support {:.1} is below the required {:.1}",
            coalition_support, requirements.coalition_support
        ));
    }

    RequirementCheck {
        allowed: unmet_reasons.is_empty(),
        unmet_reasons,
    }
}
