use serde::{Deserialize, Serialize};

use super::timestamp::SimWeek;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ChallengeKind {
    ParliamentaryQuestion,
    MediaCampaign,
    LegalChallenge,
    PublicProtest,
    CoalitionPressure,
}

string_enum!(ChallengeKind {
    ParliamentaryQuestion => "parliamentary_question",
    MediaCampaign => "media_campaign",
    LegalChallenge => "legal_challenge",
    PublicProtest => "public_protest",
    CoalitionPressure => "coalition_pressure",
});

impl ChallengeKind {
    pub fn describe(self, policy_name: &str) -> String {
        match self {
            ChallengeKind::ParliamentaryQuestion => {
                format!("Opposition tables urgent questions in parliament over {policy_name}")
            }
            ChallengeKind::MediaCampaign => {
                format!("Hostile media campaign targets the rollout of {policy_name}")
            }
            ChallengeKind::LegalChallenge => {
                format!("Court challenge filed against {policy_name}")
            }
            ChallengeKind::PublicProtest => {
                format!("Street protests erupt against {policy_name}")
            }
            ChallengeKind::CoalitionPressure => {
                format!("Coalition partners demand concessions on {policy_name}")
            }
        }
    }
}

/// An opposition action recorded against an in-flight policy.
///
/// Immutable once raised. Resolution happens outside the scheduler, so
/// `resolved` is always `false` when the scheduler creates one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Challenge {
    pub id: u64,
    pub kind: ChallengeKind,
    /// 1–3.
    pub severity: u8,
    pub description: String,
    pub raised_at: SimWeek,
    pub resolved: bool,
}
