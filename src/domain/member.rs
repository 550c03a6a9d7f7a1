// Team member domain model
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub uuid: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub photo: String,
    pub position: String,
    pub bio: Option<String>,
    /// Ids of the projects this member worked on.
    pub project_ids: Vec<String>,
    pub joined_at: NaiveDate,
    pub skills: Vec<String>,
    pub social: SocialLinks,
}

impl Member {
    pub fn worked_on(&self, project_id: &str) -> bool {
        self.project_ids.iter().any(|id| id == project_id)
    }
}
