//! Team Member Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// Team member entity
///
/// Partitioned by flags into office bearers, core committee and faculty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub position_order: Option<i32>,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub is_office_bearer: bool,
    #[serde(default)]
    pub is_faculty: bool,
    /// Academic year the member served in
    pub year: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for TeamMember {
    const TABLE: &'static str = "team_members";
}

/// Roster group a member belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamGroup {
    OfficeBearer,
    CoreCommittee,
    Faculty,
}

impl TeamMember {
    pub fn group(&self) -> TeamGroup {
        if self.is_faculty {
            TeamGroup::Faculty
        } else if self.is_office_bearer {
            TeamGroup::OfficeBearer
        } else {
            TeamGroup::CoreCommittee
        }
    }

    /// First letter of the name, used for avatar placeholders
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}
