use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Who may see a granted kudos entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum KudosVisibility {
    #[default]
    Public,
    Private,
}

impl KudosVisibility {
    pub fn label(&self) -> &'static str {
        match self {
            KudosVisibility::Public => "Public",
            KudosVisibility::Private => "Private",
        }
    }
}

/// A recognition entry: one colleague thanking another for acting on a
/// company value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KudosEntry {
    pub id: i64,
    pub giver: String,
    pub giver_avatar: String,
    pub recipient: String,
    pub recipient_avatar: String,
    /// The company value the recognition is tied to.
    pub value: String,
    pub reason: String,
    pub date: NaiveDate,
    pub visibility: KudosVisibility,
}
