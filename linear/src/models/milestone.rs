use serde::{Deserialize, Serialize};
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// A project milestone as exposed by Linear. `project_id` is filled in by the
/// client when the milestone is fetched through its owning project.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMilestone {
    pub id: String,
    pub name: String,
    #[serde(with = "iso_date")]
    pub target_date: Date,
    #[serde(default)]
    pub project_id: Option<String>,
    pub description: Option<String>,
}
