use serde::{Deserialize, Serialize};

/// Row of the `football` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Team {
    pub id: i64,
    pub team_name: String,
    pub stadium: String,
    pub next_game: Option<String>,
    pub team_url: String,
}

/// Response wrapper for the list endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct TeamListResponse {
    #[serde(rename = "totNumItems")]
    pub tot_num_items: i64,
    pub data: Vec<Team>,
}

/// LIMIT/OFFSET window applied to the list query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub num_items: i64,
    pub offset: i64,
}

impl Pagination {
    /// Builds a window only when both values are present and valid.
    ///
    /// `num_items` must be a positive integer and `offset` a non-negative one.
    /// Anything else means the caller gets the full result set.
    pub fn from_params(num_items: Option<&str>, offset: Option<&str>) -> Option<Self> {
        let num_items = num_items?.trim().parse::<i64>().ok().filter(|n| *n > 0)?;
        let offset = offset?.trim().parse::<i64>().ok().filter(|o| *o >= 0)?;

        Some(Self { num_items, offset })
    }
}
