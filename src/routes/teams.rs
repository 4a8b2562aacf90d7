use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::Uri,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use crate::db::{self, Database};
use crate::dispatch::{self, Intent};
use crate::error::ApiError;
use crate::models::{Pagination, Team, TeamListResponse};

// Query parameters for listing teams. Kept as raw strings so a bad value
// falls back to the unpaginated list instead of rejecting the request.
#[derive(Deserialize, Default)]
pub struct ListTeamsQuery {
    #[serde(default)]
    num_items: Option<String>,
    #[serde(default)]
    offset: Option<String>,
}

// GET /teams, /teams/, /teams/{*path} - Dispatch on the final path segment
pub async fn handle_get(
    State(db): State<Database>,
    uri: Uri,
    query: Result<Query<ListTeamsQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    match dispatch::classify(uri.path()) {
        Intent::List => {
            // A query string serde can't take (e.g. a repeated key) means no window
            let params = query.map(|Query(params)| params).unwrap_or_else(|rejection| {
                tracing::debug!("Ignoring query string: {}", rejection);
                ListTeamsQuery::default()
            });
            let page = Pagination::from_params(params.num_items.as_deref(), params.offset.as_deref());
            if page.is_none() && (params.num_items.is_some() || params.offset.is_some()) {
                tracing::debug!(
                    num_items = ?params.num_items,
                    offset = ?params.offset,
                    "Pagination not applied"
                );
            }

            Ok(list_teams(&db, page).await?.into_response())
        }
        Intent::FetchById(id) => Ok(get_team(&db, id).await?.into_response()),
        Intent::Unrecognized => Err(ApiError::PathNotRecognized { url: uri.to_string() }),
    }
}

// Count first so a failing count never runs the data query
async fn list_teams(
    db: &Database,
    page: Option<Pagination>,
) -> Result<Json<TeamListResponse>, ApiError> {
    let tot_num_items = db::count_teams(db.pool()).await?;
    let data = db::get_all_teams(db.pool(), page).await?;

    Ok(Json(TeamListResponse { tot_num_items, data }))
}

async fn get_team(db: &Database, id: &str) -> Result<Json<Vec<Team>>, ApiError> {
    let Ok(team_id) = id.parse::<i64>() else {
        tracing::debug!("Team id {} is out of range", id);
        return Ok(Json(Vec::new()));
    };

    let team = db::get_team_by_id(db.pool(), team_id).await?;

    Ok(Json(team.into_iter().collect()))
}
