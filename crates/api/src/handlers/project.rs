//! Handlers for the project listing and detail pages.

use axum::extract::{Path, State};
use axum::Json;

use folio_core::error::CoreError;
use folio_db::models::project::Project;
use folio_db::repositories::portfolio_repo::PortfolioEntry;
use folio_db::repositories::{PortfolioRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /project/{project_name}
///
/// Looks the project up by its title and returns the same aggregate
/// shape the home page uses.
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(project_name): Path<String>,
) -> AppResult<Json<DataResponse<PortfolioEntry>>> {
    let project = ProjectRepo::find_by_title(&state.pool, &project_name)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "Project",
                key: project_name.clone(),
            })
        })?;

    let entry = PortfolioRepo::get_portfolio_entry(&state.pool, project.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project.id,
        }))?;

    Ok(Json(DataResponse { data: entry }))
}
