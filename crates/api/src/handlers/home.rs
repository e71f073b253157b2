//! Handler for the home page payload.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use folio_db::repositories::portfolio_repo::PortfolioEntry;
use folio_db::repositories::PortfolioRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Home page payload: the site title and the full portfolio aggregate.
#[derive(Debug, Serialize)]
pub struct HomePage {
    pub title: String,
    pub portfolio: Vec<PortfolioEntry>,
}

/// GET /
pub async fn home(State(state): State<AppState>) -> AppResult<Json<DataResponse<HomePage>>> {
    let portfolio = PortfolioRepo::get_portfolio(&state.pool).await?;
    Ok(Json(DataResponse {
        data: HomePage {
            title: state.config.site_title.clone(),
            portfolio,
        },
    }))
}
