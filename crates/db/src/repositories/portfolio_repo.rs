//! The portfolio aggregator: a denormalized, read-only view of every
//! project together with its typography, colors, tags, and optional
//! logo, shaped for direct display.
//!
//! Related rows are eager-loaded in a bounded number of queries (one
//! per table, batched with `project_id IN (...)`), never one query per
//! relation per project.

use std::collections::HashMap;

use serde::Serialize;

use folio_core::types::DbId;

use crate::models::color::Color;
use crate::models::logo::Logo;
use crate::models::project::Project;
use crate::models::tag::Tag;
use crate::models::typography::Typography;
use crate::repositories::{ColorRepo, LogoRepo, ProjectRepo, TagRepo, TypographyRepo};
use crate::DbPool;

/// One project with all of its display relations resolved.
///
/// `logo` serializes as `null` when the project has none; the empty
/// vectors stay empty rather than being omitted.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioEntry {
    pub project: Project,
    pub typography: Vec<Typography>,
    pub colors: Vec<Color>,
    pub tags: Vec<Tag>,
    pub logo: Option<Logo>,
}

/// Read-only aggregation over the project tables.
pub struct PortfolioRepo;

impl PortfolioRepo {
    /// Load every project with its relations, ascending by project id.
    ///
    /// Exactly five queries regardless of project count: projects, then
    /// typography/colors/tags/logos batched by parent id. Child
    /// sequences are ordered ascending by their own id.
    pub async fn get_portfolio(pool: &DbPool) -> Result<Vec<PortfolioEntry>, sqlx::Error> {
        let projects = ProjectRepo::list(pool).await?;
        if projects.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<DbId> = projects.iter().map(|p| p.id).collect();

        let mut typography = bucket(TypographyRepo::list_for_projects(pool, &ids).await?, |t| {
            t.project_id
        });
        let mut colors = bucket(ColorRepo::list_for_projects(pool, &ids).await?, |c| {
            c.project_id
        });
        let mut tags = bucket(TagRepo::list_for_projects(pool, &ids).await?, |t| {
            t.project_id
        });
        let mut logos: HashMap<DbId, Logo> = LogoRepo::list_for_projects(pool, &ids)
            .await?
            .into_iter()
            .map(|l| (l.project_id, l))
            .collect();

        let entries: Vec<PortfolioEntry> = projects
            .into_iter()
            .map(|project| {
                let id = project.id;
                PortfolioEntry {
                    project,
                    typography: typography.remove(&id).unwrap_or_default(),
                    colors: colors.remove(&id).unwrap_or_default(),
                    tags: tags.remove(&id).unwrap_or_default(),
                    logo: logos.remove(&id),
                }
            })
            .collect();

        tracing::debug!(projects = entries.len(), "portfolio aggregate built");
        Ok(entries)
    }

    /// Load a single project with its relations, or `None` if the
    /// project does not exist. Same shape as [`Self::get_portfolio`].
    pub async fn get_portfolio_entry(
        pool: &DbPool,
        project_id: DbId,
    ) -> Result<Option<PortfolioEntry>, sqlx::Error> {
        let Some(project) = ProjectRepo::find_by_id(pool, project_id).await? else {
            return Ok(None);
        };

        let ids = [project.id];
        let typography = TypographyRepo::list_for_projects(pool, &ids).await?;
        let colors = ColorRepo::list_for_projects(pool, &ids).await?;
        let tags = TagRepo::list_for_projects(pool, &ids).await?;
        let logo = LogoRepo::list_for_projects(pool, &ids).await?.pop();

        Ok(Some(PortfolioEntry {
            project,
            typography,
            colors,
            tags,
            logo,
        }))
    }
}

/// Group child rows by parent id, preserving each row's query order.
fn bucket<T>(rows: Vec<T>, parent_id: impl Fn(&T) -> DbId) -> HashMap<DbId, Vec<T>> {
    let mut map: HashMap<DbId, Vec<T>> = HashMap::new();
    for row in rows {
        map.entry(parent_id(&row)).or_default().push(row);
    }
    map
}
