use bb8_postgres::tokio_postgres::{types::ToSql, Row};
use portfolio_di::Build;
use portfolio_models::project::{Project, ProjectFilter, ProjectId};
use portfolio_persistence_contracts::project::ProjectRepository;
use portfolio_utils::trace_instrument;
use uuid::Uuid;

use crate::{arg_indices, columns, decode_url, ColumnCounter, PostgresTransaction};

#[derive(Debug, Clone, Copy, Default, Build)]
pub struct PostgresProjectRepository;

columns!(project as "p": "id", "title", "short_description", "description", "image_url", "demo_url", "github_url", "technologies", "featured", "created_at");

impl ProjectRepository<PostgresTransaction> for PostgresProjectRepository {
    #[trace_instrument(skip(self, txn))]
    async fn list(
        &self,
        txn: &mut PostgresTransaction,
        filter: ProjectFilter,
        limit: Option<u64>,
    ) -> anyhow::Result<Vec<Project>> {
        let mut query = format!("select {PROJECT_COLS} from projects p where true");
        let mut params: Vec<&(dyn ToSql + Sync)> = Vec::new();
        if let Some(featured) = &filter.featured {
            params.push(featured);
            query.push_str(&format!(" and p.featured=${}", params.len()));
        }
        query.push_str(" order by p.featured desc, p.created_at desc");
        if let Some(limit) = limit {
            query.push_str(&format!(" limit {limit}"));
        }

        txn.txn()
            .query(&query, &params)
            .await
            .map_err(Into::into)
            .and_then(|rows| {
                rows.into_iter()
                    .map(|row| decode_project(&row, &mut Default::default()))
                    .collect()
            })
    }

    #[trace_instrument(skip(self, txn))]
    async fn create(&self, txn: &mut PostgresTransaction, project: &Project) -> anyhow::Result<()> {
        txn.txn()
            .execute(
                &format!(
                    "insert into projects ({PROJECT_COL_NAMES}) values ({})",
                    arg_indices(1..=PROJECT_CNT)
                ),
                &[
                    &*project.id,
                    &project.title.as_str(),
                    &project.short_description.as_str(),
                    &project.description.as_str(),
                    &project.image_url.as_ref().map(|x| x.as_str()),
                    &project.demo_url.as_ref().map(|x| x.as_str()),
                    &project.github_url.as_ref().map(|x| x.as_str()),
                    &project.technologies.as_slice(),
                    &project.featured,
                    &project.created_at,
                ],
            )
            .await?;

        Ok(())
    }

    #[trace_instrument(skip(self, txn))]
    async fn update_featured(
        &self,
        txn: &mut PostgresTransaction,
        id: ProjectId,
        featured: bool,
    ) -> anyhow::Result<bool> {
        txn.txn()
            .execute(
                "update projects set featured=$2 where id=$1",
                &[&*id, &featured],
            )
            .await
            .map(|x| x != 0)
            .map_err(Into::into)
    }
}

fn decode_project(row: &Row, cnt: &mut ColumnCounter) -> anyhow::Result<Project> {
    Ok(Project {
        id: row.get::<_, Uuid>(cnt.idx()).into(),
        title: row.get::<_, String>(cnt.idx()).try_into()?,
        short_description: row.get::<_, String>(cnt.idx()).try_into()?,
        description: row.get::<_, String>(cnt.idx()).try_into()?,
        image_url: decode_url(row.get(cnt.idx()))?,
        demo_url: decode_url(row.get(cnt.idx()))?,
        github_url: decode_url(row.get(cnt.idx()))?,
        technologies: row.get::<_, Vec<String>>(cnt.idx()).into_iter().collect(),
        featured: row.get(cnt.idx()),
        created_at: row.get(cnt.idx()),
    })
}
