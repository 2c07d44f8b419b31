use bb8_postgres::tokio_postgres::{self, types::ToSql, Row};
use chrono::{DateTime, Utc};
use portfolio_di::Build;
use portfolio_models::blog::{BlogPost, BlogPostFilter, BlogPostSlug};
use portfolio_persistence_contracts::blog::{BlogRepoError, BlogRepository};
use portfolio_utils::trace_instrument;
use uuid::Uuid;

use crate::{arg_indices, columns, decode_url, ColumnCounter, PostgresTransaction};

#[derive(Debug, Clone, Copy, Default, Build)]
pub struct PostgresBlogRepository;

columns!(blog_post as "b": "id", "title", "slug", "excerpt", "content", "featured_image_url", "published", "created_at", "updated_at");

impl BlogRepository<PostgresTransaction> for PostgresBlogRepository {
    #[trace_instrument(skip(self, txn))]
    async fn list(
        &self,
        txn: &mut PostgresTransaction,
        filter: BlogPostFilter,
        limit: Option<u64>,
    ) -> anyhow::Result<Vec<BlogPost>> {
        let mut query = format!("select {BLOG_POST_COLS} from blog_posts b where true");
        let mut params: Vec<&(dyn ToSql + Sync)> = Vec::new();
        if let Some(published) = &filter.published {
            params.push(published);
            query.push_str(&format!(" and b.published=${}", params.len()));
        }
        query.push_str(" order by b.created_at desc");
        if let Some(limit) = limit {
            query.push_str(&format!(" limit {limit}"));
        }

        txn.txn()
            .query(&query, &params)
            .await
            .map_err(Into::into)
            .and_then(|rows| {
                rows.into_iter()
                    .map(|row| decode_blog_post(&row, &mut Default::default()))
                    .collect()
            })
    }

    #[trace_instrument(skip(self, txn))]
    async fn get_by_slug(
        &self,
        txn: &mut PostgresTransaction,
        slug: &BlogPostSlug,
    ) -> anyhow::Result<Option<BlogPost>> {
        txn.txn()
            .query_opt(
                &format!("select {BLOG_POST_COLS} from blog_posts b where slug=$1"),
                &[&slug.as_str()],
            )
            .await
            .map_err(Into::into)
            .and_then(|row| {
                row.map(|row| decode_blog_post(&row, &mut Default::default()))
                    .transpose()
            })
    }

    #[trace_instrument(skip(self, txn))]
    async fn create(
        &self,
        txn: &mut PostgresTransaction,
        post: &BlogPost,
    ) -> Result<(), BlogRepoError> {
        txn.txn()
            .execute(
                &format!(
                    "insert into blog_posts ({BLOG_POST_COL_NAMES}) values ({})",
                    arg_indices(1..=BLOG_POST_CNT)
                ),
                &[
                    &*post.id,
                    &post.title.as_str(),
                    &post.slug.as_str(),
                    &post.excerpt.as_str(),
                    &post.content.as_str(),
                    &post.featured_image_url.as_ref().map(|x| x.as_str()),
                    &post.published,
                    &post.created_at,
                    &post.updated_at,
                ],
            )
            .await
            .map_err(map_blog_repo_error)?;

        Ok(())
    }

    #[trace_instrument(skip(self, txn))]
    async fn update_published(
        &self,
        txn: &mut PostgresTransaction,
        slug: &BlogPostSlug,
        published: bool,
        updated_at: DateTime<Utc>,
    ) -> anyhow::Result<bool> {
        txn.txn()
            .execute(
                "update blog_posts set published=$2, updated_at=$3 where slug=$1",
                &[&slug.as_str(), &published, &updated_at],
            )
            .await
            .map(|x| x != 0)
            .map_err(Into::into)
    }
}

fn decode_blog_post(row: &Row, cnt: &mut ColumnCounter) -> anyhow::Result<BlogPost> {
    Ok(BlogPost {
        id: row.get::<_, Uuid>(cnt.idx()).into(),
        title: row.get::<_, String>(cnt.idx()).try_into()?,
        slug: row.get::<_, String>(cnt.idx()).try_into()?,
        excerpt: row.get::<_, String>(cnt.idx()).try_into()?,
        content: row.get::<_, String>(cnt.idx()).try_into()?,
        featured_image_url: decode_url(row.get(cnt.idx()))?,
        published: row.get(cnt.idx()),
        created_at: row.get(cnt.idx()),
        updated_at: row.get(cnt.idx()),
    })
}

fn map_blog_repo_error(err: tokio_postgres::Error) -> BlogRepoError {
    match err.as_db_error() {
        Some(err) if err.constraint() == Some("blog_posts_slug_idx") => BlogRepoError::SlugConflict,
        _ => BlogRepoError::Other(err.into()),
    }
}
