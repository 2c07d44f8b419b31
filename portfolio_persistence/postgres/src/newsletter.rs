use bb8_postgres::tokio_postgres::{self, types::ToSql, Row};
use portfolio_di::Build;
use portfolio_models::{
    email_address::EmailAddress,
    newsletter::{NewsletterSubscription, NewsletterSubscriptionFilter},
};
use portfolio_persistence_contracts::newsletter::{NewsletterRepoError, NewsletterRepository};
use portfolio_utils::trace_instrument;

use crate::{arg_indices, columns, ColumnCounter, PostgresTransaction};

#[derive(Debug, Clone, Copy, Default, Build)]
pub struct PostgresNewsletterRepository;

columns!(subscription as "n": "email", "subscribed_at", "is_active");

impl NewsletterRepository<PostgresTransaction> for PostgresNewsletterRepository {
    #[trace_instrument(skip(self, txn))]
    async fn list(
        &self,
        txn: &mut PostgresTransaction,
        filter: NewsletterSubscriptionFilter,
    ) -> anyhow::Result<Vec<NewsletterSubscription>> {
        let mut query =
            format!("select {SUBSCRIPTION_COLS} from newsletter_subscriptions n where true");
        let mut params: Vec<&(dyn ToSql + Sync)> = Vec::new();
        if let Some(is_active) = &filter.is_active {
            params.push(is_active);
            query.push_str(&format!(" and n.is_active=${}", params.len()));
        }
        query.push_str(" order by n.subscribed_at desc");

        txn.txn()
            .query(&query, &params)
            .await
            .map_err(Into::into)
            .and_then(|rows| {
                rows.into_iter()
                    .map(|row| decode_subscription(&row, &mut Default::default()))
                    .collect()
            })
    }

    #[trace_instrument(skip(self, txn))]
    async fn get(
        &self,
        txn: &mut PostgresTransaction,
        email: &EmailAddress,
    ) -> anyhow::Result<Option<NewsletterSubscription>> {
        txn.txn()
            .query_opt(
                &format!(
                    "select {SUBSCRIPTION_COLS} from newsletter_subscriptions n where \
                     lower(email)=lower($1)"
                ),
                &[&email.as_str()],
            )
            .await
            .map_err(Into::into)
            .and_then(|row| {
                row.map(|row| decode_subscription(&row, &mut Default::default()))
                    .transpose()
            })
    }

    #[trace_instrument(skip(self, txn))]
    async fn create(
        &self,
        txn: &mut PostgresTransaction,
        subscription: &NewsletterSubscription,
    ) -> Result<(), NewsletterRepoError> {
        txn.txn()
            .execute(
                &format!(
                    "insert into newsletter_subscriptions ({SUBSCRIPTION_COL_NAMES}) values ({})",
                    arg_indices(1..=SUBSCRIPTION_CNT)
                ),
                &[
                    &subscription.email.as_str(),
                    &subscription.subscribed_at,
                    &subscription.is_active,
                ],
            )
            .await
            .map_err(map_newsletter_repo_error)?;

        Ok(())
    }

    #[trace_instrument(skip(self, txn))]
    async fn update_active(
        &self,
        txn: &mut PostgresTransaction,
        email: &EmailAddress,
        is_active: bool,
    ) -> anyhow::Result<bool> {
        txn.txn()
            .execute(
                "update newsletter_subscriptions set is_active=$2 where lower(email)=lower($1)",
                &[&email.as_str(), &is_active],
            )
            .await
            .map(|x| x != 0)
            .map_err(Into::into)
    }
}

fn decode_subscription(row: &Row, cnt: &mut ColumnCounter) -> anyhow::Result<NewsletterSubscription> {
    Ok(NewsletterSubscription {
        email: row.get::<_, String>(cnt.idx()).parse()?,
        subscribed_at: row.get(cnt.idx()),
        is_active: row.get(cnt.idx()),
    })
}

fn map_newsletter_repo_error(err: tokio_postgres::Error) -> NewsletterRepoError {
    match err.as_db_error() {
        Some(err)
            if matches!(
                err.constraint(),
                Some("newsletter_subscriptions_pkey" | "newsletter_subscriptions_email_idx")
            ) =>
        {
            NewsletterRepoError::Conflict
        }
        _ => NewsletterRepoError::Other(err.into()),
    }
}
