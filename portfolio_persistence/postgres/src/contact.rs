use bb8_postgres::tokio_postgres::{types::ToSql, Row};
use portfolio_di::Build;
use portfolio_models::{
    contact::{ContactMessage, ContactMessageAuthor, ContactMessageFilter, ContactMessageId},
    pagination::PaginationSlice,
};
use portfolio_persistence_contracts::contact::ContactRepository;
use portfolio_utils::trace_instrument;
use uuid::Uuid;

use crate::{arg_indices, columns, ColumnCounter, PostgresTransaction};

#[derive(Debug, Clone, Copy, Default, Build)]
pub struct PostgresContactRepository;

columns!(contact_message as "c": "id", "name", "email", "phone", "message", "created_at", "is_read");

impl ContactRepository<PostgresTransaction> for PostgresContactRepository {
    #[trace_instrument(skip(self, txn))]
    async fn count(
        &self,
        txn: &mut PostgresTransaction,
        filter: &ContactMessageFilter,
    ) -> anyhow::Result<u64> {
        let mut query = "select count(*) from contact_messages c where true".to_owned();
        let mut params: Vec<&(dyn ToSql + Sync)> = Vec::new();
        make_filter(filter, &mut query, &mut params);

        txn.txn()
            .query_one(&query, &params)
            .await
            .map(|row| row.get::<_, i64>(0) as _)
            .map_err(Into::into)
    }

    #[trace_instrument(skip(self, txn))]
    async fn list(
        &self,
        txn: &mut PostgresTransaction,
        filter: &ContactMessageFilter,
        pagination: PaginationSlice,
    ) -> anyhow::Result<Vec<ContactMessage>> {
        let mut query = format!("select {CONTACT_MESSAGE_COLS} from contact_messages c where true");
        let mut params: Vec<&(dyn ToSql + Sync)> = Vec::new();
        make_filter(filter, &mut query, &mut params);
        query.push_str(&format!(
            " order by c.created_at desc limit {} offset {}",
            *pagination.limit, pagination.offset
        ));

        txn.txn()
            .query(&query, &params)
            .await
            .map_err(Into::into)
            .and_then(|rows| {
                rows.into_iter()
                    .map(|row| decode_contact_message(&row, &mut Default::default()))
                    .collect()
            })
    }

    #[trace_instrument(skip(self, txn))]
    async fn get(
        &self,
        txn: &mut PostgresTransaction,
        id: ContactMessageId,
    ) -> anyhow::Result<Option<ContactMessage>> {
        txn.txn()
            .query_opt(
                &format!("select {CONTACT_MESSAGE_COLS} from contact_messages c where id=$1"),
                &[&*id],
            )
            .await
            .map_err(Into::into)
            .and_then(|row| {
                row.map(|row| decode_contact_message(&row, &mut Default::default()))
                    .transpose()
            })
    }

    #[trace_instrument(skip(self, txn))]
    async fn create(
        &self,
        txn: &mut PostgresTransaction,
        message: &ContactMessage,
    ) -> anyhow::Result<()> {
        txn.txn()
            .execute(
                &format!(
                    "insert into contact_messages ({CONTACT_MESSAGE_COL_NAMES}) values ({})",
                    arg_indices(1..=CONTACT_MESSAGE_CNT)
                ),
                &[
                    &*message.id,
                    &message.author.name.as_str(),
                    &message.author.email.as_str(),
                    &message.author.phone.as_ref().map(|x| x.as_str()),
                    &message.content.as_str(),
                    &message.created_at,
                    &message.is_read,
                ],
            )
            .await?;

        Ok(())
    }

    #[trace_instrument(skip(self, txn))]
    async fn update_read(
        &self,
        txn: &mut PostgresTransaction,
        id: ContactMessageId,
        is_read: bool,
    ) -> anyhow::Result<bool> {
        txn.txn()
            .execute(
                "update contact_messages set is_read=$2 where id=$1",
                &[&*id, &is_read],
            )
            .await
            .map(|x| x != 0)
            .map_err(Into::into)
    }

    #[trace_instrument(skip(self, txn))]
    async fn delete(
        &self,
        txn: &mut PostgresTransaction,
        id: ContactMessageId,
    ) -> anyhow::Result<bool> {
        txn.txn()
            .execute("delete from contact_messages where id=$1", &[&*id])
            .await
            .map(|x| x != 0)
            .map_err(Into::into)
    }
}

fn make_filter<'a>(
    filter: &'a ContactMessageFilter,
    query: &mut String,
    params: &mut Vec<&'a (dyn ToSql + Sync)>,
) {
    if let Some(is_read) = &filter.is_read {
        params.push(is_read);
        query.push_str(&format!(" and c.is_read=${}", params.len()));
    }
    if let Some(search) = &filter.search {
        params.push(&**search);
        query.push_str(&format!(
            " and (strpos(lower(c.name), lower(${0}))>0 or strpos(lower(c.email), lower(${0}))>0 \
             or strpos(coalesce(c.phone, ''), ${0})>0)",
            params.len()
        ));
    }
}

fn decode_contact_message(row: &Row, cnt: &mut ColumnCounter) -> anyhow::Result<ContactMessage> {
    Ok(ContactMessage {
        id: row.get::<_, Uuid>(cnt.idx()).into(),
        author: ContactMessageAuthor {
            name: row.get::<_, String>(cnt.idx()).try_into()?,
            email: row.get::<_, String>(cnt.idx()).parse()?,
            phone: row
                .get::<_, Option<String>>(cnt.idx())
                .map(TryInto::try_into)
                .transpose()?,
        },
        content: row.get::<_, String>(cnt.idx()).try_into()?,
        created_at: row.get(cnt.idx()),
        is_read: row.get(cnt.idx()),
    })
}
