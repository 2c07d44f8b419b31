use bb8_postgres::tokio_postgres::Row;
use portfolio_di::Build;
use portfolio_models::skill::{Skill, SkillProficiency};
use portfolio_persistence_contracts::skill::SkillRepository;
use portfolio_utils::trace_instrument;
use uuid::Uuid;

use crate::{arg_indices, columns, ColumnCounter, PostgresTransaction};

#[derive(Debug, Clone, Copy, Default, Build)]
pub struct PostgresSkillRepository;

columns!(skill as "s": "id", "name", "category", "proficiency", "icon_class");

impl SkillRepository<PostgresTransaction> for PostgresSkillRepository {
    #[trace_instrument(skip(self, txn))]
    async fn list(&self, txn: &mut PostgresTransaction) -> anyhow::Result<Vec<Skill>> {
        txn.txn()
            .query(
                &format!(
                    "select {SKILL_COLS} from skills s order by s.category asc, s.proficiency \
                     desc, s.name asc"
                ),
                &[],
            )
            .await
            .map_err(Into::into)
            .and_then(|rows| {
                rows.into_iter()
                    .map(|row| decode_skill(&row, &mut Default::default()))
                    .collect()
            })
    }

    #[trace_instrument(skip(self, txn))]
    async fn create(&self, txn: &mut PostgresTransaction, skill: &Skill) -> anyhow::Result<()> {
        txn.txn()
            .execute(
                &format!(
                    "insert into skills ({SKILL_COL_NAMES}) values ({})",
                    arg_indices(1..=SKILL_CNT)
                ),
                &[
                    &*skill.id,
                    &skill.name.as_str(),
                    &skill.category.as_str(),
                    &i16::from(*skill.proficiency),
                    &skill.icon_class.as_str(),
                ],
            )
            .await?;

        Ok(())
    }
}

fn decode_skill(row: &Row, cnt: &mut ColumnCounter) -> anyhow::Result<Skill> {
    Ok(Skill {
        id: row.get::<_, Uuid>(cnt.idx()).into(),
        name: row.get::<_, String>(cnt.idx()).try_into()?,
        category: row.get::<_, String>(cnt.idx()).parse()?,
        proficiency: SkillProficiency::try_new(row.get::<_, i16>(cnt.idx()).try_into()?)?,
        icon_class: row.get::<_, String>(cnt.idx()).try_into()?,
    })
}
