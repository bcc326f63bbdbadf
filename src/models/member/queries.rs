use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{Column, PgPool, Postgres, QueryBuilder, Row};

use super::types::{Counter, Member, MemberStatus, MemberUpdate};
use super::MemberStore;
use crate::models::StoreError;
use crate::models::columns::{ColumnValue, MEMBER_COLUMNS, count_from_column};

/// Decode a row by translating each column back to its domain field.
/// Columns without a mapped field are ignored.
fn member_from_row(row: &PgRow) -> Result<Member, StoreError> {
    let mut member = Member::new(String::new(), String::new());
    for column in row.columns() {
        let Some(field) = MEMBER_COLUMNS.field(column.name()) else {
            continue;
        };
        let i = column.ordinal();
        match field {
            "id" => member.id = row.try_get(i)?,
            "name" => member.name = row.try_get(i)?,
            "status" => {
                let raw: String = row.try_get(i)?;
                member.status = MemberStatus::parse(&raw).unwrap_or_else(|| {
                    log::warn!("Member has unknown status '{raw}', treating as ALIVE");
                    MemberStatus::Alive
                });
            }
            f if f == Counter::Absent.field() => {
                member.absent_count = count_from_column(row.try_get(i)?);
            }
            f if f == Counter::MissedAssignment.field() => {
                member.missed_assignment_count = count_from_column(row.try_get(i)?);
            }
            _ => {}
        }
    }
    Ok(member)
}

fn counter_column(counter: Counter) -> Result<&'static str, StoreError> {
    MEMBER_COLUMNS
        .column(counter.field())
        .ok_or_else(|| StoreError::Unavailable(format!("no column mapped for field '{}'", counter.field())))
}

/// Member store backed by the `members` table.
#[derive(Clone)]
pub struct PgMemberStore {
    pool: PgPool,
}

impl PgMemberStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberStore for PgMemberStore {
    async fn list(&self) -> Result<Vec<Member>, StoreError> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY created_at, id",
            MEMBER_COLUMNS.select_list(),
            MEMBER_COLUMNS.table
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(member_from_row).collect()
    }

    async fn create(&self, name: &str) -> Result<Member, StoreError> {
        let sql = format!(
            "INSERT INTO {} (name, status, absent_count, missed_assignment_count) \
             VALUES ($1, $2, 0, 0) RETURNING {}",
            MEMBER_COLUMNS.table,
            MEMBER_COLUMNS.select_list()
        );
        let row = sqlx::query(&sql)
            .bind(name)
            .bind(MemberStatus::Alive.as_str())
            .fetch_one(&self.pool)
            .await?;
        member_from_row(&row)
    }

    async fn update(&self, id: &str, changes: &MemberUpdate) -> Result<(), StoreError> {
        if changes.is_empty() {
            return Ok(());
        }

        let mut qb = QueryBuilder::<Postgres>::new(format!("UPDATE {} SET ", MEMBER_COLUMNS.table));
        {
            let mut set = qb.separated(", ");
            for (field, value) in changes.changed_fields() {
                let column = MEMBER_COLUMNS.column(field).ok_or_else(|| {
                    StoreError::Unavailable(format!("no column mapped for field '{field}'"))
                })?;
                set.push(format!("{column} = "));
                match value {
                    ColumnValue::Text(s) => set.push_bind_unseparated(s),
                    ColumnValue::Int(n) => set.push_bind_unseparated(n),
                };
            }
        }
        qb.push(" WHERE id = ");
        qb.push_bind(id.to_string());

        let result = qb.build().execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn increment(&self, id: &str, counter: Counter) -> Result<u32, StoreError> {
        let column = counter_column(counter)?;
        let sql = format!(
            "UPDATE {table} SET {column} = {column} + 1 WHERE id = $1 RETURNING {column}",
            table = MEMBER_COLUMNS.table,
        );
        let value: Option<i32> = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        value
            .map(count_from_column)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", MEMBER_COLUMNS.table);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
