use async_trait::async_trait;
use futures::FutureExt;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite};

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::gateway::user::{UserReader, UserWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::UserPatch;
use crate::domain::entities::user::{NewUser, User};

const USER_COLUMNS: &str = "id, fio, phone, email, cardNumber, dob, gender, avatar";

#[derive(Clone)]
pub struct UserGateway {
    session: SqlxSession,
}

impl UserGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn map_user(row: SqliteRow) -> AppResult<User> {
        Ok(User {
            id: Id::new(row.try_get("id")?),
            fio: row.try_get("fio")?,
            phone: row.try_get("phone")?,
            email: row.try_get("email")?,
            card_number: row.try_get("cardNumber")?,
            dob: row.try_get("dob")?,
            gender: row.try_get("gender")?,
            avatar: row.try_get("avatar")?,
        })
    }

    fn find_user(result: Option<SqliteRow>) -> AppResult<Option<User>> {
        result.map(Self::map_user).transpose()
    }

    /// `phone` is the only unique column, so any unique violation is a phone clash.
    fn map_write_error(err: sqlx::Error) -> AppError {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => AppError::PhoneAlreadyRegistered,
            _ => AppError::DatabaseError(err),
        }
    }
}

#[async_trait]
impl UserWriter for UserGateway {
    async fn insert(&self, user: NewUser) -> AppResult<Id<User>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let result = sqlx::query(
                        r#"
                            INSERT INTO users
                                (fio, phone, email, cardNumber, dob, gender)
                            VALUES
                                (?, ?, ?, ?, ?, ?)
                            RETURNING
                                id
                        "#,
                    )
                    .bind(&user.fio)
                    .bind(&user.phone)
                    .bind(&user.email)
                    .bind(&user.card_number)
                    .bind(&user.dob)
                    .bind(&user.gender)
                    .fetch_one(tx.as_mut())
                    .await
                    .map_err(Self::map_write_error)?;
                    let id: i64 = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }

    async fn update(&self, user_id: &Id<User>, patch: UserPatch) -> AppResult<Option<User>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE users SET ");
                    {
                        let mut assignments = query.separated(", ");
                        for (field, value) in patch.changes() {
                            assignments.push(field.key());
                            assignments.push_unseparated(" = ");
                            assignments.push_bind_unseparated(value.clone());
                        }
                    }
                    query.push(" WHERE id = ");
                    query.push_bind(user_id);
                    query.push(" RETURNING ");
                    query.push(USER_COLUMNS);

                    let result = query
                        .build()
                        .fetch_optional(tx.as_mut())
                        .await
                        .map_err(Self::map_write_error)?;

                    Self::find_user(result)
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl UserReader for UserGateway {
    async fn find_by_id(&self, user_id: &Id<User>) -> AppResult<Option<User>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, fio, phone, email, cardNumber, dob, gender, avatar
                            FROM
                                users
                            WHERE id = ?
                        "#,
                    )
                    .bind(user_id)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    Self::find_user(result)
                }
                .boxed()
            })
            .await
    }

    async fn find_by_credentials(&self, fio: &str, phone: &str) -> AppResult<Option<User>> {
        self.session
            .with_tx(|tx| {
                let fio = fio.to_owned();
                let phone = phone.to_owned();
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, fio, phone, email, cardNumber, dob, gender, avatar
                            FROM
                                users
                            WHERE fio = ? AND phone = ?
                        "#,
                    )
                    .bind(&fio)
                    .bind(&phone)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    Self::find_user(result)
                }
                .boxed()
            })
            .await
    }

    async fn is_phone_taken(&self, phone: &str) -> AppResult<bool> {
        self.session
            .with_tx(|tx| {
                let phone = phone.to_owned();
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id
                            FROM
                                users
                            WHERE phone = ?
                            LIMIT 1
                        "#,
                    )
                    .bind(&phone)
                    .fetch_optional(tx.as_mut())
                    .await?;
                    Ok(result.is_some())
                }
                .boxed()
            })
            .await
    }
}
