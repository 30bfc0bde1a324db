use crate::application::{
    app_error::{AppError, AppResult},
    interface::db::DBSession
};
use async_trait::async_trait;
use futures::future::BoxFuture;
use sqlx::{Pool, Sqlite, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct SessionInner {
    pool: Pool<Sqlite>,
    transaction: Option<Transaction<'static, Sqlite>>,
    immediate: bool,
}

/// Request-scoped unit of work. The transaction is opened on first use and
/// rolled back on drop unless committed.
#[derive(Clone)]
pub struct SqlxSession {
    inner: Arc<Mutex<SessionInner>>,
}

impl SqlxSession {
    pub fn new_lazy(pool: Pool<Sqlite>) -> Self {
        Self::with_mode(pool, false)
    }

    /// Like [`SqlxSession::new_lazy`], but opens with `BEGIN IMMEDIATE`: the
    /// write lock is held from the first statement until commit or drop.
    pub fn new_lazy_write(pool: Pool<Sqlite>) -> Self {
        Self::with_mode(pool, true)
    }

    fn with_mode(pool: Pool<Sqlite>, immediate: bool) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionInner {
                pool,
                transaction: None,
                immediate,
            })),
        }
    }

    pub async fn with_tx<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(&'a mut Transaction<'static, Sqlite>) -> BoxFuture<'a, AppResult<T>>,
    {
        let mut inner = self.inner.lock().await;
        if inner.transaction.is_none() {
            let tx = if inner.immediate {
                inner.pool.begin_with("BEGIN IMMEDIATE").await?
            } else {
                inner.pool.begin().await?
            };
            inner.transaction = Some(tx);
        }
        let tx = inner
            .transaction
            .as_mut()
            .ok_or_else(|| AppError::DatabaseError(sqlx::Error::PoolClosed))?;
        f(tx).await
    }
}

#[async_trait]
impl DBSession for SqlxSession {
    async fn commit(&self) -> AppResult<()> {
        let mut inner = self.inner.lock().await;
        if let Some(tx) = inner.transaction.take() {
            tx.commit().await?;
        }

        Ok(())
    }
}
