use super::DbPool;
use crate::errors::StorageError;
use diesel::SqliteConnection;
use log::error;
use quotebook_core::errors::{DatabaseError, Error, Result};
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

const WRITE_QUEUE_CAPACITY: usize = 1024;

// A job runs against the writer's connection and returns a core Result.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type ErasedJob = Job<Box<dyn Any + Send + 'static>>;
type ErasedReply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(ErasedJob, ErasedReply)>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection,
    /// inside an immediate transaction.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .map_err(|_| writer_stopped())?;

        let boxed = ret_rx.await.map_err(|_| writer_stopped())??;
        boxed.downcast::<T>().map(|v| *v).map_err(|_| {
            Error::Unexpected("Writer actor returned a value of the wrong type".to_string())
        })
    }

    /// True once the writer task has exited and no job can run.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

fn writer_stopped() -> Error {
    Error::Database(DatabaseError::Internal(
        "Database writer is not running".to_string(),
    ))
}

/// Spawns a background Tokio task that acts as the single writer to the database.
/// The actor owns one pooled connection and processes write jobs serially.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(ErasedJob, ErasedReply)>(WRITE_QUEUE_CAPACITY);

    tokio::spawn(async move {
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                // Dropping `rx` makes every pending and future `exec` fail.
                error!("Writer actor could not acquire a connection: {}", e);
                return;
            }
        };

        while let Some((job, reply_tx)) = rx.recv().await {
            let result: Result<Box<dyn Any + Send + 'static>> = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(Error::from);

            // The requester may have gone away (timeout / cancelled request).
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::r2d2::{ConnectionManager, Pool};
    use std::time::Duration;
    use tempfile::tempdir;

    fn single_connection_pool(path: &str) -> DbPool {
        Pool::builder()
            .max_size(1)
            .connection_timeout(Duration::from_millis(200))
            .build(ConnectionManager::<SqliteConnection>::new(path))
            .unwrap()
    }

    #[tokio::test]
    async fn test_writer_runs_jobs() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("writer.db");
        let pool = single_connection_pool(path.to_str().unwrap());

        let writer = spawn_writer(pool);
        let value = writer.exec(|_| Ok(41 + 1)).await.unwrap();
        assert_eq!(value, 42);
        assert!(!writer.is_closed());
    }

    #[tokio::test]
    async fn test_writer_without_connection_reports_stopped() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("writer.db");
        let pool = single_connection_pool(path.to_str().unwrap());

        // Hold the only connection so the writer cannot start.
        let _held = pool.get().unwrap();
        let writer = spawn_writer(pool.clone());

        let result = writer.exec(|_| Ok(1)).await;
        assert!(matches!(
            result,
            Err(Error::Database(DatabaseError::Internal(_)))
        ));
        assert!(writer.is_closed());
    }
}
