//! Author repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, SqlErr, Statement,
};

use super::entities::author::{self, ActiveModel, Entity as AuthorEntity};
use common::{AppError, AppResult};
use domain::Author;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Author repository trait for dependency injection.
///
/// Authors are keyed by email.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Find author by email
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Author>>;

    /// Check whether an author is registered under this email
    async fn exists_by_id(&self, id: &str) -> AppResult<bool>;

    /// Insert a new author. Fails with AlreadyExists if the email is taken.
    async fn insert(&self, author: Author) -> AppResult<Author>;

    /// Overwrite an existing author. Fails with NotFound if the row is gone.
    async fn update(&self, author: Author) -> AppResult<Author>;

    /// Permanently delete an author
    async fn delete_by_id(&self, id: &str) -> AppResult<()>;

    /// List every author ordered by email
    async fn find_all(&self) -> AppResult<Vec<Author>>;

    /// Check connectivity of the backing store
    async fn ping(&self) -> AppResult<()>;
}

/// SeaORM-backed implementation of AuthorRepository
pub struct AuthorStore {
    db: DatabaseConnection,
}

impl AuthorStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthorRepository for AuthorStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Author>> {
        let result = AuthorEntity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Author::from))
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    async fn insert(&self, author: Author) -> AppResult<Author> {
        let model = AuthorEntity::insert(ActiveModel::from(author))
            .exec_with_returning(&self.db)
            .await
            .map_err(insert_error)?;

        Ok(Author::from(model))
    }

    async fn update(&self, author: Author) -> AppResult<Author> {
        let model = AuthorEntity::update(ActiveModel::from(author))
            .exec(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => AppError::not_found("Author"),
                other => AppError::from(other),
            })?;

        Ok(Author::from(model))
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        let result = AuthorEntity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("Author"));
        }

        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Author>> {
        let models = AuthorEntity::find()
            .order_by_asc(author::Column::Email)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Author::from).collect())
    }

    async fn ping(&self) -> AppResult<()> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await
            .map_err(AppError::from)?;
        Ok(())
    }
}

/// Map a primary-key collision on insert to AlreadyExists.
fn insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::already_exists("Author"),
        _ => AppError::from(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, RuntimeErr};

    fn model(email: &str, is_authorised: bool) -> author::Model {
        let now = Utc::now();
        author::Model {
            email: email.to_string(),
            name: "Jane Austen".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            is_authorised,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_find_by_id_maps_model() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model("jane@example.com", true)]])
            .into_connection();
        let store = AuthorStore::new(db);

        let author = store.find_by_id("jane@example.com").await.unwrap().unwrap();

        assert_eq!(author.email, "jane@example.com");
        assert!(author.is_authorised);
    }

    #[tokio::test]
    async fn test_exists_by_id_false_when_no_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<author::Model>::new()])
            .into_connection();
        let store = AuthorStore::new(db);

        assert!(!store.exists_by_id("ghost@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_find_all_returns_every_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                model("a@example.com", false),
                model("b@example.com", true),
            ]])
            .into_connection();
        let store = AuthorStore::new(db);

        let authors = store.find_all().await.unwrap();

        assert_eq!(authors.len(), 2);
        assert_eq!(authors[1].email, "b@example.com");
    }

    #[tokio::test]
    async fn test_insert_is_plain_insert() {
        let stored = model("jane@example.com", false);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored.clone()]])
            .into_connection();
        let store = AuthorStore::new(db.clone());

        let saved = store.insert(Author::from(stored)).await.unwrap();

        assert_eq!(saved.email, "jane@example.com");
        assert_eq!(saved.password_hash, "$argon2id$hash");

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let sql = &log[0].statements()[0].sql;
        assert!(sql.starts_with(r#"INSERT INTO "authors""#));
        assert!(!sql.contains("ON CONFLICT"));
    }

    #[tokio::test]
    async fn test_insert_other_failure_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Query(RuntimeErr::Internal("boom".to_string()))])
            .into_connection();
        let store = AuthorStore::new(db);

        let result = store.insert(Author::from(model("jane@example.com", false))).await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_update_writes_by_primary_key() {
        let stored = model("jane@example.com", true);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored.clone()]])
            .into_connection();
        let store = AuthorStore::new(db.clone());

        let updated = store.update(Author::from(stored)).await.unwrap();

        assert!(updated.is_authorised);
        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let sql = &log[0].statements()[0].sql;
        assert!(sql.starts_with(r#"UPDATE "authors""#));
        assert!(sql.contains(r#""email" = $"#));
        assert!(!sql.contains("INSERT"));
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<author::Model>::new()])
            .into_connection();
        let store = AuthorStore::new(db);

        let result = store.update(Author::from(model("ghost@example.com", false))).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let store = AuthorStore::new(db);

        let result = store.delete_by_id("ghost@example.com").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
