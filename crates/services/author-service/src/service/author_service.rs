//! Author service - registration, approval, login and book proxying.
//!
//! Every operation is a precondition check followed by at most one mutation
//! and one downstream call. Failures are returned to the caller unchanged.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use common::{AppError, AppResult, OptionExt};
use domain::{Author, Book, LoginCredentials, Password};

use crate::clients::{BookContentClient, BookServiceClient, IdentityProvider};
use crate::repository::AuthorRepository;

/// Hash verified when the author is unknown, so a miss costs the same as a
/// wrong password.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$ZHVtbXlzYWx0MTIzNDU2$ZHVtbXloYXNoMTIzNDU2Nzg5MDEyMzQ1Njc4OTAxMjM";

/// Author service trait for dependency injection.
#[async_trait]
pub trait AuthorService: Send + Sync {
    /// Get author by email
    async fn get_author(&self, id: &str) -> AppResult<Author>;

    /// Register a new, unapproved author
    async fn register_author(&self, email: String, name: String, password: String)
        -> AppResult<Author>;

    /// List all authors
    async fn list_authors(&self) -> AppResult<Vec<Author>>;

    /// List authors still awaiting approval
    async fn list_unauthorised_authors(&self) -> AppResult<Vec<Author>>;

    /// Replace name and password of an existing author
    async fn update_author(&self, email: String, name: String, password: String)
        -> AppResult<Author>;

    /// Delete an author
    async fn delete_author(&self, id: &str) -> AppResult<()>;

    /// Approve an author to publish books
    async fn approve_author(&self, id: &str) -> AppResult<Author>;

    /// Create a book on behalf of an approved author
    async fn add_book(&self, book: Book) -> AppResult<String>;

    /// Mark a book complete once its content validates
    async fn complete_book(&self, book_id: &str) -> AppResult<String>;

    /// List an author's books
    async fn author_books(&self, id: &str) -> AppResult<Vec<Book>>;

    /// Check credentials and obtain an access token
    async fn login(&self, credentials: LoginCredentials) -> AppResult<String>;

    /// Check the backing store
    async fn health(&self) -> AppResult<()>;
}

/// Concrete implementation of AuthorService.
pub struct AuthorManager {
    repo: Arc<dyn AuthorRepository>,
    books: Arc<dyn BookServiceClient>,
    book_content: Arc<dyn BookContentClient>,
    identity: Arc<dyn IdentityProvider>,
}

impl AuthorManager {
    pub fn new(
        repo: Arc<dyn AuthorRepository>,
        books: Arc<dyn BookServiceClient>,
        book_content: Arc<dyn BookContentClient>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            repo,
            books,
            book_content,
            identity,
        }
    }
}

#[async_trait]
impl AuthorService for AuthorManager {
    async fn get_author(&self, id: &str) -> AppResult<Author> {
        let author = self.repo.find_by_id(id).await?;
        if author.is_none() {
            warn!("Author {} doesn't exist", id);
        }
        author.ok_or_not_found("Author")
    }

    async fn register_author(
        &self,
        email: String,
        name: String,
        password: String,
    ) -> AppResult<Author> {
        if self.repo.exists_by_id(&email).await? {
            warn!("Author with {} already exists", email);
            return Err(AppError::already_exists("Author"));
        }

        let password = Password::new(&password)?;
        let author = Author::new(email, name, password)?;
        let author = self.repo.insert(author).await?;

        info!("Author with {} registered successfully", author.email);
        Ok(author)
    }

    async fn list_authors(&self) -> AppResult<Vec<Author>> {
        let authors = self.repo.find_all().await?;
        info!("Listed {} authors", authors.len());
        Ok(authors)
    }

    async fn list_unauthorised_authors(&self) -> AppResult<Vec<Author>> {
        let authors: Vec<Author> = self
            .repo
            .find_all()
            .await?
            .into_iter()
            .filter(|a| !a.is_authorised)
            .collect();
        info!("Listed {} unauthorised authors", authors.len());
        Ok(authors)
    }

    async fn update_author(
        &self,
        email: String,
        name: String,
        password: String,
    ) -> AppResult<Author> {
        let Some(mut author) = self.repo.find_by_id(&email).await? else {
            warn!("Author with email {} is not found", email);
            return Err(AppError::not_found("Author"));
        };

        author.update_profile(name, Password::new(&password)?)?;
        let author = self.repo.update(author).await?;

        info!("Author with email {} updated successfully", author.email);
        Ok(author)
    }

    async fn delete_author(&self, id: &str) -> AppResult<()> {
        if !self.repo.exists_by_id(id).await? {
            warn!("Author {} doesn't exist", id);
            return Err(AppError::not_found("Author"));
        }

        self.repo.delete_by_id(id).await?;
        info!("Author {} deleted successfully", id);
        Ok(())
    }

    async fn approve_author(&self, id: &str) -> AppResult<Author> {
        let Some(mut author) = self.repo.find_by_id(id).await? else {
            warn!("Author {} doesn't exist", id);
            return Err(AppError::not_found("Author"));
        };

        author.approve();
        let author = self.repo.update(author).await?;

        info!("Author {} authorized successfully", id);
        Ok(author)
    }

    async fn add_book(&self, book: Book) -> AppResult<String> {
        let author = match self.repo.find_by_id(&book.author_id).await? {
            Some(author) if author.is_authorised => author,
            _ => {
                warn!(
                    "Author {} either doesn't exist or is not yet authorised to add books",
                    book.author_id
                );
                return Err(AppError::NotAuthorized);
            }
        };

        let book = book.with_author(&author.email, &author.name);
        let response = self.books.create_book(&book).await?;

        info!("Book {} added for author {}", book.name, author.email);
        Ok(response)
    }

    async fn complete_book(&self, book_id: &str) -> AppResult<String> {
        if !self.book_content.validate_content(book_id).await? {
            warn!("Book {} is empty or incomplete", book_id);
            return Err(AppError::BookIsEmpty(book_id.to_string()));
        }

        let response = self.books.set_complete(book_id).await?;
        info!("Book {} completed successfully", book_id);
        Ok(response)
    }

    async fn author_books(&self, id: &str) -> AppResult<Vec<Book>> {
        let books = self.books.books_by_author(id).await?;
        info!("Listed {} books for author {}", books.len(), id);
        Ok(books)
    }

    async fn login(&self, credentials: LoginCredentials) -> AppResult<String> {
        let author = self.repo.find_by_id(&credentials.email).await?;

        let stored = match &author {
            Some(author) => author.password(),
            None => Password::from_hash(DUMMY_HASH),
        };
        let password_valid = stored.verify(&credentials.password);

        if author.is_none() || !password_valid {
            warn!("Invalid credentials or author {} does not exist", credentials.email);
            return Err(AppError::InvalidCredentials);
        }

        let token = self.identity.request_token().await?;
        info!("Author {} logged in successfully", credentials.email);
        Ok(token)
    }

    async fn health(&self) -> AppResult<()> {
        self.repo.ping().await
    }
}
