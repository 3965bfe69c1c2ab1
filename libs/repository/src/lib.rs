use category::CategoryRepository;
use comment::CommentRepository;
use document::DocumentRepository;
use gallery::GalleryRepository;
use member::MemberRepository;
use migration::Migrator;
use migration::MigratorTrait;
use post::PostRepository;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

mod active_models;
pub mod category;
pub mod comment;
pub mod document;
pub mod gallery;
pub mod member;
pub mod post;
pub mod session;

#[derive(Clone, Debug)]
pub struct Repository {
    pub member: MemberRepository,
    pub document: DocumentRepository,
    pub gallery: GalleryRepository,
    pub category: CategoryRepository,
    pub post: PostRepository,
    pub comment: CommentRepository,
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error(
        "in sea-orm crate from unsuccessful database operations: {}: {}",
        message,
        source
    )]
    InSeaOrmDbErr {
        message: String,
        source: sea_orm::DbErr,
    },
}

type Response<T> = Result<T, RepositoryError>;

pub trait IntoResponse<T> {
    fn into_response(self, message: &str) -> Response<T>;
}

impl<T> IntoResponse<T> for Result<T, sea_orm::DbErr> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| RepositoryError::InSeaOrmDbErr {
            message: message.to_string(),
            source: e,
        })
    }
}

pub async fn init_repository(db_url: &str) -> Response<Repository> {
    let db = init_db(db_url).await?;

    let repository = Repository {
        member: MemberRepository::new(db.clone()),
        document: DocumentRepository::new(db.clone()),
        gallery: GalleryRepository::new(db.clone()),
        category: CategoryRepository::new(db.clone()),
        post: PostRepository::new(db.clone()),
        comment: CommentRepository::new(db.clone()),
    };

    Ok(repository)
}

/// Escapes LIKE metacharacters so a search term matches literally.
/// Patterns built from it must carry `ESCAPE '\'`.
pub(crate) fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}

async fn init_db(db_url: &str) -> Response<DatabaseConnection> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(5)
        .min_connections(1)
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt)
        .await
        .into_response("in database connect")?;

    Migrator::up(&db, None)
        .await
        .into_response("in migrator up")?;

    Ok(db)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_escape_like_keeps_wildcards_literal() {
        // Arrange / Act / Assert
        assert_eq!(escape_like("100%"), r"100\%");
        assert_eq!(escape_like("a_b"), r"a\_b");
        assert_eq!(escape_like(r"a\b"), r"a\\b");
    }

    #[test]
    fn test_escape_like_leaves_plain_terms_alone() {
        assert_eq!(escape_like("sunday service"), "sunday service");
    }
}
