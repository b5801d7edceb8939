use std::sync::Arc;

use chrono::Utc;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

use quill_core::domain::{Author, Category, NewAuthor, NewPost, Post};
use quill_core::{AuthorChanges, AuthorService, DomainError, RepoError};
use quill_core::ports::{AuthorRepository, BaseRepository, PostRepository};

use crate::database::entity::{authors, posts};
use crate::database::sea_repo::{SeaAuthorRepository, SeaPostRepository};

fn author_row(id: i32, name: &str) -> authors::Model {
    authors::Model {
        id,
        name: name.to_owned(),
        phone_number: Some("1234567890".to_owned()),
        created_at: Utc::now().into(),
        updated_at: None,
    }
}

fn post_row(id: i32, category: &str) -> posts::Model {
    posts::Model {
        id,
        title: "Top 10 Secrets".to_owned(),
        content: "c".repeat(300),
        summary: None,
        category: category.to_owned(),
        created_at: Utc::now().into(),
        updated_at: None,
    }
}

#[tokio::test]
async fn test_find_author_by_name() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![author_row(3, "Mary Shelley")]])
        .into_connection();

    let repo = SeaAuthorRepository::new(db);
    let author = repo.find_by_name("Mary Shelley").await.unwrap().unwrap();

    assert_eq!(author.id(), 3);
    assert_eq!(author.phone_number(), Some("1234567890"));
}

#[tokio::test]
async fn test_insert_author_returns_stored_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![author_row(1, "Mary Shelley")]])
        .into_connection();

    let repo = SeaAuthorRepository::new(db);
    let draft = NewAuthor::new("Mary Shelley", Some("1234567890".into())).unwrap();
    let author = repo.insert(draft).await.unwrap();

    assert_eq!(author.id(), 1);
    assert_eq!(author.name(), "Mary Shelley");
}

#[tokio::test]
async fn test_find_all_authors_in_id_order() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            author_row(1, "Mary Shelley"),
            author_row(2, "Percy Shelley"),
        ]])
        .into_connection();

    let repo = SeaAuthorRepository::new(db);
    let all = BaseRepository::<Author, i32>::find_all(&repo).await.unwrap();
    assert_eq!(all.iter().map(Author::id).collect::<Vec<_>>(), vec![1, 2]);

    let log = format!("{:?}", repo.db.into_transaction_log());
    assert!(log.contains(r#"ORDER BY \"authors\".\"id\" ASC"#), "{log}");
}

#[tokio::test]
async fn test_update_author_returns_stored_row() {
    let mut row = author_row(3, "Mary Shelley");
    row.phone_number = Some("0987654321".to_owned());
    row.updated_at = Some(Utc::now().into());

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row]])
        .into_connection();

    let repo = SeaAuthorRepository::new(db);
    let mut author = Author::try_from(author_row(3, "Mary Shelley")).unwrap();
    author.set_phone_number(Some("0987654321".into())).unwrap();
    author.touch();

    let updated = repo.update(author).await.unwrap();
    assert_eq!(updated.id(), 3);
    assert_eq!(updated.phone_number(), Some("0987654321"));
    assert!(updated.updated_at().is_some());
}

#[tokio::test]
async fn test_update_missing_author_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<authors::Model>::new()])
        .into_connection();

    let repo = SeaAuthorRepository::new(db);
    let author = Author::try_from(author_row(9, "Mary Shelley")).unwrap();

    assert!(matches!(repo.update(author).await, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_author_deleted_before_update_is_not_found() {
    // The read still sees the row; the write finds it gone.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![author_row(9, "Mary Shelley")], Vec::new()])
        .into_connection();

    let service = AuthorService::new(Arc::new(SeaAuthorRepository::new(db)));
    let changes = AuthorChanges {
        phone_number: Some(None),
        ..Default::default()
    };

    assert!(matches!(
        service.update(9, changes).await,
        Err(DomainError::NotFound {
            entity_type: "Author",
            id: 9
        })
    ));
}

#[tokio::test]
async fn test_missing_table_is_reported_as_unavailable() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
            "relation \"authors\" does not exist".to_owned(),
        ))])
        .into_connection();

    let repo = SeaAuthorRepository::new(db);
    let err = repo.find_by_name("Mary Shelley").await.unwrap_err();

    assert!(matches!(err, RepoError::Unavailable(_)));
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_row(5, "Non-Fiction")]])
        .into_connection();

    let repo = SeaPostRepository::new(db);
    let post: Option<Post> = repo.find_by_id(5).await.unwrap();

    let post = post.unwrap();
    assert_eq!(post.id(), 5);
    assert_eq!(post.category(), Category::NonFiction);
}

#[tokio::test]
async fn test_unknown_stored_category_is_an_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_row(5, "fiction")]])
        .into_connection();

    let repo = SeaPostRepository::new(db);
    let result: Result<Option<Post>, RepoError> = repo.find_by_id(5).await;

    assert!(matches!(result, Err(RepoError::Query(_))));
}

#[tokio::test]
async fn test_insert_and_filter_posts() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![
            vec![post_row(1, "Fiction")],
            vec![post_row(1, "Fiction"), post_row(4, "Fiction")],
        ])
        .into_connection();

    let repo = SeaPostRepository::new(db);
    let draft = NewPost::new("Top 10 Secrets", "c".repeat(300), None, "Fiction").unwrap();
    let post = repo.insert(draft).await.unwrap();
    assert_eq!(post.id(), 1);

    let fiction = repo.find_by_category(Category::Fiction).await.unwrap();
    assert_eq!(fiction.len(), 2);
}

#[tokio::test]
async fn test_delete_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = SeaPostRepository::new(db);
    let result = BaseRepository::<Post, i32>::delete(&repo, 9).await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}
