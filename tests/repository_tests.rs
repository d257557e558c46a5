//! Repository tests against an in-memory seeded database.

mod common;

use bookbase_server::models::{
    author::AuthorChanges,
    book::{BookChanges, NewBook},
    enums::Genre,
};
use bookbase_server::repository::Repository;

async fn repository() -> Repository {
    Repository::new(common::setup_pool().await)
}

#[tokio::test]
async fn list_returns_seeded_catalog() {
    let repo = repository().await;

    let authors = repo.authors.list().await.unwrap();
    assert_eq!(authors.len(), 9);

    let books = repo.books.list().await.unwrap();
    assert_eq!(books.len(), 15);
    // Joined rows carry the author's names.
    assert_eq!(books[0].title, "The Hobbit");
    assert_eq!(books[0].last_name, "Tolkien");
}

#[tokio::test]
async fn insert_author_returns_generated_id() {
    let repo = repository().await;

    let id = repo.authors.insert("William", "Shakespeare").await.unwrap();
    assert_eq!(id, 10);

    let author = repo.authors.get(id).await.unwrap().unwrap();
    assert_eq!(author.first_name, "William");
    assert_eq!(author.last_name, "Shakespeare");
}

#[tokio::test]
async fn update_reports_rows_affected() {
    let repo = repository().await;

    let changes = AuthorChanges {
        first_name: Some("Neil Richard".to_string()),
        ..Default::default()
    };
    assert_eq!(repo.authors.update(3, &changes).await.unwrap(), 1);
    assert_eq!(repo.authors.update(9999, &changes).await.unwrap(), 0);

    let author = repo.authors.get(3).await.unwrap().unwrap();
    assert_eq!(author.first_name, "Neil Richard");
    assert_eq!(author.last_name, "Gaiman");
}

#[tokio::test]
async fn delete_author_cascades_to_books() {
    let repo = repository().await;

    // Author 3 wrote books 3 and 8.
    assert_eq!(repo.authors.delete(3).await.unwrap(), 1);

    assert!(repo.books.get(3).await.unwrap().is_none());
    assert!(repo.books.get(8).await.unwrap().is_none());
    assert_eq!(repo.books.list().await.unwrap().len(), 13);
}

#[tokio::test]
async fn delete_missing_author_affects_no_rows() {
    let repo = repository().await;
    assert_eq!(repo.authors.delete(9999).await.unwrap(), 0);
}

#[tokio::test]
async fn find_by_name_returns_lowest_id_on_duplicates() {
    let repo = repository().await;

    let duplicate = repo.authors.insert("Agatha", "Christie").await.unwrap();
    assert!(duplicate > 2);

    let found = repo.authors.find_by_name("Agatha", "Christie").await.unwrap();
    assert_eq!(found, Some(2));

    assert_eq!(
        repo.authors.find_by_name("Nobody", "Here").await.unwrap(),
        None
    );
}

#[tokio::test]
async fn exists_distinguishes_present_and_absent_rows() {
    let repo = repository().await;

    assert!(repo.authors.exists(3).await.unwrap());
    assert!(!repo.authors.exists(9999).await.unwrap());
    assert!(repo.books.exists(15).await.unwrap());
    assert!(!repo.books.exists(16).await.unwrap());
}

#[tokio::test]
async fn insert_book_links_to_its_author() {
    let repo = repository().await;

    let id = repo
        .books
        .insert(&NewBook {
            title: "The Two Towers".to_string(),
            year: 1954,
            pages: 352,
            genre: Genre::Fantasy,
            author_id: 1,
        })
        .await
        .unwrap();
    assert_eq!(id, 16);

    let book = repo.books.get(id).await.unwrap().unwrap();
    assert_eq!(book.title, "The Two Towers");
    assert_eq!(book.first_name, "J.R.R.");
    assert_eq!(book.genre, Genre::Fantasy);
}

#[tokio::test]
async fn book_update_touches_only_named_columns() {
    let repo = repository().await;

    let changes = BookChanges {
        year: Some(2000),
        pages: Some(500),
        author_id: Some(3),
        ..Default::default()
    };
    assert_eq!(repo.books.update(3, &changes).await.unwrap(), 1);

    let book = repo.books.get(3).await.unwrap().unwrap();
    assert_eq!(book.year, 2000);
    assert_eq!(book.pages, 500);
    // Fields outside the change set keep their values.
    assert_eq!(book.title, "American Gods");
    assert_eq!(book.genre, Genre::Fantasy);
}

#[tokio::test]
async fn book_update_of_missing_row_affects_nothing() {
    let repo = repository().await;

    let changes = BookChanges {
        year: Some(2000),
        author_id: Some(3),
        ..Default::default()
    };
    assert_eq!(repo.books.update(1_000_000, &changes).await.unwrap(), 0);
}
