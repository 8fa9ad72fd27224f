use std::sync::Arc;

use bookshelf::graphql::{BookshelfSchema, build_schema};
use bookshelf::storage::{Catalog, MemoryCatalog, SharedCatalog};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn seeded() -> (BookshelfSchema, SharedCatalog) {
    let catalog: SharedCatalog = Arc::new(MemoryCatalog::seeded());
    (build_schema(Arc::clone(&catalog)), catalog)
}

async fn run(schema: &BookshelfSchema, query: &str) -> Value {
    let response = schema.execute(query).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    response.data.into_json().unwrap()
}

// =============================================================================
// Root Query
// =============================================================================

#[tokio::test]
async fn test_book_with_author() {
    let (schema, _) = seeded();

    let data = run(&schema, "{ book(id: 5) { name author { name } } }").await;
    assert_eq!(
        data,
        json!({
            "book": {
                "name": "The Fellowship of the Ring",
                "author": { "name": "J. R. R. Tolkien" }
            }
        })
    );
}

#[tokio::test]
async fn test_book_wire_format() {
    let (schema, _) = seeded();

    let response = schema
        .execute("{ book(id: 5) { name author { name } } }")
        .await;
    assert_eq!(
        serde_json::to_string(&response).unwrap(),
        r#"{"data":{"book":{"name":"The Fellowship of the Ring","author":{"name":"J. R. R. Tolkien"}}}}"#
    );
}

#[tokio::test]
async fn test_book_lookup_agrees_with_list() {
    let (schema, catalog) = seeded();

    for id in 0..=9 {
        let data = run(&schema, &format!("{{ book(id: {id}) {{ id name authorId }} }}")).await;
        let expected = catalog
            .books()
            .unwrap()
            .into_iter()
            .find(|b| b.id == id)
            .map(|b| json!({ "id": b.id, "name": b.name, "authorId": b.author_id }))
            .unwrap_or(Value::Null);
        assert_eq!(data["book"], expected, "id {id}");
    }
}

#[tokio::test]
async fn test_missing_id_argument_resolves_null() {
    let (schema, _) = seeded();

    let data = run(&schema, "{ book { name } author { name } }").await;
    assert_eq!(data, json!({ "book": null, "author": null }));
}

#[tokio::test]
async fn test_unknown_ids_resolve_null() {
    let (schema, _) = seeded();

    let data = run(&schema, "{ book(id: 99) { name } author(id: 99) { name } }").await;
    assert_eq!(data, json!({ "book": null, "author": null }));
}

#[tokio::test]
async fn test_books_in_insertion_order() {
    let (schema, _) = seeded();

    let data = run(&schema, "{ books { id } }").await;
    let ids: Vec<i64> = data["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[tokio::test]
async fn test_seed_names_are_verbatim() {
    let (schema, _) = seeded();

    let data = run(&schema, "{ book(id: 1) { name } authors { name } }").await;
    assert_eq!(data["book"]["name"], "Harry Potter and the Soceror's Stone ");
    assert_eq!(
        data["authors"],
        json!([
            { "name": "J. K. Rowling" },
            { "name": "J. R. R. Tolkien" },
            { "name": "Brent Weeks" }
        ])
    );
}

// =============================================================================
// Relationships
// =============================================================================

#[tokio::test]
async fn test_book_author_resolver() {
    let (schema, _) = seeded();

    let data = run(&schema, "{ book(id: 1) { id authorId author { id name } } }").await;
    assert_eq!(
        data["book"],
        json!({ "id": 1, "authorId": 1, "author": { "id": 1, "name": "J. K. Rowling" } })
    );
}

#[tokio::test]
async fn test_author_books_returns_single_first_book() {
    let (schema, _) = seeded();

    let data = run(&schema, "{ author(id: 3) { books { id name authorId } } }").await;
    assert_eq!(
        data["author"]["books"],
        json!({ "id": 7, "name": "The way of Shadows", "authorId": 3 })
    );
}

#[tokio::test]
async fn test_author_all_books_returns_every_book() {
    let (schema, _) = seeded();

    let data = run(&schema, "{ author(id: 3) { allBooks { id name } } }").await;
    assert_eq!(
        data["author"]["allBooks"],
        json!([
            { "id": 7, "name": "The way of Shadows" },
            { "id": 8, "name": "Beyond the Shadows" }
        ])
    );
}

#[tokio::test]
async fn test_book_with_unknown_author_has_null_author() {
    let (schema, _) = seeded();

    let data = run(
        &schema,
        r#"mutation { addBook(name: "Lost", authorId: 42) { id author { name } } }"#,
    )
    .await;
    assert_eq!(data["addBook"], json!({ "id": 9, "author": null }));
}

#[tokio::test]
async fn test_new_author_has_no_books() {
    let (schema, _) = seeded();

    let data = run(
        &schema,
        r#"mutation { addAuthor(name: "Nobody") { books { id } allBooks { id } } }"#,
    )
    .await;
    assert_eq!(data["addAuthor"], json!({ "books": null, "allBooks": [] }));
}

// =============================================================================
// Root Mutation
// =============================================================================

#[tokio::test]
async fn test_add_author() {
    let (schema, _) = seeded();

    let response = schema
        .execute(r#"mutation { addAuthor(name: "New Author") { id name } }"#)
        .await;
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({ "data": { "addAuthor": { "id": 4, "name": "New Author" } } })
    );
}

#[tokio::test]
async fn test_add_book_then_list() {
    let (schema, catalog) = seeded();
    let before = catalog.books().unwrap().len() as i64;

    let data = run(
        &schema,
        r#"mutation { addBook(name: "The Black Prism", authorId: 3) { id name authorId } }"#,
    )
    .await;
    assert_eq!(data["addBook"]["id"], before + 1);

    let data = run(&schema, "{ books { id name } }").await;
    let books = data["books"].as_array().unwrap();
    let matches = books
        .iter()
        .filter(|b| b["name"] == "The Black Prism")
        .count();
    assert_eq!(matches, 1);
    assert_eq!(books.len() as i64, before + 1);
}

#[tokio::test]
async fn test_add_author_then_list() {
    let (schema, _) = seeded();

    run(&schema, r#"mutation { addAuthor(name: "Brandon Sanderson") { id } }"#).await;

    let data = run(&schema, "{ authors { id name } }").await;
    let authors = data["authors"].as_array().unwrap();
    assert_eq!(authors.len(), 4);
    assert_eq!(authors[3], json!({ "id": 4, "name": "Brandon Sanderson" }));
}

#[tokio::test]
async fn test_mutations_are_not_idempotent() {
    let (schema, _) = seeded();

    let query = r#"mutation { a: addBook(name: "Twice", authorId: 1) { id } b: addBook(name: "Twice", authorId: 1) { id } }"#;
    let data = run(&schema, query).await;
    assert_eq!(data, json!({ "a": { "id": 9 }, "b": { "id": 10 } }));
}

#[tokio::test]
async fn test_mutation_with_variables() {
    let (schema, _) = seeded();

    let request = async_graphql::Request::new(
        "mutation Add($name: String!, $authorId: Int!) { addBook(name: $name, authorId: $authorId) { name author { name } } }",
    )
    .variables(async_graphql::Variables::from_json(
        json!({ "name": "The Hobbit", "authorId": 2 }),
    ));
    let response = schema.execute(request).await;

    assert!(response.errors.is_empty());
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "addBook": { "name": "The Hobbit", "author": { "name": "J. R. R. Tolkien" } } })
    );
}

// =============================================================================
// Errors
// =============================================================================

#[tokio::test]
async fn test_missing_required_argument_is_error() {
    let (schema, catalog) = seeded();

    let response = schema.execute(r#"mutation { addBook(name: "No author") { id } }"#).await;
    assert!(!response.errors.is_empty());
    assert_eq!(catalog.books().unwrap().len(), 8);
}

#[tokio::test]
async fn test_type_mismatch_is_error() {
    let (schema, _) = seeded();

    let response = schema.execute(r#"{ book(id: "five") { name } }"#).await;
    assert!(!response.errors.is_empty());
}

#[tokio::test]
async fn test_malformed_query_is_error() {
    let (schema, _) = seeded();

    let response = schema.execute("{ book(id: 1) { name ").await;
    assert!(!response.errors.is_empty());
}

// =============================================================================
// Schema surface
// =============================================================================

#[test]
fn test_sdl_field_signatures() {
    let (schema, _) = seeded();
    let sdl = schema.sdl();

    for expected in [
        "type Query",
        "type Mutation",
        "book(id: Int): Book",
        "books: [Book]",
        "author(id: Int): Author",
        "authors: [Author]",
        "addBook(name: String!, authorId: Int!): Book",
        "addAuthor(name: String!): Author",
        "authorId: Int!",
        "author: Author",
        "books: Book",
        "allBooks: [Book!]!",
        "This represents a book written by an author",
        "This represents an author of a book",
    ] {
        assert!(sdl.contains(expected), "missing `{expected}` in:\n{sdl}");
    }
}
