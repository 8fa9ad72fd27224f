use async_graphql::{Context, EmptySubscription, Object, Result, Schema, extensions::Tracing};

use crate::model::{NewAuthor, NewBook};
use crate::storage::SharedCatalog;

use super::types::*;

pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(catalog: SharedCatalog) -> BookshelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(catalog)
        .extension(Tracing)
        .finish()
}

pub(super) fn catalog<'a>(ctx: &Context<'a>) -> Result<&'a SharedCatalog> {
    ctx.data::<SharedCatalog>()
}

pub struct QueryRoot;

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
    /// a single book.
    async fn book(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Book>> {
        // An absent id matches nothing.
        let Some(id) = id else {
            return Ok(None);
        };
        Ok(catalog(ctx)?.book(id)?.map(Book::from))
    }

    /// a list of books.
    async fn books(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Book>>>> {
        let books = catalog(ctx)?.books()?;
        Ok(Some(books.into_iter().map(|b| Some(b.into())).collect()))
    }

    /// a single author.
    async fn author(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Author>> {
        let Some(id) = id else {
            return Ok(None);
        };
        Ok(catalog(ctx)?.author(id)?.map(Author::from))
    }

    /// a list of authors.
    async fn authors(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Author>>>> {
        let authors = catalog(ctx)?.authors()?;
        Ok(Some(authors.into_iter().map(|a| Some(a.into())).collect()))
    }
}

pub struct MutationRoot;

/// Root Mutation
#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: i32,
    ) -> Result<Option<Book>> {
        let book = catalog(ctx)?.add_book(NewBook::new(name, author_id))?;
        Ok(Some(book.into()))
    }

    /// Add an author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> Result<Option<Author>> {
        let author = catalog(ctx)?.add_author(NewAuthor::new(name))?;
        Ok(Some(author.into()))
    }
}
