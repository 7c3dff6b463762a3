// src/application/commands/articles/mod.rs
mod author;
mod create;
mod delete;
mod service;
mod update;

pub use author::AuthorInput;
pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::{DeleteAllArticlesCommand, DeleteArticleCommand};
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
