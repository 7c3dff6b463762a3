pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, AuthorInfo};
pub use repository::{ArticleReadRepository, ArticleWriteRepository, BulkDeleteReport, FailedDelete};
pub use value_objects::{ArticleId, ArticleTitle, AuthorId, Tags};
