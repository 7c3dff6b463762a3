pub mod articles;

pub use articles::{ArticleDto, AuthorDto, BulkDeleteReportDto, FailedDeleteDto};
