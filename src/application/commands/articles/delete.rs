// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::BulkDeleteReportDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: String,
}

pub struct DeleteAllArticlesCommand;

impl ArticleCommandService {
    /// Removing an id that does not exist succeeds.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let Ok(id) = ArticleId::new(command.id) else {
            return Ok(());
        };
        self.write_repo.delete(&id).await?;
        tracing::info!(article_id = %id, "article deleted");
        Ok(())
    }

    pub async fn delete_all_articles(
        &self,
        _command: DeleteAllArticlesCommand,
    ) -> ApplicationResult<BulkDeleteReportDto> {
        let report = self.write_repo.delete_all().await?;
        if report.is_complete() {
            tracing::info!(deleted = report.deleted.len(), "all articles deleted");
        } else {
            tracing::warn!(
                deleted = report.deleted.len(),
                failed = report.failed.len(),
                "bulk delete finished with failures"
            );
        }
        Ok(report.into())
    }
}
