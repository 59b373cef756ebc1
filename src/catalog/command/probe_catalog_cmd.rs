use async_trait::async_trait;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) const PROBE_MESSAGE: &str = "Check console logs";

pub(crate) struct ProbeCatalogCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ProbeCatalogCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct ProbeCatalogCommandRequest {}

#[derive(Debug)]
pub(crate) struct ProbeCatalogCommandResponse {
    pub message: String,
    pub found: usize,
}

#[async_trait]
impl Command<ProbeCatalogCommandRequest, ProbeCatalogCommandResponse> for ProbeCatalogCommand {
    async fn execute(&self, _req: ProbeCatalogCommandRequest) -> Result<ProbeCatalogCommandResponse, CommandError> {
        let books = self.catalog_service.probe().await;
        Ok(ProbeCatalogCommandResponse { message: PROBE_MESSAGE.to_string(), found: books.len() })
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use crate::books::dto::BookDto;
    use crate::catalog::command::probe_catalog_cmd::{ProbeCatalogCommand, ProbeCatalogCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::core::command::Command;

    struct FixedCatalogService;

    #[async_trait]
    impl CatalogService for FixedCatalogService {
        async fn search_books(&self, _title: &str) -> Vec<BookDto> {
            vec![]
        }

        async fn probe(&self) -> Vec<BookDto> {
            vec![BookDto::default(), BookDto::default()]
        }
    }

    #[tokio::test]
    async fn test_should_run_probe() {
        let cmd = ProbeCatalogCommand::new(Box::new(FixedCatalogService));
        let res = cmd.execute(ProbeCatalogCommandRequest {}).await.expect("should probe catalog");
        assert_eq!("Check console logs", res.message);
        assert_eq!(2, res.found);
    }
}
