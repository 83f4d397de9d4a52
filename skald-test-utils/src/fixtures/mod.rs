pub mod auth;
pub mod data;
pub mod llm;
pub mod scraper;

use crate::TestContext;

impl TestContext {
    /// Database fixture helpers for inserting mock rows.
    pub fn data(&self) -> data::DataFixtures {
        data::DataFixtures { db: &self.db }
    }

    /// Mock endpoint helpers for the scraper service.
    pub fn scraper(&mut self) -> scraper::ScraperFixtures {
        scraper::ScraperFixtures { context: self }
    }

    /// Mock endpoint helpers for the LLM completion API.
    pub fn llm(&mut self) -> llm::LlmFixtures {
        llm::LlmFixtures { context: self }
    }
}
