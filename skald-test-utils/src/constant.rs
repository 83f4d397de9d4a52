//! Test configuration constants shared across the test suites.
//!
//! None of these are real credentials; they are placeholder values wired into
//! the mock scraper service, mock LLM endpoint, and the JWT validation path.

/// User agent string for test scraper client requests.
pub static TEST_USER_AGENT: &str =
    "Skald/0.1 (contact@example.com; +https://github.com/skald-app/skald)";

/// Shared secret for signing and validating test bearer tokens.
pub static TEST_JWT_SECRET: &str = "test-jwt-secret";

/// Placeholder API key for the mock LLM endpoint.
pub static TEST_OPENAI_API_KEY: &str = "sk-test";

/// Model name sent to the mock LLM endpoint.
pub static TEST_OPENAI_MODEL: &str = "gpt-test";
