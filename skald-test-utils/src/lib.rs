pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_JWT_SECRET, TEST_OPENAI_MODEL, TEST_USER_AGENT},
        fixtures::auth::mint_token,
        test_setup_with_content_tables, test_setup_with_tables, TestBuilder, TestContext,
        TestError,
    };
}
