pub use super::analysis_config::Entity as AnalysisConfig;
pub use super::brief::Entity as Brief;
pub use super::client::Entity as Client;
pub use super::content::Entity as Content;
pub use super::source::Entity as Source;
