pub use sea_orm_migration::prelude::*;

mod m20260801_000001_client;
mod m20260801_000002_source;
mod m20260801_000003_content;
mod m20260801_000004_brief;
mod m20260801_000005_analysis_config;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_client::Migration),
            Box::new(m20260801_000002_source::Migration),
            Box::new(m20260801_000003_content::Migration),
            Box::new(m20260801_000004_brief::Migration),
            Box::new(m20260801_000005_analysis_config::Migration),
        ]
    }
}
