use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "client")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub niche: Option<String>,
    pub target_audience: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::analysis_config::Entity")]
    AnalysisConfig,
    #[sea_orm(has_many = "super::brief::Entity")]
    Brief,
    #[sea_orm(has_many = "super::content::Entity")]
    Content,
    #[sea_orm(has_many = "super::source::Entity")]
    Source,
}

impl Related<super::analysis_config::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AnalysisConfig.def()
    }
}

impl Related<super::brief::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Brief.def()
    }
}

impl Related<super::content::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Content.def()
    }
}

impl Related<super::source::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Source.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
