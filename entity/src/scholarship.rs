use sea_orm::entity::prelude::*;

/// Scholarship listing.
///
/// List-valued fields (`requirements`, `category`, `country`, `field_of_study`,
/// `degree_level`) are JSON arrays of strings.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "scholarship")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub organization: String,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub deadline: DateTimeUtc,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub eligibility: Json,
    pub requirements: Json,
    pub application_url: String,
    pub category: Json,
    pub country: Json,
    pub field_of_study: Json,
    pub degree_level: Json,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::application::Entity")]
    Application,
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Application.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
