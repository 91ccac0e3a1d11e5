use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    #[sea_orm(column_type = "Double", nullable)]
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

// Relations are declared for joins only; the schema has no foreign keys.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::director::Entity",
        from = "Column::DirectorId",
        to = "super::director::Column::Id"
    )]
    Director,
    #[sea_orm(
        belongs_to = "super::genre::Entity",
        from = "Column::GenreId",
        to = "super::genre::Column::Id"
    )]
    Genre,
}

impl Related<super::director::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Director.def()
    }
}

impl Related<super::genre::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Genre.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
