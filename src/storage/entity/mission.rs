use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{require_id, require_text};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "missions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub scientist_id: i32, // -> scientists.id
    pub planet_id: i32,    // -> planets.id
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::scientist::Entity",
        from = "Column::ScientistId",
        to = "super::scientist::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade",
        fk_name = "fk_missions_scientist_id_scientists"
    )]
    Scientist,
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::PlanetId",
        to = "super::planet::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade",
        fk_name = "fk_missions_planet_id_planets"
    )]
    Planet,
}

impl Related<super::scientist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scientist.def()
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl ActiveModel {
    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.name, "name")?;
        require_id(&self.scientist_id, "scientist_id")?;
        require_id(&self.planet_id, "planet_id")?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        self.validate().map_err(DbErr::Custom)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Set;

    fn draft(name: &str, scientist_id: i32, planet_id: i32) -> ActiveModel {
        ActiveModel {
            name: Set(name.to_string()),
            scientist_id: Set(scientist_id),
            planet_id: Set(planet_id),
            ..Default::default()
        }
    }

    #[test]
    fn complete_mission_is_valid() {
        assert!(draft("Survey", 1, 2).validate().is_ok());
    }

    #[test]
    fn zero_foreign_keys_are_rejected() {
        assert!(draft("Survey", 0, 2).validate().is_err());
        assert!(draft("Survey", 1, 0).validate().is_err());
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(draft("", 1, 2).validate().is_err());
    }
}
