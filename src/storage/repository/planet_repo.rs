use crate::storage::dto::{NewPlanet, PlanetSummary};
use crate::storage::entity::planet::{self, ActiveModel as PlanetActiveModel, Entity as Planet};
use crate::storage::error::StoreError;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

pub struct PlanetRepository;

impl PlanetRepository {
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<PlanetSummary>, StoreError> {
        let rows = Planet::find()
            .order_by_asc(planet::Column::Id)
            .all(db)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<PlanetSummary, StoreError> {
        Planet::find_by_id(id)
            .one(db)
            .await?
            .map(Into::into)
            .ok_or(StoreError::NotFound("Planet"))
    }

    pub async fn create(db: &DatabaseConnection, new: NewPlanet) -> Result<PlanetSummary, StoreError> {
        let active_model = PlanetActiveModel {
            name: Set(new.name),
            distance_from_earth: Set(new.distance_from_earth),
            nearest_star: Set(new.nearest_star),
            ..Default::default()
        };
        let model = active_model.insert(db).await?;
        Ok(model.into())
    }

    /// Not routed over HTTP; the schema cascades the planet's missions.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), StoreError> {
        let res = Planet::delete_by_id(id).exec(db).await?;
        if res.rows_affected == 0 {
            return Err(StoreError::NotFound("Planet"));
        }
        Ok(())
    }
}
