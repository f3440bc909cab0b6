use crate::storage::dto::{MissionDto, NewMission};
use crate::storage::entity::mission::{
    ActiveModel as MissionActiveModel, Entity as Mission, Model as MissionModel,
};
use crate::storage::entity::planet::Entity as Planet;
use crate::storage::entity::scientist::Entity as Scientist;
use crate::storage::error::StoreError;
use log::info;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};

pub struct MissionRepository;

impl MissionRepository {
    async fn expand(db: &DatabaseConnection, model: MissionModel) -> Result<MissionDto, StoreError> {
        let scientist = model.find_related(Scientist).one(db).await?;
        let planet = model.find_related(Planet).one(db).await?;
        Ok(MissionDto::new(model, scientist, planet))
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<MissionDto, StoreError> {
        let model = Mission::find_by_id(id)
            .one(db)
            .await?
            .ok_or(StoreError::NotFound("Mission"))?;
        Self::expand(db, model).await
    }

    /// A dangling scientist_id or planet_id is refused by the foreign keys.
    pub async fn create(db: &DatabaseConnection, new: NewMission) -> Result<MissionDto, StoreError> {
        let name = new
            .name
            .ok_or_else(|| StoreError::Validation("name is required".to_string()))?;
        let scientist_id = new
            .scientist_id
            .ok_or_else(|| StoreError::Validation("scientist_id is required".to_string()))?;
        let planet_id = new
            .planet_id
            .ok_or_else(|| StoreError::Validation("planet_id is required".to_string()))?;

        let active_model = MissionActiveModel {
            name: Set(name),
            scientist_id: Set(scientist_id),
            planet_id: Set(planet_id),
            ..Default::default()
        };
        let model = active_model.insert(db).await?;
        info!(
            "created mission {} (scientist {}, planet {})",
            model.id, model.scientist_id, model.planet_id
        );
        Self::expand(db, model).await
    }
}
