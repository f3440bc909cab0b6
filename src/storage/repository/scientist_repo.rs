use crate::storage::dto::{NewScientist, ScientistDto, ScientistMission, ScientistSummary};
use crate::storage::entity::mission::{self, Entity as Mission};
use crate::storage::entity::planet::Entity as Planet;
use crate::storage::entity::scientist::{
    self, ActiveModel as ScientistActiveModel, Entity as Scientist, Model as ScientistModel,
};
use crate::storage::error::StoreError;
use log::info;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryOrder, Set,
};
use serde_json::{Map, Value};

pub struct ScientistRepository;

impl ScientistRepository {
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<ScientistSummary>, StoreError> {
        let rows = Scientist::find()
            .order_by_asc(scientist::Column::Id)
            .all(db)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// The bare row, without missions.
    pub async fn find_model(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<ScientistModel, StoreError> {
        Scientist::find_by_id(id)
            .one(db)
            .await?
            .ok_or(StoreError::NotFound("Scientist"))
    }

    /// Full view: the scientist plus each mission with its planet.
    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<ScientistDto, StoreError> {
        let model = Self::find_model(db, id).await?;
        let missions = model
            .find_related(Mission)
            .find_also_related(Planet)
            .order_by_asc(mission::Column::Id)
            .all(db)
            .await?
            .into_iter()
            .map(|(m, p)| ScientistMission::new(m, p))
            .collect();
        Ok(ScientistDto::new(model, missions))
    }

    pub async fn create(
        db: &DatabaseConnection,
        new: NewScientist,
    ) -> Result<ScientistDto, StoreError> {
        let name = new
            .name
            .ok_or_else(|| StoreError::Validation("name is required".to_string()))?;
        let field_of_study = new
            .field_of_study
            .ok_or_else(|| StoreError::Validation("field_of_study is required".to_string()))?;

        let active_model = ScientistActiveModel {
            name: Set(name),
            field_of_study: Set(field_of_study),
            ..Default::default()
        };
        let model = active_model.insert(db).await?;
        info!("created scientist {}", model.id);
        Ok(ScientistDto::new(model, Vec::new()))
    }

    /// Applies a JSON object of field assignments to an already-fetched row and
    /// saves it in one UPDATE. A row deleted in the meantime is reported as not found.
    pub async fn update(
        db: &DatabaseConnection,
        current: ScientistModel,
        patch: &Map<String, Value>,
    ) -> Result<ScientistSummary, StoreError> {
        let mut am: ScientistActiveModel = current.clone().into();
        am.apply_patch(patch).map_err(StoreError::Validation)?;
        if !am.is_changed() {
            return Ok(current.into());
        }
        let updated = am.update(db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => StoreError::NotFound("Scientist"),
            e => e.into(),
        })?;
        Ok(updated.into())
    }

    /// Missions owned by the scientist go with it through the ON DELETE CASCADE key.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), StoreError> {
        let res = Scientist::delete_by_id(id).exec(db).await?;
        if res.rows_affected == 0 {
            return Err(StoreError::NotFound("Scientist"));
        }
        info!("deleted scientist {}", id);
        Ok(())
    }
}
