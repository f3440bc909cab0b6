use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use super::require_text;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "scientists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub field_of_study: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mission::Entity")]
    Mission,
}

impl Related<super::mission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mission.def()
    }
}

/// Columns a PATCH request may touch. Anything else (including `id`) is refused.
pub const MUTABLE_FIELDS: &[&str] = &["name", "field_of_study"];

type FieldSetter = fn(&mut ActiveModel, String);

fn set_name(am: &mut ActiveModel, value: String) {
    am.name = Set(value);
}

fn set_field_of_study(am: &mut ActiveModel, value: String) {
    am.field_of_study = Set(value);
}

fn setter_for(field: &str) -> Option<FieldSetter> {
    match field {
        "name" => Some(set_name as FieldSetter),
        "field_of_study" => Some(set_field_of_study as FieldSetter),
        _ => None,
    }
}

impl ActiveModel {
    /// Assigns every `field -> value` pair of a JSON object through the allow-list.
    ///
    /// Nothing is assigned unless every pair is acceptable, so a rejected patch
    /// leaves the active model exactly as it was.
    pub fn apply_patch(
        &mut self,
        patch: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), String> {
        let mut staged = Vec::with_capacity(patch.len());
        for (field, value) in patch {
            let setter = setter_for(field).ok_or_else(|| format!("{field} is not mutable"))?;
            let text = value
                .as_str()
                .ok_or_else(|| format!("{field} must be a string"))?;
            staged.push((setter, text.to_string()));
        }
        for (setter, text) in staged {
            setter(self, text);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.name, "name")?;
        require_text(&self.field_of_study, "field_of_study")?;
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
