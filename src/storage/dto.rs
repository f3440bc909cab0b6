//! Per-endpoint projections of the stored rows.
//!
//! Relations are spelled out explicitly per view, so a mission nested under a
//! scientist never carries that scientist again and nothing recurses.

use crate::storage::entity::{mission, planet, scientist};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ScientistSummary {
    pub id: i32,
    pub name: String,
    pub field_of_study: String,
}

impl From<scientist::Model> for ScientistSummary {
    fn from(model: scientist::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            field_of_study: model.field_of_study,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PlanetSummary {
    pub id: i32,
    pub name: Option<String>,
    pub distance_from_earth: Option<i64>,
    pub nearest_star: Option<String>,
}

impl From<planet::Model> for PlanetSummary {
    fn from(model: planet::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            distance_from_earth: model.distance_from_earth,
            nearest_star: model.nearest_star,
        }
    }
}

/// A mission as listed under its scientist: carries the planet, not the scientist.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ScientistMission {
    pub id: i32,
    pub name: String,
    pub scientist_id: i32,
    pub planet_id: i32,
    pub planet: Option<PlanetSummary>,
}

impl ScientistMission {
    pub fn new(model: mission::Model, planet: Option<planet::Model>) -> Self {
        Self {
            id: model.id,
            name: model.name,
            scientist_id: model.scientist_id,
            planet_id: model.planet_id,
            planet: planet.map(Into::into),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ScientistDto {
    pub id: i32,
    pub name: String,
    pub field_of_study: String,
    /// Serialized under the relationship's name, `mission`.
    #[serde(rename = "mission")]
    pub missions: Vec<ScientistMission>,
}

impl ScientistDto {
    pub fn new(model: scientist::Model, missions: Vec<ScientistMission>) -> Self {
        Self {
            id: model.id,
            name: model.name,
            field_of_study: model.field_of_study,
            missions,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MissionDto {
    pub id: i32,
    pub name: String,
    pub scientist_id: i32,
    pub planet_id: i32,
    pub scientist: Option<ScientistSummary>,
    pub planet: Option<PlanetSummary>,
}

impl MissionDto {
    pub fn new(
        model: mission::Model,
        scientist: Option<scientist::Model>,
        planet: Option<planet::Model>,
    ) -> Self {
        Self {
            id: model.id,
            name: model.name,
            scientist_id: model.scientist_id,
            planet_id: model.planet_id,
            scientist: scientist.map(Into::into),
            planet: planet.map(Into::into),
        }
    }
}

/// Request body for creating a scientist. Missing keys arrive as `None`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct NewScientist {
    pub name: Option<String>,
    pub field_of_study: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct NewPlanet {
    pub name: Option<String>,
    pub distance_from_earth: Option<i64>,
    pub nearest_star: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct NewMission {
    pub name: Option<String>,
    pub scientist_id: Option<i32>,
    pub planet_id: Option<i32>,
}
