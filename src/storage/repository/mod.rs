pub mod mission_repo;
pub mod planet_repo;
pub mod scientist_repo;

pub use mission_repo::MissionRepository;
pub use planet_repo::PlanetRepository;
pub use scientist_repo::ScientistRepository;
