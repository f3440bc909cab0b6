use crate::config::DbConfig;
use crate::storage::entity::{mission, planet, scientist};
use log::info;
use sea_orm::sea_query::Index;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

/// Opens the pool and makes sure the three tables exist.
///
/// The mission cascades rely on `PRAGMA foreign_keys`. `SqliteConnectOptions`
/// defaults it to ON and sqlx applies it to every connection it opens, so any
/// `sqlite:` URL parsed by sea-orm gets enforcement without an extra pragma.
pub async fn establish_connection(config: &DbConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url.to_owned());
    if config.is_in_memory() {
        // Every connection to `:memory:` is its own database, so keep exactly one alive.
        opt.max_connections(1).min_connections(1);
    } else {
        opt.max_connections(config.max_connections)
            .min_connections(1)
            .idle_timeout(config.idle_timeout);
    }
    opt.connect_timeout(config.connect_timeout)
        .acquire_timeout(config.connect_timeout)
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt).await?;

    if !config.is_in_memory() {
        db.execute(sea_orm::Statement::from_string(
            sea_orm::DatabaseBackend::Sqlite,
            "PRAGMA journal_mode=WAL;".to_string(),
        ))
        .await?;
    }

    create_schema(&db).await?;

    info!("Database connection established at {}.", config.url);

    Ok(db)
}

/// Parents first, so the missions foreign keys have something to reference.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let stmt = builder.build(
        schema
            .create_table_from_entity(scientist::Entity)
            .if_not_exists(),
    );
    db.execute(stmt).await?;

    let stmt = builder.build(schema.create_table_from_entity(planet::Entity).if_not_exists());
    db.execute(stmt).await?;

    let stmt = builder.build(schema.create_table_from_entity(mission::Entity).if_not_exists());
    db.execute(stmt).await?;

    let indexes = [
        ("ix_missions_scientist_id", mission::Column::ScientistId),
        ("ix_missions_planet_id", mission::Column::PlanetId),
    ];
    for (name, column) in indexes {
        let stmt = builder.build(
            Index::create()
                .if_not_exists()
                .name(name)
                .table(mission::Entity)
                .col(column),
        );
        db.execute(stmt).await?;
    }

    Ok(())
}
