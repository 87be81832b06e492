use {
    log::{info, error},
    rocket::{
        Rocket,
        Build,
        fairing::{self, AdHoc}
    },
    diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness},
    super::DbConn
};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Brings the schema up to date before the server starts accepting requests.
pub fn fairing() -> AdHoc {
    AdHoc::try_on_ignite("Diesel Migrations", run_pending)
}

async fn run_pending(rocket: Rocket<Build>) -> fairing::Result {
    let conn = match DbConn::get_one(&rocket).await {
        Some(conn) => conn,
        None => {
            error!("no database connection available to run migrations");
            return Err(rocket)
        }
    };

    let applied = conn
        .run(|conn| conn
            .run_pending_migrations(MIGRATIONS)
            .map(|versions| versions.len())
            .map_err(|e| e.to_string())
        ).await;

    match applied {
        Ok(0) => Ok(rocket),
        Ok(count) => {
            info!("applied {} pending migration(s)", count);
            Ok(rocket)
        },
        Err(e) => {
            error!("failed to run migrations: {}", e);
            Err(rocket)
        }
    }
}
