use tracing::{error, info, warn};

use crate::{config::Config, store::Db};

pub mod config;
pub mod logging;
pub mod store;

#[tokio::main]
async fn main() {
    // Load config and setup logger
    let config = match Config::new() {
        Ok(x) => x,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    logging::setup(&config.log_level);

    let db = match Db::connect(&config.database.url(), config.database.pool_size).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    // Schema sync is best-effort, a failure does not stop the flow.
    if let Err(e) = db.sync_schema().await {
        warn!("Failed to sync schema: {e}");
    }

    let created = match db.create_user("张三", "zhangsan@example.com", 30).await {
        Ok(user) => user,
        Err(e) => {
            error!("Failed to create user: {e}");
            std::process::exit(1);
        }
    };

    info!("Created user, assigned id: {}", created.id);

    // A missing row is just as fatal here as any other read error, even
    // though the statement logger itself stays quiet about missing rows.
    let user = match db.user_by_id(created.id).await {
        Ok(user) => user,
        Err(e) => {
            error!("Failed to retrieve user: {e}");
            std::process::exit(1);
        }
    };

    info!("Retrieved user: {user:?}");

    // List errors are discarded, an empty list gets logged instead.
    let users = db.users_by_name("张三").await.unwrap_or_default();
    info!("Users named 张三: {users:?}");

    // Single-column update; the result is not checked and nothing is logged.
    db.set_user_age(user, 31).await.ok();
}
