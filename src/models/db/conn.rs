use rocket_sync_db_pools::database;

pub type Connection = diesel::SqliteConnection;

#[database("trivia")]
pub struct DbConn(Connection);
