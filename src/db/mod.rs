mod db;
mod db_error;
mod db_mysql;
#[cfg(test)]
pub mod db_recording;

pub mod models;

pub use self::db::StationStore;
pub use self::db_error::DbError;
pub use self::db_mysql::MysqlConnection;
