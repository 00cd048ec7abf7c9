use crate::db::DbError;
use crate::db::models::LocalStation;
use crate::db::StationStore;
use mysql::prelude::Queryable;
use mysql::Row;
use mysql::Value;
use std::error::Error;

pub struct MysqlConnection {
    pool: mysql::Pool,
    table_name: String,
}

impl MysqlConnection {
    /// `table_name` is put into the statements as text and has to be checked by the caller.
    pub fn new(connection_str: &str, table_name: &str) -> Result<Self, Box<dyn Error>> {
        let pool = mysql::Pool::new(connection_str)?;
        Ok(MysqlConnection {
            pool,
            table_name: table_name.to_string(),
        })
    }

    fn exec_single<P: Into<mysql::Params>>(&self, query: String, params: P) -> Result<(), Box<dyn Error>> {
        let mut conn = self.pool.get_conn()?;
        let stmt = conn.prep(query)?;
        let result = conn.exec_drop(&stmt, params);
        let closed = conn.close(stmt);
        execute_then_close(result, closed)
    }
}

/// Reports the execute error first, then the close error.
fn execute_then_close<E1, E2>(executed: Result<(), E1>, closed: Result<(), E2>) -> Result<(), Box<dyn Error>>
where
    E1: Error + 'static,
    E2: Error + 'static,
{
    executed?;
    closed?;
    Ok(())
}

fn id_to_string(value: Value) -> Result<String, DbError> {
    match value {
        Value::Bytes(bytes) => String::from_utf8(bytes)
            .map_err(|err| DbError::IllegalId(format!("{:?}", err.as_bytes()))),
        Value::Int(v) => Ok(v.to_string()),
        Value::UInt(v) => Ok(v.to_string()),
        other => Err(DbError::IllegalId(format!("{:?}", other))),
    }
}

impl StationStore for MysqlConnection {
    fn get_stations(&mut self) -> Result<Vec<LocalStation>, Box<dyn Error>> {
        let query = format!("SELECT id, code, name FROM {}", self.table_name);
        debug!("{}", query);
        let mut conn = self.pool.get_conn()?;
        let rows: Vec<Row> = conn.query(query)?;

        let mut list = vec![];
        for row in rows {
            let (id, code, name): (Value, String, String) = mysql::from_row_opt(row)?;
            list.push(LocalStation {
                id: id_to_string(id)?,
                code,
                name,
            });
        }
        Ok(list)
    }

    fn update_station_name(&mut self, id: &str, code: &str, name: &str) -> Result<(), Box<dyn Error>> {
        let query = format!("UPDATE {} SET name = :name WHERE id = :id AND code = :code", self.table_name);
        self.exec_single(query, params! {
            "name" => name,
            "id" => id,
            "code" => code
        })
    }

    fn insert_station(&mut self, code: &str, name: &str) -> Result<(), Box<dyn Error>> {
        let query = format!("INSERT INTO {} (code, name) VALUES (:code, :name)", self.table_name);
        self.exec_single(query, params! {
            "code" => code,
            "name" => name
        })
    }
}
