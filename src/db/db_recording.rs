use crate::db::models::LocalStation;
use crate::db::StationStore;
use std::error::Error;

#[derive(Debug, PartialEq)]
pub enum Mutation {
    Update { id: String, code: String, name: String },
    Insert { code: String, name: String },
}

/// Keeps rows in memory and applies mutations to them like the table would.
#[derive(Default)]
pub struct RecordingStore {
    pub rows: Vec<LocalStation>,
    pub mutations: Vec<Mutation>,
    pub reads: usize,
    pub fail_after: Option<usize>,
}

impl RecordingStore {
    pub fn with_rows(rows: Vec<LocalStation>) -> Self {
        RecordingStore {
            rows,
            ..Default::default()
        }
    }

    fn check_failure(&self) -> Result<(), Box<dyn Error>> {
        match self.fail_after {
            Some(limit) if self.mutations.len() >= limit => Err("connection lost".into()),
            _ => Ok(()),
        }
    }
}

pub fn local(id: &str, code: &str, name: &str) -> LocalStation {
    LocalStation {
        id: id.to_string(),
        code: code.to_string(),
        name: name.to_string(),
    }
}

impl StationStore for RecordingStore {
    fn get_stations(&mut self) -> Result<Vec<LocalStation>, Box<dyn Error>> {
        self.reads += 1;
        Ok(self.rows.clone())
    }

    fn update_station_name(&mut self, id: &str, code: &str, name: &str) -> Result<(), Box<dyn Error>> {
        self.check_failure()?;
        for row in self.rows.iter_mut().filter(|r| r.id == id && r.code == code) {
            row.name = name.to_string();
        }
        self.mutations.push(Mutation::Update {
            id: id.to_string(),
            code: code.to_string(),
            name: name.to_string(),
        });
        Ok(())
    }

    fn insert_station(&mut self, code: &str, name: &str) -> Result<(), Box<dyn Error>> {
        self.check_failure()?;
        let id = (self.rows.len() + 1).to_string();
        self.rows.push(local(&id, code, name));
        self.mutations.push(Mutation::Insert {
            code: code.to_string(),
            name: name.to_string(),
        });
        Ok(())
    }
}
