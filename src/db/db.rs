use crate::db::models::LocalStation;
use std::error::Error;

pub trait StationStore {
    fn get_stations(&mut self) -> Result<Vec<LocalStation>, Box<dyn Error>>;
    fn update_station_name(&mut self, id: &str, code: &str, name: &str) -> Result<(), Box<dyn Error>>;
    fn insert_station(&mut self, code: &str, name: &str) -> Result<(), Box<dyn Error>>;
}
