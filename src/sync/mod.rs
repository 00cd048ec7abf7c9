use crate::config::Config;
use crate::db::MysqlConnection;
use crate::db::StationStore;
use crate::reconcile::reconcile;
use crate::reconcile::ReconcileReport;
use crate::remote::RemoteCatalog;
use std::error::Error;

pub fn run(config: &Config) -> Result<ReconcileReport, Box<dyn Error>> {
    let catalog = RemoteCatalog::new(config)?;
    let mut store = MysqlConnection::new(&config.connection_string, &config.table_name)?;
    run_with(&catalog, &mut store)
}

/// Fetches the remote list, reads the local table and reconciles them, strictly in
/// that order. The first error ends the run.
pub fn run_with(catalog: &RemoteCatalog, store: &mut dyn StationStore) -> Result<ReconcileReport, Box<dyn Error>> {
    info!("START -> fetch remote rail stations");
    let stations_remote = catalog.fetch()?;
    info!("END -> fetch remote rail stations");

    info!("START -> fetch local rail stations");
    let stations_local = store.get_stations()?;
    info!("Total no. of rail stations (local): {}", stations_local.len());
    info!("END -> fetch local rail stations");

    let report = reconcile(store, &stations_remote, &stations_local)?;
    info!(
        "Sync finished: {} updated, {} inserted, {} only in local table",
        report.updated,
        report.inserted,
        report.local_only.len()
    );
    Ok(report)
}
