use crate::db::models::LocalStation;
use crate::db::StationStore;
use crate::remote::RemoteStation;
use std::collections::HashMap;
use std::error::Error;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReconcileReport {
    pub updated: usize,
    pub inserted: usize,
    pub local_only: Vec<LocalStation>,
}

fn update_if_renamed(
    store: &mut dyn StationStore,
    local: &LocalStation,
    remote: &RemoteStation,
    report: &mut ReconcileReport,
) -> Result<(), Box<dyn Error>> {
    if local.name != remote.name {
        store.update_station_name(&local.id, &local.code, &remote.name)?;
        info!("UPDATE SUCCESS [{} - {}] (was '{}')", remote.name, remote.code, local.name);
        report.updated += 1;
    }
    Ok(())
}

/// Maps a code to the first station carrying it, in source order.
fn first_by_code<T, F>(items: &[T], code_of: F) -> HashMap<&str, &T>
where
    F: Fn(&T) -> &str,
{
    let mut index = HashMap::new();
    for item in items {
        index.entry(code_of(item)).or_insert(item);
    }
    index
}

/// Brings the local store in line with the remote list without deleting anything.
///
/// Which way the lists are walked depends only on their lengths:
/// * equal: every local row sharing a code with a remote station gets its name updated,
///   stations without a counterpart are skipped silently
/// * fewer remote: local rows without a remote code are collected in `local_only`
/// * more remote: remote stations without a local code are inserted
///
/// The in-memory lists are never refreshed during a run. Any store error aborts the
/// run, mutations applied before it stay applied.
pub fn reconcile(
    store: &mut dyn StationStore,
    remote: &[RemoteStation],
    local: &[LocalStation],
) -> Result<ReconcileReport, Box<dyn Error>> {
    let mut report = ReconcileReport::default();

    if remote.len() == local.len() {
        let mut local_by_code: HashMap<&str, Vec<&LocalStation>> = HashMap::new();
        for station in local {
            local_by_code.entry(station.code.as_str()).or_default().push(station);
        }
        for remote_station in remote {
            if let Some(matches) = local_by_code.get(remote_station.code.as_str()) {
                for local_station in matches {
                    update_if_renamed(store, local_station, remote_station, &mut report)?;
                }
            }
        }
    } else if remote.len() < local.len() {
        let remote_by_code = first_by_code(remote, |s| s.code.as_str());
        for local_station in local {
            match remote_by_code.get(local_station.code.as_str()) {
                Some(remote_station) => update_if_renamed(store, local_station, remote_station, &mut report)?,
                None => report.local_only.push(local_station.clone()),
            }
        }
        if !report.local_only.is_empty() {
            warn!("<---Rail Stations only in local table--->");
            for (i, station) in report.local_only.iter().enumerate() {
                warn!("{}. {} - {}", i + 1, station.name, station.code);
            }
        }
    } else {
        let local_by_code = first_by_code(local, |s| s.code.as_str());
        for (i, remote_station) in remote.iter().enumerate() {
            match local_by_code.get(remote_station.code.as_str()) {
                Some(local_station) => update_if_renamed(store, local_station, remote_station, &mut report)?,
                None => {
                    store.insert_station(&remote_station.code, &remote_station.name)?;
                    info!("{}. INSERT SUCCESS [{} - {}]", i + 1, remote_station.name, remote_station.code);
                    report.inserted += 1;
                }
            }
        }
    }

    Ok(report)
}
