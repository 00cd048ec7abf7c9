mod remote_error;
#[cfg(test)]
pub mod test_server;

use crate::config::Config;
use std::error::Error;

pub use remote_error::RemoteError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteStation {
    pub name: String,
    pub code: String,
}

/// Client for the published station list.
pub struct RemoteCatalog {
    client: reqwest::blocking::Client,
    url: String,
}

impl RemoteCatalog {
    pub fn new(config: &Config) -> Result<Self, Box<dyn Error>> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.useragent.clone())
            .timeout(config.tcp_timeout)
            .build()?;
        Ok(RemoteCatalog {
            client,
            url: config.remote_url.clone(),
        })
    }

    pub fn fetch(&self) -> Result<Vec<RemoteStation>, Box<dyn Error>> {
        debug!("Requesting station list from '{}'", self.url);
        let response = self.client.get(&self.url).send()?;
        let status = response.status();
        info!("Response status code: {}", status);
        if status != reqwest::StatusCode::OK {
            return Err(Box::new(RemoteError::HttpStatus(status.to_string())));
        }

        let body = response.text()?;
        let stations = parse_station_list(&body)?;
        info!("Total no. of rail stations (remote): {}", stations.len());
        Ok(stations)
    }
}

/// Parses `["Name1 - CODE1","Name2 - CODE2"]`. The payload is not treated as json:
/// brackets and quotes are dropped, then records are split on `,` and `" - "`.
pub fn parse_station_list(body: &str) -> Result<Vec<RemoteStation>, RemoteError> {
    let stripped: String = body
        .trim()
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '"'))
        .collect();
    stripped.split(',').map(parse_station).collect()
}

fn parse_station(record: &str) -> Result<RemoteStation, RemoteError> {
    let parts: Vec<&str> = record.split(" - ").collect();
    match parts.as_slice() {
        [name, code] => Ok(RemoteStation {
            name: name.to_string(),
            code: code.to_string(),
        }),
        _ => Err(RemoteError::MalformedRecord(record.to_string())),
    }
}
