//! Monitoring API methods for [`AtlasClient`]: processes, measurements,
//! databases, disks and host logs.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use futures::future::try_join_all;
use futures::stream::BoxStream;

use crate::client::AtlasClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{
    Database, Disk, Granularity, Host, HostLogFile, LogLine, LogName, Measurement, Measurements,
    Page, Period, parse_log_lines,
};
use crate::pagination::{PageRequest, paginate};

impl AtlasClient {
    pub fn processes_stream(&self, page: PageRequest) -> BoxStream<'_, Result<Host>> {
        paginate(page, move |p| async move {
            let group = self.require_group()?;
            endpoints::list_processes(&self.http, &self.api_url, &self.auth, group, p).await
        })
    }

    pub async fn list_processes(&self) -> Result<Vec<Host>> {
        self.processes_stream(PageRequest::default())
            .try_collect()
            .await
    }

    pub async fn processes_page(&self, page: PageRequest) -> Result<Page<Host>> {
        let group = self.require_group()?;
        endpoints::list_processes(&self.http, &self.api_url, &self.auth, group, page).await
    }

    /// Processes whose hostname belongs to `cluster_name`, ignoring case.
    pub async fn hosts_for_cluster(&self, cluster_name: &str) -> Result<Vec<Host>> {
        let mut hosts = self.list_processes().await?;
        hosts.retain(|host| {
            host.cluster_name()
                .is_some_and(|name| name.eq_ignore_ascii_case(cluster_name))
        });
        Ok(hosts)
    }

    /// Distinct cluster names found among the project's processes.
    pub async fn process_cluster_names(&self) -> Result<BTreeSet<String>> {
        Ok(self
            .list_processes()
            .await?
            .iter()
            .filter_map(|host| host.cluster_name().map(str::to_string))
            .collect())
    }

    /// The same measurements for each host, fetched concurrently.
    ///
    /// Results keep the order of `hosts`; the first failure fails the call.
    pub async fn measurements_for_hosts(
        &self,
        hosts: &[Host],
        granularity: Granularity,
        period: Period,
        measurements: &[Measurement],
    ) -> Result<Vec<(Host, Measurements)>> {
        let requests = hosts.iter().map(|host| {
            let (granularity, period) = (granularity.clone(), period.clone());
            async move {
                let fetched = self
                    .host_measurements(&host.hostname, host.port, granularity, period, measurements)
                    .await?;
                Ok::<_, ClientError>((host.clone(), fetched))
            }
        });
        try_join_all(requests).await
    }

    pub async fn host_measurements(
        &self,
        hostname: &str,
        port: u16,
        granularity: Granularity,
        period: Period,
        measurements: &[Measurement],
    ) -> Result<Measurements> {
        let group = self.require_group()?;
        endpoints::host_measurements(
            &self.http,
            &self.api_url,
            &self.auth,
            group,
            hostname,
            port,
            &granularity,
            &period,
            measurements,
        )
        .await
    }

    /// Databases hosted by a process.
    pub async fn host_databases(&self, hostname: &str, port: u16) -> Result<Vec<Database>> {
        paginate(PageRequest::default(), move |p| async move {
            let group = self.require_group()?;
            endpoints::list_databases(&self.http, &self.api_url, &self.auth, group, hostname, port, p)
                .await
        })
        .try_collect()
        .await
    }

    pub async fn database_measurements(
        &self,
        hostname: &str,
        port: u16,
        database: &str,
        granularity: Granularity,
        period: Period,
        measurements: &[Measurement],
    ) -> Result<Measurements> {
        let group = self.require_group()?;
        endpoints::database_measurements(
            &self.http,
            &self.api_url,
            &self.auth,
            group,
            hostname,
            port,
            database,
            &granularity,
            &period,
            measurements,
        )
        .await
    }

    /// Disk partitions of a process.
    pub async fn host_disks(&self, hostname: &str, port: u16) -> Result<Vec<Disk>> {
        paginate(PageRequest::default(), move |p| async move {
            let group = self.require_group()?;
            endpoints::list_disks(&self.http, &self.api_url, &self.auth, group, hostname, port, p)
                .await
        })
        .try_collect()
        .await
    }

    pub async fn disk_measurements(
        &self,
        hostname: &str,
        port: u16,
        partition: &str,
        granularity: Granularity,
        period: Period,
        measurements: &[Measurement],
    ) -> Result<Measurements> {
        let group = self.require_group()?;
        endpoints::disk_measurements(
            &self.http,
            &self.api_url,
            &self.auth,
            group,
            hostname,
            port,
            partition,
            &granularity,
            &period,
            measurements,
        )
        .await
    }

    /// Download a gzipped log file. Uses the file timeout, not the request timeout.
    pub async fn host_log(
        &self,
        hostname: &str,
        log_name: LogName,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<u8>> {
        let group = self.require_group()?;
        let file = HostLogFile::new(hostname, log_name).between(start, end);
        tracing::info!(%hostname, log = %file.log_name, "Downloading host log");
        endpoints::download_log(
            &self.http,
            &self.api_url,
            &self.auth,
            group,
            &file,
            self.file_timeout,
        )
        .await
    }

    /// Download a log file and parse it line by line.
    pub async fn host_log_lines(
        &self,
        hostname: &str,
        log_name: LogName,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<LogLine>> {
        let raw = self.host_log(hostname, log_name, start, end).await?;
        parse_log_lines(&raw)
    }
}
