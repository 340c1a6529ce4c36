//! Monitoring measurements for processes, databases and disks.

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Link;
use super::string_enum::atlas_enum;
use crate::serde_helpers::{lenient_datetime, serialize_opt_datetime};

atlas_enum! {
    /// Sample interval of a measurement series (ISO-8601 duration).
    pub enum Granularity {
        Minute => "PT1M",
        FiveMinutes => "PT5M",
        Hour => "PT1H",
        Day => "P1D",
    }
}

atlas_enum! {
    /// Time window covered by a measurement request (ISO-8601 duration).
    pub enum Period {
        FifteenMinutes => "PT15M",
        Hour => "PT1H",
        EightHours => "PT8H",
        Day => "P1D",
        TwoDays => "P2D",
        Week => "P7D",
        FourWeeks => "P28D",
        Month => "P1M",
        TwoMonths => "P2M",
        Year => "P1Y",
        TwoYears => "P2Y",
    }
}

atlas_enum! {
    pub enum Units {
        ScalarPerSecond => "SCALAR_PER_SECOND",
        Scalar => "SCALAR",
        Percent => "PERCENT",
        Milliseconds => "MILLISECONDS",
        Bytes => "BYTES",
        Gigabytes => "GIGABYTES",
        BytesPerSecond => "BYTES_PER_SECOND",
        MegabytesPerSecond => "MEGABYTES_PER_SECOND",
        GigabytesPerHour => "GIGABYTES_PER_HOUR",
    }
}

atlas_enum! {
    /// Host measurement names accepted in the `m` query parameter.
    pub enum Measurement {
        Connections => "CONNECTIONS",
        AssertRegular => "ASSERT_REGULAR",
        AssertWarning => "ASSERT_WARNING",
        AssertMsg => "ASSERT_MSG",
        AssertUser => "ASSERT_USER",
        CacheBytesReadInto => "CACHE_BYTES_READ_INTO",
        CacheBytesWrittenFrom => "CACHE_BYTES_WRITTEN_FROM",
        CacheDirtyBytes => "CACHE_DIRTY_BYTES",
        CacheUsedBytes => "CACHE_USED_BYTES",
        CursorsTotalOpen => "CURSORS_TOTAL_OPEN",
        CursorsTotalTimedOut => "CURSORS_TOTAL_TIMED_OUT",
        DbStorageTotal => "DB_STORAGE_TOTAL",
        DbDataSizeTotal => "DB_DATA_SIZE_TOTAL",
        DocumentMetricsReturned => "DOCUMENT_METRICS_RETURNED",
        DocumentMetricsInserted => "DOCUMENT_METRICS_INSERTED",
        DocumentMetricsUpdated => "DOCUMENT_METRICS_UPDATED",
        DocumentMetricsDeleted => "DOCUMENT_METRICS_DELETED",
        ExtraInfoPageFaults => "EXTRA_INFO_PAGE_FAULTS",
        GlobalLockCurrentQueueTotal => "GLOBAL_LOCK_CURRENT_QUEUE_TOTAL",
        GlobalLockCurrentQueueReaders => "GLOBAL_LOCK_CURRENT_QUEUE_READERS",
        GlobalLockCurrentQueueWriters => "GLOBAL_LOCK_CURRENT_QUEUE_WRITERS",
        MemoryResident => "MEMORY_RESIDENT",
        MemoryVirtual => "MEMORY_VIRTUAL",
        MemoryMapped => "MEMORY_MAPPED",
        NetworkBytesIn => "NETWORK_BYTES_IN",
        NetworkBytesOut => "NETWORK_BYTES_OUT",
        NetworkNumRequests => "NETWORK_NUM_REQUESTS",
        OpcounterCmd => "OPCOUNTER_CMD",
        OpcounterQuery => "OPCOUNTER_QUERY",
        OpcounterUpdate => "OPCOUNTER_UPDATE",
        OpcounterDelete => "OPCOUNTER_DELETE",
        OpcounterGetmore => "OPCOUNTER_GETMORE",
        OpcounterInsert => "OPCOUNTER_INSERT",
        OpcounterReplCmd => "OPCOUNTER_REPL_CMD",
        OpcounterReplUpdate => "OPCOUNTER_REPL_UPDATE",
        OpcounterReplDelete => "OPCOUNTER_REPL_DELETE",
        OpcounterReplInsert => "OPCOUNTER_REPL_INSERT",
        OperationsScanAndOrder => "OPERATIONS_SCAN_AND_ORDER",
        OpExecutionTimeReads => "OP_EXECUTION_TIME_READS",
        OpExecutionTimeWrites => "OP_EXECUTION_TIME_WRITES",
        OpExecutionTimeCommands => "OP_EXECUTION_TIME_COMMANDS",
        OplogMasterTime => "OPLOG_MASTER_TIME",
        OplogRateGbPerHour => "OPLOG_RATE_GB_PER_HOUR",
        QueryExecutorScanned => "QUERY_EXECUTOR_SCANNED",
        QueryExecutorScannedObjects => "QUERY_EXECUTOR_SCANNED_OBJECTS",
        QueryTargetingScannedPerReturned => "QUERY_TARGETING_SCANNED_PER_RETURNED",
        QueryTargetingScannedObjectsPerReturned => "QUERY_TARGETING_SCANNED_OBJECTS_PER_RETURNED",
        TicketsAvailableReads => "TICKETS_AVAILABLE_READS",
        TicketsAvailableWrites => "TICKETS_AVAILABLE_WRITES",
        ProcessCpuUser => "PROCESS_CPU_USER",
        ProcessCpuKernel => "PROCESS_CPU_KERNEL",
        ProcessCpuChildrenUser => "PROCESS_CPU_CHILDREN_USER",
        ProcessCpuChildrenKernel => "PROCESS_CPU_CHILDREN_KERNEL",
        ProcessNormalizedCpuUser => "PROCESS_NORMALIZED_CPU_USER",
        ProcessNormalizedCpuKernel => "PROCESS_NORMALIZED_CPU_KERNEL",
        ProcessNormalizedCpuChildrenUser => "PROCESS_NORMALIZED_CPU_CHILDREN_USER",
        ProcessNormalizedCpuChildrenKernel => "PROCESS_NORMALIZED_CPU_CHILDREN_KERNEL",
        SystemCpuUser => "SYSTEM_CPU_USER",
        SystemCpuKernel => "SYSTEM_CPU_KERNEL",
        SystemCpuNice => "SYSTEM_CPU_NICE",
        SystemCpuIowait => "SYSTEM_CPU_IOWAIT",
        SystemCpuIrq => "SYSTEM_CPU_IRQ",
        SystemCpuSoftirq => "SYSTEM_CPU_SOFTIRQ",
        SystemCpuGuest => "SYSTEM_CPU_GUEST",
        SystemCpuSteal => "SYSTEM_CPU_STEAL",
        SystemNormalizedCpuUser => "SYSTEM_NORMALIZED_CPU_USER",
        SystemNormalizedCpuKernel => "SYSTEM_NORMALIZED_CPU_KERNEL",
        SystemNormalizedCpuNice => "SYSTEM_NORMALIZED_CPU_NICE",
        SystemNormalizedCpuIowait => "SYSTEM_NORMALIZED_CPU_IOWAIT",
        SystemNormalizedCpuIrq => "SYSTEM_NORMALIZED_CPU_IRQ",
        SystemNormalizedCpuSoftirq => "SYSTEM_NORMALIZED_CPU_SOFTIRQ",
        SystemNormalizedCpuGuest => "SYSTEM_NORMALIZED_CPU_GUEST",
        SystemNormalizedCpuSteal => "SYSTEM_NORMALIZED_CPU_STEAL",
    }
}

impl Measurement {
    fn with_prefix(prefix: &str) -> Vec<Measurement> {
        Self::ALL
            .iter()
            .filter(|m| m.as_str().starts_with(prefix))
            .cloned()
            .collect()
    }

    pub fn asserts() -> Vec<Measurement> {
        Self::with_prefix("ASSERT_")
    }

    pub fn cache() -> Vec<Measurement> {
        Self::with_prefix("CACHE_")
    }

    pub fn cursors() -> Vec<Measurement> {
        Self::with_prefix("CURSORS_")
    }

    pub fn document_metrics() -> Vec<Measurement> {
        Self::with_prefix("DOCUMENT_METRICS_")
    }

    pub fn memory() -> Vec<Measurement> {
        Self::with_prefix("MEMORY_")
    }

    pub fn network() -> Vec<Measurement> {
        Self::with_prefix("NETWORK_")
    }

    /// Opcounters, including the replication opcounters.
    pub fn opcounters() -> Vec<Measurement> {
        Self::with_prefix("OPCOUNTER_")
    }

    pub fn tickets() -> Vec<Measurement> {
        Self::with_prefix("TICKETS_AVAILABLE_")
    }

    /// Process and system CPU, raw and normalized.
    pub fn cpu() -> Vec<Measurement> {
        Self::ALL
            .iter()
            .filter(|m| m.as_str().contains("_CPU_"))
            .cloned()
            .collect()
    }
}

/// One sample. `value` is `None` when Atlas has no data for the interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(default, deserialize_with = "lenient_datetime", serialize_with = "serialize_opt_datetime")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub value: Option<f64>,
}

impl DataPoint {
    pub fn as_tuple(&self) -> (Option<DateTime<Utc>>, Option<f64>) {
        (self.timestamp, self.value)
    }
}

/// Samples of one measurement over a period.
///
/// Two series are equal when name and period match, regardless of samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementSeries {
    pub name: Measurement,
    #[serde(default)]
    pub units: Option<Units>,
    #[serde(default)]
    pub data_points: Vec<DataPoint>,
    /// Filled from the request; not part of the series document.
    #[serde(skip)]
    pub period: Option<Period>,
    #[serde(skip)]
    pub granularity: Option<Granularity>,
}

impl MeasurementSeries {
    fn timestamps(&self) -> impl Iterator<Item = DateTime<Utc>> + '_ {
        self.data_points.iter().filter_map(|p| p.timestamp)
    }

    pub fn date_start(&self) -> Option<DateTime<Utc>> {
        self.timestamps().min()
    }

    pub fn date_end(&self) -> Option<DateTime<Utc>> {
        self.timestamps().max()
    }

    pub fn len(&self) -> usize {
        self.data_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_points.is_empty()
    }

    pub fn as_tuples(&self) -> Vec<(Option<DateTime<Utc>>, Option<f64>)> {
        self.data_points.iter().map(DataPoint::as_tuple).collect()
    }
}

impl PartialEq for MeasurementSeries {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.period == other.period
    }
}

impl Eq for MeasurementSeries {}

impl Hash for MeasurementSeries {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.period.hash(state);
    }
}

/// Response of a `.../measurements` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurements {
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub host_id: Option<String>,
    #[serde(default)]
    pub process_id: Option<String>,
    #[serde(default)]
    pub database_name: Option<String>,
    #[serde(default)]
    pub partition_name: Option<String>,
    #[serde(default)]
    pub granularity: Option<Granularity>,
    #[serde(default, deserialize_with = "lenient_datetime", serialize_with = "serialize_opt_datetime")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_datetime", serialize_with = "serialize_opt_datetime")]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub measurements: Vec<MeasurementSeries>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl Measurements {
    /// Stamp every series with the request's period and granularity.
    pub(crate) fn with_request(mut self, granularity: &Granularity, period: &Period) -> Self {
        for series in &mut self.measurements {
            series.period = Some(period.clone());
            series.granularity = Some(granularity.clone());
        }
        self
    }
}
