//! Compressed process logs and their line format.

use std::io::Read;

use chrono::{DateTime, FixedOffset, Utc};
use flate2::read::MultiGzDecoder;
use serde::Serialize;

use super::string_enum::atlas_enum;
use crate::error::{ClientError, Result};

atlas_enum! {
    /// Log files Atlas can export for a host.
    pub enum LogName {
        Mongodb => "mongodb.gz",
        Mongos => "mongos.gz",
        MongodAudit => "mongodb-audit-log.gz",
        MongosAudit => "mongos-audit-log.gz",
    }
}

/// A log download request: one file for one host, optionally bounded in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostLogFile {
    pub hostname: String,
    pub log_name: LogName,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl HostLogFile {
    pub fn new(hostname: impl Into<String>, log_name: LogName) -> Self {
        Self {
            hostname: hostname.into(),
            log_name,
            start: None,
            end: None,
        }
    }

    pub fn between(mut self, start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// `startDate` / `endDate` as epoch seconds.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(start) = self.start {
            query.push(("startDate", start.timestamp().to_string()));
        }
        if let Some(end) = self.end {
            query.push(("endDate", end.timestamp().to_string()));
        }
        query
    }
}

/// One line of a mongod/mongos log.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogLine {
    /// `date level facility [context] message`
    Full {
        date: DateTime<FixedOffset>,
        level: String,
        facility: String,
        context: String,
        message: String,
    },
    /// `date message`
    Short {
        date: DateTime<FixedOffset>,
        message: String,
    },
    /// Anything without a leading timestamp.
    Unparsed { raw: String },
}

fn parse_log_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .ok()
}

/// Split on runs of whitespace into at most `max` fields; the last keeps the rest.
fn split_fields(line: &str, max: usize) -> Vec<&str> {
    let mut fields = Vec::with_capacity(max);
    let mut rest = line.trim_start();
    while !rest.is_empty() {
        if fields.len() + 1 == max {
            fields.push(rest);
            break;
        }
        match rest.split_once(char::is_whitespace) {
            Some((field, tail)) => {
                fields.push(field);
                rest = tail.trim_start();
            }
            None => {
                fields.push(rest);
                break;
            }
        }
    }
    fields
}

impl LogLine {
    pub fn parse(raw: &str) -> Self {
        let line = raw.trim_end();
        let fields = split_fields(line, 5);
        let Some(date) = fields.first().and_then(|d| parse_log_date(d)) else {
            return LogLine::Unparsed {
                raw: line.to_string(),
            };
        };

        match fields.as_slice() {
            [_, level, facility, context, message] => LogLine::Full {
                date,
                level: (*level).to_string(),
                facility: (*facility).to_string(),
                context: context.trim_start_matches('[').trim_end_matches(']').to_string(),
                message: (*message).to_string(),
            },
            _ => LogLine::Short {
                date,
                message: split_fields(line, 2).get(1).copied().unwrap_or_default().to_string(),
            },
        }
    }

    pub fn date(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            LogLine::Full { date, .. } | LogLine::Short { date, .. } => Some(date),
            LogLine::Unparsed { .. } => None,
        }
    }
}

/// Decompress a downloaded log and split it into lines.
///
/// Lines are decoded one at a time; a line that is not valid UTF-8 is kept
/// as [`LogLine::Unparsed`] with replacement characters.
pub fn parse_log_lines(gzipped: &[u8]) -> Result<Vec<LogLine>> {
    let mut bytes = Vec::new();
    MultiGzDecoder::new(gzipped)
        .read_to_end(&mut bytes)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to decompress log: {e}")))?;
    Ok(bytes
        .split(|b| *b == b'\n')
        .filter(|line| !line.trim_ascii().is_empty())
        .map(|line| match std::str::from_utf8(line) {
            Ok(text) => LogLine::parse(text),
            Err(_) => LogLine::Unparsed {
                raw: String::from_utf8_lossy(line).trim_end().to_string(),
            },
        })
        .collect())
}
