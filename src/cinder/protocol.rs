//! JSON structures for the volume API wire format.

use crate::utils::errors::{CinderCliError, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Possible volume statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum VolumeStatus {
    #[serde(rename = "creating")]
    Creating,
    #[serde(rename = "available")]
    Available,
    #[serde(rename = "reserved")]
    Reserved,
    #[serde(rename = "attaching")]
    Attaching,
    #[serde(rename = "detaching")]
    Detaching,
    #[serde(rename = "in-use")]
    InUse,
    #[serde(rename = "maintenance")]
    Maintenance,
    #[serde(rename = "deleting")]
    Deleting,
    #[serde(rename = "awaiting-transfer")]
    AwaitingTransfer,
    #[serde(rename = "error")]
    Error,
    #[serde(rename = "error_deleting")]
    ErrorDeleting,
    #[serde(rename = "backing-up")]
    BackingUp,
    #[serde(rename = "restoring-backup")]
    RestoringBackup,
    #[serde(rename = "error_extending")]
    ErrorExtending,
    #[serde(rename = "downloading")]
    Downloading,
    #[serde(rename = "uploading")]
    Uploading,
    #[serde(rename = "retyping")]
    Retyping,
    #[serde(rename = "extending")]
    Extending,
    /// A status this client does not know about. The status vocabulary grows
    /// server-side; an unknown value must not fail the whole record.
    #[serde(other)]
    Unknown,
}

impl VolumeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeStatus::Creating => "creating",
            VolumeStatus::Available => "available",
            VolumeStatus::Reserved => "reserved",
            VolumeStatus::Attaching => "attaching",
            VolumeStatus::Detaching => "detaching",
            VolumeStatus::InUse => "in-use",
            VolumeStatus::Maintenance => "maintenance",
            VolumeStatus::Deleting => "deleting",
            VolumeStatus::AwaitingTransfer => "awaiting-transfer",
            VolumeStatus::Error => "error",
            VolumeStatus::ErrorDeleting => "error_deleting",
            VolumeStatus::BackingUp => "backing-up",
            VolumeStatus::RestoringBackup => "restoring-backup",
            VolumeStatus::ErrorExtending => "error_extending",
            VolumeStatus::Downloading => "downloading",
            VolumeStatus::Uploading => "uploading",
            VolumeStatus::Retyping => "retyping",
            VolumeStatus::Extending => "extending",
            VolumeStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for VolumeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-supplied arguments for a volume create request.
#[derive(Debug, Clone, Serialize)]
pub struct VolumeCreate {
    pub size: i64,
    pub volume_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
}

impl VolumeCreate {
    pub fn new(size: i64, volume_type: &str) -> VolumeCreate {
        VolumeCreate {
            size,
            volume_type: volume_type.to_string(),
            name: None,
            description: None,
            availability_zone: None,
        }
    }

    /// Reject arguments the API would refuse anyway, before any round trip.
    pub fn validate(&self) -> Result<()> {
        if self.size <= 0 {
            return Err(CinderCliError::InvalidInput(format!(
                "Volume size must be positive, got {}",
                self.size
            )));
        }
        if self.volume_type.trim().is_empty() {
            return Err(CinderCliError::InvalidInput(
                "Volume type must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Request envelope for `POST /volumes`.
#[derive(Debug, Clone, Serialize)]
pub struct VolumeCreateRoot {
    pub volume: VolumeCreate,
}

/// Server-returned representation of a volume. Read-only snapshot.
///
/// Everything beyond the id is optional: the 202 acknowledging a create may
/// carry only a skeleton record while provisioning is still in flight.
#[derive(Debug, Clone, Deserialize)]
pub struct Volume {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<VolumeStatus>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub volume_type: Option<String>,
    #[serde(default)]
    pub availability_zone: Option<String>,
    #[serde(default)]
    pub bootable: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl Volume {
    /// Creation time, when the server reported one in a known format.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }
}

/// Response envelope for a single volume.
#[derive(Debug, Clone, Deserialize)]
pub struct VolumeRoot {
    pub volume: Volume,
}

/// Parse an API timestamp. Deployments emit either RFC 3339 or naive UTC
/// without an offset.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
