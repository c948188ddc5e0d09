use crate::core::enums::{Category, Disposition, Impact, Instance, ServiceArea};
use crate::core::version_token::VersionToken;
use chrono::NaiveDate;
use serde::Serialize;

/*-------------------------------------------------------------------------------------------------
  Service Endpoint Set
-------------------------------------------------------------------------------------------------*/

/// One network destination surface: the URLs, IP ranges, and ports required for a service area
/// to function.
///
/// Records are immutable value objects once parsed; construction goes through the response
/// normalizer, which rejects any record with an out-of-set enumeration value.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpointSet {
    /// Service area this endpoint set belongs to.
    pub service_area: ServiceArea,

    /// Hostnames and FQDNs; empty for IP-only rows.
    pub urls: Vec<String>,

    /// IP literals, prefixes, and ranges; absent for URL-only rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ips: Option<Vec<String>>,

    /// Comma-separated TCP ports and port ranges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp_ports: Option<String>,

    /// Comma-separated UDP ports and port ranges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udp_ports: Option<String>,

    /// Connectivity category of this endpoint set.
    pub category: Category,

    /// Whether this endpoint set is routable over ExpressRoute.
    pub express_route: bool,

    /// Whether this endpoint set is required for the service area to function.
    pub required: bool,

    /// Free-text notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/*-------------------------------------------------------------------------------------------------
  Endpoint Record
-------------------------------------------------------------------------------------------------*/

/// A [ServiceEndpointSet] row as returned by the `/endpoints` operation: the set plus its `id`
/// (unique within one response) and a human-readable service area display name.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointRecord {
    /// Endpoint set identifier, unique within one response.
    pub id: u32,

    /// Human-readable name of the service area.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_area_display_name: Option<String>,

    /// The endpoint set data.
    #[serde(flatten)]
    pub endpoint_set: ServiceEndpointSet,
}

/*-------------------------------------------------------------------------------------------------
  Change Atom
-------------------------------------------------------------------------------------------------*/

/// The add- or remove-side payload of a single change.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ChangeAtom {
    /// When the change takes effect.
    #[serde(rename = "effectiveDate", with = "crate::core::compact_date")]
    pub effective_date: NaiveDate,

    /// IP literals, prefixes, and ranges affected by the change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ips: Option<Vec<String>>,

    /// Hostnames and FQDNs affected by the change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<String>>,
}

/*-------------------------------------------------------------------------------------------------
  Change Event
-------------------------------------------------------------------------------------------------*/

/// One historical change record from the `/changes` operation.
///
/// `endpoint_set_id` references the [EndpointRecord::id] the change affects; it is a reference
/// only, not ownership. The `previous` and `current` snapshots and the `add`/`remove` payloads
/// may each be absent depending on the disposition: a newly added endpoint set has no previous
/// snapshot and a removed one has no current snapshot.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    /// Change record identifier.
    pub id: u32,

    /// Identifier of the endpoint set this change affects.
    pub endpoint_set_id: u32,

    /// Kind of change: add, remove, or modification.
    pub disposition: Disposition,

    /// Impact of not applying this change to connectivity policy.
    pub impact: Impact,

    /// Version in which this change was published.
    pub version: VersionToken,

    /// Endpoint set snapshot before the change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<ServiceEndpointSet>,

    /// Endpoint set snapshot after the change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<ServiceEndpointSet>,

    /// Added IPs and URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add: Option<ChangeAtom>,

    /// Removed IPs and URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove: Option<ChangeAtom>,
}

/*-------------------------------------------------------------------------------------------------
  Version Summary
-------------------------------------------------------------------------------------------------*/

/// Per-instance version report from the `/version` operation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct VersionSummary {
    /// Instance the report describes.
    pub instance: Instance,

    /// Latest published version for the instance.
    pub latest: VersionToken,

    /// All published versions, newest first; present only when the caller requested full
    /// history (`AllVersions`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<VersionToken>>,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
