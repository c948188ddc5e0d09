//! Query the Office 365 IP Address and URL web service.
//!
//! The [web service](https://endpoints.office.com) publishes the IP ranges, URLs, and ports
//! Office 365 clients need to reach, plus a versioned change history, so that policy systems
//! (firewalls, proxies, access-control engines) can keep their connectivity rules current. This
//! crate fetches that data and normalizes the service's loosely-typed JSON into validated,
//! strongly-typed records.
//!
//! ```no_run
//! use o365endpoints::{EndpointsParams, Instance, ServiceArea};
//!
//! // Get the endpoint sets for the Exchange and SharePoint service areas
//! let client = o365endpoints::Client::new();
//! let endpoints = client.endpoints(
//!     &EndpointsParams::new()
//!         .instance(Instance::Worldwide)
//!         .service_areas([ServiceArea::Exchange, ServiceArea::SharePoint]),
//! ).unwrap();
//!
//! for record in &endpoints {
//!     for ip in record.endpoint_set.ips.iter().flatten() {
//!         println!("{ip}");
//!     }
//! }
//! ```
//!
//! Responses are parsed all-or-nothing: a record with an out-of-set enumeration value or a
//! malformed version token rejects the whole response. Connectivity data that cannot be fully
//! parsed is never partially returned.

/*-------------------------------------------------------------------------------------------------
  Modules
-------------------------------------------------------------------------------------------------*/

mod core;

/*-------------------------------------------------------------------------------------------------
  Library Interface
-------------------------------------------------------------------------------------------------*/

pub use crate::core::client::{get_endpoints, Client, ClientBuilder};
pub use crate::core::enums::{Category, Disposition, Format, Impact, Instance, ServiceArea};
pub use crate::core::errors::{Error, Result};
pub use crate::core::params::{ChangesParams, EndpointsParams, VersionParams};
pub use crate::core::records::{
    ChangeAtom, ChangeEvent, EndpointRecord, ServiceEndpointSet, VersionSummary,
};
pub use crate::core::transport::{HttpResponse, HttpTransport, Transport};
pub use crate::core::urls::BASE_URL;
pub use crate::core::version_token::VersionToken;
