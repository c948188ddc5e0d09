use crate::core::enums::Instance;
use crate::core::version_token::VersionToken;

/*-------------------------------------------------------------------------------------------------
  Service URLs
-------------------------------------------------------------------------------------------------*/

/// Base URL of the Office 365 IP Address and URL web service.
pub const BASE_URL: &str = "https://endpoints.office.com";

pub(crate) fn version_url(base_url: &str) -> String {
    format!("{base_url}/version")
}

pub(crate) fn endpoints_url(base_url: &str, instance: Instance) -> String {
    format!("{base_url}/endpoints/{instance}")
}

pub(crate) fn changes_url(base_url: &str, instance: Instance, version: &VersionToken) -> String {
    format!("{base_url}/changes/{instance}/{version}")
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
