use crate::core::enums::{Instance, ServiceArea};
use crate::core::version_token::VersionToken;

/*-------------------------------------------------------------------------------------------------
  Version Parameters
-------------------------------------------------------------------------------------------------*/

/// Parameters for the `/version` operation. Defaults to the latest version of the `Worldwide`
/// instance.
///
/// ```
/// use o365endpoints::{Instance, VersionParams};
///
/// let params = VersionParams::new()
///     .instance(Instance::Germany)
///     .all_versions(true);
/// ```
#[derive(Clone, Debug)]
pub struct VersionParams {
    pub(crate) instance: Instance,
    pub(crate) all_versions: bool,
}

impl Default for VersionParams {
    fn default() -> Self {
        Self {
            instance: Instance::Worldwide,
            all_versions: false,
        }
    }
}

impl VersionParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the instance to report on.
    pub fn instance(mut self, instance: Instance) -> Self {
        self.instance = instance;
        self
    }

    /// Request the full version history instead of the latest version only.
    pub fn all_versions(mut self, all_versions: bool) -> Self {
        self.all_versions = all_versions;
        self
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("AllVersions", self.all_versions.to_string()),
            ("Instance", self.instance.to_string()),
        ]
    }
}

/*-------------------------------------------------------------------------------------------------
  Endpoints Parameters
-------------------------------------------------------------------------------------------------*/

/// Parameters for the `/endpoints` operation. Defaults to all service areas of the `Worldwide`
/// instance.
///
/// ```
/// use o365endpoints::{EndpointsParams, Instance, ServiceArea};
///
/// let params = EndpointsParams::new()
///     .instance(Instance::Worldwide)
///     .service_areas([ServiceArea::Exchange, ServiceArea::SharePoint])
///     .no_ipv6(true);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EndpointsParams {
    pub(crate) instance: Instance,
    pub(crate) service_areas: Vec<ServiceArea>,
    pub(crate) tenant_name: Option<String>,
    pub(crate) no_ipv6: bool,
}

impl EndpointsParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the instance to fetch endpoint sets for.
    pub fn instance(mut self, instance: Instance) -> Self {
        self.instance = instance;
        self
    }

    /// Restrict the response to the given service areas. An empty list (the default) fetches
    /// every service area.
    pub fn service_areas<I>(mut self, service_areas: I) -> Self
    where
        I: IntoIterator<Item = ServiceArea>,
    {
        self.service_areas = service_areas.into_iter().collect();
        self
    }

    /// Substitute the tenant name into wildcard URLs in the response.
    pub fn tenant_name(mut self, tenant_name: &str) -> Self {
        self.tenant_name = Some(tenant_name.to_string());
        self
    }

    /// Exclude IPv6 prefixes from the response.
    pub fn no_ipv6(mut self, no_ipv6: bool) -> Self {
        self.no_ipv6 = no_ipv6;
        self
    }

    // Optional parameters are omitted when unset rather than sent with empty values.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.service_areas.is_empty() {
            pairs.push((
                "ServiceAreas",
                ServiceArea::combine(self.service_areas.iter().copied()),
            ));
        }
        if let Some(tenant_name) = &self.tenant_name {
            pairs.push(("TenantName", tenant_name.clone()));
        }
        if self.no_ipv6 {
            pairs.push(("NoIPv6", self.no_ipv6.to_string()));
        }
        pairs
    }
}

/*-------------------------------------------------------------------------------------------------
  Changes Parameters
-------------------------------------------------------------------------------------------------*/

/// Parameters for the `/changes` operation. Defaults to the full change history (the all-zero
/// sentinel version, meaning "earliest possible") of the `Worldwide` instance.
///
/// ```
/// use o365endpoints::{ChangesParams, VersionToken};
///
/// let params = ChangesParams::new().version(VersionToken::parse("2023040100")?);
/// # Ok::<(), o365endpoints::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct ChangesParams {
    pub(crate) instance: Instance,
    pub(crate) version: VersionToken,
}

impl ChangesParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the instance to fetch change history for.
    pub fn instance(mut self, instance: Instance) -> Self {
        self.instance = instance;
        self
    }

    /// Fetch changes published since this version.
    pub fn version(mut self, version: VersionToken) -> Self {
        self.version = version;
        self
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
