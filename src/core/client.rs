use crate::core::enums::Format;
use crate::core::errors::{Error, Result};
use crate::core::normalize;
use crate::core::params::{ChangesParams, EndpointsParams, VersionParams};
use crate::core::records::{ChangeEvent, EndpointRecord, VersionSummary};
use crate::core::transport::{HttpTransport, Transport};
use crate::core::urls;
use log::{info, warn};
use serde_json::Value;
use std::env;
use uuid::Uuid;

/*-------------------------------------------------------------------------------------------------
  Simple Interface
-------------------------------------------------------------------------------------------------*/

/// _**Simple library interface**_ that retrieves the current endpoint sets for the Worldwide
/// instance using the default client configuration.
///
/// ```no_run
/// let endpoints = o365endpoints::get_endpoints().unwrap();
///
/// for record in &endpoints {
///     println!("{} [{}] urls: {}", record.id, record.endpoint_set.service_area,
///         record.endpoint_set.urls.len());
/// }
/// ```
pub fn get_endpoints() -> Result<Vec<EndpointRecord>> {
    Client::new().endpoints(&EndpointsParams::default())
}

/*-------------------------------------------------------------------------------------------------
  Client Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the [Client] struct.
///
/// ```
/// let client = o365endpoints::ClientBuilder::new()
///     .base_url("https://endpoints.office.com")
///     .build();
/// ```
///
/// The [ClientBuilder::new] method sources initial configuration values from environment
/// variables when set and uses default values when they are not set. If you want the default
/// configuration, ignoring any environment variables, use [ClientBuilder::default].
pub struct ClientBuilder {
    base_url: String,
    transport: Option<Box<dyn Transport>>,
}

/*--------------------------------------------------------------------------------------
  Client Builder Implementation
--------------------------------------------------------------------------------------*/

impl Default for ClientBuilder {
    /// Create a new [ClientBuilder] with default configuration values.
    fn default() -> Self {
        Self {
            base_url: urls::BASE_URL.to_string(),
            transport: None,
        }
    }
}

impl ClientBuilder {
    /// Create a new [ClientBuilder] reading initial configuration values from environment
    /// variables when set and default values when they are not set.
    ///
    /// The environment variables used to set the initial configuration values are:
    /// - `O365ENDPOINTS_URL`
    pub fn new() -> Self {
        let default = ClientBuilder::default();

        Self {
            base_url: get_env_var("O365ENDPOINTS_URL", default.base_url),
            transport: None,
        }
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Set the base URL of the web service; defaults to `https://endpoints.office.com`.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Substitute the HTTP transport used to perform requests; defaults to [HttpTransport].
    pub fn transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    pub fn build(self) -> Client {
        Client {
            base_url: self.base_url,
            transport: self
                .transport
                .unwrap_or_else(|| Box::new(HttpTransport::new())),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Client
-------------------------------------------------------------------------------------------------*/

/// A client for the Office 365 IP Address and URL web service.
///
/// Each query function performs exactly one GET exchange through the configured [Transport] and
/// normalizes the JSON response body into typed records. There is no retry and no shared mutable
/// state; a client may be used from independent call sites concurrently.
///
/// ```no_run
/// use o365endpoints::{ChangesParams, EndpointsParams, Instance, ServiceArea, VersionParams};
///
/// let client = o365endpoints::Client::new();
///
/// let versions = client.version(&VersionParams::new().all_versions(true)).unwrap();
/// let latest = versions[0].latest;
///
/// let endpoints = client.endpoints(
///     &EndpointsParams::new()
///         .instance(Instance::Worldwide)
///         .service_areas([ServiceArea::Exchange, ServiceArea::SharePoint]),
/// ).unwrap();
///
/// let changes = client.changes(&ChangesParams::new().version(latest)).unwrap();
/// ```
pub struct Client {
    base_url: String,
    transport: Box<dyn Transport>,
}

/*--------------------------------------------------------------------------------------
  Client Implementation
--------------------------------------------------------------------------------------*/

impl Default for Client {
    /// Create a new [Client] with default configuration values, ignoring any environment
    /// variables.
    fn default() -> Self {
        ClientBuilder::default().build()
    }
}

impl Client {
    pub fn new() -> Self {
        ClientBuilder::new().build()
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    /// Get the base URL of the web service.
    /// Defaults to `https://endpoints.office.com`.
    ///
    /// ```
    /// let client = o365endpoints::Client::default();
    /// assert_eq!(client.base_url(), "https://endpoints.office.com");
    /// ```
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /*-------------------------------------------------------------------------
      Query Functions
    -------------------------------------------------------------------------*/

    /// Retrieve the version report for an instance: the latest published version, and the full
    /// version history when [all_versions](VersionParams::all_versions) is requested.
    pub fn version(&self, params: &VersionParams) -> Result<Vec<VersionSummary>> {
        let root = self.get_json(&urls::version_url(&self.base_url), params.query_pairs())?;
        normalize::versions(root)
    }

    /// Retrieve the version report as unparsed CSV text.
    pub fn version_csv(&self, params: &VersionParams) -> Result<String> {
        self.get_csv(&urls::version_url(&self.base_url), params.query_pairs())
    }

    /// Retrieve the current endpoint sets for an instance: the IP ranges, URLs, and ports
    /// downstream policy systems allow-list.
    pub fn endpoints(&self, params: &EndpointsParams) -> Result<Vec<EndpointRecord>> {
        let url = urls::endpoints_url(&self.base_url, params.instance);
        let root = self.get_json(&url, params.query_pairs())?;
        normalize::endpoints(root)
    }

    /// Retrieve the current endpoint sets as unparsed CSV text.
    pub fn endpoints_csv(&self, params: &EndpointsParams) -> Result<String> {
        let url = urls::endpoints_url(&self.base_url, params.instance);
        self.get_csv(&url, params.query_pairs())
    }

    /// Retrieve the changes published to an instance's endpoint sets since a given version.
    pub fn changes(&self, params: &ChangesParams) -> Result<Vec<ChangeEvent>> {
        let url = urls::changes_url(&self.base_url, params.instance, &params.version);
        let root = self.get_json(&url, params.query_pairs())?;
        normalize::changes(root)
    }

    /// Retrieve the change history as unparsed CSV text.
    pub fn changes_csv(&self, params: &ChangesParams) -> Result<String> {
        let url = urls::changes_url(&self.base_url, params.instance, &params.version);
        self.get_csv(&url, params.query_pairs())
    }

    /*-------------------------------------------------------------------------
      Private Methods
    -------------------------------------------------------------------------*/

    fn get_json(&self, url: &str, params: Vec<(&'static str, String)>) -> Result<Value> {
        let body = self.get(url, params, Format::JSON)?;
        Ok(serde_json::from_str(&body)?)
    }

    fn get_csv(&self, url: &str, params: Vec<(&'static str, String)>) -> Result<String> {
        self.get(url, params, Format::CSV)
    }

    /// Perform one GET exchange. Every request carries a freshly generated `ClientRequestId`,
    /// required by the service for request tracing; it is never cached or reused across calls.
    fn get(
        &self,
        url: &str,
        mut params: Vec<(&'static str, String)>,
        format: Format,
    ) -> Result<String> {
        let client_request_id = Uuid::new_v4();
        params.push(("ClientRequestId", client_request_id.to_string()));
        params.push(("Format", format.to_string()));

        info!("GET {url} [ClientRequestId: {client_request_id}]");
        let response = self.transport.get(url, &params)?;

        if !response.is_success() {
            warn!("GET {url}: HTTP status {}", response.status);
            return Err(Error::RemoteRequestFailed {
                status: response.status,
            });
        }

        Ok(response.body)
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// Get and parse an environment variable value or return a default value.
fn get_env_var<T: std::str::FromStr>(env_var: &str, default: T) -> T {
    env::var(env_var)
        .ok()
        .and_then(|value| {
            value
                .parse::<T>()
                .inspect(|_| info!("Using {}: {}", env_var, value))
                .inspect_err(|_| warn!("Invalid {}: {}", env_var, value))
                .ok()
        })
        .unwrap_or(default)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::enums::{Instance, ServiceArea};
    use crate::core::errors::log_error;
    use crate::core::transport::HttpResponse;
    use std::sync::{Arc, Mutex};
    use test_log::test;

    /*----------------------------------------------------------------------------------
      Test Transport
    ----------------------------------------------------------------------------------*/

    type Request = (String, Vec<(String, String)>);

    /// Canned-response transport that records every request it receives.
    struct TestTransport {
        status: u16,
        body: String,
        requests: Arc<Mutex<Vec<Request>>>,
    }

    impl Transport for TestTransport {
        fn get(&self, url: &str, query: &[(&str, String)]) -> Result<HttpResponse> {
            self.requests.lock().unwrap().push((
                url.to_string(),
                query
                    .iter()
                    .map(|(key, value)| (key.to_string(), value.clone()))
                    .collect(),
            ));
            Ok(HttpResponse {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }

    fn test_client(status: u16, body: &str) -> (Client, Arc<Mutex<Vec<Request>>>) {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let transport = TestTransport {
            status,
            body: body.to_string(),
            requests: Arc::clone(&requests),
        };
        let client = ClientBuilder::default()
            .transport(Box::new(transport))
            .build();
        (client, requests)
    }

    fn param<'r>(request: &'r Request, name: &str) -> Option<&'r str> {
        request
            .1
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /*----------------------------------------------------------------------------------
      Test Query Functions
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_endpoints_request_and_normalization() {
        let body = r#"[
          {
            "id": 1,
            "serviceArea": "Exchange",
            "serviceAreaDisplayName": "Exchange Online",
            "urls": ["outlook.office.com"],
            "ips": ["13.107.6.152/31"],
            "tcpPorts": "80,443",
            "expressRoute": true,
            "required": true,
            "category": "Optimize"
          },
          {
            "id": 2,
            "serviceArea": "SharePoint",
            "urls": ["*.sharepoint.com"],
            "tcpPorts": "443",
            "expressRoute": false,
            "required": true,
            "category": "Default"
          }
        ]"#;
        let (client, requests) = test_client(200, body);

        let params = EndpointsParams::new()
            .service_areas([ServiceArea::Exchange, ServiceArea::SharePoint]);
        let records = client.endpoints(&params).inspect_err(log_error).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[1].id, 2);
        assert_eq!(records[1].endpoint_set.ips, None);

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].0,
            "https://endpoints.office.com/endpoints/Worldwide"
        );
        assert_eq!(
            param(&requests[0], "ServiceAreas"),
            Some("Exchange,SharePoint")
        );
        assert_eq!(param(&requests[0], "Format"), Some("JSON"));
    }

    #[test]
    fn test_every_request_carries_a_fresh_client_request_id() {
        let (client, requests) = test_client(200, "[]");

        client.version(&VersionParams::new()).unwrap();
        client.version(&VersionParams::new()).unwrap();

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 2);

        let first = param(&requests[0], "ClientRequestId").unwrap();
        let second = param(&requests[1], "ClientRequestId").unwrap();

        // Well-formed UUIDs, freshly generated per call.
        assert!(Uuid::parse_str(first).is_ok());
        assert!(Uuid::parse_str(second).is_ok());
        assert_ne!(first, second);
    }

    #[test]
    fn test_version_request_parameters() {
        let body = r#"{ "instance": "Germany", "latest": "2023040100" }"#;
        let (client, requests) = test_client(200, body);

        let params = VersionParams::new()
            .instance(Instance::Germany)
            .all_versions(true);
        let summaries = client.version(&params).unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].latest.to_string(), "2023040100");

        let requests = requests.lock().unwrap();
        assert_eq!(requests[0].0, "https://endpoints.office.com/version");
        assert_eq!(param(&requests[0], "AllVersions"), Some("true"));
        assert_eq!(param(&requests[0], "Instance"), Some("Germany"));
    }

    #[test]
    fn test_changes_url_carries_instance_and_version() {
        let (client, requests) = test_client(200, "[]");

        let params = ChangesParams::new(); // sentinel version
        let changes = client.changes(&params).unwrap();

        assert!(changes.is_empty());
        let requests = requests.lock().unwrap();
        assert_eq!(
            requests[0].0,
            "https://endpoints.office.com/changes/Worldwide/0000000000"
        );
    }

    /*----------------------------------------------------------------------------------
      Test Failure Paths
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_non_success_status_fails_without_normalization() {
        // The body is not valid JSON; reaching the normalizer would produce a different error.
        let (client, _requests) = test_client(503, "Service Unavailable");

        let error = client.version(&VersionParams::new()).unwrap_err();
        assert!(matches!(
            error,
            Error::RemoteRequestFailed { status: 503 }
        ));
    }

    #[test]
    fn test_invalid_json_body_is_a_json_error() {
        let (client, _requests) = test_client(200, "not json");

        let error = client.version(&VersionParams::new()).unwrap_err();
        assert!(matches!(error, Error::Json(_)));
    }

    /*----------------------------------------------------------------------------------
      Test CSV Passthrough
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_csv_bypasses_the_normalizer() {
        let body = "id,serviceArea,urls\n1,Exchange,outlook.office.com";
        let (client, requests) = test_client(200, body);

        let csv = client.endpoints_csv(&EndpointsParams::new()).unwrap();
        assert_eq!(csv, body);

        let requests = requests.lock().unwrap();
        assert_eq!(param(&requests[0], "Format"), Some("CSV"));
    }

    /*----------------------------------------------------------------------------------
      Test Configuration
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_builder_base_url_setter() {
        let client = ClientBuilder::default()
            .base_url("https://endpoints.example.com")
            .build();
        assert_eq!(client.base_url(), "https://endpoints.example.com");
    }

    /// ENV_VAR: O365ENDPOINTS_URL
    #[test]
    fn test_environment_variable_configuration() {
        let env_var = "O365ENDPOINTS_URL";
        let stored = env::var(env_var);

        unsafe { env::remove_var(env_var) };
        let default_client = Client::new();
        assert_eq!(default_client.base_url(), urls::BASE_URL);

        unsafe { env::set_var(env_var, "https://endpoints.example.com") };
        let env_client = Client::new();
        assert_eq!(env_client.base_url(), "https://endpoints.example.com");

        // Default ignores the environment.
        assert_eq!(Client::default().base_url(), urls::BASE_URL);

        match stored {
            Ok(value) => unsafe { env::set_var(env_var, value) },
            Err(_) => unsafe { env::remove_var(env_var) },
        }
    }
}
