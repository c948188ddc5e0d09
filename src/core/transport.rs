use crate::core::errors::Result;

/*-------------------------------------------------------------------------------------------------
  Transport
-------------------------------------------------------------------------------------------------*/

/// HTTP GET capability consumed by the [Client](crate::Client) query functions.
///
/// The default implementation is [HttpTransport]. Implement this trait to substitute a different
/// HTTP stack, or to inject a canned collaborator in tests. Timeout and cancellation policy
/// belong to the transport; a timed-out or cancelled request must surface as an `Err`, never as
/// a fabricated response.
pub trait Transport: Send + Sync {
    /// Perform one GET request against `url` with the given query parameters.
    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<HttpResponse>;
}

/*--------------------------------------------------------------------------------------
  HTTP Response
--------------------------------------------------------------------------------------*/

/// Response surface the query functions need from the transport: the HTTP status code and the
/// raw response body.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/*--------------------------------------------------------------------------------------
  Default Transport
--------------------------------------------------------------------------------------*/

/// Default [Transport] implementation backed by a blocking reqwest client.
#[derive(Debug, Default)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<HttpResponse> {
        let response = self.client.get(url).query(query).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
