//! HTTP reachability probe

use crate::{HttpConfig, OracleError};
use attest_domain::{HttpProbe, OracleFailure, ProbeMethod};
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use reqwest::{Method, Url};
use tracing::debug;

/// Blocking HTTP probe with bounded timeouts and redirect cap
pub struct ReqwestProbe {
    client: Client,
}

impl ReqwestProbe {
    /// Build a probe from configuration
    pub fn new(config: &HttpConfig) -> Result<Self, OracleError> {
        config.validate().map_err(OracleError::Config)?;
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .redirect(Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

fn classify_error(err: &reqwest::Error) -> OracleFailure {
    if err.is_redirect() {
        OracleFailure::TooManyRedirects
    } else if err.is_timeout() {
        OracleFailure::Timeout
    } else if err.is_builder() {
        OracleFailure::InvalidRequest(err.to_string())
    } else {
        OracleFailure::Failed(err.to_string())
    }
}

impl HttpProbe for ReqwestProbe {
    fn probe(&self, method: ProbeMethod, url: &str) -> Result<u16, OracleFailure> {
        let parsed = Url::parse(url).map_err(|e| OracleFailure::InvalidRequest(e.to_string()))?;
        let method = match method {
            ProbeMethod::Head => Method::HEAD,
            ProbeMethod::Get => Method::GET,
        };

        debug!(%method, url, "probing");
        let response = self
            .client
            .request(method, parsed)
            .send()
            .map_err(|e| classify_error(&e))?;
        Ok(response.status().as_u16())
    }
}
