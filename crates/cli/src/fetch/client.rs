use std::time::Duration;

use pcbdash_vis::dashboard::PayloadSource;
use pcbdash_vis::payload::DashboardPayload;
use pcbdash_vis::range::Range;
use reqwest::Url;
use reqwest::blocking::Client;

use crate::fetch::error::FetchError;
use crate::fetch::error::Result;

pub(crate) struct DashboardClient {
    client: Client,
    base_url: Url,
}

impl DashboardClient {
    const ENDPOINT_PATH: &str = "/dashboard_data";
    const TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(base_url: Url) -> Result<Self> {
        let client = Client::builder().timeout(Self::TIMEOUT).build()?;

        Ok(Self { client, base_url })
    }

    pub fn url(&self, range: Range) -> Result<Url> {
        let endpoint = self
            .base_url
            .join(Self::ENDPOINT_PATH)
            .map_err(|e| FetchError::Url(e.to_string()))?;

        Url::parse_with_params(endpoint.as_str(), [("range", range.as_str())])
            .map_err(|e| FetchError::Url(e.to_string()))
    }

    pub fn dashboard_data(&self, range: Range) -> Result<DashboardPayload> {
        let url = self.url(range)?;
        tracing::debug!(%url, "fetching the dashboard data");

        let response = self.client.get(url).send()?;

        match response.status() {
            status_code if status_code.is_success() => {
                let body = response.text()?;
                let payload = DashboardPayload::from_json(&body)?;
                Ok(payload)
            }
            status_code => {
                let message = response.text()?;
                let error = FetchError::Response {
                    status_code,
                    message,
                };
                Err(error)
            }
        }
    }
}

impl PayloadSource for DashboardClient {
    type Error = FetchError;

    fn load(&self, range: Range) -> Result<DashboardPayload> {
        self.dashboard_data(range)
    }
}
