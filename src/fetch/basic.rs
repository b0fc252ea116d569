use super::client::HttpClient;
use reqwest::blocking::{Client, Response};

pub struct BasicClient(Client);

impl BasicClient {
    /// Panics if the TLS backend cannot be initialized, same as
    /// [`reqwest::blocking::Client::new`].
    pub fn new() -> Self {
        // The invoking supervisor owns the overall deadline, so the
        // client-side default timeout is disabled.
        let client = Client::builder()
            .timeout(None)
            .build()
            .expect("failed to build blocking HTTP client");
        Self(client)
    }
}

impl Default for BasicClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for BasicClient {
    fn get(&self, url: &str) -> reqwest::Result<Response> {
        self.0.get(url).send()
    }
}
