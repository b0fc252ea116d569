use reqwest::blocking::Response;

pub trait HttpClient {
    fn get(&self, url: &str) -> reqwest::Result<Response>;
}
