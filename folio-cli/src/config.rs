use serde::Deserialize;

pub const DEFAULT_CONTACT_ENDPOINT: &str = "http://localhost:3000/api/contact";

#[derive(Deserialize)]
pub struct Configuration {
    #[serde(default = "default_contact_endpoint")]
    pub contact_endpoint: String,
}

fn default_contact_endpoint() -> String {
    DEFAULT_CONTACT_ENDPOINT.into()
}
