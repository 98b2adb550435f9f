use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

pub const DEFAULT_CONTACT_PATH: &str = "/api/contact";
pub const DEFAULT_MAX_BODY_SIZE: usize = 64 * 1024;
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Configuration {
    pub contact_path: SmolStr,
    pub frontend_dir: Option<SmolStr>,
    pub max_body_size: usize,
    pub port: u16,
    pub request_timeout_secs: u64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            contact_path: SmolStr::new_static(DEFAULT_CONTACT_PATH),
            frontend_dir: None,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            port: DEFAULT_PORT,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
