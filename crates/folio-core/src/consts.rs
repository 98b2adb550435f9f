use const_format::concatcp;
use git_version::git_version;

pub const PROJECT_IDENTIFIER: &str = "folio";

pub const USER_AGENT: &str = concatcp!(PROJECT_IDENTIFIER, "/", VERSION);
pub const VERSION: &str = concatcp!(
    env!("CARGO_PKG_VERSION"),
    "-",
    git_version!(fallback = "unknown")
);
