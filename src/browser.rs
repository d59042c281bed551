//! Guess whether an HTTP request came from a web browser.

use std::collections::HashMap;

pub const USER_AGENT: &str = "User-Agent";

/// Every mainstream browser still opens its user agent with this token
const BROWSER_TOKEN: &str = "Mozilla";

pub fn is_browser_user_agent(user_agent: &str) -> bool {
    user_agent.starts_with(BROWSER_TOKEN)
}

/// Look up `User-Agent` (case-insensitively) and test it. A request without
/// the header is not a browser.
pub fn is_browser_request(headers: &HashMap<String, String>) -> bool {
    headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(USER_AGENT))
        .map(|(_, value)| is_browser_user_agent(value))
        .unwrap_or(false)
}
