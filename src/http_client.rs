use std::time::Duration;

// Standard proxy environment variables are honored by reqwest's default
// builder; nothing here opts out of them.
pub fn client_with_timeout(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().timeout(timeout).build()
}
