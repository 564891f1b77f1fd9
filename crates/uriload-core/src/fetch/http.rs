//! HTTP(S) GET via libcurl.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use crate::error::FetchError;

/// Options for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpRequestOptions {
    /// Extra request headers, sent as `Name: value`.
    pub headers: HashMap<String, String>,
    /// Follow 3xx redirects.
    pub follow_redirects: bool,
    /// Maximum number of redirects to follow.
    pub max_redirections: u32,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Optional User-Agent string.
    pub user_agent: Option<String>,
    /// Abort the transfer once the body exceeds this many bytes (None = no limit).
    pub max_bytes: Option<u64>,
}

impl Default for HttpRequestOptions {
    fn default() -> Self {
        Self {
            headers: HashMap::new(),
            follow_redirects: true,
            max_redirections: 10,
            connect_timeout_secs: 15,
            timeout_secs: 30,
            user_agent: None,
            max_bytes: None,
        }
    }
}

/// Performs a GET and returns the response body.
///
/// Runs in the current thread.
pub fn http_get(url: &str, options: &HttpRequestOptions) -> Result<Vec<u8>, FetchError> {
    let curl_err = |source| FetchError::Http {
        url: url.to_string(),
        source,
    };

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(curl_err)?;
    easy.get(true).map_err(curl_err)?;
    easy.follow_location(options.follow_redirects).map_err(curl_err)?;
    easy.max_redirections(options.max_redirections).map_err(curl_err)?;
    easy.connect_timeout(Duration::from_secs(options.connect_timeout_secs))
        .map_err(curl_err)?;
    easy.timeout(Duration::from_secs(options.timeout_secs))
        .map_err(curl_err)?;
    if let Some(ua) = &options.user_agent {
        easy.useragent(ua).map_err(curl_err)?;
    }

    let mut list = curl::easy::List::new();
    for (k, v) in &options.headers {
        list.append(&header_line(k, v)).map_err(curl_err)?;
    }
    if !options.headers.is_empty() {
        easy.http_headers(list).map_err(curl_err)?;
    }

    let mut body: Vec<u8> = Vec::new();
    let mut oversized = false;
    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                if let Some(limit) = options.max_bytes {
                    if (body.len() + data.len()) as u64 > limit {
                        oversized = true;
                        return Ok(0); // abort transfer
                    }
                }
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(curl_err)?;
        let performed = transfer.perform();
        drop(transfer);
        if oversized {
            return Err(FetchError::TooLarge {
                path: url.to_string(),
                size: body.len() as u64,
                limit: options.max_bytes.unwrap_or_default(),
            });
        }
        performed.map_err(curl_err)?;
    }

    let code = easy.response_code().map_err(curl_err)?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Status {
            url: url.to_string(),
            code,
        });
    }

    tracing::debug!("GET {} -> HTTP {} ({} bytes)", url, code, body.len());
    Ok(body)
}

/// Formats a request header for libcurl. `Name:` with nothing after it would
/// remove the header, so empty values use the `Name;` form.
fn header_line(name: &str, value: &str) -> String {
    let (name, value) = (name.trim(), value.trim());
    if value.is_empty() {
        format!("{};", name)
    } else {
        format!("{}: {}", name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lines() {
        assert_eq!(header_line(" X-Token ", " abc "), "X-Token: abc");
        assert_eq!(header_line("X-Empty", ""), "X-Empty;");
        assert_eq!(header_line("X-Empty", "   "), "X-Empty;");
    }

    #[test]
    fn default_options() {
        let opts = HttpRequestOptions::default();
        assert!(opts.follow_redirects);
        assert_eq!(opts.max_redirections, 10);
        assert_eq!(opts.connect_timeout_secs, 15);
        assert_eq!(opts.timeout_secs, 30);
        assert!(opts.headers.is_empty());
        assert!(opts.max_bytes.is_none());
    }

    #[test]
    fn connection_refused_is_http_error() {
        // Bind then drop a listener to get a port with nothing behind it.
        let port = {
            let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            l.local_addr().unwrap().port()
        };
        let opts = HttpRequestOptions {
            connect_timeout_secs: 2,
            timeout_secs: 2,
            ..Default::default()
        };
        let url = format!("http://127.0.0.1:{}/x.yaml", port);
        match http_get(&url, &opts) {
            Err(FetchError::Http { url: u, .. }) => assert_eq!(u, url),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
