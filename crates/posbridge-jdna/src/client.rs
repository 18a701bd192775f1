//! HTTP client for the JDNA retail-locations API.
//!
//! Wraps `reqwest` with the static CF Access credential headers and the
//! banner-dependent endpoint selection, and exposes
//! [`JdnaClient::get_locations`], which runs the whole
//! fetch → validate → filter → rekey pipeline in one call.

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use posbridge_core::AppEnv;

use crate::directory::build_directory;
use crate::error::JdnaError;
use crate::policy::{filter_locations, SPC_BANNER};
use crate::types::LocationDirectory;
use crate::validate::validate_records;

const SPC_PATH_SEGMENT: &str = "ShoePalace";
const CLIENT_ID_HEADER: &str = "CF-Access-Client-Id";
const CLIENT_SECRET_HEADER: &str = "CF-Access-Client-Secret";

/// Client for the JDNA locations API.
///
/// Holds the HTTP client, base URL, and credential header values. Use
/// [`JdnaClient::new`] for production or [`JdnaClient::with_base_url`] to
/// point at a mock server in tests.
pub struct JdnaClient {
    client: Client,
    base_url: Url,
    spc_url: Url,
    client_id: String,
    client_secret: String,
}

impl JdnaClient {
    /// Creates a client for the production service at `https://{host}`.
    ///
    /// # Errors
    ///
    /// Returns [`JdnaError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`JdnaError::InvalidBaseUrl`] if `host` does not
    /// form a valid URL.
    pub fn new(
        host: &str,
        client_id: &str,
        client_secret: &str,
        timeout_secs: u64,
    ) -> Result<Self, JdnaError> {
        Self::with_base_url(&format!("https://{host}"), client_id, client_secret, timeout_secs)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`JdnaError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`JdnaError::InvalidBaseUrl`] if `base_url` is not
    /// a valid URL.
    pub fn with_base_url(
        base_url: &str,
        client_id: &str,
        client_secret: &str,
        timeout_secs: u64,
    ) -> Result<Self, JdnaError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("posbridge/0.1 (store-provisioning)")
            .build()?;

        // Normalise: exactly one trailing slash so joining the Shoe Palace
        // segment appends rather than replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| JdnaError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        let spc_url = parsed
            .join(SPC_PATH_SEGMENT)
            .map_err(|e| JdnaError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: parsed,
            spc_url,
            client_id: client_id.to_owned(),
            client_secret: client_secret.to_owned(),
        })
    }

    /// Endpoint for a banner: only the exact banner `"spc"` selects the
    /// Shoe Palace sub-path.
    fn locations_url(&self, banner: Option<&str>) -> &Url {
        if banner == Some(SPC_BANNER) {
            &self.spc_url
        } else {
            &self.base_url
        }
    }

    /// Fetches the raw, untyped store array for a banner.
    ///
    /// One GET, no retry, no pagination. A network failure, non-2xx status,
    /// or a body that is not a JSON array propagates to the caller.
    ///
    /// # Errors
    ///
    /// - [`JdnaError::Http`] on network failure or non-2xx HTTP status.
    /// - [`JdnaError::Deserialize`] if the body is not a JSON array.
    pub async fn get_stores(
        &self,
        request_id: &str,
        app_env: AppEnv,
        banner: Option<&str>,
    ) -> Result<Vec<Value>, JdnaError> {
        let url = self.locations_url(banner);

        tracing::debug!(
            request_id,
            ?banner,
            app_env = %app_env,
            url = %url,
            "requesting store directory"
        );

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(CLIENT_ID_HEADER, &self.client_id)
            .header(CLIENT_SECRET_HEADER, &self.client_secret)
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let records: Vec<Value> =
            serde_json::from_str(&body).map_err(|e| JdnaError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        tracing::debug!(
            request_id,
            ?banner,
            app_env = %app_env,
            count = records.len(),
            "received store directory"
        );

        Ok(records)
    }

    /// Runs the full pipeline: fetch, validate each record (dropping and
    /// logging failures), apply the banner/environment policy, and rekey the
    /// survivors by channel-prefixed store code.
    ///
    /// The result is a pure function of the raw response, `app_env`, and
    /// `banner`; repeated runs over the same input produce an identical
    /// directory.
    ///
    /// # Errors
    ///
    /// - [`JdnaError::Http`] on network failure or non-2xx HTTP status.
    /// - [`JdnaError::Deserialize`] if the body is not a JSON array.
    ///
    /// Per-record validation failures are logged and dropped, never returned.
    pub async fn get_locations(
        &self,
        request_id: &str,
        app_env: AppEnv,
        banner: Option<&str>,
    ) -> Result<LocationDirectory, JdnaError> {
        let raw = self.get_stores(request_id, app_env, banner).await?;

        let (validated, failures) = validate_records(raw);
        for failure in &failures {
            tracing::error!(
                request_id,
                ?banner,
                app_env = %app_env,
                error = %failure.error,
                raw = %failure.raw,
                "store record failed validation, dropped"
            );
        }

        let filtered = filter_locations(banner, app_env, validated);
        let directory = build_directory(filtered);

        tracing::debug!(
            request_id,
            ?banner,
            app_env = %app_env,
            entries = directory.len(),
            directory = ?directory,
            "built location directory"
        );

        Ok(directory)
    }
}
