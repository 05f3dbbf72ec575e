//! Google Sheets adapter.
//!
//! Implements the `gbot-core` ContentPort over the public `values.get` REST
//! endpoint with an API key. Read-only, no retries, no caching: every call is
//! a fresh remote read.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use gbot_core::{
    content::{ContentPort, SheetRow},
    errors::Error,
    Result,
};

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

pub struct SheetsClient {
    http: reqwest::Client,
    spreadsheet_id: String,
    api_key: String,
}

/// Response body of `spreadsheets.values.get`. `values` is omitted entirely
/// for an empty range.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl SheetsClient {
    pub fn new(spreadsheet_id: String, api_key: String, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Sheets(format!("failed to build http client: {e}")))?;

        Ok(Self {
            http,
            spreadsheet_id,
            api_key,
        })
    }

    fn values_url(&self, range: &str) -> String {
        format!(
            "{SHEETS_API_BASE}/{}/values/{}?key={}",
            self.spreadsheet_id,
            urlencoding::encode(range),
            self.api_key,
        )
    }
}

#[async_trait]
impl ContentPort for SheetsClient {
    async fn fetch_range(&self, range: &str) -> Result<Vec<SheetRow>> {
        debug!("fetching range {range}");

        let resp = self
            .http
            .get(self.values_url(range))
            .send()
            .await
            .map_err(|e| Error::Sheets(format!("request for {range} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Sheets(format!(
                "values.get for {range} returned {status}"
            )));
        }

        let body: ValueRange = resp
            .json()
            .await
            .map_err(|e| Error::Sheets(format!("bad values.get body for {range}: {e}")))?;

        Ok(body.values.into_iter().map(SheetRow).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_urlencoded_into_the_path() {
        let client = SheetsClient::new(
            "sheet123".to_string(),
            "key456".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();

        let url = client.values_url("BASIC!A2:D");
        assert_eq!(
            url,
            "https://sheets.googleapis.com/v4/spreadsheets/sheet123/values/BASIC%21A2%3AD?key=key456"
        );
    }

    #[test]
    fn missing_values_field_decodes_as_empty() {
        let body: ValueRange = serde_json::from_str(r#"{"range":"broadcast!A1:A1000"}"#).unwrap();
        assert!(body.values.is_empty());
    }

    #[test]
    fn ragged_rows_decode_as_is() {
        let body: ValueRange =
            serde_json::from_str(r#"{"values":[["t","a","c","g"],["only-title"]]}"#).unwrap();
        assert_eq!(body.values.len(), 2);
        assert_eq!(body.values[1], vec!["only-title"]);
    }
}
