use contracts::activities::{CommuteMonth, FetchTriggerResult, MonthlyRow, ReportPeriod};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{ApiRequest, GlooTransport, HttpTransport, RawResponse};
use crate::config::AppConfig;
use crate::shared::api_utils::{api_url, normalize_base_url};
use crate::shared::export::{download_bytes, XLSX_MIME_TYPE};

const ACTIVITIES_ENDPOINT: &str = "activities";

const COMMUTE_MONTHS_ERROR: &str = "Failed to load commute months";

/// How a non-2xx response becomes an error message
#[derive(Debug, Clone, Copy)]
enum ErrorMessage {
    /// Server-provided body text
    ResponseBody,
    /// Fixed text, body discarded
    Fixed(&'static str),
}

/// Spreadsheet returned by the report endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Typed access to the `/activities` endpoints
#[derive(Debug, Clone)]
pub struct ApiClient<T = GlooTransport> {
    base_url: String,
    transport: T,
}

impl ApiClient<GlooTransport> {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_transport(&config.api_base_url, GlooTransport)
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        api_url(&self.base_url, &format!("{}/{}", ACTIVITIES_ENDPOINT, path))
    }

    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        log::debug!("{:?} {}", request.method, request.url);
        self.transport.send(request).await
    }

    /// Distance totals per (year, month, sport). Order is whatever the backend returns.
    pub async fn fetch_monthly_totals(&self) -> Result<Vec<MonthlyRow>, ApiError> {
        let response = self
            .send(ApiRequest::get(self.endpoint("monthly-totals")))
            .await?;
        let response = check_status(response, ErrorMessage::ResponseBody)?;
        decode_json(&response)
    }

    /// Ask the backend to import activities from Strava
    pub async fn trigger_fetch(&self) -> Result<FetchTriggerResult, ApiError> {
        let response = self.send(ApiRequest::post(self.endpoint("fetch"))).await?;
        let response = check_status(response, ErrorMessage::ResponseBody)?;
        decode_json(&response)
    }

    /// Reporting periods that contain at least one commute
    pub async fn fetch_commute_months(&self) -> Result<Vec<CommuteMonth>, ApiError> {
        let response = self
            .send(ApiRequest::get(self.endpoint("commute-months")))
            .await?;
        let response = check_status(response, ErrorMessage::Fixed(COMMUTE_MONTHS_ERROR))?;
        decode_json(&response)
    }

    /// Commute report spreadsheet for a period, with the name it should be saved under
    pub async fn fetch_report(&self, period: ReportPeriod) -> Result<ReportFile, ApiError> {
        let query = period
            .query_string()
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let url = format!("{}?{}", self.endpoint("report"), query);

        let response = self.send(ApiRequest::get(url)).await?;
        let response = check_status(response, ErrorMessage::ResponseBody)?;

        Ok(ReportFile {
            file_name: period.file_name(),
            bytes: response.body,
        })
    }

    /// Fetch the report for `year`/`month` and hand it to the browser as a download.
    /// Each call downloads again.
    pub async fn download_report(&self, year: i32, month: u32) -> Result<(), ApiError> {
        let period =
            ReportPeriod::new(year, month).map_err(|e| ApiError::InvalidPeriod(e.to_string()))?;
        let file = self.fetch_report(period).await?;
        download_bytes(&file.bytes, &file.file_name, XLSX_MIME_TYPE).map_err(ApiError::Download)
    }
}

fn check_status(response: RawResponse, message: ErrorMessage) -> Result<RawResponse, ApiError> {
    if response.ok() {
        return Ok(response);
    }

    let message = match message {
        ErrorMessage::ResponseBody => {
            let text = response.text();
            if text.trim().is_empty() {
                format!("HTTP error: {}", response.status)
            } else {
                text
            }
        }
        ErrorMessage::Fixed(text) => text.to_string(),
    };

    Err(ApiError::Http {
        status: response.status,
        message,
    })
}

fn decode_json<D: DeserializeOwned>(response: &RawResponse) -> Result<D, ApiError> {
    serde_json::from_slice(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::Method;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;

    const BASE: &str = "http://localhost:8000/";

    struct MockTransport {
        response: Result<RawResponse, ApiError>,
        requests: RefCell<Vec<ApiRequest>>,
    }

    impl MockTransport {
        fn respond(status: u16, body: &str) -> Self {
            Self {
                response: Ok(RawResponse::new(status, body.as_bytes())),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn fail(error: ApiError) -> Self {
            Self {
                response: Err(error),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for MockTransport {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
            self.requests.borrow_mut().push(request);
            self.response.clone()
        }
    }

    fn client(transport: MockTransport) -> ApiClient<MockTransport> {
        ApiClient::with_transport(BASE, transport)
    }

    fn sent(client: &ApiClient<MockTransport>) -> Vec<ApiRequest> {
        client.transport.requests.borrow().clone()
    }

    #[test]
    fn test_fetch_monthly_totals_decodes_rows() {
        let body = r#"[{"year":2024,"month":3,"month_name":"March","sport_type":"Run","total_km":42.5}]"#;
        let client = client(MockTransport::respond(200, body));

        let rows = block_on(client.fetch_monthly_totals()).unwrap();

        assert_eq!(
            rows,
            vec![MonthlyRow {
                year: 2024,
                month: 3,
                month_name: "March".to_string(),
                sport_type: "Run".to_string(),
                total_km: 42.5,
            }]
        );
        assert_eq!(
            sent(&client),
            vec![ApiRequest::get("http://localhost:8000/activities/monthly-totals")]
        );
    }

    #[test]
    fn test_fetch_monthly_totals_keeps_backend_order() {
        let body = r#"[
            {"year":2023,"month":1,"month_name":"January","sport_type":"Ride","total_km":1.0},
            {"year":2024,"month":5,"month_name":"May","sport_type":"Ride","total_km":2.0}
        ]"#;
        let client = client(MockTransport::respond(200, body));

        let rows = block_on(client.fetch_monthly_totals()).unwrap();
        let years: Vec<i32> = rows.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2023, 2024]);
    }

    #[test]
    fn test_fetch_monthly_totals_shape_mismatch() {
        let client = client(MockTransport::respond(200, r#"[{"year":"2024"}]"#));
        let err = block_on(client.fetch_monthly_totals()).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_fetch_monthly_totals_malformed_json() {
        let client = client(MockTransport::respond(200, r#"[{"year":2024,"#));
        let err = block_on(client.fetch_monthly_totals()).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_trigger_fetch_malformed_json() {
        let client = client(MockTransport::respond(200, r#"{"fetched":"#));
        let err = block_on(client.trigger_fetch()).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_fetch_commute_months_html_body() {
        let client = client(MockTransport::respond(
            200,
            "<!DOCTYPE html><html><body>Gateway</body></html>",
        ));
        let err = block_on(client.fetch_commute_months()).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_fetch_monthly_totals_checks_status() {
        let client = client(MockTransport::respond(500, "database unavailable"));
        let err = block_on(client.fetch_monthly_totals()).unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "database unavailable");
    }

    #[test]
    fn test_trigger_fetch_posts() {
        let client = client(MockTransport::respond(200, r#"{"fetched":12}"#));

        let result = block_on(client.trigger_fetch()).unwrap();

        assert_eq!(result.fetched, 12);
        let requests = sent(&client);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].url, "http://localhost:8000/activities/fetch");
    }

    #[test]
    fn test_trigger_fetch_error_uses_body() {
        let client = client(MockTransport::respond(400, "bad request"));
        let err = block_on(client.trigger_fetch()).unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 400,
                message: "bad request".to_string()
            }
        );
        assert_eq!(err.to_string(), "bad request");
    }

    #[test]
    fn test_empty_error_body_falls_back_to_status() {
        let client = client(MockTransport::respond(502, ""));
        let err = block_on(client.trigger_fetch()).unwrap_err();
        assert_eq!(err.to_string(), "HTTP error: 502");
    }

    #[test]
    fn test_fetch_commute_months() {
        let body = r#"[{"year":2024,"month":3,"label":"March 2024"},{"year":2024,"month":2,"label":"February 2024"}]"#;
        let client = client(MockTransport::respond(200, body));

        let months = block_on(client.fetch_commute_months()).unwrap();

        assert_eq!(months.len(), 2);
        assert_eq!(months[0].label, "March 2024");
        assert_eq!(
            sent(&client),
            vec![ApiRequest::get("http://localhost:8000/activities/commute-months")]
        );
    }

    #[test]
    fn test_fetch_commute_months_error_is_fixed() {
        let client = client(MockTransport::respond(400, "bad request"));
        let err = block_on(client.fetch_commute_months()).unwrap_err();
        assert_eq!(err.to_string(), COMMUTE_MONTHS_ERROR);
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_fetch_report_query_and_file_name() {
        let client = client(MockTransport::respond(200, "PK\u{3}\u{4}xlsx"));
        let period = ReportPeriod::new(2024, 3).unwrap();

        let file = block_on(client.fetch_report(period)).unwrap();

        assert_eq!(file.file_name, "Indemnite_KM_MB_2024_03.xlsx");
        assert_eq!(file.bytes, b"PK\x03\x04xlsx".to_vec());
        assert_eq!(
            sent(&client),
            vec![ApiRequest::get(
                "http://localhost:8000/activities/report?year=2024&month=3"
            )]
        );
    }

    #[test]
    fn test_fetch_report_two_digit_month() {
        let client = client(MockTransport::respond(200, "data"));
        let period = ReportPeriod::new(2024, 11).unwrap();

        let file = block_on(client.fetch_report(period)).unwrap();

        assert_eq!(file.file_name, "Indemnite_KM_MB_2024_11.xlsx");
        assert_eq!(
            sent(&client)[0].url,
            "http://localhost:8000/activities/report?year=2024&month=11"
        );
    }

    #[test]
    fn test_fetch_report_error_uses_body() {
        let client = client(MockTransport::respond(400, "bad request"));
        let period = ReportPeriod::new(2024, 3).unwrap();
        let err = block_on(client.fetch_report(period)).unwrap_err();
        assert_eq!(err.to_string(), "bad request");
    }

    #[test]
    fn test_download_report_rejects_invalid_month_without_request() {
        let client = client(MockTransport::respond(200, "data"));
        let err = block_on(client.download_report(2024, 13)).unwrap_err();
        assert!(matches!(err, ApiError::InvalidPeriod(_)));
        assert!(sent(&client).is_empty());
    }

    #[test]
    fn test_download_report_propagates_http_error() {
        let client = client(MockTransport::respond(404, "bad request"));
        let err = block_on(client.download_report(2024, 3)).unwrap_err();
        assert_eq!(err.to_string(), "bad request");
    }

    #[test]
    fn test_transport_error_propagates() {
        let client = client(MockTransport::fail(ApiError::Transport(
            "connection refused".to_string(),
        )));
        let err = block_on(client.fetch_commute_months()).unwrap_err();
        assert_eq!(err, ApiError::Transport("connection refused".to_string()));
    }

    #[test]
    fn test_base_url_without_trailing_slash() {
        let client = ApiClient::with_transport(
            "https://stats.example.org/api",
            MockTransport::respond(200, "[]"),
        );
        block_on(client.fetch_monthly_totals()).unwrap();
        assert_eq!(
            sent(&client)[0].url,
            "https://stats.example.org/api/activities/monthly-totals"
        );
    }
}
