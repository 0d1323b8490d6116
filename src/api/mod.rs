use crate::config::PageConfig;
use crate::models::{MutationResponse, RecordFields, RecordId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Network,
    Http,
    Parse,
    /// The server answered but reported `success: false`.
    Rejected,
}

#[derive(Clone, Debug)]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    /// Reason the server gave, if any. Shown to the user.
    pub detail: Option<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
            detail: None,
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
            detail: None,
        }
    }

    fn http(status: u16, body: &str, ctx: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: format!("{ctx} ({status}): {body}"),
            detail: None,
        }
    }

    pub(crate) fn rejected(reason: Option<&str>) -> Self {
        Self {
            kind: ApiErrorKind::Rejected,
            message: reason.unwrap_or("Server reported failure").to_string(),
            detail: reason.map(str::to_string),
        }
    }

    /// Text worth showing next to the generic failure notice.
    ///
    /// Only server-provided reasons qualify; transport noise stays in the console.
    pub fn user_detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

/// Client for the two record endpoints of the listing page.
#[derive(Clone)]
pub(crate) struct RecordsClient {
    config: PageConfig,
}

impl RecordsClient {
    pub fn new(config: PageConfig) -> Self {
        Self { config }
    }

    pub async fn update_record(&self, id: &RecordId, fields: &RecordFields) -> ApiResult<()> {
        self.request_api(&self.config.update_url(id.as_str()), Some(fields))
            .await
            .map(|_| ())
    }

    pub async fn delete_record(&self, id: &RecordId) -> ApiResult<()> {
        self.request_api(&self.config.delete_url(id.as_str()), None::<&()>)
            .await
            .map(|_| ())
    }

    async fn request_api(
        &self,
        url: &str,
        body: Option<&impl serde::Serialize>,
    ) -> ApiResult<MutationResponse> {
        let client = reqwest::Client::new();
        let mut req = client.post(url);

        if let Some(b) = body {
            req = req.json(b);
        }

        let res = req.send().await.map_err(ApiError::network)?;
        let status = res.status().as_u16();
        let text = res.text().await.map_err(ApiError::network)?;

        Self::interpret_response(status, &text)
    }

    /// Maps a raw reply onto success or one of the failure kinds.
    ///
    /// A reply is a success only when the status is 2xx and the body says
    /// `success: true`.
    pub(crate) fn interpret_response(status: u16, body: &str) -> ApiResult<MutationResponse> {
        let is_success_status = (200..300).contains(&status);

        let parsed = match serde_json::from_str::<MutationResponse>(body) {
            Ok(p) => p,
            Err(e) => {
                return Err(if is_success_status {
                    ApiError::parse(e)
                } else {
                    ApiError::http(status, body.trim(), "Request failed")
                });
            }
        };

        if is_success_status && parsed.success {
            Ok(parsed)
        } else if !is_success_status && parsed.reason().is_none() {
            Err(ApiError::http(status, body.trim(), "Request failed"))
        } else {
            Err(ApiError::rejected(parsed.reason()))
        }
    }
}
