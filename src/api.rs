// 🌐 HTTP API - axum router over the scanner operations
//
// Every response uses the ApiResponse envelope:
//   { "success": true,  "data": ... }
//   { "success": false, "error": "..." }
// Input errors map to 400, provider/config failures to 500.

use crate::birth_date::BirthDate;
use crate::config::ScannerConfig;
use crate::error::ScannerError;
use crate::insight::{DestinyInsightProvider, PalmAnalysisMode};
use crate::numerology::NumerologyProfile;
use crate::reading::{Reading, ReadingRequest};
use crate::reducer::reduce_str;
use crate::zodiac::ZodiacSign;
use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn DestinyInsightProvider>,
    /// Mode used when a palm request names none
    pub default_palm_mode: PalmAnalysisMode,
}

impl AppState {
    pub fn new(provider: Arc<dyn DestinyInsightProvider>, config: &ScannerConfig) -> Self {
        let default_palm_mode = if config.palm.advanced {
            PalmAnalysisMode::Advanced
        } else {
            PalmAnalysisMode::Basic
        };
        AppState {
            provider,
            default_palm_mode,
        }
    }
}

/// API Response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Scanner error carried to the HTTP boundary
pub struct ApiError(ScannerError);

impl From<ScannerError> for ApiError {
    fn from(err: ScannerError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_input_error() {
            warn!(error = %self.0, "rejected request");
            StatusCode::BAD_REQUEST
        } else {
            error!(error = %self.0, "request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(ApiResponse::<()>::err(self.0.to_string()))).into_response()
    }
}

type ApiResult<T> = std::result::Result<Json<ApiResponse<T>>, ApiError>;

#[derive(Debug, Deserialize)]
pub struct PalmQuery {
    pub mode: Option<String>,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/numerology/:date - Numerology profile for YYYY-MM-DD
async fn get_numerology(Path(date): Path<String>) -> ApiResult<NumerologyProfile> {
    let date: BirthDate = date.parse()?;
    Ok(Json(ApiResponse::ok(NumerologyProfile::for_date(&date))))
}

/// GET /api/zodiac/:month/:day - Sign record
async fn get_zodiac(Path((month, day)): Path<(String, String)>) -> ApiResult<serde_json::Value> {
    let month: u32 = month
        .parse()
        .map_err(|_| ScannerError::InvalidDate(format!("month '{}'", month)))?;
    let day: u32 = day
        .parse()
        .map_err(|_| ScannerError::InvalidDate(format!("day '{}'", day)))?;

    let record = ZodiacSign::from_month_day(month, day)?.record();
    let value = serde_json::to_value(record)
        .map_err(|e| ScannerError::Provider(format!("serialize sign: {}", e)))?;
    Ok(Json(ApiResponse::ok(value)))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReduceResponse {
    pub input: String,
    pub root: u8,
    pub is_master: bool,
}

/// GET /api/reduce/:n - Digital root of a positive integer
async fn get_reduce(Path(n): Path<String>) -> ApiResult<ReduceResponse> {
    let root = reduce_str(&n)?;
    Ok(Json(ApiResponse::ok(ReduceResponse {
        input: n,
        root: root.value(),
        is_master: root.is_master(),
    })))
}

/// GET /api/reading?date=&time=&location=&name= - Full reading
async fn get_reading(
    State(state): State<AppState>,
    query: std::result::Result<Query<ReadingRequest>, QueryRejection>,
) -> ApiResult<Reading> {
    let Query(request) = query.map_err(|e| ScannerError::InvalidDate(e.body_text()))?;
    let reading = Reading::compute(&request, state.provider.as_ref(), None).await?;
    Ok(Json(ApiResponse::ok(reading)))
}

/// GET /api/destiny/:date/enhanced - Destiny number with insights
async fn get_enhanced_destiny(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> ApiResult<crate::insight::EnhancedDestiny> {
    let date: BirthDate = date.parse()?;
    let destiny = state.provider.enhanced_destiny(&date).await?;
    Ok(Json(ApiResponse::ok(destiny)))
}

/// POST /api/palm?mode=basic|advanced - Palm analysis of the raw request body
async fn post_palm(
    State(state): State<AppState>,
    Query(query): Query<PalmQuery>,
    body: Bytes,
) -> ApiResult<crate::insight::PalmAnalysis> {
    let mode = match query.mode {
        Some(mode) => mode.parse()?,
        None => state.default_palm_mode,
    };
    let analysis = state.provider.analyze_palm(&body, mode).await?;
    Ok(Json(ApiResponse::ok(analysis)))
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: AppState, config: &ScannerConfig) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/numerology/:date", get(get_numerology))
        .route("/zodiac/:month/:day", get(get_zodiac))
        .route("/reduce/:n", get(get_reduce))
        .route("/reading", get(get_reading))
        .route("/destiny/:date/enhanced", get(get_enhanced_destiny))
        .route("/palm", post(post_palm))
        .with_state(state);

    let app = Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http());

    if config.server.cors_permissive {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insight::LocalInsightProvider;
    use axum::body::Body;
    use axum::http::{Method, Request};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        let config = ScannerConfig::default();
        let state = AppState::new(Arc::new(LocalInsightProvider::new()), &config);
        router(state, &config)
    }

    async fn call(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        call(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], "OK");
    }

    #[tokio::test]
    async fn test_numerology_profile() {
        let (status, body) = get_json("/api/numerology/1990-05-07").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["mulank"]["number"], 7);
        assert_eq!(body["data"]["bhagyank"]["number"], 4);
        assert_eq!(body["data"]["power_number"]["number"], 11);
    }

    #[tokio::test]
    async fn test_invalid_date_is_bad_request() {
        let (status, body) = get_json("/api/numerology/1990-02-30").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("Invalid date"));
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_zodiac() {
        let (status, body) = get_json("/api/zodiac/4/19").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Aries");

        let (status, _) = get_json("/api/zodiac/2/30").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get_json("/api/zodiac/may/1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_reduce() {
        let (status, body) = get_json("/api/reduce/29").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["root"], 11);
        assert_eq!(body["data"]["is_master"], true);

        let (status, _) = get_json("/api/reduce/0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_reading() {
        let (status, body) =
            get_json("/api/reading?date=1990-05-07&time=14:30&location=Mumbai&name=Asha").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Asha");
        assert_eq!(body["data"]["astrology"]["sun_sign"]["name"], "Taurus");
        assert_eq!(body["data"]["astrology"]["moon_sign"]["name"], "Gemini Moon");

        let (status, body) = get_json("/api/reading").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_enhanced_destiny() {
        let (status, body) = get_json("/api/destiny/1990-05-07/enhanced").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["destiny_number"], 4);
        assert_eq!(body["data"]["insights"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_palm_upload() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/palm?mode=advanced")
            .body(Body::from(vec![1u8, 2, 3, 4, 5]))
            .unwrap();
        let (status, body) = call(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["confidence"], 0.92);
        assert!(body["data"]["features"].is_object());

        let empty = Request::builder()
            .method(Method::POST)
            .uri("/api/palm")
            .body(Body::empty())
            .unwrap();
        let (status, body) = call(empty).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Palm image is empty");

        let bad_mode = Request::builder()
            .method(Method::POST)
            .uri("/api/palm?mode=deep")
            .body(Body::from(vec![9u8]))
            .unwrap();
        let (status, _) = call(bad_mode).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
