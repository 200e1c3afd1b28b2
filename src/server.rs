use std::sync::Arc;

use axum::Router;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::detect::Detector;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Form payload for `POST /predict`. Fields arrive as raw strings so
/// that a missing field (400) and an unparsable one (500) keep their
/// distinct statuses.
#[derive(Debug, Deserialize)]
pub struct PredictForm {
    pub frequency: Option<String>,
    pub wind_strength: Option<String>,
}

/// Successful scoring response, echoing the inputs back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// -1 = anomaly, 1 = normal.
    pub prediction: i32,
    pub frequency: f64,
    pub wind_strength: f64,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the scoring router around an already-fit detector. The
/// detector is read-only from here on, so handlers share it without
/// locks.
pub fn app(detector: Arc<Detector>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/favicon.ico", get(favicon))
        .route("/predict", get(predict_hint).post(predict))
        .layer(CorsLayer::permissive())
        .with_state(detector)
}

/// Liveness probe.
async fn home() -> &'static str {
    "Bridgewatch anomaly detection service is running!"
}

/// Browsers ask for this; answer with an empty 204 instead of a 404.
async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn predict_hint() -> (StatusCode, &'static str) {
    (
        StatusCode::BAD_REQUEST,
        "This endpoint requires a POST request with a frequency value.",
    )
}

async fn predict(
    State(detector): State<Arc<Detector>>,
    Form(form): Form<PredictForm>,
) -> Response {
    let Some(raw_frequency) = form.frequency else {
        log::warn!("predict request without a frequency field");
        return error_response(StatusCode::BAD_REQUEST, "No frequency value provided");
    };

    let parsed = raw_frequency.trim().parse::<f64>().and_then(|frequency| {
        form.wind_strength
            .as_deref()
            .unwrap_or("0")
            .trim()
            .parse::<f64>()
            .map(|wind_strength| (frequency, wind_strength))
    });

    let (frequency, wind_strength) = match parsed {
        Ok(pair) => pair,
        Err(e) => {
            log::error!("predict request with unparsable input: {e}");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string());
        }
    };

    log::info!("received frequency {frequency}, wind strength {wind_strength}");

    // Wind strength is echoed back but takes no part in scoring.
    let prediction = detector.score(frequency);
    log::info!(
        "prediction: {}",
        if prediction == -1 { "anomaly" } else { "normal" }
    );

    Json(PredictionResponse {
        prediction,
        frequency,
        wind_strength,
    })
    .into_response()
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use tower::util::ServiceExt; // for `oneshot`

    use super::*;
    use crate::detect::ForestParams;

    /// Detector fit on an undamaged band around 1.0 Hz with a low
    /// damaged tail, shaped like the bridge dataset.
    fn test_app() -> Router {
        let mut calibration: Vec<f64> = (0..192)
            .map(|i| 0.99 + 0.02 * i as f64 / 191.0)
            .collect();
        calibration.extend((0..48).map(|i| 0.945 + 0.01 * i as f64 / 47.0));
        let detector =
            Detector::fit(&calibration, ForestParams::default()).expect("fit detector");
        app(Arc::new(detector))
    }

    async fn post_form(router: Router, body: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/predict")
                    .method("POST")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).expect("JSON body");
        (status, value)
    }

    #[tokio::test]
    async fn a_typical_frequency_is_normal() {
        let (status, body) = post_form(test_app(), "frequency=1.0&wind_strength=2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["prediction"], 1);
        assert_eq!(body["frequency"], 1.0);
        assert_eq!(body["wind_strength"], 2.0);
    }

    #[tokio::test]
    async fn a_far_off_frequency_is_anomalous() {
        let (status, body) = post_form(test_app(), "frequency=0.5&wind_strength=9").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["prediction"], -1);
    }

    #[tokio::test]
    async fn repeated_requests_get_the_same_label() {
        let router = test_app();
        let (_, first) = post_form(router.clone(), "frequency=0.97&wind_strength=3").await;
        for _ in 0..3 {
            let (status, body) =
                post_form(router.clone(), "frequency=0.97&wind_strength=3").await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["prediction"], first["prediction"]);
        }
    }

    #[tokio::test]
    async fn missing_frequency_is_a_client_error() {
        let (status, body) = post_form(test_app(), "wind_strength=2").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No frequency value provided");
    }

    #[tokio::test]
    async fn non_numeric_frequency_is_a_server_error() {
        let (status, body) = post_form(test_app(), "frequency=abc&wind_strength=2").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().is_some_and(|m| !m.is_empty()));
    }

    #[tokio::test]
    async fn non_numeric_wind_strength_is_a_server_error() {
        let (status, body) = post_form(test_app(), "frequency=1.0&wind_strength=gusty").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().is_some_and(|m| !m.is_empty()));
    }

    #[tokio::test]
    async fn missing_wind_strength_defaults_to_zero() {
        let (status, body) = post_form(test_app(), "frequency=1.0").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["wind_strength"], 0.0);
    }

    #[tokio::test]
    async fn get_on_predict_is_rejected_with_a_hint() {
        let response = test_app()
            .oneshot(Request::builder().uri("/predict").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("POST"));
    }

    #[tokio::test]
    async fn liveness_route_returns_text() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(!bytes.is_empty());
    }

    #[tokio::test]
    async fn favicon_is_an_empty_no_content() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/favicon.ico")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }
}
