//! Integration tests for the payroll calendar engine.
//!
//! This test suite drives the HTTP router against a stub calendar source:
//! - Year payroll for a plain weekday calendar
//! - Leap years
//! - December rest date with and without next January
//! - Cache behaviour across requests
//! - Error cases

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Datelike, Local};
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use tower::ServiceExt;

use payroll_calendar::api::{AppState, create_router};
use payroll_calendar::calendar::{
    CalendarQuery, CalendarSliceProvider, CalendarSource, MemoryCache, days_in_year,
};
use payroll_calendar::config::ConfigLoader;
use payroll_calendar::error::{EngineError, EngineResult};

// =============================================================================
// Test Helpers
// =============================================================================

/// Serves a Monday-to-Friday calendar for any year.
struct WeekdaySource {
    next_january: bool,
    empty_years: Vec<i32>,
    year_calls: AtomicUsize,
}

impl WeekdaySource {
    fn new() -> Self {
        Self {
            next_january: true,
            empty_years: vec![],
            year_calls: AtomicUsize::new(0),
        }
    }

    fn without_next_january() -> Self {
        Self {
            next_january: false,
            ..Self::new()
        }
    }

    fn failing_for(year: i32) -> Self {
        Self {
            empty_years: vec![year],
            ..Self::new()
        }
    }
}

impl CalendarSource for WeekdaySource {
    fn fetch(&self, query: CalendarQuery) -> EngineResult<String> {
        match query.month {
            Some(_) if self.next_january => Ok(weekdays(31)),
            Some(_) => Err(EngineError::CalendarUnavailable {
                year: query.year,
                message: "connection refused".to_string(),
            }),
            None => {
                self.year_calls.fetch_add(1, Ordering::SeqCst);
                if self.empty_years.contains(&query.year) {
                    Ok(String::new())
                } else {
                    Ok(weekdays(days_in_year(query.year)))
                }
            }
        }
    }
}

fn weekdays(days: usize) -> String {
    "0000011".chars().cycle().take(days).collect()
}

fn create_router_for_test(source: Arc<WeekdaySource>) -> Router {
    let config = ConfigLoader::load("./config/payroll.yaml").expect("Failed to load config");
    let provider = CalendarSliceProvider::new(source).with_cache(Arc::new(MemoryCache::new(4)));
    create_router(AppState::new(config, provider))
}

fn decimal(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("decimal serialized as string")).unwrap()
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

// =============================================================================
// Year payroll
// =============================================================================

#[tokio::test]
async fn test_year_payroll_returns_twelve_months() {
    let router = create_router_for_test(Arc::new(WeekdaySource::new()));
    let (status, body) = get_json(router, "/api/30000/2023").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], 2023);
    assert_eq!(decimal(&body["salary"]), Decimal::from(30000));

    let months = body["months"].as_array().unwrap();
    assert_eq!(months.len(), 12);
    for (index, month) in months.iter().enumerate() {
        assert_eq!(month["month"], index as u64 + 1);
    }
}

#[tokio::test]
async fn test_january_figures() {
    let router = create_router_for_test(Arc::new(WeekdaySource::new()));
    let (_, body) = get_json(router, "/api/30000/2023").await;
    let january = &body["months"][0];

    assert_eq!(january["total_days"], 31);
    assert_eq!(january["workdays"], 23);
    assert_eq!(january["holidays"], 8);
    assert_eq!(decimal(&january["salary_per_day"]), Decimal::from(1304));
    assert_eq!(january["advance_workdays"], 11);
    assert_eq!(decimal(&january["advance_value"]), Decimal::from(14344));
    assert_eq!(decimal(&january["rest_value"]), Decimal::from(15656));
    assert_eq!(january["advance_date"], "2023-01-25");
    // February 1 continues the weekly pattern; day 10 is off, day 9 is not
    assert_eq!(january["rest_date"], "2023-02-09");
}

#[tokio::test]
async fn test_advance_plus_rest_is_salary() {
    let router = create_router_for_test(Arc::new(WeekdaySource::new()));
    let (_, body) = get_json(router, "/api/12345.67/2024").await;
    let salary = Decimal::from_str("12345.67").unwrap();

    for month in body["months"].as_array().unwrap() {
        assert_eq!(
            decimal(&month["advance_value"]) + decimal(&month["rest_value"]),
            salary
        );
    }
}

#[tokio::test]
async fn test_leap_year_february() {
    let router = create_router_for_test(Arc::new(WeekdaySource::new()));
    let (status, body) = get_json(router, "/api/30000/2024").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["months"][1]["total_days"], 29);
}

#[tokio::test]
async fn test_missing_year_uses_current_year() {
    let router = create_router_for_test(Arc::new(WeekdaySource::new()));
    let (status, body) = get_json(router, "/api/30000").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], Local::now().year());
}

#[tokio::test]
async fn test_maximum_salary_is_split_without_overflow() {
    let router = create_router_for_test(Arc::new(WeekdaySource::new()));
    let (status, body) = get_json(router, "/api/79228162514264337593543950335/2023").await;

    assert_eq!(status, StatusCode::OK);
    for month in body["months"].as_array().unwrap() {
        assert_eq!(
            decimal(&month["advance_value"]) + decimal(&month["rest_value"]),
            Decimal::MAX
        );
    }
}

// =============================================================================
// December rollover
// =============================================================================

#[tokio::test]
async fn test_december_rest_date_in_next_year() {
    let router = create_router_for_test(Arc::new(WeekdaySource::new()));
    let (_, body) = get_json(router, "/api/30000/2023").await;

    assert_eq!(body["months"][11]["rest_date"], "2024-01-10");
}

#[tokio::test]
async fn test_december_rest_date_absent_without_next_january() {
    let router = create_router_for_test(Arc::new(WeekdaySource::without_next_january()));
    let (status, body) = get_json(router, "/api/30000/2023").await;

    assert_eq!(status, StatusCode::OK);
    let december = body["months"][11].as_object().unwrap();
    assert!(!december.contains_key("rest_date"));
    assert_eq!(body["months"][10]["rest_date"], "2023-12-10");
}

// =============================================================================
// Caching
// =============================================================================

#[tokio::test]
async fn test_repeated_requests_hit_cache() {
    let source = Arc::new(WeekdaySource::new());
    let router = create_router_for_test(source.clone());

    let (first_status, first) = get_json(router.clone(), "/api/30000/2023").await;
    let (second_status, second) = get_json(router, "/api/30000/2023").await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first, second);
    assert_eq!(source.year_calls.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_empty_calendar_is_bad_gateway_without_months() {
    let router = create_router_for_test(Arc::new(WeekdaySource::failing_for(2023)));
    let (status, body) = get_json(router, "/api/30000/2023").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "CALENDAR_UNAVAILABLE");
    assert!(body.get("months").is_none());
}

#[tokio::test]
async fn test_non_numeric_salary_is_bad_request() {
    let router = create_router_for_test(Arc::new(WeekdaySource::new()));
    let (status, body) = get_json(router, "/api/abc/2023").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["message"], "Invalid salary");
}

#[tokio::test]
async fn test_negative_salary_is_bad_request() {
    let router = create_router_for_test(Arc::new(WeekdaySource::new()));
    let (status, body) = get_json(router, "/api/-5/2023").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_invalid_year_is_bad_request() {
    let source = Arc::new(WeekdaySource::new());
    let router = create_router_for_test(source.clone());
    let (status, body) = get_json(router, "/api/30000/20x4").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid year");
    assert_eq!(source.year_calls.load(Ordering::SeqCst), 0);
}
