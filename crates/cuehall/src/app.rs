use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use cuehall_core::booking::{Calendar, Notice, OpeningException, OpeningHours};

use crate::{
    handlers::{
        bookings::{create_booking, delete_booking, get_booking, list_bookings},
        contact_info::{get_contact_info, put_contact_info},
        health::livez,
        resources::{
            create_resource, delete_calendar, delete_resource, get_resource, list_exceptions,
            list_resources, update_resource, upsert_resource,
        },
        slots::get_slots,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        // Calendar routes
        .route(
            "/calendars",
            get(list_resources::<Calendar>).post(create_resource::<Calendar>),
        )
        .route(
            "/calendars/{id}",
            get(get_resource::<Calendar>)
                .put(update_resource::<Calendar>)
                .delete(delete_calendar),
        )
        // Booking routes
        .route(
            "/calendars/{id}/bookings",
            get(list_bookings).post(create_booking),
        )
        .route("/calendars/{id}/slots", get(get_slots))
        .route("/bookings/{id}", get(get_booking).delete(delete_booking))
        // Notice routes
        .route(
            "/notices",
            get(list_resources::<Notice>).post(create_resource::<Notice>),
        )
        .route(
            "/notices/{id}",
            get(get_resource::<Notice>)
                .put(update_resource::<Notice>)
                .delete(delete_resource::<Notice>),
        )
        // Settings routes
        .route("/contact-info", get(get_contact_info).put(put_contact_info))
        .route("/opening-hours", get(list_resources::<OpeningHours>))
        .route("/opening-hours/exceptions", get(list_exceptions))
        .route(
            "/opening-hours/exceptions/{date}",
            get(get_resource::<OpeningException>)
                .put(upsert_resource::<OpeningException>)
                .delete(delete_resource::<OpeningException>),
        )
        .route(
            "/opening-hours/{weekday}",
            get(get_resource::<OpeningHours>)
                .put(upsert_resource::<OpeningHours>)
                .delete(delete_resource::<OpeningHours>),
        )
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(state: AppState) -> Router {
        create_app(state, Duration::from_secs(10))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    async fn create_calendar(app: &Router, name: &str) -> String {
        let (status, calendar) =
            send(app, "POST", "/api/calendars", Some(json!({ "name": name }))).await;
        assert_eq!(status, StatusCode::CREATED);
        calendar["id"].as_str().unwrap().to_string()
    }

    /// Monday-Sunday 14:00-23:00.
    async fn open_every_day(app: &Router) {
        for weekday in 1..=7 {
            let (status, _) = send(
                app,
                "PUT",
                &format!("/api/opening-hours/{weekday}"),
                Some(json!({ "opens_at": "14:00", "closes_at": "23:00" })),
            )
            .await;
            assert_eq!(status, StatusCode::NO_CONTENT);
        }
    }

    fn booking_body(start: &str, end: &str) -> Value {
        json!({
            "name": "Ville Pelaaja",
            "email": "ville@example.com",
            "phone": "040 123 4567",
            "start": start,
            "end": end,
        })
    }

    #[tokio::test]
    async fn test_livez() {
        let (status, _) = send(&app(AppState::default()), "GET", "/livez", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_calendars_empty() {
        let (status, json) = send(&app(AppState::default()), "GET", "/api/calendars", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!([]));
    }

    #[tokio::test]
    async fn test_calendar_crud() {
        let app = app(AppState::default());
        let id = create_calendar(&app, "Pool 1").await;

        let (status, updated) = send(
            &app,
            "PUT",
            &format!("/api/calendars/{id}"),
            Some(json!({ "active": false })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "Pool 1");
        assert_eq!(updated["active"], false);

        let (status, _) = send(&app, "DELETE", &format!("/api/calendars/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, "GET", &format!("/api/calendars/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_calendar_with_blank_name() {
        let app = app(AppState::default());
        let (status, _) = send(&app, "POST", "/api/calendars", Some(json!({ "name": "  " }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_calendar_malformed_json() {
        let app = app(AppState::default());
        let (status, _) = send(&app, "POST", "/api/calendars", Some(json!({ "nom": "x" }))).await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn test_booking_overlap_is_rejected() {
        let app = app(AppState::default());
        let id = create_calendar(&app, "Pool 1").await;
        let uri = format!("/api/calendars/{id}/bookings");

        let (status, booking) = send(
            &app,
            "POST",
            &uri,
            Some(booking_body("2025-03-14T10:00:00Z", "2025-03-14T11:00:00Z")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(booking["calendar_id"], id.as_str());

        let (status, _) = send(
            &app,
            "POST",
            &uri,
            Some(booking_body("2025-03-14T10:30:00Z", "2025-03-14T11:30:00Z")),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = send(
            &app,
            "POST",
            &uri,
            Some(booking_body("2025-03-14T11:00:00Z", "2025-03-14T12:00:00Z")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_booking_validation() {
        let app = app(AppState::default());
        let id = create_calendar(&app, "Pool 1").await;
        let mut body = booking_body("2025-03-14T10:00:00Z", "2025-03-14T11:00:00Z");
        body["email"] = json!("not-an-email");

        let (status, _) = send(&app, "POST", &format!("/api/calendars/{id}/bookings"), Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_booking_for_unknown_calendar() {
        let app = app(AppState::default());
        let (status, _) = send(
            &app,
            "POST",
            "/api/calendars/00000000-0000-0000-0000-000000000000/bookings",
            Some(booking_body("2025-03-14T10:00:00Z", "2025-03-14T11:00:00Z")),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_bookings_by_local_day() {
        let app = app(AppState::default());
        let id = create_calendar(&app, "Pool 1").await;
        let uri = format!("/api/calendars/{id}/bookings");

        // 22:30 UTC on the 13th is 00:30 on the 14th in Helsinki.
        send(&app, "POST", &uri, Some(booking_body("2025-03-13T22:30:00Z", "2025-03-13T23:00:00Z"))).await;
        send(&app, "POST", &uri, Some(booking_body("2025-03-13T10:00:00Z", "2025-03-13T11:00:00Z"))).await;

        let (status, json) = send(&app, "GET", &format!("{uri}?date=2025-03-14"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 1);

        let (_, all) = send(&app, "GET", &uri, None).await;
        assert_eq!(all.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_deleting_calendar_deletes_bookings() {
        let state = AppState::default();
        let app = app(state.clone());
        let id = create_calendar(&app, "Pool 1").await;
        let (_, booking) = send(
            &app,
            "POST",
            &format!("/api/calendars/{id}/bookings"),
            Some(booking_body("2025-03-14T10:00:00Z", "2025-03-14T11:00:00Z")),
        )
        .await;
        let booking_id = booking["id"].as_str().unwrap().to_string();

        send(&app, "DELETE", &format!("/api/calendars/{id}"), None).await;

        let (status, _) = send(&app, "GET", &format!("/api/bookings/{booking_id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_and_delete_booking() {
        let app = app(AppState::default());
        let id = create_calendar(&app, "Pool 1").await;
        let (_, booking) = send(
            &app,
            "POST",
            &format!("/api/calendars/{id}/bookings"),
            Some(booking_body("2025-03-14T10:00:00Z", "2025-03-14T11:00:00Z")),
        )
        .await;
        let uri = format!("/api/bookings/{}", booking["id"].as_str().unwrap());

        let (status, fetched) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["name"], "Ville Pelaaja");

        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_active_notice_cap() {
        let app = app(AppState::default());
        for i in 0..3 {
            let (status, _) = send(
                &app,
                "POST",
                "/api/notices",
                Some(json!({ "title": format!("Notice {i}"), "content": "text", "active": true })),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, _) = send(
            &app,
            "POST",
            "/api/notices",
            Some(json!({ "title": "Fourth", "content": "text", "active": true })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, inactive) = send(
            &app,
            "POST",
            "/api/notices",
            Some(json!({ "title": "Fourth", "content": "text" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) = send(
            &app,
            "PUT",
            &format!("/api/notices/{}", inactive["id"].as_str().unwrap()),
            Some(json!({ "active": true })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_concurrent_notice_updates_keep_both_fields() {
        let app = app(AppState::default());
        let (_, notice) = send(
            &app,
            "POST",
            "/api/notices",
            Some(json!({ "title": "Old title", "content": "Old content" })),
        )
        .await;
        let uri = format!("/api/notices/{}", notice["id"].as_str().unwrap());

        let ((title_status, _), (content_status, _)) = tokio::join!(
            send(&app, "PUT", &uri, Some(json!({ "title": "New title" }))),
            send(&app, "PUT", &uri, Some(json!({ "content": "New content" }))),
        );
        assert_eq!(title_status, StatusCode::OK);
        assert_eq!(content_status, StatusCode::OK);

        let (_, stored) = send(&app, "GET", &uri, None).await;
        assert_eq!(stored["title"], "New title");
        assert_eq!(stored["content"], "New content");
    }

    #[tokio::test]
    async fn test_update_unknown_notice() {
        let app = app(AppState::default());
        let (status, _) = send(
            &app,
            "PUT",
            "/api/notices/00000000-0000-0000-0000-000000000000",
            Some(json!({ "title": "New title" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_contact_info_round_trip() {
        let app = app(AppState::default());
        let (status, empty) = send(&app, "GET", "/api/contact-info", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(empty["address"], "");

        let info = json!({
            "address": "Hämeenkatu 10, Tampere",
            "phone": "+358 40 123 4567",
            "email": "tables@example.com",
        });
        let (status, _) = send(&app, "PUT", "/api/contact-info", Some(info.clone())).await;
        assert_eq!(status, StatusCode::OK);

        let (_, saved) = send(&app, "GET", "/api/contact-info", None).await;
        assert_eq!(saved, info);

        let (status, _) = send(
            &app,
            "PUT",
            "/api/contact-info",
            Some(json!({ "address": "", "phone": "1", "email": "a@b" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_opening_hours_weekday_validation() {
        let app = app(AppState::default());
        let body = json!({ "opens_at": "10:00", "closes_at": "22:00" });

        let (status, _) = send(&app, "PUT", "/api/opening-hours/8", Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "PUT", "/api/opening-hours/2", Some(body)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, hours) = send(&app, "GET", "/api/opening-hours", None).await;
        assert_eq!(hours, json!([{ "weekday": 2, "opens_at": "10:00", "closes_at": "22:00" }]));

        let (status, _) = send(&app, "DELETE", "/api/opening-hours/2", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, "DELETE", "/api/opening-hours/2", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_opening_exceptions_filtering() {
        let app = app(AppState::default());
        for date in ["2025-12-24", "2025-12-31", "2026-01-06"] {
            let (status, _) = send(
                &app,
                "PUT",
                &format!("/api/opening-hours/exceptions/{date}"),
                Some(json!({ "is_closed": true })),
            )
            .await;
            assert_eq!(status, StatusCode::NO_CONTENT);
        }

        let (_, december) = send(
            &app,
            "GET",
            "/api/opening-hours/exceptions?from=2025-12-01&to=2025-12-31",
            None,
        )
        .await;
        assert_eq!(december.as_array().unwrap().len(), 2);

        let (status, _) = send(
            &app,
            "PUT",
            "/api/opening-hours/exceptions/2025-12-30",
            Some(json!({ "is_closed": false, "opens_at": "12:00" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_slots_for_open_day() {
        let app = app(AppState::default());
        open_every_day(&app).await;
        let id = create_calendar(&app, "Pool 1").await;

        // 15:00-16:00 Helsinki time (UTC+2 in March).
        send(
            &app,
            "POST",
            &format!("/api/calendars/{id}/bookings"),
            Some(booking_body("2025-03-14T13:00:00Z", "2025-03-14T14:00:00Z")),
        )
        .await;

        let (status, schedule) = send(
            &app,
            "GET",
            &format!("/api/calendars/{id}/slots?date=2025-03-14&slot_minutes=30"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(schedule["open"], true);
        assert_eq!(schedule["grid"]["selectable"], true);

        let rows = schedule["grid"]["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 18);
        let occupied: Vec<&str> = rows
            .iter()
            .filter(|row| row["occupied"] == true)
            .map(|row| row["start"].as_str().unwrap())
            .collect();
        assert_eq!(occupied, vec!["2025-03-14T15:00:00", "2025-03-14T15:30:00"]);
        assert_eq!(schedule["grid"]["events"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_slots_for_closed_day() {
        let app = app(AppState::default());
        open_every_day(&app).await;
        send(
            &app,
            "PUT",
            "/api/opening-hours/exceptions/2025-12-24",
            Some(json!({ "is_closed": true })),
        )
        .await;
        let id = create_calendar(&app, "Pool 1").await;

        let (status, schedule) = send(
            &app,
            "GET",
            &format!("/api/calendars/{id}/slots?date=2025-12-24"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(schedule["open"], false);
        assert_eq!(schedule["grid"]["rows"], json!([]));
        assert_eq!(schedule["grid"]["selectable"], false);
    }

    #[tokio::test]
    async fn test_slots_selected_range() {
        let app = app(AppState::default());
        open_every_day(&app).await;
        let id = create_calendar(&app, "Pool 1").await;

        let (_, schedule) = send(
            &app,
            "GET",
            &format!(
                "/api/calendars/{id}/slots?date=2025-03-14&slot_minutes=60\
                 &selected_start=2025-03-14T14:00:00Z&selected_end=2025-03-14T16:00:00Z"
            ),
            None,
        )
        .await;
        // 16:00-18:00 local covers rows 2 and 3 of a 14:00 window.
        assert_eq!(schedule["grid"]["selected"]["rows"], json!({ "start": 2, "end": 4 }));
    }

    #[tokio::test]
    async fn test_slots_unsupported_duration() {
        let app = app(AppState::default());
        let id = create_calendar(&app, "Pool 1").await;

        let (status, _) = send(
            &app,
            "GET",
            &format!("/api/calendars/{id}/slots?date=2025-03-14&slot_minutes=45"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_seeded_state_serves_slots() {
        let state = AppState::default();
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        crate::mock_data::seed_demo_data(&state, today).await.unwrap();
        let app = app(state);

        let (_, calendars) = send(&app, "GET", "/api/calendars", None).await;
        let id = calendars[0]["id"].as_str().unwrap();

        let (status, schedule) = send(
            &app,
            "GET",
            &format!("/api/calendars/{id}/slots?date=2025-03-14"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(schedule["open"], true);
        assert_eq!(schedule["grid"]["events"].as_array().unwrap().len(), 2);
    }
}
