use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, routes};

pub fn create(app_state: AppState, app_url: String) -> Router<()> {
    let app = Router::new()
        .route("/", get(|| async { "Kowalski is tracking." }))
        .nest("/timerecords", routes::time_records::router())
        .nest("/projects", routes::projects::router())
        .nest("/activities", routes::activities::router())
        .nest("/tasks", routes::tasks::router())
        .nest("/users", routes::users::router());

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            origin.to_str().unwrap_or_default() == app_url
        }));

    app.with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use time::macros::{date, time};
    use tower::ServiceExt;
    use url::Url;

    use super::*;
    use crate::{
        adapters::{inbound::http::LinkAssembler, outbound::memory::InMemoryStore},
        domain::{
            models::{Activity, Project, Task, TaskId, TimeRecord, TimeRecordId, User, UserId},
            services::{DirectoryServiceImpl, TimeRecordServiceImpl},
        },
    };

    fn seeded_store() -> InMemoryStore {
        InMemoryStore::new()
            .with_user(User::new(1, "Ada", "Lovelace", "ada@example.com"))
            .with_project(Project::new(4, "Engine").with_accountable(1))
            .with_member(4, 1)
            .with_activity(Activity::new(12, 4, "Design").with_accountable(1))
            .with_activity(Activity::new(13, 4, "Build"))
            .with_task(Task::new(7, 12, "Code review").with_accountable(1))
    }

    fn app(store: &InMemoryStore) -> Router {
        let shared = Arc::new(store.clone());
        let state = AppState::new(
            Arc::new(TimeRecordServiceImpl::new(
                shared.clone(),
                shared.clone(),
                shared.clone(),
            )),
            Arc::new(DirectoryServiceImpl::new(
                shared.clone(),
                shared.clone(),
                shared.clone(),
                shared,
            )),
            LinkAssembler::new(&Url::parse("http://localhost:8080").unwrap()),
        );
        create(state, "http://localhost:5173".to_string())
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn payload(day: &str, time: &str, user_id: i32, task_id: i32) -> Value {
        json!({
            "reportedDay": day,
            "reportedTime": time,
            "userId": user_id,
            "taskId": task_id,
            "comment": "reviewed PR",
        })
    }

    #[tokio::test]
    async fn create_time_record_returns_created_projection() {
        let store = seeded_store();

        let response = send(
            app(&store),
            "POST",
            "/timerecords",
            Some(payload("2024-01-15", "09:30", 1, 7)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json_body(response).await;
        assert_eq!(
            body,
            json!({
                "id": body["id"],
                "userId": 1,
                "taskId": 7,
                "reportedDay": "2024-01-15",
                "reportedTime": "09:30",
                "comment": "reviewed PR",
            })
        );
        assert!(body["id"].is_i64());
        assert_eq!(store.time_record_count(), 1);
    }

    #[tokio::test]
    async fn create_with_bad_day_is_bad_request() {
        let store = seeded_store();

        let response = send(
            app(&store),
            "POST",
            "/timerecords",
            Some(payload("15-01-2024", "09:30", 1, 7)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("invalid time record"));
    }

    #[tokio::test]
    async fn edit_with_missing_task_is_not_found_and_keeps_record() {
        let original = TimeRecord {
            id: TimeRecordId::new(5),
            user_id: UserId::new(1),
            task_id: TaskId::new(7),
            reported_day: date!(2024 - 01 - 10),
            reported_time: time!(08:00),
            comment: None,
        };
        let store = seeded_store().with_time_record(original.clone());

        let response = send(
            app(&store),
            "PUT",
            "/timerecords/5",
            Some(payload("2024-01-15", "09:30", 1, 999)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(store.time_record(5), Some(original));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let store = seeded_store();
        let app = app(&store);

        let created = json_body(
            send(
                app.clone(),
                "POST",
                "/timerecords",
                Some(payload("2024-01-15", "09:30", 1, 7)),
            )
            .await,
        )
        .await;
        let uri = format!("/timerecords/{}", created["id"]);

        let response = send(app.clone(), "DELETE", &uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!(true));

        let response = send(app.clone(), "DELETE", &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(app, "GET", &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn lists_time_records_by_user_and_task() {
        let store = seeded_store();
        let app = app(&store);

        for day in ["2024-01-15", "2024-01-16"] {
            send(
                app.clone(),
                "POST",
                "/timerecords",
                Some(payload(day, "09:30", 1, 7)),
            )
            .await;
        }

        let by_user = json_body(send(app.clone(), "GET", "/users/1/timerecords", None).await).await;
        let days: Vec<&str> = by_user
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["reportedDay"].as_str().unwrap())
            .collect();
        assert_eq!(days, vec!["2024-01-15", "2024-01-16"]);

        let by_task = json_body(send(app.clone(), "GET", "/tasks/7/timerecords", None).await).await;
        assert_eq!(by_task.as_array().unwrap().len(), 2);

        let response = send(app, "GET", "/users/404/timerecords", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn project_response_carries_links() {
        let store = seeded_store();

        let response = send(app(&store), "GET", "/projects/4", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["projectId"], 4);
        assert_eq!(
            body["links"],
            json!([
                { "rel": "self", "href": "http://localhost:8080/projects/4" },
                { "rel": "activities", "href": "http://localhost:8080/projects/4/activities" },
                { "rel": "accountable", "href": "http://localhost:8080/projects/4/accountable" },
                { "rel": "members", "href": "http://localhost:8080/projects/4/members" },
            ])
        );
    }

    #[tokio::test]
    async fn every_emitted_link_resolves() {
        let store = seeded_store();
        let app = app(&store);

        for uri in ["/projects/4", "/activities/12", "/tasks/7", "/users/1"] {
            let body = json_body(send(app.clone(), "GET", uri, None).await).await;

            for link in body["links"].as_array().unwrap() {
                let href = link["href"].as_str().unwrap();
                let path = href.trim_start_matches("http://localhost:8080");
                let response = send(app.clone(), "GET", path, None).await;
                assert_eq!(response.status(), StatusCode::OK, "{} from {}", href, uri);
            }
        }
    }

    #[tokio::test]
    async fn activity_without_accountable_is_not_found() {
        let store = seeded_store();

        let response = send(app(&store), "GET", "/activities/13/accountable", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected() {
        let store = seeded_store();

        let response = send(app(&store), "GET", "/timerecords/abc", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
