use axum::Router;

use crate::features::{leaderboards, scores, wods};
use crate::middleware::auth::ApiKeys;
use crate::store::Store;

pub fn router(store: Store, api_keys: ApiKeys) -> Router {
    let api = Router::new()
        .nest("/wods", wods::routes::routes(api_keys.clone()))
        .nest("/leaderboards", leaderboards::routes::routes())
        .merge(scores::routes::routes(api_keys));

    Router::new().nest("/api", api).with_state(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use uuid::Uuid;

    const KEY: &str = "judge-key";

    fn app() -> Router {
        router(Store::new(), ApiKeys::from_comma_separated(KEY))
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", KEY));

        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    async fn register_triplet(app: &Router) -> String {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/wods",
            Some(json!({
                "name": "Triplet",
                "time_cap": { "minutes": 10, "seconds": 0 },
                "exercises": [
                    { "exercise": "Pull Ups", "target_reps": 50 },
                    { "exercise": "Push Ups", "target_reps": 100 },
                    { "exercise": "Air Squats", "target_reps": 150 }
                ]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["time_cap"], "10:00");
        body["wod_id"].as_str().unwrap().to_string()
    }

    fn sheet(
        event: Uuid,
        category: Uuid,
        wod: &str,
        athlete: Uuid,
        exercises: Value,
        time: &str,
    ) -> Value {
        json!({
            "event_id": event,
            "category_id": category,
            "wod_id": wod,
            "athlete_id": athlete,
            "exercises": exercises,
            "completion_time": time
        })
    }

    fn finished() -> Value {
        json!([{ "completed": true }, { "completed": true }, { "completed": true }])
    }

    fn capped(completed: usize, reps: &[i64]) -> Value {
        let mut exercises: Vec<Value> =
            (0..completed).map(|_| json!({ "completed": true })).collect();
        exercises.extend(reps.iter().map(|r| json!({ "completed": false, "max_reps": r })));
        Value::Array(exercises)
    }

    #[tokio::test]
    async fn test_time_based_wod_without_cap_is_rejected() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/wods",
            Some(json!({
                "name": "No Cap",
                "exercises": [{ "exercise": "Burpees", "target_reps": 30 }]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("time cap"));
    }

    #[tokio::test]
    async fn test_mutations_require_api_key() {
        let app = app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/scores")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_unknown_wod_is_not_found() {
        let app = app();
        let uri = format!("/api/wods/{}", Uuid::new_v4());
        let (status, _) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_rejected_sheet_lists_violations_and_is_not_stored() {
        let app = app();
        let wod = register_triplet(&app).await;
        let (event, category) = (Uuid::new_v4(), Uuid::new_v4());

        let exercises = json!([
            { "completed": true },
            { "completed": false },
            { "completed": false, "max_reps": 0 }
        ]);
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/scores",
            Some(sheet(event, category, &wod, Uuid::new_v4(), exercises, "10:00")),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation failed");
        assert_eq!(body["details"][0]["code"], "max_reps_required");
        assert_eq!(body["details"][0]["field"], "exercises[1].max_reps");

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/scores",
            Some(sheet(event, category, &wod, Uuid::new_v4(), finished(), "10:01")),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"][0]["code"], "completion_time_exceeds_time_cap");

        let uri = format!("/api/events/{}/scores", event);
        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_leaderboard_orders_mixed_field() {
        let app = app();
        let wod = register_triplet(&app).await;
        let (event, category) = (Uuid::new_v4(), Uuid::new_v4());
        let athletes: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();

        let sheets = [
            sheet(event, category, &wod, athletes[0], capped(2, &[70]), "10:00"),
            sheet(event, category, &wod, athletes[1], finished(), "09:30"),
            sheet(event, category, &wod, athletes[2], finished(), "08:45"),
            sheet(event, category, &wod, athletes[3], capped(2, &[130]), "10:00"),
            sheet(event, category, &wod, athletes[4], capped(1, &[50, 0]), "10:00"),
        ];
        for body in sheets {
            let (status, _) = send(&app, Method::POST, "/api/scores", Some(body)).await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let uri = format!("/api/leaderboards/{}/{}/{}", event, category, wod);
        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["wod_name"], "Triplet");

        let entries = body["entries"].as_array().unwrap();
        let order: Vec<String> = entries
            .iter()
            .map(|e| e["athlete_id"].as_str().unwrap().to_string())
            .collect();
        let expected: Vec<String> = [2, 1, 3, 0, 4]
            .iter()
            .map(|&i| athletes[i].to_string())
            .collect();
        assert_eq!(order, expected);

        let ranks: Vec<u64> = entries.iter().map(|e| e["rank"].as_u64().unwrap()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);

        assert_eq!(entries[0]["summary"], "8:45");
        assert_eq!(entries[2]["summary"], "280 reps (2/3)");
        assert_eq!(entries[3]["breakdown"]["total_reps"], 220);
        assert_eq!(entries[4]["breakdown"]["completed_exercises"], 1);
    }

    #[tokio::test]
    async fn test_resubmission_replaces_score_and_standings_follow() {
        let app = app();
        let wod = register_triplet(&app).await;
        let (event, category) = (Uuid::new_v4(), Uuid::new_v4());
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        for (athlete, time) in [(a, "09:00"), (b, "08:00")] {
            let body = sheet(event, category, &wod, athlete, finished(), time);
            let (status, _) = send(&app, Method::POST, "/api/scores", Some(body)).await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/scores",
            Some(sheet(event, category, &wod, a, finished(), "07:30")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["updated"], true);

        let uri = format!("/api/events/{}/scores", event);
        let (_, scores) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(scores.as_array().unwrap().len(), 2);

        let uri = format!("/api/leaderboards/{}/{}", event, category);
        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["wods_counted"], 1);
        assert_eq!(body["entries"][0]["athlete_id"], a.to_string());
        assert_eq!(body["entries"][0]["total_points"], 100);
        assert_eq!(body["entries"][1]["athlete_id"], b.to_string());
        assert_eq!(body["entries"][1]["total_points"], 99);
    }
}
