//! End-to-end tests for the full hbnbd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repos,
//! real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`, so no TCP port is bound.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

use hbnb_adapter_http_axum::router;
use hbnb_adapter_http_axum::state::AppState;
use hbnb_adapter_storage_sqlite_sqlx::{
    Config, SqliteAmenityRepository, SqliteCityRepository, SqlitePlaceRepository,
    SqliteReviewRepository, SqliteStateRepository, SqliteUserRepository,
};

struct TestApp {
    app: NormalizePath<Router>,
}

impl TestApp {
    /// Build a fully-wired router backed by an in-memory `SQLite` database.
    async fn new() -> Self {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .expect("in-memory database should initialise");
        let pool = db.pool().clone();

        let state = AppState::new(
            SqliteStateRepository::new(pool.clone()),
            SqliteCityRepository::new(pool.clone()),
            SqliteAmenityRepository::new(pool.clone()),
            SqliteUserRepository::new(pool.clone()),
            SqlitePlaceRepository::new(pool.clone()),
            SqliteReviewRepository::new(pool),
        );

        Self {
            app: router::build(state),
        }
    }

    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let body = body.map_or_else(Body::empty, |value| Body::from(value.to_string()));
        self.send_raw(method, uri, body).await
    }

    async fn send_raw(&self, method: &str, uri: &str, body: Body) -> (StatusCode, Value) {
        let response = self
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send("GET", uri, None).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("POST", uri, Some(body)).await
    }

    async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("PUT", uri, Some(body)).await
    }

    async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send("DELETE", uri, None).await
    }

    /// Create an entity and return its id, asserting a 201.
    async fn create(&self, uri: &str, body: Value) -> String {
        let (status, created) = self.post(uri, body).await;
        assert_eq!(status, StatusCode::CREATED, "POST {uri}: {created}");
        created["id"].as_str().unwrap().to_string()
    }
}

/// A small world: California (Fresno, Napa) and Nevada (Reno), one host,
/// wifi and pool amenities.
struct World {
    t: TestApp,
    california: String,
    nevada: String,
    fresno: String,
    napa: String,
    reno: String,
    host: String,
    wifi: String,
    pool: String,
}

impl World {
    async fn new() -> Self {
        let t = TestApp::new().await;
        let california = t
            .create("/api/v1/states", json!({"name": "California"}))
            .await;
        let nevada = t.create("/api/v1/states", json!({"name": "Nevada"})).await;
        let fresno = t
            .create(
                &format!("/api/v1/states/{california}/cities"),
                json!({"name": "Fresno"}),
            )
            .await;
        let napa = t
            .create(
                &format!("/api/v1/states/{california}/cities"),
                json!({"name": "Napa"}),
            )
            .await;
        let reno = t
            .create(
                &format!("/api/v1/states/{nevada}/cities"),
                json!({"name": "Reno"}),
            )
            .await;
        let host = t
            .create(
                "/api/v1/users",
                json!({"email": "host@example.com", "password": "pw"}),
            )
            .await;
        let wifi = t.create("/api/v1/amenities", json!({"name": "Wifi"})).await;
        let pool = t.create("/api/v1/amenities", json!({"name": "Pool"})).await;
        Self {
            t,
            california,
            nevada,
            fresno,
            napa,
            reno,
            host,
            wifi,
            pool,
        }
    }

    async fn place(&self, city: &str, name: &str, amenities: &[&str]) -> String {
        let id = self
            .t
            .create(
                &format!("/api/v1/cities/{city}/places"),
                json!({"user_id": self.host, "name": name}),
            )
            .await;
        for amenity in amenities {
            let (status, _) = self
                .t
                .post(&format!("/api/v1/places/{id}/amenities/{amenity}"), json!({}))
                .await;
            assert_eq!(status, StatusCode::CREATED);
        }
        id
    }
}

fn names(places: &Value) -> Vec<String> {
    let mut names: Vec<String> = places
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    names.sort();
    names
}

// ---------------------------------------------------------------------------
// Status and stats
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_status_called() {
    let t = TestApp::new().await;

    let (status, body) = t.get("/api/v1/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "OK"}));
}

#[tokio::test]
async fn should_count_every_kind() {
    let w = World::new().await;
    w.place(&w.fresno, "Loft", &[]).await;

    let (status, stats) = w.t.get("/api/v1/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        stats,
        json!({
            "amenities": 2,
            "cities": 3,
            "places": 1,
            "reviews": 0,
            "states": 2,
            "users": 1,
        })
    );
}

// ---------------------------------------------------------------------------
// States and cities
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_state_then_city_under_it() {
    let t = TestApp::new().await;

    let (status, state) = t
        .post("/api/v1/states", json!({"name": "California"}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(state["name"], "California");
    let state_id = state["id"].as_str().unwrap();
    assert!(!state_id.is_empty());

    let (status, city) = t
        .post(
            &format!("/api/v1/states/{state_id}/cities"),
            json!({"name": "Fresno"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(city["state_id"], state_id);

    let (status, cities) = t.get(&format!("/api/v1/states/{state_id}/cities")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&cities), ["Fresno"]);
}

#[tokio::test]
async fn should_round_trip_created_state() {
    let t = TestApp::new().await;
    let (_, created) = t
        .post("/api/v1/states", json!({"name": "California"}))
        .await;

    let (status, fetched) = t
        .get(&format!("/api/v1/states/{}", created["id"].as_str().unwrap()))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn should_accept_trailing_slash() {
    let t = TestApp::new().await;
    t.create("/api/v1/states/", json!({"name": "Oregon"})).await;

    let (status, states) = t.get("/api/v1/states/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&states), ["Oregon"]);
}

#[tokio::test]
async fn should_return_not_found_for_city_of_missing_state() {
    let t = TestApp::new().await;
    let missing = "00000000-0000-4000-8000-000000000000";

    let (status, _) = t
        .post(
            &format!("/api/v1/states/{missing}/cities"),
            json!({"name": "Nowhere"}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = t.get(&format!("/api/v1/states/{missing}/cities")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_ignore_state_id_on_city_update() {
    let w = World::new().await;

    let (status, city) = w
        .t
        .put(
            &format!("/api/v1/cities/{}", w.fresno),
            json!({"name": "Fresno City", "state_id": w.nevada}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(city["name"], "Fresno City");
    assert_eq!(city["state_id"], w.california.as_str());
}

#[tokio::test]
async fn should_delete_state_with_its_cities() {
    let w = World::new().await;

    let (status, body) = w.t.delete(&format!("/api/v1/states/{}", w.nevada)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let (status, _) = w.t.get(&format!("/api/v1/cities/{}", w.reno)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, cities) = w.t.get("/api/v1/cities").await;
    assert_eq!(names(&cities), ["Fresno", "Napa"]);
}

// ---------------------------------------------------------------------------
// Validation and not-found
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_non_object_bodies() {
    let w = World::new().await;
    let place = w.place(&w.fresno, "Loft", &[]).await;
    let review = w
        .t
        .create(
            &format!("/api/v1/places/{place}/reviews"),
            json!({"user_id": w.host, "text": "Lovely"}),
        )
        .await;

    let creates = [
        "/api/v1/states".to_string(),
        format!("/api/v1/states/{}/cities", w.california),
        "/api/v1/amenities".to_string(),
        "/api/v1/users".to_string(),
        format!("/api/v1/cities/{}/places", w.fresno),
        format!("/api/v1/places/{place}/reviews"),
        "/api/v1/reviews".to_string(),
    ];
    let updates = [
        format!("/api/v1/states/{}", w.california),
        format!("/api/v1/cities/{}", w.fresno),
        format!("/api/v1/amenities/{}", w.wifi),
        format!("/api/v1/users/{}", w.host),
        format!("/api/v1/places/{place}"),
        format!("/api/v1/reviews/{review}"),
    ];
    let bodies = || {
        [
            Body::from("[]"),
            Body::from(r#""x""#),
            Body::from("null"),
            Body::empty(),
        ]
    };

    for uri in &creates {
        for body in bodies() {
            let (status, error) = w.t.send_raw("POST", uri, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "POST {uri}");
            assert_eq!(error["error"], "Not a JSON", "POST {uri}");
        }
    }
    for uri in &updates {
        for body in bodies() {
            let (status, error) = w.t.send_raw("PUT", uri, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "PUT {uri}");
            assert_eq!(error["error"], "Not a JSON", "PUT {uri}");
        }
    }
}

#[tokio::test]
async fn should_name_missing_fields() {
    let w = World::new().await;

    let cases = [
        ("/api/v1/states".to_string(), json!({}), "Missing name"),
        ("/api/v1/amenities".to_string(), json!({}), "Missing name"),
        (
            "/api/v1/users".to_string(),
            json!({"password": "pw"}),
            "Missing email",
        ),
        (
            "/api/v1/users".to_string(),
            json!({"email": "a@b.c"}),
            "Missing password",
        ),
        (
            format!("/api/v1/cities/{}/places", w.fresno),
            json!({"name": "Loft"}),
            "Missing user_id",
        ),
        (
            format!("/api/v1/cities/{}/places", w.fresno),
            json!({"user_id": w.host}),
            "Missing name",
        ),
    ];

    for (uri, body, message) in cases {
        let (status, error) = w.t.post(&uri, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(error["error"], message, "{uri}");
    }
}

#[tokio::test]
async fn should_return_not_found_for_unknown_ids_of_every_kind() {
    let t = TestApp::new().await;
    let missing = "00000000-0000-4000-8000-000000000000";

    for kind in ["states", "cities", "amenities", "users", "places", "reviews"] {
        for id in [missing, "not-an-id"] {
            let uri = format!("/api/v1/{kind}/{id}");
            assert_eq!(t.get(&uri).await.0, StatusCode::NOT_FOUND, "GET {uri}");
            assert_eq!(
                t.put(&uri, json!({"name": "x"})).await.0,
                StatusCode::NOT_FOUND,
                "PUT {uri}"
            );
            assert_eq!(t.delete(&uri).await.0, StatusCode::NOT_FOUND, "DELETE {uri}");
        }
    }
}

#[tokio::test]
async fn should_answer_unknown_route_with_json_not_found() {
    let t = TestApp::new().await;

    let (status, body) = t.get("/api/v1/unknown").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found"}));
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_ignore_email_on_user_update() {
    let t = TestApp::new().await;
    let id = t
        .create(
            "/api/v1/users",
            json!({"email": "old@x.com", "password": "pw"}),
        )
        .await;

    let (status, user) = t
        .put(
            &format!("/api/v1/users/{id}"),
            json!({"email": "new@x.com", "first_name": "Betty"}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["email"], "old@x.com");
    assert_eq!(user["first_name"], "Betty");
}

#[tokio::test]
async fn should_never_render_password() {
    let t = TestApp::new().await;
    let (_, created) = t
        .post(
            "/api/v1/users",
            json!({"email": "a@b.c", "password": "secret"}),
        )
        .await;

    let (_, users) = t.get("/api/v1/users").await;

    assert!(created.get("password").is_none());
    assert!(users[0].get("password").is_none());
}

#[tokio::test]
async fn should_leave_entity_unchanged_when_patch_has_only_immutable_fields() {
    let t = TestApp::new().await;
    let (_, created) = t.post("/api/v1/amenities", json!({"name": "Wifi"})).await;
    let id = created["id"].as_str().unwrap();

    let (status, updated) = t
        .put(
            &format!("/api/v1/amenities/{id}"),
            json!({"id": "other", "created_at": "yesterday", "updated_at": "today"}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["name"], "Wifi");
    assert_eq!(updated["created_at"], created["created_at"]);
}

// ---------------------------------------------------------------------------
// Places, amenities and reviews
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_place_under_city() {
    let w = World::new().await;

    let (status, place) = w
        .t
        .post(
            &format!("/api/v1/cities/{}/places", w.fresno),
            json!({
                "user_id": w.host,
                "name": "Loft",
                "number_rooms": 2,
                "price_by_night": 120,
                "latitude": 36.74,
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(place["city_id"], w.fresno.as_str());
    assert_eq!(place["user_id"], w.host.as_str());
    assert_eq!(place["number_rooms"], 2);
    assert_eq!(place["latitude"], 36.74);
    assert_eq!(place["longitude"], Value::Null);

    let (_, places) = w.t.get(&format!("/api/v1/cities/{}/places", w.fresno)).await;
    assert_eq!(names(&places), ["Loft"]);
}

#[tokio::test]
async fn should_return_not_found_for_place_of_unknown_owner() {
    let w = World::new().await;

    let (status, _) = w
        .t
        .post(
            &format!("/api/v1/cities/{}/places", w.fresno),
            json!({"user_id": "00000000-0000-4000-8000-000000000000", "name": "Loft"}),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_reject_wrong_value_type() {
    let w = World::new().await;

    let (status, error) = w
        .t
        .post(
            &format!("/api/v1/cities/{}/places", w.fresno),
            json!({"user_id": w.host, "name": "Loft", "number_rooms": "two"}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["error"].is_string());
}

#[tokio::test]
async fn should_link_and_unlink_amenities() {
    let w = World::new().await;
    let place = w.place(&w.fresno, "Loft", &[]).await;
    let link = format!("/api/v1/places/{place}/amenities/{}", w.wifi);

    let (status, amenity) = w.t.post(&link, json!({})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(amenity["name"], "Wifi");

    let (status, _) = w.t.post(&link, json!({})).await;
    assert_eq!(status, StatusCode::OK);

    let (_, amenities) = w.t.get(&format!("/api/v1/places/{place}/amenities")).await;
    assert_eq!(names(&amenities), ["Wifi"]);

    let (status, body) = w.t.delete(&link).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let (status, _) = w.t.delete(&link).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_manage_reviews_of_a_place() {
    let w = World::new().await;
    let place = w.place(&w.fresno, "Loft", &[]).await;
    let reviews = format!("/api/v1/places/{place}/reviews");

    let (status, error) = w.t.post(&reviews, json!({"user_id": w.host})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "Missing text");

    let id = w
        .t
        .create(&reviews, json!({"user_id": w.host, "text": "Lovely"}))
        .await;

    let (status, review) = w
        .t
        .put(
            &format!("/api/v1/reviews/{id}"),
            json!({"text": "Lovely, but noisy", "place_id": "ignored"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(review["text"], "Lovely, but noisy");
    assert_eq!(review["place_id"], place.as_str());

    let (_, listed) = w.t.get(&reviews).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, _) = w.t.delete(&format!("/api/v1/places/{place}")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = w.t.get(&format!("/api/v1/reviews/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_create_review_with_place_in_body() {
    let w = World::new().await;
    let place = w.place(&w.fresno, "Loft", &[]).await;
    let missing = "00000000-0000-4000-8000-000000000000";

    let (status, review) = w
        .t
        .post(
            "/api/v1/reviews",
            json!({"place_id": place, "user_id": w.host, "text": "Nice"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(review["place_id"], place.as_str());
    assert_eq!(review["user_id"], w.host.as_str());

    let (_, listed) = w.t.get(&format!("/api/v1/places/{place}/reviews")).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, error) = w
        .t
        .post("/api/v1/reviews", json!({"user_id": w.host, "text": "Nice"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "Missing place_id");

    for body in [
        json!({"place_id": missing, "user_id": w.host, "text": "Nice"}),
        json!({"place_id": place, "user_id": missing, "text": "Nice"}),
        json!({"place_id": "not-an-id", "user_id": w.host, "text": "Nice"}),
    ] {
        let (status, _) = w.t.post("/api/v1/reviews", body.clone()).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{body}");
    }
}

#[tokio::test]
async fn should_answer_unsupported_method_with_json_error() {
    let t = TestApp::new().await;

    let (status, body) = t.post("/api/v1/cities", json!({"name": "Fresno"})).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method not allowed");
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_every_place_for_empty_search() {
    let w = World::new().await;
    w.place(&w.fresno, "Loft", &[]).await;
    w.place(&w.reno, "Suite", &[]).await;

    let (status, places) = w.t.post("/api/v1/places_search", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&places), ["Loft", "Suite"]);

    let (status, places) = w
        .t
        .send_raw("POST", "/api/v1/places_search", Body::empty())
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&places), ["Loft", "Suite"]);
}

#[tokio::test]
async fn should_skip_unresolved_city_in_search() {
    let w = World::new().await;
    w.place(&w.fresno, "Loft", &[]).await;

    let (status, places) = w
        .t
        .post("/api/v1/places_search", json!({"cities": ["bad-id"]}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(places, json!([]));
}

#[tokio::test]
async fn should_search_by_state_city_and_amenities() {
    let w = World::new().await;
    w.place(&w.fresno, "Fresno loft", &[w.wifi.as_str()]).await;
    w.place(&w.fresno, "Fresno villa", &[w.wifi.as_str(), w.pool.as_str()]).await;
    w.place(&w.napa, "Napa cabin", &[]).await;
    w.place(&w.reno, "Reno suite", &[w.wifi.as_str(), w.pool.as_str()]).await;

    let (_, by_state) = w
        .t
        .post("/api/v1/places_search", json!({"states": [w.california]}))
        .await;
    assert_eq!(
        names(&by_state),
        ["Fresno loft", "Fresno villa", "Napa cabin"]
    );

    let (_, union) = w
        .t
        .post(
            "/api/v1/places_search",
            json!({"states": [w.california], "cities": [w.fresno, w.reno]}),
        )
        .await;
    assert_eq!(union.as_array().unwrap().len(), 4);

    let (_, filtered) = w
        .t
        .post(
            "/api/v1/places_search",
            json!({"states": [w.nevada], "cities": [w.fresno], "amenities": [w.wifi, w.pool]}),
        )
        .await;
    assert_eq!(names(&filtered), ["Fresno villa", "Reno suite"]);
}

#[tokio::test]
async fn should_return_nothing_for_amenities_only_search() {
    let w = World::new().await;
    w.place(&w.fresno, "Loft", &[w.wifi.as_str()]).await;

    let (status, places) = w
        .t
        .post("/api/v1/places_search", json!({"amenities": [w.wifi]}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(places, json!([]));
}

#[tokio::test]
async fn should_reject_non_object_search_body() {
    let t = TestApp::new().await;

    let (status, error) = t.post("/api/v1/places_search", json!(["x"])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "Not a JSON");
}
