use chrono::NaiveDate;
use kbo_schedule::data_fetcher::api::{
    ApiClient, DayOutcome, Month, SkipTally, aggregate_month, fetch_month_outcomes,
};
use kbo_schedule::data_fetcher::models::{StadiumMap, StadiumRegion, build_stadium_map};
use kbo_schedule::data_fetcher::processors::sort_matches;
use serde_json::json;
use std::time::Duration;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn stadiums() -> StadiumMap {
    build_stadium_map(vec![
        StadiumRegion {
            stadium_name: "잠실".to_string(),
            region_name: "서울".to_string(),
            region_id: 1,
        },
        StadiumRegion {
            stadium_name: "사직".to_string(),
            region_name: "부산".to_string(),
            region_id: 7,
        },
    ])
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn mount_empty_days(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/matches/list.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(server)
        .await;
}

async fn mount_day(server: &MockServer, day: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/matches/list.php"))
        .and(query_param("date", day))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .with_priority(1)
        .mount(server)
        .await;
}

async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.unwrap_or_default().len()
}

/// One request per calendar day, for months of every length
#[tokio::test]
async fn test_one_request_per_day() {
    for (month, days) in [("2024-05", 31), ("2024-06", 30), ("2024-02", 29), ("2023-02", 28)] {
        let server = MockServer::start().await;
        mount_empty_days(&server).await;
        let client = ApiClient::new(server.uri(), 5).unwrap();

        let matches =
            aggregate_month(&client, Month::parse(month).unwrap(), None, &stadiums(), 1).await;

        assert!(matches.is_empty());
        assert_eq!(request_count(&server).await, days, "month {month}");
    }
}

/// The region filter narrows each request but does not change the request count
#[tokio::test]
async fn test_region_filter_is_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/matches/list.php"))
        .and(query_param("region_id", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(30)
        .mount(&server)
        .await;
    let client = ApiClient::new(server.uri(), 5).unwrap();

    aggregate_month(&client, Month::parse("2024-06").unwrap(), Some("7"), &stadiums(), 1).await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 30);
    assert!(requests.iter().all(|r| r.url.query().unwrap_or("").contains("region_id=7")));
    assert_eq!(
        requests[0].url.query(),
        Some("date=2024-06-01&region_id=7")
    );
    assert_eq!(
        requests[29].url.query(),
        Some("date=2024-06-30&region_id=7")
    );
}

/// Region ids are opaque: whatever the caller passes reaches the API as-is
#[tokio::test]
async fn test_non_numeric_region_id_is_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/matches/list.php"))
        .and(query_param("region_id", "R07"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [
            { "match_id": 1, "time": "18:30", "stadium": "사직" }
        ] })))
        .expect(31)
        .mount(&server)
        .await;
    let client = ApiClient::new(server.uri(), 5).unwrap();

    let matches =
        aggregate_month(&client, Month::parse("2024-05").unwrap(), Some("R07"), &stadiums(), 1)
            .await;

    assert_eq!(matches.len(), 31);
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("date=2024-05-01&region_id=R07"));
}

/// Leading zeros survive instead of being reparsed as a number
#[tokio::test]
async fn test_zero_padded_region_id_is_not_reparsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/matches/list.php"))
        .and(query_param("region_id", "007"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(30)
        .mount(&server)
        .await;
    let client = ApiClient::new(server.uri(), 5).unwrap();

    aggregate_month(&client, Month::parse("2024-04").unwrap(), Some("007"), &stadiums(), 2).await;

    assert_eq!(request_count(&server).await, 30);
}

/// Every day failing yields an empty result, not an error
#[tokio::test]
async fn test_all_days_failing_returns_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/matches/list.php"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let client = ApiClient::new(server.uri(), 5).unwrap();

    let matches =
        aggregate_month(&client, Month::parse("2024-04").unwrap(), None, &stadiums(), 1).await;

    assert!(matches.is_empty());
    // No retries: exactly one attempt per day
    assert_eq!(request_count(&server).await, 30);
}

/// An unreachable API is absorbed the same way
#[tokio::test]
async fn test_unreachable_api_returns_empty() {
    let client = ApiClient::new("http://127.0.0.1:1", 1).unwrap();
    let outcomes = fetch_month_outcomes(&client, Month::parse("2024-02").unwrap(), None, 4).await;

    assert_eq!(outcomes.len(), 29);
    assert!(outcomes.iter().all(DayOutcome::is_skipped));
    assert_eq!(SkipTally::from_outcomes(&outcomes).network, 29);
}

/// Entries without a date take the day that was queried
#[tokio::test]
async fn test_missing_date_uses_queried_day() {
    let server = MockServer::start().await;
    mount_day(
        &server,
        "2024-05-17",
        json!({ "data": [{ "match_id": 55, "time": "18:30", "stadium": "사직" }] }),
    )
    .await;
    mount_empty_days(&server).await;
    let client = ApiClient::new(server.uri(), 5).unwrap();

    let matches =
        aggregate_month(&client, Month::parse("2024-05").unwrap(), None, &stadiums(), 1).await;

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].match_date, date(2024, 5, 17));
    assert_eq!(matches[0].region_name, "부산");
}

/// Broken days are skipped while good days survive
#[tokio::test]
async fn test_bad_days_are_skipped() {
    let server = MockServer::start().await;
    mount_day(
        &server,
        "2024-05-01",
        json!({ "data": [{ "match_id": 1, "date": "2024-05-01", "time": "18:30", "stadium": "잠실" }] }),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/matches/list.php"))
        .and(query_param("date", "2024-05-02"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Fatal error</html>"))
        .with_priority(1)
        .mount(&server)
        .await;
    mount_day(&server, "2024-05-03", json!({ "result": "ok" })).await;
    mount_day(&server, "2024-05-04", json!({ "data": "none" })).await;
    Mock::given(method("GET"))
        .and(path("/matches/list.php"))
        .and(query_param("date", "2024-05-05"))
        .respond_with(ResponseTemplate::new(404))
        .with_priority(1)
        .mount(&server)
        .await;
    mount_day(
        &server,
        "2024-05-06",
        json!({ "data": [{ "match_id": 2, "time": "14:00", "stadium": "없는구장" }] }),
    )
    .await;
    mount_empty_days(&server).await;
    let client = ApiClient::new(server.uri(), 5).unwrap();

    let outcomes = fetch_month_outcomes(&client, Month::parse("2024-05").unwrap(), None, 1).await;
    let skipped: Vec<NaiveDate> = outcomes
        .iter()
        .filter(|o| o.is_skipped())
        .map(DayOutcome::date)
        .collect();
    assert_eq!(
        skipped,
        vec![date(2024, 5, 2), date(2024, 5, 3), date(2024, 5, 4), date(2024, 5, 5)]
    );
    assert_eq!(
        SkipTally::from_outcomes(&outcomes),
        SkipTally {
            network: 1,
            payload: 3,
            other: 0
        }
    );

    let matches =
        aggregate_month(&client, Month::parse("2024-05").unwrap(), None, &stadiums(), 1).await;
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].region_name, "서울");
    assert_eq!(matches[1].region_name, "");
    assert_eq!(matches[1].stadium_name, "없는구장");
}

/// A day that exceeds the timeout is skipped
#[tokio::test]
async fn test_slow_day_is_skipped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/matches/list.php"))
        .and(query_param("date", "2024-02-10"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": [{ "match_id": 1 }] }))
                .set_delay(Duration::from_secs(3)),
        )
        .with_priority(1)
        .mount(&server)
        .await;
    mount_day(&server, "2024-02-11", json!({ "data": [{ "match_id": 2 }] })).await;
    mount_empty_days(&server).await;
    let client = ApiClient::new(server.uri(), 1).unwrap();

    let matches =
        aggregate_month(&client, Month::parse("2024-02").unwrap(), None, &stadiums(), 4).await;

    let ids: Vec<&str> = matches.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["2"]);
}

/// The same match listed on two days is kept twice
#[tokio::test]
async fn test_no_deduplication_across_days() {
    let server = MockServer::start().await;
    let entry = json!({ "data": [{ "match_id": 9, "date": "2024-05-10", "time": "18:30" }] });
    mount_day(&server, "2024-05-10", entry.clone()).await;
    mount_day(&server, "2024-05-11", entry).await;
    mount_empty_days(&server).await;
    let client = ApiClient::new(server.uri(), 5).unwrap();

    let matches =
        aggregate_month(&client, Month::parse("2024-05").unwrap(), None, &stadiums(), 1).await;

    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|m| m.id == "9" && m.match_date == date(2024, 5, 10)));
}

/// Concurrent fetching produces the same sorted listing as sequential fetching
#[tokio::test]
async fn test_concurrency_does_not_change_output() {
    let server = MockServer::start().await;
    for day in 1..=5u32 {
        let day_str = format!("2024-05-{day:02}");
        mount_day(
            &server,
            &day_str,
            json!({ "data": [
                { "match_id": format!("{day}-a"), "date": day_str, "time": "18:30", "stadium": "잠실" },
                { "match_id": format!("{day}-b"), "date": day_str, "time": "14:00", "stadium": "사직" },
                { "match_id": format!("{day}-c"), "date": day_str, "time": "18:30", "stadium": "사직" }
            ] }),
        )
        .await;
    }
    mount_empty_days(&server).await;
    let client = ApiClient::new(server.uri(), 5).unwrap();
    let month = Month::parse("2024-05").unwrap();

    let mut sequential = aggregate_month(&client, month, None, &stadiums(), 1).await;
    let mut concurrent = aggregate_month(&client, month, None, &stadiums(), 8).await;
    assert_eq!(sequential, concurrent);

    sort_matches(&mut sequential);
    sort_matches(&mut concurrent);
    assert_eq!(sequential, concurrent);

    let first_ids: Vec<&str> = sequential.iter().take(3).map(|m| m.id.as_str()).collect();
    assert_eq!(first_ids, vec!["5-b", "5-a", "5-c"]);
}
