mod common;

use url_shortener::domain::repositories::UrlRepository;

#[tokio::test]
async fn test_stats_success() {
    let (server, repo) = common::create_test_server();
    common::create_test_url(&repo, "stats001", "https://example.com/page").await;
    repo.increment_clicks("stats001").await.unwrap();
    repo.increment_clicks("stats001").await.unwrap();

    let response = server
        .get("/api/url/stats001/stats")
        .add_header("Host", common::TEST_HOST)
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["shortId"], "stats001");
    assert_eq!(json["data"]["originalUrl"], "https://example.com/page");
    assert_eq!(json["data"]["shortUrl"], "http://sho.rt/api/url/stats001");
    assert_eq!(json["data"]["clicks"], 2);
    assert!(json["data"]["createdAt"].is_string());
}

#[tokio::test]
async fn test_stats_does_not_count_click() {
    let (server, repo) = common::create_test_server();
    common::create_test_url(&repo, "stats002", "https://example.com").await;

    server.get("/api/url/stats002/stats").await.assert_status_ok();
    server.get("/api/url/stats002/stats").await.assert_status_ok();

    let record = repo.find_by_short_id("stats002").await.unwrap().unwrap();
    assert_eq!(record.clicks, 0);
}

#[tokio::test]
async fn test_stats_not_found() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/api/url/zzzzzzzz/stats").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "URL not found");
}
