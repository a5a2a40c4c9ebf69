use naver_news_async::config::{ENV_CLIENT_ID, ENV_CLIENT_SECRET, HDR_CLIENT_ID, HDR_CLIENT_SECRET};
use naver_news_async::test_support::EnvGuard;
use naver_news_async::types::{NewsSearchRequest, SortOrder};
use naver_news_async::{Client, NaverConfig, NaverError};
use serial_test::serial;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client<NaverConfig> {
    let config = NaverConfig::new()
        .with_api_base(server.uri())
        .with_credentials("test-id", "test-secret");
    Client::with_config(config)
}

fn mock_items(n: usize) -> Vec<serde_json::Value> {
    (1..=n)
        .map(|i| {
            serde_json::json!({
                "title": format!("<b>삼성전자</b> 기사 {i}"),
                "originallink": format!("https://press.example.com/{i}"),
                "link": format!("https://n.news.naver.com/mnews/article/001/{i}"),
                "description": format!("요약 &quot;{i}&quot;"),
                "pubDate": "Mon, 19 Oct 2026 09:00:00 +0900"
            })
        })
        .collect()
}

#[tokio::test]
async fn search_success_parses() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/news.json"))
        .and(header(HDR_CLIENT_ID, "test-id"))
        .and(header(HDR_CLIENT_SECRET, "test-secret"))
        .and(query_param("query", "삼성전자"))
        .and(query_param("display", "2"))
        .and(query_param("start", "1"))
        .and(query_param("sort", "date"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "lastBuildDate": "Mon, 19 Oct 2026 10:00:00 +0900",
            "total": 1234,
            "start": 1,
            "display": 2,
            "items": mock_items(2)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let req = NewsSearchRequest::new("삼성전자")
        .with_display(2)
        .with_sort(SortOrder::Date);
    let resp = client.news().search(req).await.unwrap();

    assert_eq!(resp.total, 1234);
    assert_eq!(resp.display, 2);
    assert_eq!(
        resp.last_build_date.as_deref(),
        Some("Mon, 19 Oct 2026 10:00:00 +0900")
    );
    assert_eq!(resp.items.len(), 2);
    assert_eq!(resp.items[0].title, "<b>삼성전자</b> 기사 1");
    assert_eq!(
        resp.items[1].link,
        "https://n.news.naver.com/mnews/article/001/2"
    );
}

#[tokio::test]
async fn search_keeps_upstream_order_and_caps_at_display() {
    let server = MockServer::start().await;

    // Upstream misbehaves and returns more than requested.
    Mock::given(method("GET"))
        .and(path("/news.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total": 7,
            "start": 1,
            "display": 5,
            "items": mock_items(7)
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client
        .news()
        .search(NewsSearchRequest::new("q").with_display(5))
        .await
        .unwrap();

    assert_eq!(resp.items.len(), 5);
    let links: Vec<_> = resp.items.iter().map(|i| i.originallink.as_str()).collect();
    assert_eq!(
        links,
        [
            "https://press.example.com/1",
            "https://press.example.com/2",
            "https://press.example.com/3",
            "https://press.example.com/4",
            "https://press.example.com/5",
        ]
    );
}

#[tokio::test]
async fn invalid_request_is_rejected_before_sending() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    let err = client
        .news()
        .search(NewsSearchRequest::new(""))
        .await
        .unwrap_err();
    assert!(matches!(err, NaverError::InvalidRequest(_)));

    let err = client
        .news()
        .search(NewsSearchRequest::new("q").with_display(0))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("display"));

    let received = server.received_requests().await.unwrap();
    assert!(received.is_empty(), "no request should reach the API");
}

#[tokio::test]
async fn auth_failure_surfaces_as_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/news.json"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "errorMessage": "Authentication failed (인증에 실패했습니다.)",
            "errorCode": "024"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .news()
        .search(NewsSearchRequest::new("q"))
        .await
        .unwrap_err();

    assert!(err.is_auth_error());
    match err {
        NaverError::Api(obj) => {
            assert_eq!(obj.status_code, Some(401));
            assert_eq!(obj.error_code.as_deref(), Some("024"));
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_json_is_serde_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/news.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .news()
        .search(NewsSearchRequest::new("q"))
        .await
        .unwrap_err();
    match err {
        NaverError::Serde(msg) => assert!(msg.contains("oops")),
        other => panic!("Expected Serde error, got {other:?}"),
    }
}

#[tokio::test]
#[serial(env)]
async fn missing_credentials_is_config_error() {
    let _env = EnvGuard::new()
        .remove(ENV_CLIENT_ID)
        .remove(ENV_CLIENT_SECRET);

    let client = Client::with_config(NaverConfig::new().with_api_base("http://localhost:1234"));
    let err = client
        .news()
        .search(NewsSearchRequest::new("q"))
        .await
        .unwrap_err();

    match err {
        NaverError::Config(msg) => assert!(msg.contains(ENV_CLIENT_ID)),
        other => panic!("Expected Config error, got {other:?}"),
    }
}
