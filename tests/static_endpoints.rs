//! Static endpoints over a real socket.

use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_countries_and_index() {
    let upstream = common::unused_addr().await;
    let service = common::start_service(common::config_for(upstream, "")).await;
    let client = common::client();

    for _ in 0..2 {
        let res = client
            .get(service.url("/api/countries?country=FR"))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body.as_array().unwrap().len(), 5);
        assert_eq!(body[0], json!({"code": "US", "name": "United States"}));
        assert_eq!(body[4], json!({"code": "AU", "name": "Australia"}));
    }

    let res = client.get(service.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert!(res.headers().contains_key("x-request-id"));
    let page = res.text().await.unwrap();
    for name in ["United States", "India", "United Kingdom", "Canada", "Australia"] {
        assert!(page.contains(name), "index should list {name}");
    }

    let res = client.get(service.url("/health")).send().await.unwrap();
    assert_eq!(res.json::<Value>().await.unwrap(), json!({"status": "ok"}));
}

#[tokio::test]
async fn test_server_stops_on_shutdown() {
    let upstream = common::unused_addr().await;
    let service = common::start_service(common::config_for(upstream, "")).await;
    let url = service.url("/health");
    let client = reqwest::Client::builder()
        .no_proxy()
        .pool_max_idle_per_host(0)
        .build()
        .unwrap();

    assert!(client.get(&url).send().await.is_ok());

    drop(service);
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;

    assert!(client.get(&url).send().await.is_err());
}
