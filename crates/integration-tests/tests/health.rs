mod harness;

use harness::config::ConfigBuilder;
use harness::server::TestServer;

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let server = TestServer::start(&ConfigBuilder::new().build()).await.unwrap();

    let resp = server.client().get(server.url("/health")).send().await.unwrap();

    assert_eq!(resp.status(), 200);

    let body = resp.text().await.unwrap();
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn unknown_route_is_plain_404() {
    let server = TestServer::start(&ConfigBuilder::new().build()).await.unwrap();

    let resp = server.client().get(server.url("/nope")).send().await.unwrap();

    assert_eq!(resp.status(), 404);
}
