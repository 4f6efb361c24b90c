use std::net::SocketAddr;
use std::sync::Arc;

use players_common::server::with_middleware;
use players_memory::store::PlayerStore;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn start_server() -> String {
    let app = with_middleware(players_memory::app(Arc::new(PlayerStore::new())));
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn e2e_player_lifecycle() {
    let base_url = start_server().await;
    let client = reqwest::Client::new();

    let res = client.get(format!("{base_url}/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .post(format!("{base_url}/api/players"))
        .json(&json!({ "name": "A" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await.unwrap();
    let id = created["id"].as_i64().unwrap();

    let res = client
        .patch(format!("{base_url}/api/players/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await.unwrap();
    assert_eq!(updated["active"], true);

    let res = client
        .delete(format!("{base_url}/api/players/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let list: Value = client
        .get(format!("{base_url}/api/players"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list, json!([]));
}
