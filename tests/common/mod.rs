use reqwest::Client;
use server::app::{build_router, serve};
use server::config::Config;
use server::db::ResultStore;

/// Build a reqwest client for tests.
#[allow(dead_code)]
pub fn client() -> Client {
    Client::new()
}

/// Start a server with an empty in-memory store on an ephemeral port.
/// Returns its base URL.
pub async fn spawn_server() -> String {
    let app = build_router(ResultStore::in_memory(), Config::default());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        serve(listener, app).await.expect("Test server error");
    });

    format!("http://{addr}")
}
