//! HTTP behavior tests.
//!
//! Route tests bind the router to an ephemeral local port and exercise it
//! over real HTTP connections. A separate test starts the compiled binary
//! with no arguments to verify the default bind address.

use std::net::{SocketAddr, TcpStream};
use std::process::{Child, Command, Stdio};
use std::time::Duration;

use greeter::config::DEFAULT_PORT;
use greeter::routes::create_router;

const GREETING: &str = "Hello, this is Sushmitha's custom Flask app running in Docker via Ansible!";

/// Serve the router on an ephemeral port, returning the bound address.
async fn spawn_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, create_router())
            .await
            .expect("server task failed");
    });
    addr
}

#[tokio::test]
async fn root_returns_greeting() {
    let addr = spawn_server().await;

    let response = reqwest::get(format!("http://{}/", addr))
        .await
        .expect("request root");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .expect("content-type header")
        .to_str()
        .expect("content-type is ascii")
        .to_string();
    assert!(
        content_type.starts_with("text/html"),
        "unexpected content type: {}",
        content_type
    );
    assert_eq!(response.text().await.expect("read body"), GREETING);
}

#[tokio::test]
async fn unknown_paths_return_404() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    for path in ["/unknown", "/hello", "/a/b/c"] {
        let response = client
            .get(format!("http://{}{}", addr, path))
            .send()
            .await
            .expect("request unknown path");
        assert_eq!(
            response.status(),
            reqwest::StatusCode::NOT_FOUND,
            "expected 404 for {}",
            path
        );
    }
}

#[tokio::test]
async fn non_get_methods_on_root_return_405() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();
    let url = format!("http://{}/", addr);

    let post = client.post(&url).send().await.expect("post root");
    assert_eq!(post.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);

    let put = client.put(&url).send().await.expect("put root");
    assert_eq!(put.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);

    let delete = client.delete(&url).send().await.expect("delete root");
    assert_eq!(delete.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);
}

/// Kills the spawned server process when the test ends, pass or fail.
struct ServerGuard(Child);

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

/// Wait for the server to accept TCP connections on the given port.
fn wait_for_port(port: u16) {
    let max_attempts = 100;
    let delay = Duration::from_millis(100);

    for _ in 0..max_attempts {
        if TcpStream::connect(("127.0.0.1", port)).is_ok() {
            return;
        }
        std::thread::sleep(delay);
    }

    panic!(
        "server did not start within {} seconds",
        max_attempts as f64 * delay.as_secs_f64()
    );
}

#[tokio::test]
async fn binary_with_no_arguments_binds_default_port() {
    let child = Command::new(env!("CARGO_BIN_EXE_greeter"))
        .env("RUST_LOG", "greeter=warn")
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("Failed to start server binary");
    let _guard = ServerGuard(child);

    wait_for_port(DEFAULT_PORT);

    let response = reqwest::get(format!("http://127.0.0.1:{}/", DEFAULT_PORT))
        .await
        .expect("request default address");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await.expect("read body"), GREETING);
}
