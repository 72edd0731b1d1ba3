use device_client::DeviceClient;

/// Set up a client pointed at the mock server's `/api` prefix.
#[allow(dead_code)]
pub fn setup_test_client(server_url: &str) -> DeviceClient {
    let _ = env_logger::builder().is_test(true).try_init();

    DeviceClient::builder()
        .base_url(format!("{server_url}/api"))
        .build()
        .expect("Failed to build DeviceClient")
}

/// A base URL on which nothing is listening.
#[allow(dead_code)]
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/api")
}
