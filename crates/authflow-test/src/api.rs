use authflow_core::ClientSettings;

/// Helper for testing against the identity gateway using wiremock.
///
/// Warning: when using `Mock::expect` ensure the returned server is not
/// dropped before the test completes.
pub async fn start_endpoint_mock(mocks: Vec<wiremock::Mock>) -> (wiremock::MockServer, ClientSettings) {
    let server = wiremock::MockServer::start().await;

    for mock in mocks {
        server.register(mock).await;
    }

    let settings = ClientSettings {
        base_url: server.uri(),
        user_agent: "test-agent".to_string(),
    };

    (server, settings)
}
