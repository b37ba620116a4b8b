use review_service::config::ReviewConfig;
use review_service::startup::Application;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    pub async fn spawn_with(customize: impl FnOnce(&mut ReviewConfig)) -> Self {
        let mut config = ReviewConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        customize(&mut config);

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
        }
    }
}
