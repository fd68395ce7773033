use tokio::sync::OnceCell;
use tokio::task::JoinHandle;

static VOLONTULO_INITIALIZED: OnceCell<()> = OnceCell::const_new();

/// Initialize tracing for tests, filtered by `RUST_LOG`
fn init_test_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Load `.env_test` before any configuration LazyLock is touched
fn load_test_environment() {
    init_test_tracing();

    if let Err(e) = dotenvy::from_filename(".env_test") {
        println!("Warning: Could not load .env_test file: {e}");
    }
}

/// Load the test environment and create the tables, once per test binary
pub async fn init_test_environment() {
    VOLONTULO_INITIALIZED
        .get_or_init(|| async {
            load_test_environment();
            volontulo_axum::init()
                .await
                .expect("Failed to initialize volontulo");
        })
        .await;
}

/// Router bound to an ephemeral local port
///
/// The server task lives on the runtime of the test that started it and is
/// aborted on shutdown or drop.
pub struct TestServer {
    server_handle: JoinHandle<()>,
    pub base_url: String,
}

impl TestServer {
    pub async fn start() -> Result<Self, Box<dyn std::error::Error>> {
        init_test_environment().await;

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let base_url = format!("http://{addr}");

        let app = volontulo_axum::volontulo_router();
        let server_handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {e}");
            }
        });

        Ok(Self {
            server_handle,
            base_url,
        })
    }

    pub async fn shutdown(mut self) {
        self.server_handle.abort();
        let _ = (&mut self.server_handle).await;
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.server_handle.abort();
    }
}
