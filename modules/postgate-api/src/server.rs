use std::net::SocketAddr;

use anyhow::Result;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::Html,
    routing::get,
    Router,
};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::info;

use crate::graphql::ApiSchema;

async fn graphql_handler(State(schema): State<ApiSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(
        async_graphql::http::GraphiQLSource::build()
            .endpoint("/graphql")
            .finish(),
    )
}

fn router(schema: ApiSchema) -> Router {
    Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        // Health check
        .route("/", get(|| async { "ok" }))
        .with_state(schema)
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

/// The gateway server: schema + bind address, with an explicit
/// start/stop lifecycle instead of process-global state.
pub struct Gateway {
    schema: ApiSchema,
    addr: String,
}

impl Gateway {
    pub fn new(schema: ApiSchema, addr: impl Into<String>) -> Self {
        Self {
            schema,
            addr: addr.into(),
        }
    }

    /// Bind the listener and start serving in a background task.
    pub async fn start(self) -> Result<GatewayHandle> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        let local_addr = listener.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let app = router(self.schema);
        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        info!("Gateway listening on {local_addr}");
        Ok(GatewayHandle {
            local_addr,
            shutdown_tx,
            task,
        })
    }
}

/// Handle to a running gateway. Dropping it without calling `stop`
/// leaves the server running until the process exits.
pub struct GatewayHandle {
    local_addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

impl GatewayHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Trigger graceful shutdown and wait for in-flight requests.
    pub async fn stop(self) -> Result<()> {
        let _ = self.shutdown_tx.send(());
        self.task.await??;
        info!("Gateway stopped");
        Ok(())
    }
}
