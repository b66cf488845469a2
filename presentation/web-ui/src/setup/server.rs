use poem::{EndpointExt, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;
use tracing::info;

use crate::{
    api::product_list::routes, config::app_config::AppConfig,
    setup::dependency_injection::DependencyContainer,
};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service = OpenApiService::new(
            container.health_api,
            "Product List Web UI",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}/api", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        let view = container.product_list_view;
        tokio::spawn({
            let view = view.clone();
            async move {
                view.load().await;
            }
        });

        let app = routes::routes()
            .nest("/api", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .data(view.clone())
            .with(Tracing);

        info!("Product list at http://{}", addr);
        info!("Products served by {}", config.product_api.base_url);
        info!("Swagger UI at http://{}/docs", addr);

        PoemServer::new(TcpListener::bind(&addr))
            .run_with_graceful_shutdown(
                app,
                async {
                    let _ = tokio::signal::ctrl_c().await;
                },
                None,
            )
            .await?;

        view.unmount();
        info!("Product list unmounted, server stopped");
        Ok(())
    }
}
