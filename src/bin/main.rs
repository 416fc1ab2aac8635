// Leptos web application server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering)
// - The catalog source (backend over HTTP, or the sample catalog)
// - Static file serving

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use bookwise_explore::web_app::api::registry::{self, SharedBookSource};
    use bookwise_explore::web_app::app::App as WebApp;
    use bookwise_explore::web_app::config::CatalogConfig;
    use leptos::prelude::*;
    use leptos_actix::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
    use leptos_meta::MetaTags;
    use std::io::{Error, ErrorKind};

    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = CatalogConfig::from_env().map_err(|e| Error::new(ErrorKind::InvalidInput, e))?;
    let source = catalog_source(&config).map_err(|e| Error::new(ErrorKind::Other, e))?;

    // Global fallback for server functions called outside a request
    registry::init_source(source.clone());

    // Leptos configuration
    let conf = leptos_config::get_configuration(None)
        .map_err(|e| Error::new(ErrorKind::InvalidInput, e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options_inner = leptos_options.clone();
        let site_root_str = site_root.clone().to_string();

        let context_source = source.clone();
        let provide_source = move || provide_context::<SharedBookSource>(context_source.clone());

        App::new()
            // Server functions, with the catalog source in context
            .route("/api/{tail:.*}", handle_server_fns_with_context(provide_source.clone()))
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            // Leptos routes for SSR with proper shell
            .leptos_routes_with_context(routes, provide_source, {
                let leptos_options = leptos_options_inner.clone();
                move || {
                    view! {
                        <!DOCTYPE html>
                        <html lang="pt-BR">
                            <head>
                                <meta charset="utf-8"/>
                                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                                <AutoReload options=leptos_options.clone() />
                                <HydrationScripts options=leptos_options.clone()/>
                                <MetaTags/>
                            </head>
                            <body>
                                <WebApp/>
                            </body>
                        </html>
                    }
                }
            })
            .app_data(web::Data::new(leptos_options_inner.clone()))
    })
    .bind(&addr)?
    .run()
    .await
}

/// Pick the catalog source: the configured backend, or the sample catalog
#[cfg(feature = "ssr")]
fn catalog_source(
    config: &bookwise_explore::web_app::config::CatalogConfig,
) -> Result<
    bookwise_explore::web_app::api::registry::SharedBookSource,
    bookwise_explore::web_app::errors::LoadError,
> {
    use bookwise_explore::web_app::source::{HttpBookSource, StaticBookSource};
    use std::sync::Arc;

    match HttpBookSource::from_config(config)? {
        Some(http) => {
            tracing::info!("Reading books from {}", http.books_url());
            Ok(Arc::new(http))
        }
        None => {
            tracing::warn!("BOOKWISE_API_URL not set, serving the sample catalog");
            Ok(Arc::new(StaticBookSource::sample()))
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
