use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::http::Method;
use actix_web::middleware::DefaultHeaders;
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing_actix_web::TracingLogger;

use crate::configuration::{DatabaseSettings, Settings};
use crate::email_client::EmailClient;
use crate::notification::NotificationDispatcher;
use crate::routes;

pub type DbConnectionKind = PgPool;

pub fn get_connection_pool(configuration: &DatabaseSettings) -> DbConnectionKind {
    PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(2))
        .connect_lazy_with(configuration.with_db())
}

/// Build the email client and wrap it into the dispatcher shared by both handlers.
pub fn build_dispatcher(configuration: &Settings) -> Result<NotificationDispatcher, anyhow::Error> {
    let sender_email = configuration
        .email_client
        .sender()
        .map_err(anyhow::Error::msg)
        .context("Invalid sender email address in configuration")?;
    let business_inbox = configuration
        .notifications
        .business_inbox()
        .map_err(anyhow::Error::msg)
        .context("Invalid business inbox address in configuration")?;
    let email_client = EmailClient::new(
        configuration.email_client.base_url.clone(),
        sender_email,
        configuration.email_client.authorization_token.clone(),
        configuration.email_client.timeout(),
    )
    .context("Failed to build the email client")?;

    Ok(NotificationDispatcher::new(
        email_client,
        business_inbox,
        configuration.notifications.company_name.clone(),
    ))
}

fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add((
            "Access-Control-Allow-Headers",
            "authorization, x-client-info, apikey, content-type",
        ))
        .add(("Access-Control-Allow-Methods", "POST, OPTIONS"))
}

pub fn run(
    listener: TcpListener,
    connection: DbConnectionKind,
    dispatcher: NotificationDispatcher,
) -> Result<Server, std::io::Error> {
    let connection = web::Data::new(connection);
    let dispatcher = Data::new(dispatcher);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors_headers())
            .wrap(TracingLogger::default())
            .app_data(
                web::JsonConfig::default()
                    .content_type_required(false)
                    .error_handler(routes::json_error_handler),
            )
            .route("/health", web::get().to(routes::health_check::health_check))
            .service(
                web::resource("/send-contact-email")
                    .route(web::post().to(routes::contact::send_contact_email))
                    .route(web::method(Method::OPTIONS).to(routes::preflight)),
            )
            .service(
                web::resource("/send-quote-request")
                    .route(web::post().to(routes::quote_request::send_quote_request))
                    .route(web::method(Method::OPTIONS).to(routes::preflight)),
            )
            .app_data(connection.clone())
            .app_data(dispatcher.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
