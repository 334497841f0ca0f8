pub mod configuration;
pub mod domain;
pub mod email_client;
pub mod notification;
pub mod routes;
pub mod startup;
pub mod telemetry;
