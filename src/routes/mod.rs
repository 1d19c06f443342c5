use actix_web::HttpResponse;
use tera::{Context, Tera};

pub mod api;
pub mod main;
pub mod metadata;
pub mod products;

/// Renders a tera template, logging failures and returning an empty body
/// rather than bubbling template errors to the client.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    HttpResponse::Ok().body(tera.render(template, context).unwrap_or_else(|e| {
        log::error!("Failed to render template '{template}': {e}");
        String::new()
    }))
}
