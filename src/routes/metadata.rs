use actix_web::{HttpResponse, Responder, get, web};

use crate::db::DbPool;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::services::metadata::{
    build_robots, build_sitemap, render_robots_txt, render_sitemap_xml,
};

#[get("/sitemap.xml")]
pub async fn sitemap(pool: web::Data<DbPool>, config: web::Data<ServerConfig>) -> impl Responder {
    let repo = DieselRepository::new(pool.get_ref().clone());
    let entries = build_sitemap(&config.base_url, &repo);

    HttpResponse::Ok()
        .content_type("application/xml")
        .body(render_sitemap_xml(&entries))
}

#[get("/robots.txt")]
pub async fn robots(config: web::Data<ServerConfig>) -> impl Responder {
    let robots = build_robots(&config.base_url);

    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(render_robots_txt(&robots))
}
