use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::db::DbPool;
use crate::repository::DieselRepository;
use crate::routes::render_template;
use crate::services::main::show_index;

#[get("/")]
pub async fn index(pool: web::Data<DbPool>, tera: web::Data<Tera>) -> impl Responder {
    let repo = DieselRepository::new(pool.get_ref().clone());

    let (categories, featured) = match show_index(&repo) {
        Ok(data) => data,
        Err(_) => return HttpResponse::InternalServerError().finish(),
    };

    let mut context = Context::new();
    context.insert("current_page", "index");
    context.insert("categories", &categories);
    context.insert("featured", &featured);

    render_template(&tera, "main/index.html", &context)
}
