use actix_web::web;

use crate::handlers::pages;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(pages::home)))
        .service(web::resource("/project/{project_id}").route(web::get().to(pages::project_detail)))
        .service(web::resource("/blog").route(web::get().to(pages::blog_list)))
        .service(web::resource("/blog/{slug}").route(web::get().to(pages::blog_detail)));
}
