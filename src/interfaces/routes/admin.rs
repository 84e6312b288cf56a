use actix_web::web;

use crate::handlers::{about, forms, projects, skills, social_settings, system};

use super::blog;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(web::resource("/health").route(web::get().to(system::admin_health_check)))
            .service(web::resource("/forms/{entity}").route(web::get().to(forms::get_form)))
            .service(
                web::scope("/about")
                    .service(
                        web::resource("")
                            .route(web::get().to(about::list_about))
                            .route(web::post().to(about::create_about))
                    )
                    .service(
                        web::resource("/{about_id}")
                            .route(web::get().to(about::get_about))
                            .route(web::put().to(about::update_about))
                            .route(web::delete().to(about::delete_about))
                    )
            )
            .service(
                web::scope("/skills")
                    .service(
                        web::resource("")
                            .route(web::get().to(skills::list_skills))
                            .route(web::post().to(skills::create_skill))
                    )
                    .service(
                        web::resource("/{skill_id}")
                            .route(web::get().to(skills::get_skill))
                            .route(web::put().to(skills::update_skill))
                            .route(web::delete().to(skills::delete_skill))
                    )
            )
            .service(
                web::scope("/projects")
                    .service(
                        web::resource("")
                            .route(web::get().to(projects::list_projects))
                            .route(web::post().to(projects::create_project))
                    )
                    .service(
                        web::resource("/{project_id}")
                            .route(web::get().to(projects::get_project))
                            .route(web::put().to(projects::update_project))
                            .route(web::delete().to(projects::delete_project))
                    )
            )
            .service(
                web::scope("/social-settings")
                    .service(
                        web::resource("")
                            .route(web::get().to(social_settings::list_social_settings))
                            .route(web::post().to(social_settings::create_social_settings))
                    )
                    .service(
                        web::resource("/{settings_id}")
                            .route(web::get().to(social_settings::get_social_settings))
                            .route(web::put().to(social_settings::update_social_settings))
                            .route(web::delete().to(social_settings::delete_social_settings))
                    )
            )
            .configure(blog::config_routes)
    );
}
