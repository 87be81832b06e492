mod routing;
mod models;

use rocket::{
    launch,
    routes,
    catchers,
    Rocket,
    Build,
    figment::Figment
};

/// Assembles the service from an explicit configuration source.
pub fn build(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(models::db::DbConn::fairing())
        .attach(models::db::migrate::fairing())
        .mount("/", routes![
            routing::list_categories,
            routing::questions_in_category,
            routing::list_questions,
            routing::create_question,
            routing::delete_question,
            routing::search_questions,
            routing::play_quiz
        ])
        .mount("/", routing::methods::fallbacks())
        .register("/", catchers![
            routing::catchers::bad_request,
            routing::catchers::not_found,
            routing::catchers::method_not_allowed,
            routing::catchers::unprocessable,
            routing::catchers::server_error,
            routing::catchers::any_other
        ])
}

#[launch]
fn rocket() -> _ {
    dotenv::dotenv().ok();
    build(rocket::Config::figment())
}
