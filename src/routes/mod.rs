use actix_web::web;

pub mod atividade;
pub mod auth;
pub mod health;
pub mod perfil;
pub mod turma;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));

    cfg.service(
        web::scope("/auth")
            .service(web::scope("/signup").service(auth::signup::signup))
            .service(web::scope("/validate").service(auth::validate::validate))
            .service(web::scope("/regenerate").service(auth::regenerate::regenerate))
            .service(web::scope("/account").service(auth::account::delete_account)),
    );

    cfg.service(
        web::scope("/perfil")
            .service(perfil::get::get_perfil)
            .service(perfil::update::update_perfil),
    );

    cfg.service(
        web::scope("/turmas")
            .service(turma::create::create_turma)
            .service(turma::list::list_turmas)
            .service(turma::get::get_turma)
            .service(turma::update::update_turma)
            .service(turma::delete::delete_turma),
    );

    cfg.service(
        web::scope("/atividades")
            .service(atividade::create::create_atividade)
            .service(atividade::list::list_atividades)
            .service(atividade::update::update_atividade)
            .service(atividade::delete::delete_atividade),
    );
}
