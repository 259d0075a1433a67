use crate::dto::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use mapi_core::HEALTH_MESSAGE;
use mapi_model::*;

pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(Message {
        message: HEALTH_MESSAGE,
    })
}

/// Scores one untyped record. Schema problems surface as a bare 500.
pub async fn predict(model: web::Data<dyn Predictor>, record: web::Json<Record>) -> impl Responder {
    match model
        .predict(&Frame::from(record.into_inner()))
        .inspect_err(|e| log::warn!("scoring failed: {}", e))
    {
        Err(_) => HttpResponse::InternalServerError().body("Internal Server Error"),
        Ok(prediction) => HttpResponse::Ok().json(Scored { prediction }),
    }
}
