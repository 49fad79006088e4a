use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};

use crate::{
    chart::LatestChart,
    coordinator::{QueryOutcome, SelectionCoordinator},
    currency::{self, Currency},
    date_bound::DateBound,
    engine::Transport,
    selection::Selection,
};

pub type Coordinator<T> = SelectionCoordinator<T, LatestChart>;

/// Registers the chart and intent routes for a coordinator stored as app data.
pub fn configure<T: Transport + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/chart", web::get().to(chart::<T>))
        .route("/selection", web::get().to(current_selection::<T>))
        .route("/currencies", web::get().to(currencies::<T>))
        .route("/intents/currency", web::post().to(choose_currency::<T>))
        .route("/intents/start-date", web::post().to(change_start_date::<T>))
        .route("/intents/end-date", web::post().to(change_end_date::<T>));
}

#[derive(Debug, Deserialize)]
struct CurrencyIntent {
    id: String,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DateIntent {
    date: DateBound,
}

#[derive(Debug, Serialize)]
struct IntentReply {
    status: &'static str,
    points: Option<usize>,
    error: Option<String>,
    selection: Selection,
}

async fn chart<T: Transport + 'static>(coordinator: web::Data<Coordinator<T>>) -> impl Responder {
    web::Json(coordinator.sink().snapshot())
}

async fn current_selection<T: Transport + 'static>(
    coordinator: web::Data<Coordinator<T>>,
) -> impl Responder {
    web::Json(coordinator.selection())
}

async fn currencies<T: Transport + 'static>(coordinator: web::Data<Coordinator<T>>) -> impl Responder {
    web::Json(coordinator.currency_choices())
}

async fn choose_currency<T: Transport + 'static>(
    coordinator: web::Data<Coordinator<T>>,
    intent: web::Json<CurrencyIntent>,
) -> HttpResponse {
    let CurrencyIntent { id, name } = intent.into_inner();
    let chosen = match name {
        Some(name) => Currency::new(id, name),
        None => match currency::find(&id) {
            Some(known) => known,
            None => return HttpResponse::NotFound().body(format!("Unknown currency {id}")),
        },
    };

    let outcome = coordinator.on_currency_chosen(chosen).await;
    reply(&coordinator, outcome)
}

async fn change_start_date<T: Transport + 'static>(
    coordinator: web::Data<Coordinator<T>>,
    intent: web::Json<DateIntent>,
) -> HttpResponse {
    let outcome = coordinator.on_start_date_changed(intent.date).await;
    reply(&coordinator, outcome)
}

async fn change_end_date<T: Transport + 'static>(
    coordinator: web::Data<Coordinator<T>>,
    intent: web::Json<DateIntent>,
) -> HttpResponse {
    let outcome = coordinator.on_end_date_changed(intent.date).await;
    reply(&coordinator, outcome)
}

fn reply<T: Transport>(coordinator: &Coordinator<T>, outcome: QueryOutcome) -> HttpResponse {
    let current = coordinator.selection();
    match outcome {
        QueryOutcome::Rendered { points } => HttpResponse::Ok().json(IntentReply {
            status: "rendered",
            points: Some(points),
            error: None,
            selection: current,
        }),
        QueryOutcome::Superseded => HttpResponse::Ok().json(IntentReply {
            status: "superseded",
            points: None,
            error: None,
            selection: current,
        }),
        QueryOutcome::Failed(err) => HttpResponse::BadGateway().json(IntentReply {
            status: "failed",
            points: None,
            error: Some(err.to_string()),
            selection: current,
        }),
    }
}
