use std::sync::Arc;

use axum::extract::Query;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Router};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::controller::AppState;
use crate::helpers::envelope;
use crate::models::query::TruckFilter;
use crate::repositories::truck_data_repo::TruckDataRepo;
use crate::services::truck_pipeline;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(get_trucks))
        .route_layer(Extension(app_state.truck_repo))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct TruckQueryParams {
    pub bounds: Option<String>,
    pub food: Option<String>,
    pub name: Option<String>,
}

pub async fn get_trucks(
    Extension(truck_repo): Extension<Arc<TruckDataRepo>>,
    Query(query): Query<TruckQueryParams>,
) -> impl IntoResponse {
    let filter = match TruckFilter::from_params(
        query.bounds.as_deref(),
        query.food.as_deref(),
        query.name.as_deref(),
    ) {
        Ok(filter) => filter,
        Err(e) => {
            warn!("Rejected a trucks query due to: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                envelope::error(&e.to_string(), 400).to_string(),
            )
                .into_response();
        }
    };

    return match truck_repo.fetch_trucks().await {
        Ok(raw_records) => {
            let trucks = truck_pipeline::filter_trucks(&raw_records, &filter);
            (StatusCode::OK, envelope::ok(&trucks).to_string()).into_response()
        }
        Err(e) => {
            error!(
                "Unable to open the dataset URL {} due to: {}",
                truck_repo.dataset_url(),
                e
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                envelope::error("Unable to load food truck data. Try again later.", 500)
                    .to_string(),
            )
                .into_response()
        }
    };
}
