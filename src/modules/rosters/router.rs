use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{download_roster, get_limits, preview_roster};

pub fn init_rosters_router() -> Router<AppState> {
    Router::new()
        .route("/", post(download_roster))
        .route("/preview", post(preview_roster))
        .route("/limits", get(get_limits))
}
