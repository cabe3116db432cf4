use axum::{
    routing::{get, post},
    Router,
};

use crate::api::{health, report, scenarios, simulate};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/simulate", post(simulate::run_simulation))
        .route(
            "/scenarios",
            get(scenarios::list_scenarios).post(scenarios::create_scenario),
        )
        .route(
            "/scenarios/:id",
            get(scenarios::get_scenario)
                .put(scenarios::update_scenario)
                .patch(scenarios::update_scenario)
                .delete(scenarios::delete_scenario),
        )
        .route("/report/generate", post(report::generate_report))
        .route("/healthz", get(health::healthz))
        .with_state(state)
}
