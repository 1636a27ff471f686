use crate::models::ScoreSnapshot;
use crate::session::run_session;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{ws::WebSocketUpgrade, State},
    response::{Html, IntoResponse},
    Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.data.lock().await.snapshot();
    Html(render_index(&snapshot))
}

pub async fn get_state(State(state): State<AppState>) -> Json<ScoreSnapshot> {
    Json(state.data.lock().await.snapshot())
}

pub async fn ws(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| run_session(socket, state))
}
