//! API endpoints for the weekly schedule.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::schedule::{self, active_people, format};
use crate::types::AppState;

/// GET /
/// Resolves the current week's schedule and returns the view model:
/// the five day entries (`semaine`), the week parity (`isPaire`) and
/// today's date as a long French date (`aujourdHui`).
pub async fn get_planning(State(s): State<Arc<AppState>>) -> Response {
    let today = Local::now().date_naive();
    info!("GET / - resolving week of {}", today);

    let week = schedule::resolve_week(today, &s.rosters);

    let semaine: Vec<_> = week
        .days
        .iter()
        .map(|entry| {
            json!({
                "jour": entry.day.label(),
                "personne": entry.person,
                "date": format::short_date_fr(entry.date),
                "teletravail": entry.is_remote(),
                "ferie": entry.holiday,
            })
        })
        .collect();

    let body = json!({
        "semaine": semaine,
        "isPaire": week.is_even,
        "aujourdHui": format::long_date_fr(today),
        "numeroSemaine": week.week_number,
        "periode": format::week_range_fr(week.monday(), week.friday()),
    });

    (StatusCode::OK, Json(body)).into_response()
}

/// GET /equipe
/// Returns the names of the active team members.
pub async fn get_team(State(s): State<Arc<AppState>>) -> Response {
    info!("GET /equipe");

    let body = json!({
        "equipe": active_people(&s.team),
    });

    (StatusCode::OK, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn planning_returns_the_view_model() {
        let state = Arc::new(AppState::new());
        let response = get_planning(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let semaine = body["semaine"].as_array().unwrap();
        assert_eq!(semaine.len(), 5);
        assert_eq!(semaine[0]["jour"], "LUNDI");
        assert_eq!(semaine[4]["jour"], "VENDREDI");
        assert_eq!(semaine[0]["personne"], "");
        assert_eq!(semaine[0]["teletravail"], false);
        assert_eq!(semaine[4]["personne"], "");

        assert!(body["isPaire"].is_boolean());
        assert!(body["aujourdHui"].is_string());
        assert!(body["numeroSemaine"].is_u64());
        assert!(body["periode"].is_string());
    }

    #[tokio::test]
    async fn team_lists_active_members() {
        let state = Arc::new(AppState::new());
        let response = get_team(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let equipe = body["equipe"].as_array().unwrap();
        assert_eq!(equipe.len(), 6);
        assert!(equipe.contains(&Value::from("Vincent")));
    }
}
