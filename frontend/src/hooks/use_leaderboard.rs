use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::Request;
use shared::constants::{LEADERBOARD_ENDPOINT, LEADERBOARD_ERROR};
use shared::leaderboard::{normalize, LeaderboardEntry, LeaderboardPayload};
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, AbortSignal};
use yew::prelude::*;

use crate::config::get_api_base_url;

#[derive(Debug, Clone, PartialEq)]
pub enum LeaderboardState {
    Loading,
    Loaded(Rc<Vec<LeaderboardEntry>>),
    Failed(String),
}

async fn fetch_leaderboard(signal: &AbortSignal) -> Result<Vec<LeaderboardEntry>, String> {
    let url = format!("{}{}", get_api_base_url(), LEADERBOARD_ENDPOINT);
    let response = Request::get(&url)
        .abort_signal(Some(signal))
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("Error status: {}", response.status()));
    }

    let payload = response
        .json::<LeaderboardPayload>()
        .await
        .map_err(|e| format!("Error parsing leaderboard: {:?}", e))?;
    Ok(normalize(payload))
}

/// Fetches the leaderboard once per mount. Unmounting aborts the request and discards its result.
#[hook]
pub fn use_leaderboard() -> LeaderboardState {
    let state = use_state(|| LeaderboardState::Loading);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let cancelled = Rc::new(Cell::new(false));
            let controller = AbortController::new().ok();

            if let Some(signal) = controller.as_ref().map(|c| c.signal()) {
                let cancelled = cancelled.clone();
                spawn_local(async move {
                    let result = fetch_leaderboard(&signal).await;
                    if cancelled.get() {
                        return;
                    }
                    match result {
                        Ok(entries) => {
                            log::info!("Loaded {} leaderboard entries", entries.len());
                            state.set(LeaderboardState::Loaded(Rc::new(entries)));
                        }
                        Err(e) => {
                            log::error!("Failed to load leaderboard: {}", e);
                            state.set(LeaderboardState::Failed(LEADERBOARD_ERROR.to_string()));
                        }
                    }
                });
            } else {
                state.set(LeaderboardState::Failed(LEADERBOARD_ERROR.to_string()));
            }

            move || {
                cancelled.set(true);
                if let Some(controller) = controller {
                    controller.abort();
                }
            }
        });
    }

    (*state).clone()
}
