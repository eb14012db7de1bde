use shared::constants::MIN_SEARCH_QUERY_LEN;
use shared::leaderboard::{filter_entries, rank_badge, LeaderboardEntry};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_leaderboard, LeaderboardState};
use crate::styles;
use crate::telegram::Host;

const AVATAR_COLORS: [&str; 6] = [
    "bg-blue-500",
    "bg-green-500",
    "bg-purple-500",
    "bg-pink-500",
    "bg-teal-500",
    "bg-orange-500",
];

fn avatar_color(entry: &LeaderboardEntry) -> &'static str {
    match entry.rank {
        1 => "bg-yellow-500",
        2 => "bg-gray-400",
        3 => "bg-amber-600",
        _ => AVATAR_COLORS[entry.id.unsigned_abs() as usize % AVATAR_COLORS.len()],
    }
}

#[derive(Properties, PartialEq)]
struct LeaderRowProps {
    entry: LeaderboardEntry,
    on_open: Callback<String>,
}

#[function_component(LeaderRow)]
fn leader_row(props: &LeaderRowProps) -> Html {
    let entry = &props.entry;
    let username = entry.display_name.strip_prefix('@').map(str::to_string);
    let onclick = {
        let on_open = props.on_open.clone();
        let username = username.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(username) = &username {
                on_open.emit(username.clone());
            }
        })
    };

    html! {
        <li
            class={classes!(styles::ROW, username.is_some().then_some("cursor-pointer"))}
            {onclick}
        >
            <span class={styles::RANK}>
                {rank_badge(entry.rank).map(str::to_string).unwrap_or_else(|| entry.rank.to_string())}
            </span>
            <div class={classes!(styles::AVATAR, avatar_color(entry))}>
                if let Some(photo) = &entry.photo_url {
                    <img src={photo.clone()} alt={entry.display_name.clone()} class="h-full w-full object-cover" />
                } else {
                    {entry.initial()}
                }
            </div>
            <span class="flex-1 truncate font-medium">{entry.display_name.clone()}</span>
            <span class="font-semibold">{format!("⭐ {}", entry.play_count)}</span>
        </li>
    }
}

#[function_component(LeaderboardPage)]
pub fn leaderboard_page() -> Html {
    let host = use_context::<Host>().unwrap_or_else(Host::detect);
    let state = use_leaderboard();
    let query = use_state(String::new);

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_open = Callback::from(move |username: String| {
        host.open_telegram_link(&format!("https://t.me/{}", username));
    });

    let body = match &state {
        LeaderboardState::Loading => html! {
            <div class="flex justify-center items-center p-12">
                <div class={styles::LOADING_SPINNER}></div>
            </div>
        },
        LeaderboardState::Failed(message) => html! {
            <div class={styles::CARD_ERROR}>{message.clone()}</div>
        },
        LeaderboardState::Loaded(entries) => {
            let visible = filter_entries(entries, &query);
            if entries.is_empty() {
                html! { <p class={classes!(styles::TEXT_HINT, "text-center", "py-8")}>{"No players yet"}</p> }
            } else if visible.is_empty() {
                html! { <p class={classes!(styles::TEXT_HINT, "text-center", "py-8")}>{"Nothing found"}</p> }
            } else {
                html! {
                    <ul class={styles::CARD}>
                        {for visible.into_iter().map(|entry| {
                            let id = entry.id;
                            html! { <LeaderRow key={id} {entry} on_open={on_open.clone()} /> }
                        })}
                    </ul>
                }
            }
        }
    };

    let hint = if query.trim().chars().count() < MIN_SEARCH_QUERY_LEN && !query.trim().is_empty() {
        Some(format!("Type at least {} characters to search", MIN_SEARCH_QUERY_LEN))
    } else {
        None
    };

    html! {
        <div class={styles::PAGE}>
            <div class="flex flex-col items-center text-center mb-6">
                <div class="text-5xl mb-2">{"🏆"}</div>
                <h1 class={styles::TEXT_H1}>{"Leaderboard"}</h1>
                <p class={styles::TEXT_HINT}>{"Top players of the week"}</p>
            </div>

            <div class="mb-4">
                <input
                    type="search"
                    class={styles::INPUT}
                    placeholder="Search players"
                    value={(*query).clone()}
                    {oninput}
                />
                if let Some(hint) = hint {
                    <p class={classes!(styles::TEXT_SUBTITLE, "mt-1")}>{hint}</p>
                }
            </div>

            {body}
        </div>
    }
}
