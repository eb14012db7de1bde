pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;
pub mod telegram;

use shared::adaptivity::Adaptivity;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::prelude::*;

use crate::components::TabBar;
use crate::hooks::{use_adaptivity, SettingsProvider};
use crate::pages::{gifts::GiftsPage, leaderboard::LeaderboardPage, profile::ProfilePage};
use crate::telegram::Host;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Gifts,
    Leaderboard,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Gifts, Tab::Leaderboard, Tab::Profile];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Gifts => "Gifts",
            Tab::Leaderboard => "Leaderboard",
            Tab::Profile => "Profile",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Gifts => "🎁",
            Tab::Leaderboard => "🏆",
            Tab::Profile => "👤",
        }
    }
}

/// Mirrors the iOS safe-area inset into a variable the tab bar can pad against.
fn publish_safe_area() {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(root) = root {
        let _ = root
            .style()
            .set_property("--safe-area-bottom", "env(safe-area-inset-bottom, 0px)");
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let host = use_memo((), |_| Host::detect());
    let host = (*host).clone();
    let adaptivity = use_adaptivity(&host);
    let active = use_state(Tab::default);

    {
        let host = host.clone();
        use_effect_with((), move |_| {
            publish_safe_area();
            host.ready();
            host.expand();
            || ()
        });
    }

    let on_select = {
        let active = active.clone();
        Callback::from(move |tab: Tab| active.set(tab))
    };

    let page = match *active {
        Tab::Gifts => html! { <GiftsPage /> },
        Tab::Leaderboard => html! { <LeaderboardPage /> },
        Tab::Profile => html! { <ProfilePage /> },
    };

    html! {
        <ContextProvider<Host> context={host.clone()}>
            <SettingsProvider host={host.clone()}>
                <ContextProvider<Adaptivity> context={adaptivity}>
                    <div class={styles::APP_SHELL}>
                        <main>{page}</main>
                        <TabBar active={*active} {on_select} />
                    </div>
                </ContextProvider<Adaptivity>>
            </SettingsProvider>
        </ContextProvider<Host>>
    }
}
