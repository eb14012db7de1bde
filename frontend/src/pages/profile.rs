use shared::init_data::{InitData, WebAppUser};
use shared::theme::ThemePreference;
use yew::prelude::*;

use crate::hooks::use_settings;
use crate::styles;
use crate::telegram::Host;

fn current_user(host: &Host) -> Option<WebAppUser> {
    let raw = host.init_data()?;
    match InitData::parse(&raw).and_then(|data| data.user()) {
        Ok(user) => user,
        Err(e) => {
            log::warn!("Could not read user from init data: {}", e);
            None
        }
    }
}

fn preference_label(preference: ThemePreference) -> &'static str {
    match preference {
        ThemePreference::Auto => "Auto",
        ThemePreference::Light => "☀️",
        ThemePreference::Dark => "🌙",
    }
}

#[function_component(ThemeToggle)]
fn theme_toggle() -> Html {
    let settings = use_settings();

    html! {
        <div class={styles::TOGGLE_GROUP} aria-label="Theme">
            {for ThemePreference::ALL.iter().map(|preference| {
                let preference = *preference;
                let is_active = settings.preference == preference;
                let onclick = {
                    let set_preference = settings.set_preference.clone();
                    Callback::from(move |_: MouseEvent| set_preference.emit(preference))
                };
                html! {
                    <button
                        type="button"
                        key={preference.as_str()}
                        class={if is_active { styles::TOGGLE_ACTIVE } else { styles::TOGGLE }}
                        aria-pressed={is_active.to_string()}
                        title={preference.as_str()}
                        {onclick}
                    >
                        {preference_label(preference)}
                    </button>
                }
            })}
        </div>
    }
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let host = use_context::<Host>().unwrap_or_else(Host::detect);
    let user = use_memo(host, current_user);

    let card = match &*user {
        Some(user) => {
            let initial = user.first_name.chars().next().map(|c| c.to_uppercase().to_string());
            html! {
                <div class={classes!(styles::CARD, "flex", "items-center", "gap-4")}>
                    <div class={classes!(styles::AVATAR, "bg-blue-500", "h-14", "w-14", "text-xl")}>
                        if let Some(photo) = &user.photo_url {
                            <img src={photo.clone()} alt={user.display_name()} class="h-full w-full object-cover" />
                        } else {
                            {initial.unwrap_or_else(|| "?".to_string())}
                        }
                    </div>
                    <div class="min-w-0">
                        <p class={styles::TEXT_H2}>{user.display_name()}</p>
                        if let Some(username) = &user.username {
                            <p class={styles::TEXT_HINT}>{format!("@{}", username)}</p>
                        }
                    </div>
                </div>
            }
        }
        None => html! {
            <div class={styles::CARD}>
                <p class={styles::TEXT_H2}>{"Guest"}</p>
                <p class={styles::TEXT_HINT}>{"Open the app from Telegram to see your profile"}</p>
            </div>
        },
    };

    html! {
        <div class={styles::PAGE}>
            <div class={styles::PAGE_HEADER}>
                <h1 class={styles::TEXT_H1}>{"Profile"}</h1>
                <ThemeToggle />
            </div>
            {card}
        </div>
    }
}
