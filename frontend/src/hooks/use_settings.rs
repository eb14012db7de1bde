use std::collections::HashMap;

use shared::constants::THEME_STORAGE_KEY;
use shared::theme::{resolve, resolve_palette, ChromeColors, ColorScheme, ThemePreference};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::prelude::*;

use crate::telegram::Host;

/// Theme state shared with every page. `set_preference` is the only writer.
#[derive(Clone, PartialEq)]
pub struct SettingsContext {
    pub preference: ThemePreference,
    pub scheme: ColorScheme,
    pub set_preference: Callback<ThemePreference>,
}

impl Default for SettingsContext {
    fn default() -> Self {
        Self {
            preference: ThemePreference::Auto,
            scheme: resolve(ThemePreference::Auto, None),
            set_preference: Callback::noop(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SettingsProviderProps {
    pub host: Host,
    pub children: Html,
}

fn load_preference() -> ThemePreference {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    ThemePreference::from_stored(stored.as_deref())
}

fn store_preference(preference: ThemePreference) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if let Err(e) = storage.set_item(THEME_STORAGE_KEY, preference.as_str()) {
            log::warn!("Failed to persist theme preference: {:?}", e);
        }
    }
}

fn apply_theme(
    host: &Host,
    scheme: ColorScheme,
    host_scheme: Option<ColorScheme>,
    host_params: &HashMap<String, String>,
) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let _ = root.class_list().toggle_with_force("dark", scheme.is_dark());
    let _ = root.set_attribute("data-theme", scheme.as_str());

    if let Ok(root) = root.dyn_into::<HtmlElement>() {
        let style = root.style();
        for (key, value) in resolve_palette(scheme, host_scheme, host_params) {
            let _ = style.set_property(&key.css_var(), &value);
        }
    }

    let chrome = ChromeColors::for_scheme(scheme);
    host.set_header_color(chrome.header);
    host.set_background_color(chrome.background);
    host.set_bottom_bar_color(chrome.bottom_bar);
}

#[function_component(SettingsProvider)]
pub fn settings_provider(props: &SettingsProviderProps) -> Html {
    let preference = use_state(load_preference);
    let current_preference = use_mut_ref(|| *preference);
    *current_preference.borrow_mut() = *preference;
    let host_scheme = use_state(|| props.host.color_scheme());
    let host_params = use_state(|| props.host.theme_params());
    let scheme = resolve(*preference, *host_scheme);

    {
        let host = props.host.clone();
        use_effect_with(
            (scheme, *host_scheme, (*host_params).clone()),
            move |(scheme, host_scheme, host_params)| {
                apply_theme(&host, *scheme, *host_scheme, host_params);
                || ()
            },
        );
    }

    // Follow host theme changes while the preference is Auto
    {
        let host_scheme = host_scheme.clone();
        let host_params = host_params.clone();
        let current_preference = current_preference.clone();
        use_effect_with(props.host.clone(), move |host| {
            let source = host.clone();
            let subscription = host.on_theme_changed(Callback::from(move |_| {
                let preference = *current_preference.borrow();
                if !preference.follows_host() {
                    log::debug!("Host theme changed, keeping {} preference", preference);
                    return;
                }
                log::debug!("Host theme changed");
                host_scheme.set(source.color_scheme());
                host_params.set(source.theme_params());
            }));
            move || drop(subscription)
        });
    }

    let set_preference = {
        let preference = preference.clone();
        let host = props.host.clone();
        let host_scheme = host_scheme.clone();
        let host_params = host_params.clone();
        Callback::from(move |next: ThemePreference| {
            store_preference(next);
            // Changes skipped while pinned are picked up on the way back to Auto
            if next.follows_host() {
                host_scheme.set(host.color_scheme());
                host_params.set(host.theme_params());
            }
            preference.set(next);
        })
    };

    let context = SettingsContext {
        preference: *preference,
        scheme,
        set_preference,
    };

    html! {
        <ContextProvider<SettingsContext> {context}>
            { props.children.clone() }
        </ContextProvider<SettingsContext>>
    }
}

#[hook]
pub fn use_settings() -> SettingsContext {
    use_context::<SettingsContext>().unwrap_or_default()
}
