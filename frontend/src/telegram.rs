use std::collections::HashMap;
use std::rc::Rc;

use js_sys::{Array, Function, Object, Reflect};
use shared::constants::HAPTIC_PATTERN_MS;
use shared::invoice::InvoiceStatus;
use shared::theme::ColorScheme;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;
use yew::Callback;

/// Everything the app asks of the surrounding host.
///
/// Every method has a harmless default so the app keeps working in a plain
/// browser tab. Implementations swallow host errors.
pub trait HostBridge {
    fn color_scheme(&self) -> Option<ColorScheme> {
        None
    }

    fn theme_params(&self) -> HashMap<String, String> {
        HashMap::new()
    }

    fn platform(&self) -> Option<String> {
        None
    }

    fn init_data(&self) -> Option<String> {
        None
    }

    fn ready(&self) {}

    fn expand(&self) {}

    fn set_header_color(&self, _color: &str) {}

    fn set_background_color(&self, _color: &str) {}

    fn set_bottom_bar_color(&self, _color: &str) {}

    fn haptic_success(&self) {
        vibrate_fallback();
    }

    fn open_link(&self, url: &str) {
        open_in_browser(url);
    }

    fn open_telegram_link(&self, url: &str) {
        open_in_browser(url);
    }

    fn open_invoice(&self, _url: &str, _on_status: Callback<InvoiceStatus>) {}

    fn on_theme_changed(&self, _callback: Callback<()>) -> ThemeSubscription {
        ThemeSubscription::none()
    }
}

fn vibrate_fallback() {
    if let Some(window) = window() {
        let pattern: Array = HAPTIC_PATTERN_MS
            .iter()
            .map(|ms| JsValue::from_f64(*ms as f64))
            .collect();
        let _ = window.navigator().vibrate_with_pattern(&pattern);
    }
}

fn open_in_browser(url: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            log::warn!("Failed to open {}: {:?}", url, e);
        }
    }
}

/// Keeps a `themeChanged` handler registered until dropped.
pub struct ThemeSubscription {
    inner: Option<(JsValue, Closure<dyn FnMut()>)>,
}

impl ThemeSubscription {
    pub fn none() -> Self {
        Self { inner: None }
    }
}

impl Drop for ThemeSubscription {
    fn drop(&mut self) {
        if let Some((webapp, handler)) = self.inner.take() {
            let _ = call_method(
                &webapp,
                "offEvent",
                &[JsValue::from_str("themeChanged"), handler.as_ref().clone()],
            );
        }
    }
}

/// Used when the page is not running inside Telegram.
pub struct NoopBridge;

impl HostBridge for NoopBridge {}

/// Wraps `window.Telegram.WebApp`.
pub struct TelegramBridge {
    webapp: JsValue,
}

impl TelegramBridge {
    pub fn detect() -> Option<Self> {
        let window = window()?;
        let telegram = Reflect::get(&window, &JsValue::from_str("Telegram")).ok()?;
        let webapp = Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
        if webapp.is_object() {
            Some(Self { webapp })
        } else {
            None
        }
    }

    fn string_prop(&self, name: &str) -> Option<String> {
        get_path(&self.webapp, &[name])?
            .as_string()
            .filter(|value| !value.is_empty())
    }

    fn call(&self, method: &str, args: &[JsValue]) {
        if let Err(e) = call_method(&self.webapp, method, args) {
            log::debug!("WebApp.{} failed: {:?}", method, e);
        }
    }
}

fn get_path(root: &JsValue, path: &[&str]) -> Option<JsValue> {
    let mut current = root.clone();
    for key in path {
        current = Reflect::get(&current, &JsValue::from_str(key)).ok()?;
        if current.is_undefined() || current.is_null() {
            return None;
        }
    }
    Some(current)
}

fn call_method(target: &JsValue, method: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
    let function = Reflect::get(target, &JsValue::from_str(method))?
        .dyn_into::<Function>()
        .map_err(|_| JsValue::from_str("not a function"))?;
    let args: Array = args.iter().collect();
    function.apply(target, &args)
}

impl HostBridge for TelegramBridge {
    fn color_scheme(&self) -> Option<ColorScheme> {
        self.string_prop("colorScheme")
            .and_then(|scheme| ColorScheme::from_host(&scheme))
    }

    fn theme_params(&self) -> HashMap<String, String> {
        let Some(params) = get_path(&self.webapp, &["themeParams"]) else {
            return HashMap::new();
        };
        let Ok(params) = params.dyn_into::<Object>() else {
            return HashMap::new();
        };

        Object::entries(&params)
            .iter()
            .filter_map(|pair| {
                let pair: Array = pair.dyn_into().ok()?;
                Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
            })
            .collect()
    }

    fn platform(&self) -> Option<String> {
        self.string_prop("platform")
    }

    fn init_data(&self) -> Option<String> {
        self.string_prop("initData")
    }

    fn ready(&self) {
        self.call("ready", &[]);
    }

    fn expand(&self) {
        self.call("expand", &[]);
    }

    fn set_header_color(&self, color: &str) {
        self.call("setHeaderColor", &[JsValue::from_str(color)]);
    }

    fn set_background_color(&self, color: &str) {
        self.call("setBackgroundColor", &[JsValue::from_str(color)]);
    }

    fn set_bottom_bar_color(&self, color: &str) {
        self.call("setBottomBarColor", &[JsValue::from_str(color)]);
    }

    fn haptic_success(&self) {
        let sent = get_path(&self.webapp, &["HapticFeedback"])
            .map(|haptics| {
                call_method(&haptics, "notificationOccurred", &[JsValue::from_str("success")]).is_ok()
            })
            .unwrap_or(false);
        if !sent {
            vibrate_fallback();
        }
    }

    fn open_link(&self, url: &str) {
        if call_method(&self.webapp, "openLink", &[JsValue::from_str(url)]).is_err() {
            open_in_browser(url);
        }
    }

    fn open_telegram_link(&self, url: &str) {
        if call_method(&self.webapp, "openTelegramLink", &[JsValue::from_str(url)]).is_err() {
            open_in_browser(url);
        }
    }

    fn open_invoice(&self, url: &str, on_status: Callback<InvoiceStatus>) {
        let supported = get_path(&self.webapp, &["openInvoice"]).map_or(false, |f| f.is_function());
        if !supported {
            log::warn!("WebApp.openInvoice is not available");
            on_status.emit(InvoiceStatus::Failed);
            return;
        }
        let handler = Closure::once_into_js(move |status: JsValue| {
            let status = status.as_string().unwrap_or_default();
            on_status.emit(InvoiceStatus::from_host(&status));
        });
        self.call("openInvoice", &[JsValue::from_str(url), handler]);
    }

    fn on_theme_changed(&self, callback: Callback<()>) -> ThemeSubscription {
        let handler = Closure::<dyn FnMut()>::new(move || callback.emit(()));
        let registered = call_method(
            &self.webapp,
            "onEvent",
            &[JsValue::from_str("themeChanged"), handler.as_ref().clone()],
        );
        match registered {
            Ok(_) => ThemeSubscription {
                inner: Some((self.webapp.clone(), handler)),
            },
            Err(_) => ThemeSubscription::none(),
        }
    }
}

/// Shared handle to the active bridge, passed down through context.
#[derive(Clone)]
pub struct Host(Rc<dyn HostBridge>);

impl Host {
    pub fn detect() -> Self {
        match TelegramBridge::detect() {
            Some(bridge) => {
                log::info!("Running inside Telegram");
                Self(Rc::new(bridge))
            }
            None => {
                log::info!("Telegram WebApp not found, using browser fallbacks");
                Self(Rc::new(NoopBridge))
            }
        }
    }
}

impl std::ops::Deref for Host {
    type Target = dyn HostBridge;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for Host {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
