//! Talangin Web Platform
//!
//! Runs the Talangin page runtime in the browser. The wasm module starts
//! itself once the DOM is parsed:
//!
//! 1. Route `tracing` output to the console
//! 2. Attach a [`WebHost`](host::WebHost) to `window` and `document`
//! 3. Start the app with the config from `<script id="talangin-config">`
//!    (TOML), or defaults when the page has none
//! 4. Wire DOM listeners and the `requestAnimationFrame` loop
//!
//! A small debug API is exported to JavaScript: `version`, `setTheme`,
//! `setLanguage` and `getContent`.

mod report;
pub mod style;

#[cfg(target_arch = "wasm32")]
pub mod events;
#[cfg(target_arch = "wasm32")]
pub mod host;
#[cfg(target_arch = "wasm32")]
mod logging;

#[cfg(target_arch = "wasm32")]
pub use web::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use anyhow::{anyhow, Context};
    use talangin_app::prelude::{ColorScheme, SiteConfig, TalanginApp};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::events::{self, Runtime};
    use crate::host::WebHost;
    use crate::logging;

    /// Element holding an optional TOML site config
    const CONFIG_ELEMENT_ID: &str = "talangin-config";

    thread_local! {
        static RUNTIME: RefCell<Option<Rc<Runtime>>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        logging::init("info");

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        if document.ready_state() == "loading" {
            let on_ready = Closure::once(move |_evt: web_sys::Event| report(boot()));
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
            on_ready.forget();
        } else {
            report(boot());
        }
        Ok(())
    }

    fn report(result: anyhow::Result<()>) {
        if let Err(err) = result {
            tracing::error!("[Talangin] Failed to start: {:#}", err);
        }
    }

    fn boot() -> anyhow::Result<()> {
        let host = WebHost::new().context("Failed to attach to the page")?;
        let config = page_config(&host)?;
        let app = TalanginApp::start(host, config).context("Failed to start the page runtime")?;
        let runtime = events::attach(app).map_err(|err| anyhow!("Failed to attach listeners: {err:?}"))?;
        RUNTIME.with(|slot| *slot.borrow_mut() = Some(runtime));
        tracing::info!("[Talangin] App initialized");
        Ok(())
    }

    fn page_config(host: &WebHost) -> anyhow::Result<SiteConfig> {
        let source = host
            .window()
            .document()
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());
        match source {
            Some(source) => SiteConfig::from_toml_str(&source).context("Invalid #talangin-config"),
            None => Ok(SiteConfig::default()),
        }
    }

    fn with_app<R>(f: impl FnOnce(&mut TalanginApp<WebHost>) -> R) -> Result<R, JsValue> {
        let runtime = RUNTIME
            .with(|slot| slot.borrow().clone())
            .ok_or_else(|| JsValue::from_str("Talangin is not running"))?;
        runtime
            .with_app(f)
            .ok_or_else(|| JsValue::from_str("Talangin is busy"))
    }

    // ========================================================================
    // Debug API
    // ========================================================================

    #[wasm_bindgen]
    pub fn version() -> String {
        talangin_app::VERSION.to_string()
    }

    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(theme: &str) -> Result<(), JsValue> {
        let scheme: ColorScheme = theme.parse().map_err(|err| JsValue::from_str(&format!("{err}")))?;
        with_app(|app| app.set_theme(scheme))
    }

    #[wasm_bindgen(js_name = setLanguage)]
    pub fn set_language(language: &str) -> Result<(), JsValue> {
        with_app(|app| app.set_language(language))?.map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// The content document as JSON
    #[wasm_bindgen(js_name = getContent)]
    pub fn get_content() -> Result<String, JsValue> {
        with_app(|app| app.content().to_json())?.map_err(|err| JsValue::from_str(&err.to_string()))
    }
}
