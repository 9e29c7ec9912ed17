//! DOM event wiring and the frame loop
//!
//! Every listener turns its DOM event into a [`PageEvent`] and hands it to
//! the shared [`Runtime`]. Listeners live for the whole page, so their
//! closures are leaked with `forget`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use talangin_app::TalanginApp;
use talangin_platform::{EventResponse, Key, KeyboardEvent, MediaQuery, Modifiers, PageEvent, Window};
use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, EventTarget};

use crate::host::WebHost;

/// Frame length assumed for the first frame after an idle period
const FIRST_FRAME_MS: f32 = 1000.0 / 60.0;

/// The running page: app state plus the animation frame loop
pub struct Runtime {
    app: RefCell<TalanginApp<WebHost>>,
    window: web_sys::Window,
    frame_scheduled: Cell<bool>,
    last_frame: Cell<Option<f64>>,
    on_frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl Runtime {
    /// Build an event from the host and dispatch it
    ///
    /// Events raised while the app is already borrowed (a handler causing
    /// a synchronous DOM event) are dropped.
    pub fn dispatch(&self, build: impl FnOnce(&WebHost) -> Option<PageEvent>) -> EventResponse {
        let Ok(mut app) = self.app.try_borrow_mut() else {
            tracing::trace!("Runtime: re-entrant event dropped");
            return EventResponse::Continue;
        };
        let Some(event) = build(app.host()) else {
            return EventResponse::Continue;
        };
        let response = app.handle_event(event);
        let wants_frame = app.needs_frame();
        drop(app);
        if wants_frame {
            self.request_frame();
        }
        response
    }

    /// Run `f` against the app, if it is not busy
    pub fn with_app<R>(&self, f: impl FnOnce(&mut TalanginApp<WebHost>) -> R) -> Option<R> {
        let mut app = self.app.try_borrow_mut().ok()?;
        let result = f(&mut app);
        let wants_frame = app.needs_frame();
        drop(app);
        if wants_frame {
            self.request_frame();
        }
        Some(result)
    }

    fn request_frame(&self) {
        if self.frame_scheduled.replace(true) {
            return;
        }
        let requested = match self.on_frame.borrow().as_ref() {
            Some(callback) => self.window.request_animation_frame(callback.as_ref().unchecked_ref()).is_ok(),
            None => false,
        };
        if !requested {
            self.frame_scheduled.set(false);
        }
    }

    fn frame(&self, timestamp: f64) {
        self.frame_scheduled.set(false);
        let dt = match self.last_frame.replace(Some(timestamp)) {
            Some(previous) => (timestamp - previous).max(0.0) as f32,
            None => FIRST_FRAME_MS,
        };
        let again = match self.app.try_borrow_mut() {
            Ok(mut app) => {
                app.tick(dt);
                app.needs_frame()
            }
            Err(_) => true,
        };
        if again {
            self.request_frame();
        } else {
            self.last_frame.set(None);
        }
    }
}

// ============================================================================
// Wiring
// ============================================================================

/// Attach every page listener and start the frame loop
pub fn attach(app: TalanginApp<WebHost>) -> Result<Rc<Runtime>, JsValue> {
    let window = app.host().window().clone();
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let runtime = Rc::new(Runtime {
        app: RefCell::new(app),
        window: window.clone(),
        frame_scheduled: Cell::new(false),
        last_frame: Cell::new(None),
        on_frame: RefCell::new(None),
    });

    // The frame callback keeps the runtime alive for the page lifetime
    let frame_runtime = Rc::clone(&runtime);
    *runtime.on_frame.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
        frame_runtime.frame(timestamp);
    }));

    let rt = Rc::clone(&runtime);
    listen_passive(
        &window,
        "scroll",
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_evt: web_sys::Event| {
            rt.dispatch(|_| Some(PageEvent::Scroll));
        }),
    )?;

    let rt = Rc::clone(&runtime);
    listen_passive(
        &window,
        "resize",
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_evt: web_sys::Event| {
            rt.dispatch(|host| {
                let size = host.viewport();
                Some(PageEvent::Resized {
                    width: size.width,
                    height: size.height,
                })
            });
        }),
    )?;

    let rt = Rc::clone(&runtime);
    listen(
        &window,
        "load",
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_evt: web_sys::Event| {
            rt.dispatch(|_| Some(PageEvent::Load));
        }),
    )?;

    let rt = Rc::clone(&runtime);
    listen(
        &window,
        "error",
        Closure::<dyn FnMut(web_sys::ErrorEvent)>::new(move |evt: web_sys::ErrorEvent| {
            rt.dispatch(|_| Some(PageEvent::ScriptError { message: evt.message() }));
        }),
    )?;

    let rt = Rc::clone(&runtime);
    listen(
        &window,
        "unhandledrejection",
        Closure::<dyn FnMut(web_sys::PromiseRejectionEvent)>::new(move |evt: web_sys::PromiseRejectionEvent| {
            let reason = evt.reason();
            let reason = reason.as_string().unwrap_or_else(|| format!("{reason:?}"));
            rt.dispatch(|_| Some(PageEvent::UnhandledRejection { reason }));
        }),
    )?;

    let rt = Rc::clone(&runtime);
    listen(
        &document,
        "click",
        Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |evt: web_sys::MouseEvent| {
            let response = rt.dispatch(|host| {
                let target = host.node_for_target(evt.target())?;
                Some(PageEvent::Click { target })
            });
            if response.is_prevented() {
                evt.prevent_default();
            }
        }),
    )?;

    let rt = Rc::clone(&runtime);
    listen(
        &document,
        "keydown",
        Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |evt: web_sys::KeyboardEvent| {
            let event = KeyboardEvent::new(
                Key::from_dom(&evt.key()),
                Modifiers {
                    shift: evt.shift_key(),
                    ctrl: evt.ctrl_key(),
                    alt: evt.alt_key(),
                    meta: evt.meta_key(),
                },
            );
            let response = rt.dispatch(|host| {
                Some(PageEvent::Key {
                    target: host.node_for_target(evt.target()),
                    event,
                })
            });
            if response.is_prevented() {
                evt.prevent_default();
            }
        }),
    )?;

    // pointerenter/pointerleave do not bubble; derive them from over/out
    let rt = Rc::clone(&runtime);
    listen(
        &document,
        "pointerover",
        Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |evt: web_sys::PointerEvent| {
            for node in crossed(evt.target(), evt.related_target()) {
                rt.dispatch(|host| Some(PageEvent::PointerEnter { target: host.node_for(node) }));
            }
        }),
    )?;

    let rt = Rc::clone(&runtime);
    listen(
        &document,
        "pointerout",
        Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |evt: web_sys::PointerEvent| {
            for node in crossed(evt.target(), evt.related_target()) {
                rt.dispatch(|host| Some(PageEvent::PointerLeave { target: host.node_for(node) }));
            }
        }),
    )?;

    if let Ok(Some(query)) = window.match_media(MediaQuery::PrefersDarkScheme.as_css()) {
        let rt = Rc::clone(&runtime);
        listen(
            &query,
            "change",
            Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(move |evt: web_sys::MediaQueryListEvent| {
                rt.dispatch(|_| {
                    Some(PageEvent::ColorSchemeChanged {
                        prefers_dark: evt.matches(),
                    })
                });
            }),
        )?;
    }

    runtime.request_frame();
    tracing::debug!("Runtime: listeners attached");
    Ok(runtime)
}

/// Elements from `target` upward that the pointer crossed, i.e. that do
/// not contain `related`
fn crossed(target: Option<EventTarget>, related: Option<EventTarget>) -> Vec<web_sys::Element> {
    let related = related.and_then(|r| r.dyn_into::<web_sys::Node>().ok());
    let mut current = target.and_then(|t| t.dyn_into::<web_sys::Element>().ok());
    let mut nodes = Vec::new();
    while let Some(element) = current {
        if element.contains(related.as_ref()) {
            break;
        }
        current = element.parent_element();
        nodes.push(element);
    }
    nodes
}

fn listen<T: ?Sized + WasmClosure>(target: &EventTarget, name: &str, callback: Closure<T>) -> Result<(), JsValue> {
    target.add_event_listener_with_callback(name, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn listen_passive<T: ?Sized + WasmClosure>(
    target: &EventTarget,
    name: &str,
    callback: Closure<T>,
) -> Result<(), JsValue> {
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        name,
        callback.as_ref().unchecked_ref(),
        &options,
    )?;
    callback.forget();
    Ok(())
}
