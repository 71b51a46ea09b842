//! Browser host: wires DOM events into the engine and dispatches its actions.
//!
//! Listener subscriptions are owned by a [`Session`]. Dropping the session
//! removes every listener it registered, so no handler can fire against an
//! engine whose owning page context has gone away. [`CurveTool`] is the
//! JavaScript-facing wrapper and holds at most one live session.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent, PointerEvent};

use crate::config::EditorConfig;
use crate::engine::{Action, Engine};
use crate::geometry::{Curve, Point, to_local};
use crate::input::{Button, Key};
use crate::style::StrokeStyle;

/// Install the panic hook and route `log` output to the browser console.
///
/// `level` is a `log` level name (`"debug"`, `"info"`, ...); defaults to info.
#[wasm_bindgen]
pub fn init_logging(level: Option<String>) {
    console_error_panic_hook::set_once();
    let level = match level.as_deref().map(str::parse::<log::Level>) {
        Some(Ok(level)) => level,
        _ => log::Level::Info,
    };
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed");
    }
}

// =============================================================
// Outbound callbacks
// =============================================================

/// Host-page functions the engine notifies.
pub struct HostCallbacks {
    /// Receives the finalized curve as an array of `{x, y}` objects.
    pub on_finish: Function,
    /// Tool-selection sink; called with `null` ("no active tool") on commit.
    pub set_active_tool: Function,
}

impl HostCallbacks {
    fn release_tool(&self) {
        if let Err(err) = self.set_active_tool.call1(&JsValue::NULL, &JsValue::NULL) {
            log::error!("set_active_tool callback failed: {err:?}");
        }
    }

    fn finish(&self, curve: &Curve) {
        let json = match serde_json::to_string(curve) {
            Ok(json) => json,
            Err(err) => {
                log::error!("failed to encode finished curve: {err}");
                return;
            }
        };
        let points = match js_sys::JSON::parse(&json) {
            Ok(points) => points,
            Err(err) => {
                log::error!("failed to decode finished curve: {err:?}");
                return;
            }
        };
        if let Err(err) = self.on_finish.call1(&JsValue::NULL, &points) {
            log::error!("on_finish callback failed: {err:?}");
        }
    }
}

/// Run `handler` against the engine, repaint if asked, then notify the host.
///
/// Callbacks run after the engine borrow is released so the page may call
/// straight back into the tool.
fn dispatch(engine: &RefCell<Engine>, callbacks: &HostCallbacks, handler: impl FnOnce(&mut Engine) -> Vec<Action>) {
    let actions = {
        let Ok(mut engine) = engine.try_borrow_mut() else {
            log::warn!("re-entrant engine event dropped");
            return;
        };
        let actions = handler(&mut engine);
        if actions.contains(&Action::RenderNeeded) {
            if let Err(err) = engine.render() {
                log::error!("render failed: {err:?}");
            }
        }
        actions
    };

    for action in actions {
        match action {
            Action::RenderNeeded => {}
            Action::ToolReleased => callbacks.release_tool(),
            Action::CurveFinished(curve) => callbacks.finish(&curve),
        }
    }
}

// =============================================================
// Scoped listeners
// =============================================================

struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn add(target: EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Result<Self, JsValue> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self { target, event, closure })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
        {
            log::warn!("failed to detach {} listener: {err:?}", self.event);
        }
    }
}

/// Live DOM subscriptions for one editing session.
///
/// Pointer listeners sit on the canvas, the key listener on the window. A
/// primary press captures the pointer so the release still arrives when it
/// happens off-canvas. Every listener is removed when the session is dropped.
pub struct Session {
    listeners: Vec<Listener>,
}

impl Session {
    /// Subscribe the engine to pointer and keyboard input.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the window is unavailable or a listener cannot be
    /// registered; listeners added before the failure are removed again.
    pub fn attach(engine: &Rc<RefCell<Engine>>, callbacks: &Rc<HostCallbacks>) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
        let canvas = engine.borrow().canvas().clone();
        let target: EventTarget = canvas.clone().into();

        let mut listeners = Vec::with_capacity(5);

        {
            let engine = engine.clone();
            let callbacks = callbacks.clone();
            let canvas = canvas.clone();
            listeners.push(Listener::add(target.clone(), "pointerdown", move |event: Event| {
                let Some(event) = event.dyn_ref::<PointerEvent>() else {
                    return;
                };
                let button = Button::from_dom(event.button());
                if button != Button::Primary {
                    return;
                }
                event.prevent_default();
                // Keep receiving moves and the release even off-canvas.
                if let Err(err) = canvas.set_pointer_capture(event.pointer_id()) {
                    log::warn!("pointer capture failed: {err:?}");
                }
                dispatch(&engine, &callbacks, |engine| {
                    let pt = local_point(engine.canvas(), event);
                    engine.on_pointer_down(pt, button)
                });
            })?);
        }

        {
            let engine = engine.clone();
            let callbacks = callbacks.clone();
            listeners.push(Listener::add(target.clone(), "pointermove", move |event: Event| {
                let Some(event) = event.dyn_ref::<PointerEvent>() else {
                    return;
                };
                let primary_held = event.buttons() & 1 != 0;
                dispatch(&engine, &callbacks, |engine| {
                    let pt = local_point(engine.canvas(), event);
                    engine.on_pointer_move(pt, primary_held)
                });
            })?);
        }

        {
            let engine = engine.clone();
            let callbacks = callbacks.clone();
            let canvas = canvas.clone();
            listeners.push(Listener::add(target.clone(), "pointerup", move |event: Event| {
                let Some(event) = event.dyn_ref::<PointerEvent>() else {
                    return;
                };
                release_capture(&canvas, event);
                let button = Button::from_dom(event.button());
                dispatch(&engine, &callbacks, |engine| {
                    let pt = local_point(engine.canvas(), event);
                    engine.on_pointer_up(pt, button)
                });
            })?);
        }

        {
            let engine = engine.clone();
            let callbacks = callbacks.clone();
            listeners.push(Listener::add(target, "pointercancel", move |event: Event| {
                let Some(event) = event.dyn_ref::<PointerEvent>() else {
                    return;
                };
                release_capture(&canvas, event);
                dispatch(&engine, &callbacks, Engine::on_pointer_cancel);
            })?);
        }

        {
            let engine = engine.clone();
            let callbacks = callbacks.clone();
            listeners.push(Listener::add(window.into(), "keydown", move |event: Event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let key = Key(event.key());
                dispatch(&engine, &callbacks, |engine| engine.on_key_down(&key));
            })?);
        }

        log::debug!("curve session attached ({} listeners)", listeners.len());
        Ok(Self { listeners })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        log::debug!("curve session detached ({} listeners)", self.listeners.len());
    }
}

fn release_capture(canvas: &HtmlCanvasElement, event: &PointerEvent) {
    let id = event.pointer_id();
    if !canvas.has_pointer_capture(id) {
        return;
    }
    if let Err(err) = canvas.release_pointer_capture(id) {
        log::warn!("pointer release failed: {err:?}");
    }
}

/// Coordinate mapper: client position minus the canvas's on-screen offset.
fn local_point(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Point {
    let rect = canvas.get_bounding_client_rect();
    to_local(
        Point::new(f64::from(event.client_x()), f64::from(event.client_y())),
        Point::new(rect.left(), rect.top()),
    )
}

// =============================================================
// JavaScript surface
// =============================================================

/// The curve tool as seen from the host page.
#[wasm_bindgen]
pub struct CurveTool {
    engine: Rc<RefCell<Engine>>,
    callbacks: Rc<HostCallbacks>,
    session: Option<Session>,
}

#[wasm_bindgen]
impl CurveTool {
    /// Bind a tool to `canvas` and start listening for input.
    ///
    /// `active` seeds the drawing state; `config_json` optionally overrides
    /// [`EditorConfig`] fields.
    ///
    /// # Errors
    ///
    /// Returns `Err` for an invalid config or if listeners cannot be attached.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        active: bool,
        on_finish: Function,
        set_active_tool: Function,
        config_json: Option<String>,
    ) -> Result<CurveTool, JsValue> {
        let config = match config_json.as_deref() {
            Some(raw) => EditorConfig::from_json(raw).map_err(|err| JsValue::from_str(&err.to_string()))?,
            None => EditorConfig::default(),
        };

        let engine = Rc::new(RefCell::new(Engine::new(canvas, config)));
        let callbacks = Rc::new(HostCallbacks { on_finish, set_active_tool });
        dispatch(&engine, &callbacks, |engine| engine.set_armed(active));

        let session = Session::attach(&engine, &callbacks)?;
        Ok(Self { engine, callbacks, session: Some(session) })
    }

    /// Resize the canvas backing store and repaint.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the context rejects the transform or a repaint fails.
    pub fn set_viewport(&self, width_css: f64, height_css: f64, dpr: f64) -> Result<(), JsValue> {
        let mut engine = self
            .engine
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("engine busy"))?;
        engine.set_viewport(width_css, height_css, dpr)?;
        engine.render()
    }

    /// Re-sync the host's "curve tool active" flag.
    pub fn set_active(&self, active: bool) {
        dispatch(&self.engine, &self.callbacks, |engine| engine.set_armed(active));
    }

    pub fn set_color(&self, color: String) {
        dispatch(&self.engine, &self.callbacks, |engine| engine.set_color(color));
    }

    pub fn set_brush_size(&self, size: f64) {
        dispatch(&self.engine, &self.callbacks, |engine| engine.set_brush_size(size));
    }

    /// Set the stroke style by name (`solid`, `dashed`, `dotted`, `double`).
    ///
    /// # Errors
    ///
    /// Returns `Err` for an unknown style name.
    pub fn set_stroke_style(&self, style: &str) -> Result<(), JsValue> {
        let style = style
            .parse::<StrokeStyle>()
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        dispatch(&self.engine, &self.callbacks, |engine| engine.set_stroke_style(style));
        Ok(())
    }

    /// Committed curves as a JSON array of point arrays.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the engine is mid-event or encoding fails.
    pub fn curves_json(&self) -> Result<String, JsValue> {
        let engine = self
            .engine
            .try_borrow()
            .map_err(|_| JsValue::from_str("engine busy"))?;
        serde_json::to_string(engine.curves()).map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Remove every DOM listener. The tool stays inert until dropped.
    pub fn detach(&mut self) {
        self.session = None;
    }
}
