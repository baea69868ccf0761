mod dom;

use std::cell::RefCell;
use std::rc::Rc;

use dom::DomSurface;
use viz_viewer::{ViewerController, ViewerError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

type Viewer = Rc<RefCell<ViewerController<DomSurface>>>;
type ViewerStep = fn(&mut ViewerController<DomSurface>) -> Result<(), ViewerError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Close,
    Previous,
    Next,
}

fn main() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    if is_loaded(&document.ready_state()) {
        return start(&document);
    }

    let on_load = Closure::<dyn FnMut()>::new(move || {
        if let Err(error) = start(&document) {
            web_sys::console::error_2(&"Failed to start viewer".into(), &error);
        }
    });
    window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
    on_load.forget();

    Ok(())
}

fn start(document: &Document) -> Result<(), JsValue> {
    let surface = DomSurface::from_document(document)?;
    let viewer: Viewer = Rc::new(RefCell::new(ViewerController::new(surface)));

    viewer
        .borrow_mut()
        .on_page_ready()
        .map_err(|error| JsValue::from_str(&error.to_string()))?;

    bind_click(document, "close-popup", &viewer, |viewer| {
        viewer.close_intro_popup();
        Ok(())
    })?;
    bind_click(
        document,
        "prev-viz",
        &viewer,
        ViewerController::<DomSurface>::show_previous_view,
    )?;
    bind_click(
        document,
        "next-viz",
        &viewer,
        ViewerController::<DomSurface>::show_next_view,
    )?;
    bind_keys(document, &viewer)?;

    Ok(())
}

fn bind_click(
    document: &Document,
    id: &str,
    viewer: &Viewer,
    step: ViewerStep,
) -> Result<(), JsValue> {
    let Some(button) = document.get_element_by_id(id) else {
        web_sys::console::warn_1(&format!("No #{id} button, skipping").into());
        return Ok(());
    };

    let viewer = Rc::clone(viewer);
    let handler = Closure::<dyn FnMut()>::new(move || {
        if let Err(error) = step(&mut viewer.borrow_mut()) {
            report(&error);
        }
    });
    button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    handler.forget();

    Ok(())
}

fn bind_keys(document: &Document, viewer: &Viewer) -> Result<(), JsValue> {
    let viewer = Rc::clone(viewer);
    let handler = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let Some(action) = action_for_key(&event.key()) else {
            return;
        };

        let mut viewer = viewer.borrow_mut();
        let result = match action {
            KeyAction::Close => {
                viewer.close_intro_popup();
                Ok(())
            }
            KeyAction::Previous => viewer.show_previous_view(),
            KeyAction::Next => viewer.show_next_view(),
        };

        if let Err(error) = result {
            report(&error);
        }
    });
    document.add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())?;
    handler.forget();

    Ok(())
}

fn is_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}

fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "Escape" => Some(KeyAction::Close),
        "ArrowLeft" => Some(KeyAction::Previous),
        "ArrowRight" => Some(KeyAction::Next),
        _ => None,
    }
}

fn report(error: &ViewerError) {
    web_sys::console::error_1(&format!("Viewer fault: {error}").into());
}
