/// SW3D Web - Canvas front-end for the interactive wave surface plot
///
/// Binds the core renderer to a 2D canvas context and wires the mouse and
/// wheel listeners: primary-button drag rotates, the wheel zooms, a
/// non-primary button resets. All handlers suppress the browser defaults.
use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use sw3d_core::{wave, PixelSurface, Renderer, ViewState};

const BACKGROUND: &str = "#000000";
const FOREGROUND: &str = "#00ff00";

/// Pixel surface backed by a 2D canvas context.
struct CanvasSurface {
    context: CanvasRenderingContext2d,
    width: usize,
    height: usize,
}

impl PixelSurface for CanvasSurface {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn clear(&mut self) {
        self.context.set_fill_style_str(BACKGROUND);
        self.context
            .fill_rect(0.0, 0.0, self.width as f64, self.height as f64);
        self.context.set_fill_style_str(FOREGROUND);
    }

    fn plot(&mut self, x: usize, y: usize) {
        self.context.fill_rect(x as f64, y as f64, 1.0, 1.0);
    }
}

struct App {
    view: ViewState,
    renderer: Renderer,
    surface: CanvasSurface,
    /// Last pointer position while the primary button is held.
    drag: Option<(i32, i32)>,
}

impl App {
    fn redraw(&mut self) {
        self.renderer.render(wave::height, &self.view, &mut self.surface);
    }
}

/// Wave surface plot bound to a canvas element.
#[wasm_bindgen]
pub struct WavePlot {
    app: Rc<RefCell<App>>,
}

#[wasm_bindgen]
impl WavePlot {
    /// Attach to the canvas with the given element id, register the input
    /// listeners and draw the first frame. Fails when the element is missing
    /// or is not a canvas.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<WavePlot, JsValue> {
        let document = web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window"))?
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str("canvas element not found"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("element is not a canvas"))?;
        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("unexpected context type"))?;

        let width = canvas.width() as usize;
        let height = canvas.height() as usize;
        let app = Rc::new(RefCell::new(App {
            view: ViewState::new(),
            renderer: Renderer::new(width, height),
            surface: CanvasSurface {
                context,
                width,
                height,
            },
            drag: None,
        }));

        attach_listeners(&canvas, &app)?;
        app.borrow_mut().redraw();

        Ok(WavePlot { app })
    }

    /// Redraw the current frame.
    pub fn render(&self) {
        self.app.borrow_mut().redraw();
    }
}

fn attach_listeners(canvas: &HtmlCanvasElement, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let on_down = {
        let app = Rc::clone(app);
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let mut app = app.borrow_mut();
            match event.button() {
                0 => app.drag = Some((event.client_x(), event.client_y())),
                1 => {
                    app.view.reset();
                    app.redraw();
                }
                _ => {}
            }
            event.prevent_default();
        }) as Box<dyn FnMut(_)>)
    };
    canvas.add_event_listener_with_callback("mousedown", on_down.as_ref().unchecked_ref())?;
    on_down.forget();

    let on_up = {
        let app = Rc::clone(app);
        Closure::wrap(Box::new(move |event: MouseEvent| {
            if event.button() == 0 {
                app.borrow_mut().drag = None;
            }
            event.prevent_default();
        }) as Box<dyn FnMut(_)>)
    };
    canvas.add_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref())?;
    on_up.forget();

    let on_move = {
        let app = Rc::clone(app);
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let mut app = app.borrow_mut();
            if let Some((last_x, last_y)) = app.drag {
                let dyaw =
                    (event.client_x() - last_x) as f32 * 180.0 / app.surface.width as f32;
                let dpitch =
                    (event.client_y() - last_y) as f32 * 180.0 / app.surface.height as f32;
                app.view.rotate_by(dyaw, dpitch);
                app.drag = Some((event.client_x(), event.client_y()));
                app.redraw();
            }
            event.prevent_default();
        }) as Box<dyn FnMut(_)>)
    };
    canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    let on_out = {
        let app = Rc::clone(app);
        Closure::wrap(Box::new(move |event: MouseEvent| {
            app.borrow_mut().drag = None;
            event.prevent_default();
        }) as Box<dyn FnMut(_)>)
    };
    canvas.add_event_listener_with_callback("mouseout", on_out.as_ref().unchecked_ref())?;
    on_out.forget();

    let on_wheel = {
        let app = Rc::clone(app);
        Closure::wrap(Box::new(move |event: WheelEvent| {
            let mut app = app.borrow_mut();
            if event.delta_y() >= 0.0 {
                app.view.zoom_out();
            } else {
                app.view.zoom_in();
            }
            app.redraw();
            event.prevent_default();
        }) as Box<dyn FnMut(_)>)
    };
    canvas.add_event_listener_with_callback("wheel", on_wheel.as_ref().unchecked_ref())?;
    on_wheel.forget();

    Ok(())
}
