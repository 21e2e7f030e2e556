use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, CanvasRenderingContext2d, HtmlCanvasElement, TouchEvent, Window,
};
use yew::prelude::*;

use crate::error::{Error, Result};
use crate::input::{self, TOUCH_EVENTS};
use crate::model::TouchInput;
use crate::render::Surface;
use crate::state::DirtyFlag;
use crate::util::LogErr;

/// Feeds one tracker; returns whether the event was consumed.
pub type TouchHandler = Rc<dyn Fn(&TouchInput) -> bool>;
/// Paints one frame of a layer onto an already cleared surface.
pub type Painter = Rc<dyn Fn(&mut dyn Surface) -> Result<()>>;

/// Binds a full-screen canvas to the window's touch stream.
///
/// Every consumed event cancels the browser default and marks the layer
/// dirty; the repaint happens on the next animation frame, at most once per
/// frame. Listeners and any pending frame are released on unmount.
///
/// `handler` and `painter` are taken from the first render only.
#[hook]
pub fn use_touch_layer(canvas_ref: NodeRef, handler: TouchHandler, painter: Painter) {
    use_effect_with((), move |_| {
        let bindings = canvas_ref
            .cast::<HtmlCanvasElement>()
            .ok_or(Error::NoCanvas)
            .and_then(|element| LayerBindings::attach(element, handler, painter))
            .log_err("touch layer not attached");
        move || {
            if let Some(b) = bindings {
                b.detach();
            }
        }
    });
}

struct Canvas {
    window: Window,
    element: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    painter: Painter,
}

impl Canvas {
    fn css_size(&self) -> (f64, f64) {
        let width = self
            .window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);
        (width.max(0.0), height.max(0.0))
    }

    /// Matches the backing store to the viewport in device pixels.
    fn fit_to_window(&self) {
        let (w, h) = self.css_size();
        let dpr = self.window.device_pixel_ratio().max(1.0);
        self.element.set_width((w * dpr).round() as u32);
        self.element.set_height((h * dpr).round() as u32);
    }

    fn repaint(&self) -> Result<()> {
        let (w, h) = self.css_size();
        let dpr = self.window.device_pixel_ratio().max(1.0);
        let mut ctx = self.ctx.clone();
        ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
        ctx.clear(w, h);
        (self.painter)(&mut ctx)
    }
}

/// One pending animation frame at most, gated by a [`DirtyFlag`].
struct FrameScheduler {
    canvas: Canvas,
    dirty: RefCell<DirtyFlag>,
    pending: Cell<Option<i32>>,
    on_frame: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameScheduler {
    fn new(canvas: Canvas) -> Rc<Self> {
        let scheduler = Rc::new(Self {
            canvas,
            dirty: RefCell::new(DirtyFlag::default()),
            pending: Cell::new(None),
            on_frame: RefCell::new(None),
        });
        let weak: Weak<Self> = Rc::downgrade(&scheduler);
        *scheduler.on_frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(s) = weak.upgrade() {
                s.frame();
            }
        }) as Box<dyn FnMut()>));
        scheduler
    }

    fn invalidate(&self) {
        if !self.dirty.borrow_mut().invalidate() {
            return;
        }
        let on_frame = self.on_frame.borrow();
        let Some(cb) = on_frame.as_ref() else {
            return;
        };
        let requested = self
            .canvas
            .window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .log_err("requestAnimationFrame failed");
        match requested {
            Some(id) => self.pending.set(Some(id)),
            None => {
                self.dirty.borrow_mut().take();
            }
        }
    }

    fn frame(&self) {
        self.pending.set(None);
        if self.dirty.borrow_mut().take() {
            self.canvas.repaint().log_err("repaint failed");
        }
    }

    fn resize(&self) {
        self.canvas.fit_to_window();
        self.invalidate();
    }

    fn shutdown(&self) {
        if let Some(id) = self.pending.take() {
            self.canvas
                .window
                .cancel_animation_frame(id)
                .log_err("cancelAnimationFrame failed");
        }
        self.on_frame.borrow_mut().take();
    }
}

struct LayerBindings {
    window: Window,
    scheduler: Rc<FrameScheduler>,
    touch_cb: Closure<dyn FnMut(TouchEvent)>,
    resize_cb: Closure<dyn FnMut(web_sys::Event)>,
}

impl LayerBindings {
    fn attach(element: HtmlCanvasElement, handler: TouchHandler, painter: Painter) -> Result<Self> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let ctx = element
            .get_context("2d")?
            .ok_or(Error::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| Error::NoContext)?;

        let scheduler = FrameScheduler::new(Canvas {
            window: window.clone(),
            element: element.clone(),
            ctx,
            painter,
        });
        scheduler.resize();

        let touch_cb = {
            let scheduler = scheduler.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                let rect = element.get_bounding_client_rect();
                let Some(input) = input::from_dom(&e, &rect) else {
                    return;
                };
                if handler(&input) {
                    e.prevent_default();
                    scheduler.invalidate();
                }
            }) as Box<dyn FnMut(_)>)
        };
        let resize_cb = {
            let scheduler = scheduler.clone();
            Closure::wrap(Box::new(move |_e: web_sys::Event| {
                scheduler.resize();
            }) as Box<dyn FnMut(_)>)
        };

        let bindings = Self {
            window,
            scheduler,
            touch_cb,
            resize_cb,
        };
        // Removing a listener that was never added is a no-op, so a partial
        // registration is undone by a full detach.
        if let Err(err) = bindings.listen() {
            bindings.detach();
            return Err(err);
        }
        Ok(bindings)
    }

    fn listen(&self) -> Result<()> {
        // Touch listeners on the window default to passive, which would make
        // preventDefault a no-op.
        let opts = AddEventListenerOptions::new();
        opts.set_passive(false);
        for name in TOUCH_EVENTS {
            self.window
                .add_event_listener_with_callback_and_add_event_listener_options(
                    name,
                    self.touch_cb.as_ref().unchecked_ref(),
                    &opts,
                )?;
        }
        self.window
            .add_event_listener_with_callback("resize", self.resize_cb.as_ref().unchecked_ref())?;
        Ok(())
    }

    fn detach(self) {
        for name in TOUCH_EVENTS {
            self.window
                .remove_event_listener_with_callback(name, self.touch_cb.as_ref().unchecked_ref())
                .log_err("removing touch listener failed");
        }
        self.window
            .remove_event_listener_with_callback("resize", self.resize_cb.as_ref().unchecked_ref())
            .log_err("removing resize listener failed");
        self.scheduler.shutdown();
    }
}
