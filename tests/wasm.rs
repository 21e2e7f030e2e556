#![cfg(target_arch = "wasm32")]

use touch_canvas::input::from_dom;
use touch_canvas::model::{Point, TouchInput, TouchKind};
use touch_canvas::render::{draw_circles, draw_path, CircleStyle, PathStyle, Surface};
use touch_canvas::state::{PathTracker, TouchTracker};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, Touch, TouchEvent, TouchEventInit, TouchInit,
};

// https://rustwasm.github.io/wasm-bindgen/wasm-bindgen-test/browsers.html
wasm_bindgen_test_configure!(run_in_browser);

fn context(size: u32) -> CanvasRenderingContext2d {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_width(size);
    canvas.set_height(size);
    canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

fn pixel(ctx: &CanvasRenderingContext2d, x: f64, y: f64) -> [u8; 4] {
    let data = ctx.get_image_data(x, y, 1.0, 1.0).unwrap().data();
    [data[0], data[1], data[2], data[3]]
}

#[wasm_bindgen_test]
fn circle_is_painted_in_slot_color() {
    let mut ctx = context(400);
    let mut tracker = TouchTracker::default();
    tracker.handle(&TouchInput::new(
        TouchKind::Begin,
        vec![Point::new(100.0, 100.0), Point::new(300.0, 300.0)],
    ));
    draw_circles(&mut ctx, tracker.active(), &CircleStyle::default()).unwrap();

    assert_eq!(pixel(&ctx, 100.0, 100.0), [0xFF, 0x00, 0x00, 0xFF]);
    assert_eq!(pixel(&ctx, 300.0, 300.0), [0xFF, 0x57, 0x22, 0xFF]);
}

#[wasm_bindgen_test]
fn stroke_is_painted_and_cleared() {
    let mut ctx = context(200);
    let mut path = PathTracker::default();
    path.handle(&TouchInput::new(TouchKind::Begin, vec![Point::new(20.0, 100.0)]));
    path.handle(&TouchInput::new(TouchKind::Move, vec![Point::new(20.0, 100.0)]));
    path.handle(&TouchInput::new(TouchKind::Move, vec![Point::new(180.0, 100.0)]));
    draw_path(&mut ctx, path.points(), &PathStyle::default()).unwrap();
    assert_eq!(pixel(&ctx, 100.0, 100.0), [0, 0, 0, 0xFF]);
    assert_eq!(pixel(&ctx, 100.0, 10.0)[3], 0);

    ctx.clear(200.0, 200.0);
    assert_eq!(pixel(&ctx, 100.0, 100.0)[3], 0);
}

#[wasm_bindgen_test]
fn empty_path_leaves_canvas_blank() {
    let mut ctx = context(50);
    draw_path(&mut ctx, &[], &PathStyle::default()).unwrap();
    assert_eq!(pixel(&ctx, 25.0, 25.0), [0, 0, 0, 0]);
}

fn offset_canvas() -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    let style = "position:absolute; left:40px; top:30px; width:200px; height:200px;";
    canvas.set_attribute("style", style).unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn touch(target: &HtmlCanvasElement, id: i32, x: f64, y: f64) -> Touch {
    let init = TouchInit::new(id, target);
    init.set_client_x(x);
    init.set_client_y(y);
    Touch::new(&init).unwrap()
}

fn touch_event(kind: &str, touches: &[&Touch], changed: &[&Touch]) -> TouchEvent {
    let list = |ts: &[&Touch]| ts.iter().copied().collect::<js_sys::Array>();
    let init = TouchEventInit::new();
    init.set_cancelable(true);
    init.set_touches(&list(touches));
    init.set_changed_touches(&list(changed));
    TouchEvent::new_with_event_init_dict(kind, &init).unwrap()
}

#[wasm_bindgen_test]
fn positions_are_relative_to_the_canvas_in_touch_order() {
    let canvas = offset_canvas();
    let rect = canvas.get_bounding_client_rect();
    let (left, top) = (rect.left(), rect.top());
    let a = touch(&canvas, 0, left + 10.0, top + 30.0);
    let b = touch(&canvas, 1, left + 100.0, top + 150.0);

    let input = from_dom(&touch_event("touchmove", &[&a, &b], &[&b]), &rect).unwrap();
    assert_eq!(input.kind, TouchKind::Move);
    assert_eq!(input.pointers, vec![Point::new(10.0, 30.0), Point::new(100.0, 150.0)]);

    let input = from_dom(&touch_event("touchstart", &[&a], &[&a]), &rect).unwrap();
    assert_eq!(input.kind, TouchKind::Begin);
    assert_eq!(input.pointers, vec![Point::new(10.0, 30.0)]);
}

#[wasm_bindgen_test]
fn lifted_fingers_are_still_reported() {
    let canvas = offset_canvas();
    let rect = canvas.get_bounding_client_rect();
    let (left, top) = (rect.left(), rect.top());
    let a = touch(&canvas, 0, left + 5.0, top + 5.0);
    let b = touch(&canvas, 1, left + 50.0, top + 60.0);

    // finger 0 lifts while finger 1 stays down
    let input = from_dom(&touch_event("touchend", &[&b], &[&a]), &rect).unwrap();
    assert_eq!(input.kind, TouchKind::PointerUp);
    assert_eq!(input.pointers, vec![Point::new(5.0, 5.0), Point::new(50.0, 60.0)]);

    let mut tracker = TouchTracker::default();
    let input = from_dom(&touch_event("touchend", &[], &[&b]), &rect).unwrap();
    assert_eq!(input.kind, TouchKind::End);
    tracker.handle(&input);
    assert_eq!(tracker.count(), 1);
    assert_eq!(tracker.active()[0].pos, Point::new(50.0, 60.0));

    let mut path = PathTracker::default();
    assert!(!path.handle(&input));
}

#[wasm_bindgen_test]
fn non_touch_events_are_ignored() {
    let canvas = offset_canvas();
    let rect = canvas.get_bounding_client_rect();
    let a = touch(&canvas, 0, 1.0, 1.0);
    assert!(from_dom(&touch_event("touchenter", &[&a], &[&a]), &rect).is_none());
}
