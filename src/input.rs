// Browser touch events -> `TouchInput`.
use web_sys::{DomRect, TouchEvent, TouchList};

use crate::model::{Point, TouchInput, TouchKind};

pub const TOUCH_EVENTS: [&str; 4] = ["touchstart", "touchmove", "touchend", "touchcancel"];

/// Decides the kind from the DOM event type plus the sizes of `touches` and
/// `changedTouches`. Unknown event types yield `None`.
pub fn classify(event_type: &str, active: u32, changed: u32) -> Option<TouchKind> {
    let kind = match event_type {
        "touchstart" if active <= changed => TouchKind::Begin,
        "touchstart" => TouchKind::PointerDown,
        "touchmove" => TouchKind::Move,
        "touchend" if active == 0 => TouchKind::End,
        "touchend" => TouchKind::PointerUp,
        "touchcancel" => TouchKind::Cancel,
        _ => return None,
    };
    Some(kind)
}

/// Converts `e` into surface-local coordinates relative to `rect`.
///
/// On lift and cancel the browser already dropped the leaving fingers from
/// `touches`; they are put back so the event still reports them, in
/// identifier order.
pub fn from_dom(e: &TouchEvent, rect: &DomRect) -> Option<TouchInput> {
    let touches = e.touches();
    let changed = e.changed_touches();
    let kind = classify(&e.type_(), touches.length(), changed.length())?;
    let pointers = match kind {
        TouchKind::PointerUp | TouchKind::End | TouchKind::Cancel => {
            with_lifted(local_points(&touches, rect), local_points(&changed, rect))
        }
        _ => local_points(&touches, rect)
            .into_iter()
            .map(|(_, p)| p)
            .collect(),
    };
    Some(TouchInput::new(kind, pointers))
}

fn local_points(list: &TouchList, rect: &DomRect) -> Vec<(i32, Point)> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| {
            let x = t.client_x() as f64 - rect.left();
            let y = t.client_y() as f64 - rect.top();
            (t.identifier(), Point::new(x, y))
        })
        .collect()
}

/// Merges remaining and lifted touches by identifier; a touch present in
/// both keeps its remaining position.
fn with_lifted(mut remaining: Vec<(i32, Point)>, lifted: Vec<(i32, Point)>) -> Vec<Point> {
    for (id, p) in lifted {
        if !remaining.iter().any(|&(other, _)| other == id) {
            remaining.push((id, p));
        }
    }
    remaining.sort_by_key(|&(id, _)| id);
    remaining.into_iter().map(|(_, p)| p).collect()
}
