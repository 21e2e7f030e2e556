use std::rc::Rc;
use yew::prelude::*;

use super::layer::{use_touch_layer, Painter, TouchHandler};
use crate::model::TouchInput;
use crate::render::{draw_path, PathStyle, Surface};
use crate::state::PathTracker;

#[derive(Properties, PartialEq, Clone)]
pub struct PathLayerProps {
    pub style: PathStyle,
}

/// Freehand stroke following the first finger of each gesture.
#[function_component(PathLayer)]
pub fn path_layer(props: &PathLayerProps) -> Html {
    let canvas_ref = use_node_ref();
    let tracker = use_mut_ref(PathTracker::default);
    // Fixed at mount, see `use_touch_layer`.
    let style = props.style.clone();

    let handler: TouchHandler = {
        let tracker = tracker.clone();
        Rc::new(move |input: &TouchInput| tracker.borrow_mut().handle(input))
    };
    let painter: Painter = Rc::new(move |surface: &mut dyn Surface| {
        draw_path(surface, tracker.borrow().points(), &style)
    });
    use_touch_layer(canvas_ref.clone(), handler, painter);

    html! {
        <canvas ref={canvas_ref} class="touch-layer" id="path-layer"
            style="position:fixed; inset:0; width:100vw; height:100vh; display:block; pointer-events:none;"></canvas>
    }
}
