use std::rc::Rc;
use yew::prelude::*;

use super::layer::{use_touch_layer, Painter, TouchHandler};
use crate::model::TouchInput;
use crate::render::{draw_circles, CircleStyle, Surface};
use crate::state::TouchTracker;

#[derive(Properties, PartialEq, Clone)]
pub struct CircleLayerProps {
    pub style: CircleStyle,
}

/// One filled circle under every finger currently on the screen.
#[function_component(CircleLayer)]
pub fn circle_layer(props: &CircleLayerProps) -> Html {
    let canvas_ref = use_node_ref();
    let tracker = use_mut_ref(TouchTracker::default);
    // Fixed at mount, see `use_touch_layer`.
    let style = props.style.clone();

    let handler: TouchHandler = {
        let tracker = tracker.clone();
        Rc::new(move |input: &TouchInput| tracker.borrow_mut().handle(input))
    };
    let painter: Painter = Rc::new(move |surface: &mut dyn Surface| {
        draw_circles(surface, tracker.borrow().active(), &style)
    });
    use_touch_layer(canvas_ref.clone(), handler, painter);

    html! {
        <canvas ref={canvas_ref} class="touch-layer" id="circle-layer"
            style="position:fixed; inset:0; width:100vw; height:100vh; display:block; pointer-events:none;"></canvas>
    }
}
