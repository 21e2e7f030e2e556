use yew::prelude::*;

use super::{circle_layer::CircleLayer, greeting::Greeting, path_layer::PathLayer};
use crate::config::DemoConfig;
use crate::util::LogErr;

/// Greeting at the bottom, circles above it, the stroke on top.
#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| DemoConfig::load());
    let circle_style = config.circle_style().log_err("circle style").unwrap_or_default();
    let path_style = config.path_style().log_err("path style").unwrap_or_default();

    html! {
        <div id="root" style="position:fixed; inset:0; overflow:hidden; touch-action:none; background:#ffffff;">
            <Greeting config={config.greeting.clone()} />
            <CircleLayer style={circle_style} />
            <PathLayer style={path_style} />
        </div>
    }
}
