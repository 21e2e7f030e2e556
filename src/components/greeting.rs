use yew::prelude::*;

use crate::config::GreetingConfig;

#[derive(Properties, PartialEq, Clone)]
pub struct GreetingProps {
    pub config: GreetingConfig,
}

/// Centred title + hand image + author line. Lets touches fall through to
/// the canvases underneath.
#[function_component(Greeting)]
pub fn greeting(props: &GreetingProps) -> Html {
    let cfg = &props.config;
    let font_face = format!(
        "@font-face {{ font-family: '{}'; src: url('{}'); }}",
        cfg.font_family, cfg.font_url
    );
    let font = format!("font-family:'{}', sans-serif;", cfg.font_family);
    html! {
        <div id="greeting" style="position:fixed; inset:0; display:flex; flex-direction:column; align-items:center; justify-content:center; pointer-events:none; user-select:none;">
            <style>{ font_face }</style>
            <div style="display:flex; flex-direction:row; align-items:center; justify-content:center;">
                <span style={format!("{} font-size:25px; color:#0000ff;", font)}>{ cfg.title.clone() }</span>
                <img src={cfg.image_url.clone()} alt={cfg.image_alt.clone()}
                    style="opacity:0.7; border-radius:50%; background:#0000ff; padding-left:8px;" />
            </div>
            <span style={format!("{} font-size:20px; color:#000000; padding-top:16px;", font)}>{ cfg.author.clone() }</span>
        </div>
    }
}
