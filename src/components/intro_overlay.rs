use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IntroOverlayProps {
    pub show: bool,
    pub hide_intro: Callback<()>,
}

#[function_component(IntroOverlay)]
pub fn intro_overlay(props: &IntroOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let hide_cb = props.hide_intro.clone();
    let hide_btn = Callback::from(move |_| hide_cb.emit(()));
    let hide_cb2 = props.hide_intro.clone();
    let start_btn = Callback::from(move |_| hide_cb2.emit(()));
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.87); border:2px solid #30363d; padding:28px 36px; border-radius:14px; max-width:520px; width:90%; box-shadow:0 0 0 1px #1a1f24, 0 6px 18px rgba(0,0,0,0.6); font-size:14px; line-height:1.4;">
            <h2 style="margin:0 0 12px 0; font-size:22px; color:#58a6ff; text-align:center;">{"AR Placer"}</h2>
            <p style="margin:4px 0 10px 0; text-align:center; opacity:0.85;">{"Tap a detected surface to place an object, drag to reposition it."}</p>
            <ul style="margin:0 0 12px 18px; padding:0; list-style:disc; display:flex; flex-direction:column; gap:4px;">
                <li>{"Touch (or left-click) a highlighted surface to place the selected prefab."}</li>
                <li>{"Keep the touch down and drag to move the object you just placed."}</li>
                <li>{"Release to drop it; it stays where you left it."}</li>
                <li>{"Pick a prefab from the bottom panel or with keys 1/2/3."}</li>
                <li>{"Orbit with right/middle-mouse drag or the arrow buttons; zoom with the wheel."}</li>
                <li>{"Surfaces keep growing for a while as detection refines them."}</li>
            </ul>
            <div style="display:flex; gap:12px; justify-content:center; margin-top:8px;">
                <button onclick={start_btn}>{"Start"}</button>
                <button onclick={hide_btn}>{"Close"}</button>
            </div>
            <div style="margin-top:12px; font-size:11px; opacity:0.6; text-align:center;">{"Tip: a new tap always places a new object; only the latest one can be dragged."}</div>
        </div>
    }
}
