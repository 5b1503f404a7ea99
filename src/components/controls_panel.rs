use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub surfaces_label: String,
    pub on_toggle_surfaces: Callback<()>,
    pub on_clear_objects: Callback<()>,
    pub on_show_help: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let surfaces_cb = {
        let cb = props.on_toggle_surfaces.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let clear_cb = {
        let cb = props.on_clear_objects.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let help_cb = {
        let cb = props.on_show_help.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:200px; display:flex; flex-direction:column; gap:6px;">
        <button onclick={surfaces_cb}>{ props.surfaces_label.clone() }</button>
        <button onclick={clear_cb}>{"Clear Objects"}</button>
        <button onclick={help_cb}>{"Help"}</button>
        <div style="font-size:11px; opacity:0.7;">{"Hotkeys: 1/2/3 pick prefab"}</div>
    </div>}
}
