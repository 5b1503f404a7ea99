use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CameraControlsProps {
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_orbit_left: Callback<()>,
    pub on_orbit_right: Callback<()>,
    pub on_orbit_up: Callback<()>,
    pub on_orbit_down: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(CameraControls)]
pub fn camera_controls(props: &CameraControlsProps) -> Html {
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let ol = {
        let cb = props.on_orbit_left.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let or = {
        let cb = props.on_orbit_right.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let ou = {
        let cb = props.on_orbit_up.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let od = {
        let cb = props.on_orbit_down.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let rc = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; left:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center;">
        <button onclick={zo}> {"-"} </button>
        <button onclick={zi}> {"+"} </button>
        <span style="width:8px;"></span>
        <button onclick={ol}> {"←"} </button>
        <button onclick={ou}> {"↑"} </button>
        <button onclick={od}> {"↓"} </button>
        <button onclick={or}> {"→"} </button>
        <span style="width:8px;"></span>
        <button onclick={rc}> {"Reset"} </button>
    </div>}
}
