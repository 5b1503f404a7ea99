use crate::model::PrefabKind;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PrefabPanelProps {
    pub selected: PrefabKind,
    pub on_select: Callback<PrefabKind>,
}

#[function_component]
pub fn PrefabPanel(props: &PrefabPanelProps) -> Html {
    let buttons = PrefabKind::ALL.iter().map(|kind| {
        let kind = *kind;
        let on_select = props.on_select.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_select.emit(kind));
        let active = kind == props.selected;
        let style = if active {
            format!("border:1px solid {}; color:{}; font-weight:600;", kind.color(), kind.color())
        } else {
            "border:1px solid #30363d; opacity:0.75;".to_string()
        };
        html! { <button {onclick} style={style}>{ kind.label() }</button> }
    });
    html! {<div style="position:absolute; left:50%; bottom:28px; transform:translateX(-50%); background:rgba(22,27,34,0.92); border:1px solid #30363d; border-radius:10px; padding:10px 14px; display:flex; flex-direction:column; gap:6px; min-width:240px; text-align:center;">
        <div style="font-size:13px; opacity:0.8;">{"Prefab to place"}</div>
        <div style="display:flex; gap:8px; justify-content:center;">
            { for buttons }
        </div>
    </div> }
}
