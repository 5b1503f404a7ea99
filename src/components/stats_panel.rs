use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub surfaces: usize,
    pub objects: usize,
    pub placed_total: u32,
    /// "Crate #4 (0.42, 0.00, -1.30)" while a gesture holds an object.
    pub held_label: Option<String>,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // icon | label | value
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", icon_style)}>{"▦"}</span>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Surfaces"}</span>
                <span style={format!("{} color:#58a6ff;", value_style)}>{ props.surfaces }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#f0883e;", icon_style)}>{"◼"}</span>
                <span style={format!("{} color:#f0883e;", label_style)}>{"Objects"}</span>
                <span style={format!("{} color:#f0883e;", value_style)}>{ props.objects }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#8b949e;", icon_style)}>{"Σ"}</span>
                <span style={format!("{} color:#8b949e;", label_style)}>{"Placed total"}</span>
                <span style={format!("{} color:#8b949e;", value_style)}>{ props.placed_total }</span>
            </div>
            { if let Some(held) = &props.held_label {
                html!{ <div style="font-size:11px; opacity:0.8; color:#2ea043;">{ format!("Holding {}", held) }</div> }
            } else {
                html!{ <div style="font-size:11px; opacity:0.5;">{"Touch a surface to place"}</div> }
            } }
        </div>
    }
}
