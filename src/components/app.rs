use super::scene_view::SceneView;
use crate::model::{PrefabKind, SceneAction, SceneState};
use crate::util::clog;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let scene = use_reducer(SceneState::new_room);
    let last_counts = use_mut_ref(|| (0usize, 0u32));

    // Load the persisted prefab selection
    {
        let scene = scene.clone();
        use_effect_with((), move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(Some(raw)) = store.get_item("ap_prefab") {
                        if let Ok(kind) = serde_json::from_str::<PrefabKind>(&raw) {
                            scene.dispatch(SceneAction::SelectPrefab { kind });
                        }
                    }
                }
            }
            || ()
        });
    }
    // Persist prefab selection changes
    {
        let scene = scene.clone();
        use_effect_with(scene.prefab, move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(s) = serde_json::to_string(&scene.prefab) {
                        let _ = store.set_item("ap_prefab", &s);
                    }
                }
            }
            || ()
        });
    }

    // Digit hotkeys pick the prefab
    {
        let scene = scene.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().unwrap();
            let key_cb = {
                let scene = scene.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    let kind = match e.code().as_str() {
                        "Digit1" => Some(PrefabKind::Crate),
                        "Digit2" => Some(PrefabKind::Lamp),
                        "Digit3" => Some(PrefabKind::Plant),
                        _ => None,
                    };
                    if let Some(kind) = kind {
                        scene.dispatch(SceneAction::SelectPrefab { kind });
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())
                .unwrap();
            move || {
                let _ = window.remove_event_listener_with_callback(
                    "keydown",
                    key_cb.as_ref().unchecked_ref(),
                );
                drop(key_cb);
            }
        });
    }

    // Log placement changes
    {
        let scene = scene.clone();
        let last_counts = last_counts.clone();
        use_effect_with(
            ((*scene).objects.len(), (*scene).stats.moves_applied),
            move |deps| {
                let (count, moves) = *deps;
                let mut prev = last_counts.borrow_mut();
                if prev.0 != count {
                    clog(&format!("objects: {} -> {}", prev.0, count));
                }
                if prev.1 != moves {
                    clog(&format!("moves applied: {}", moves));
                }
                *prev = (count, moves);
                || ()
            },
        );
    }

    html! {
        <div id="root">
            <SceneView scene={scene.clone()} />
        </div>
    }
}
