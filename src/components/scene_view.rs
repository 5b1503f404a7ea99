use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, TouchEvent};
use yew::prelude::*;

use crate::geom::Vec3;
use crate::model::{PlacedObject, PrefabKind, SceneAction, SceneState, Surface, SurfaceKind};
use crate::raycast::SceneHitTester;
use crate::state::{OrbitCamera, Placement, TouchState, placement};
use crate::util::format_vec3;

use super::{
    camera_controls::CameraControls, controls_panel::ControlsPanel, intro_overlay::IntroOverlay,
    prefab_panel::PrefabPanel, stats_panel::StatsPanel,
};

#[derive(Properties, PartialEq, Clone)]
pub struct SceneViewProps {
    pub scene: UseReducerHandle<SceneState>,
}

fn surface_fill(kind: SurfaceKind) -> &'static str {
    match kind {
        SurfaceKind::Floor => "rgba(22,27,34,0.85)",
        SurfaceKind::Table => "rgba(29,36,48,0.9)",
        SurfaceKind::Wall => "rgba(32,58,90,0.55)",
    }
}

fn surface_border(kind: SurfaceKind) -> &'static str {
    match kind {
        SurfaceKind::Floor => "#2f3641",
        SurfaceKind::Table => "#3a4455",
        SurfaceKind::Wall => "#2c5a8f",
    }
}

/// Projected quad corners of a surface, or None if any corner falls behind
/// the near plane.
fn surface_corners(
    cam: &OrbitCamera,
    s: &Surface,
    w: f64,
    h: f64,
) -> Option<[(f64, f64); 4]> {
    let x = s.x_axis() * s.extent.0;
    let z = s.z_axis() * s.extent.1;
    let c = s.pose.position;
    let world = [c + x + z, c + x + (-z), c + (-x) + (-z), c + (-x) + z];
    let mut out = [(0.0, 0.0); 4];
    for (i, p) in world.iter().enumerate() {
        let (sx, sy, _) = cam.project(*p, w, h)?;
        out[i] = (sx, sy);
    }
    Some(out)
}

fn trace_poly(ctx: &CanvasRenderingContext2d, pts: &[(f64, f64)]) {
    ctx.begin_path();
    for (i, (x, y)) in pts.iter().enumerate() {
        if i == 0 {
            ctx.move_to(*x, *y);
        } else {
            ctx.line_to(*x, *y);
        }
    }
    ctx.close_path();
}

fn draw_surface(
    ctx: &CanvasRenderingContext2d,
    cam: &OrbitCamera,
    s: &Surface,
    w: f64,
    h: f64,
) {
    let Some(corners) = surface_corners(cam, s, w, h) else {
        return;
    };
    trace_poly(ctx, &corners);
    ctx.set_fill_style_str(surface_fill(s.kind));
    ctx.fill();
    ctx.set_stroke_style_str(surface_border(s.kind));
    ctx.set_line_width(1.5);
    ctx.stroke();

    // light grid every half meter, along both local axes
    ctx.set_line_width(0.5);
    let (ex, ez) = s.extent;
    let xa = s.x_axis();
    let za = s.z_axis();
    let c = s.pose.position;
    let mut u = -ex + 0.5;
    while u < ex {
        let a = cam.project(c + xa * u + za * (-ez), w, h);
        let b = cam.project(c + xa * u + za * ez, w, h);
        if let (Some(a), Some(b)) = (a, b) {
            ctx.begin_path();
            ctx.move_to(a.0, a.1);
            ctx.line_to(b.0, b.1);
            ctx.stroke();
        }
        u += 0.5;
    }
    let mut v = -ez + 0.5;
    while v < ez {
        let a = cam.project(c + xa * (-ex) + za * v, w, h);
        let b = cam.project(c + xa * ex + za * v, w, h);
        if let (Some(a), Some(b)) = (a, b) {
            ctx.begin_path();
            ctx.move_to(a.0, a.1);
            ctx.line_to(b.0, b.1);
            ctx.stroke();
        }
        v += 0.5;
    }
}

/// Billboard-style object sprite: base anchored at the object's position,
/// width from its footprint, height from the prefab.
fn draw_object(
    ctx: &CanvasRenderingContext2d,
    cam: &OrbitCamera,
    obj: &PlacedObject,
    held: bool,
    w: f64,
    h: f64,
) {
    let right = cam.forward().cross(Vec3::Y).normalized();
    let base = cam.project(obj.position, w, h);
    let top = cam.project(obj.position + Vec3::Y * obj.kind.height(), w, h);
    let edge = cam.project(obj.position + right * obj.kind.footprint(), w, h);
    let (Some(base), Some(top), Some(edge)) = (base, top, edge) else {
        return;
    };
    let half_w = (edge.0 - base.0).abs().max(2.0);
    let color = obj.kind.color();

    match obj.kind {
        PrefabKind::Crate => {
            let hgt = (base.1 - top.1).max(2.0);
            ctx.set_fill_style_str(color);
            ctx.set_global_alpha(0.85);
            ctx.fill_rect(base.0 - half_w, base.1 - hgt, half_w * 2.0, hgt);
            ctx.set_global_alpha(1.0);
            ctx.set_stroke_style_str("#1c2128");
            ctx.set_line_width(1.0);
            ctx.stroke_rect(base.0 - half_w, base.1 - hgt, half_w * 2.0, hgt);
        }
        PrefabKind::Lamp => {
            ctx.set_stroke_style_str("#8b949e");
            ctx.set_line_width((half_w * 0.3).max(1.5));
            ctx.begin_path();
            ctx.move_to(base.0, base.1);
            ctx.line_to(top.0, top.1);
            ctx.stroke();
            ctx.set_fill_style_str(color);
            ctx.begin_path();
            ctx.arc(top.0, top.1, half_w.max(3.0), 0.0, std::f64::consts::PI * 2.0)
                .ok();
            ctx.fill();
        }
        PrefabKind::Plant => {
            let hgt = (base.1 - top.1).max(2.0);
            // pot
            ctx.set_fill_style_str("#6e4a2f");
            ctx.fill_rect(base.0 - half_w * 0.6, base.1 - hgt * 0.35, half_w * 1.2, hgt * 0.35);
            // foliage
            ctx.set_fill_style_str(color);
            ctx.begin_path();
            ctx.arc(top.0, top.1 + hgt * 0.2, half_w.max(3.0), 0.0, std::f64::consts::PI * 2.0)
                .ok();
            ctx.fill();
        }
    }

    if held {
        ctx.set_stroke_style_str("#58a6ff");
        ctx.set_line_width(2.0);
        let hgt = (base.1 - top.1).max(2.0);
        ctx.stroke_rect(
            base.0 - half_w - 4.0,
            base.1 - hgt - 4.0,
            half_w * 2.0 + 8.0,
            hgt + 8.0,
        );
    }
}

#[function_component(SceneView)]
pub fn scene_view(props: &SceneViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let camera = use_mut_ref(OrbitCamera::default);
    let touch_state = use_mut_ref(TouchState::default);
    let placement_state = use_mut_ref(Placement::default);
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    let scene_ref = use_mut_ref(|| props.scene.clone());
    let show_surfaces = use_state(|| {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(v)) = store.get_item("ap_setting_show_surfaces") {
                    return !(v == "0" || v == "false");
                }
            }
        }
        true // default ON
    });
    let show_surfaces_flag = use_mut_ref(|| true);
    let show_intro = {
        let initial = {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    store.get_item("ap_intro_seen").ok().flatten().is_none()
                } else {
                    true
                }
            } else {
                true
            }
        };
        use_state(|| initial)
    };

    // Effect: persist + mirror the surfaces toggle for the draw closure
    {
        let flag = *show_surfaces;
        let show_surfaces_flag_ref = show_surfaces_flag.clone();
        use_effect_with(flag, move |_| {
            *show_surfaces_flag_ref.borrow_mut() = flag;
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    let _ = store.set_item("ap_setting_show_surfaces", if flag { "1" } else { "0" });
                }
            }
            || ()
        });
    }

    // Effect: keep the frame loop's scene handle current on every render
    {
        let scene_ref = scene_ref.clone();
        let current_handle = props.scene.clone();
        use_effect(move || {
            *scene_ref.borrow_mut() = current_handle;
            || ()
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let camera = camera.clone();
        let touch_state = touch_state.clone();
        let placement_state = placement_state.clone();
        let scene = props.scene.clone();
        let scene_ref_setup = scene_ref.clone();
        let draw_ref_setup = draw_ref.clone();
        let show_surfaces_flag = show_surfaces_flag.clone();

        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let canvas: HtmlCanvasElement = canvas_ref
                .cast::<HtmlCanvasElement>()
                .expect("canvas_ref not attached to a canvas element");

            let compute_and_apply_canvas_size = {
                let canvas = canvas.clone();
                let window = window.clone();
                move || {
                    let width = window
                        .inner_width()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(800.0);
                    let height = window
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(600.0);
                    canvas.set_width(width.max(0.0) as u32);
                    canvas.set_height(height.max(0.0) as u32);
                }
            };
            compute_and_apply_canvas_size();

            // Draw closure: full scene repaint from the latest snapshot.
            let draw_closure: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                let camera = camera.clone();
                let scene_ref = scene_ref_setup.clone();
                let placement_state = placement_state.clone();
                let show_surfaces_flag = show_surfaces_flag.clone();
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let ctx = match canvas.get_context("2d").ok().flatten() {
                        Some(c) => c.dyn_into::<CanvasRenderingContext2d>().unwrap(),
                        None => return,
                    };
                    let w = canvas.width() as f64;
                    let h = canvas.height() as f64;
                    let cam = camera.borrow();
                    let scene_handle = scene_ref.borrow();
                    let rs = (**scene_handle).clone();
                    let pl = placement_state.borrow();
                    let surfaces_on = *show_surfaces_flag.borrow();

                    ctx.set_fill_style_str("#0e1116");
                    ctx.fill_rect(0.0, 0.0, w, h);

                    if surfaces_on {
                        // far to near so nearer surfaces paint over
                        let mut order: Vec<(f64, &Surface)> = rs
                            .surfaces
                            .iter()
                            .filter_map(|s| {
                                cam.project(s.pose.position, w, h).map(|(_, _, d)| (d, s))
                            })
                            .collect();
                        order.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
                        for (_, s) in &order {
                            draw_surface(&ctx, &cam, s, w, h);
                        }
                    }

                    let mut objs: Vec<(f64, &PlacedObject)> = rs
                        .objects
                        .iter()
                        .filter_map(|o| cam.project(o.position, w, h).map(|(_, _, d)| (d, o)))
                        .collect();
                    objs.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
                    for (_, o) in &objs {
                        draw_object(&ctx, &cam, o, pl.held == Some(o.id), w, h);
                    }

                    // placement indicator at the current hit pose
                    if let Some(pose) = pl.reticle {
                        let xa = pose.orientation.rotate(Vec3::X);
                        let za = pose.orientation.rotate(Vec3::Z);
                        let r = 0.12;
                        let mut pts = Vec::with_capacity(16);
                        for i in 0..16 {
                            let a = (i as f64) * std::f64::consts::PI * 2.0 / 16.0;
                            let p = pose.position + xa * (a.cos() * r) + za * (a.sin() * r);
                            if let Some((sx, sy, _)) = cam.project(p, w, h) {
                                pts.push((sx, sy));
                            }
                        }
                        if pts.len() == 16 {
                            trace_poly(&ctx, &pts);
                            ctx.set_stroke_style_str("#58a6ff");
                            ctx.set_line_width(2.0);
                            ctx.stroke();
                        }
                    }
                })
            };
            *draw_ref_setup.borrow_mut() = Some(draw_closure.clone());
            (draw_closure)();

            // Per-frame gesture step: sample the touch, hit-test, place/move.
            let frame_step: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                let camera = camera.clone();
                let touch_state = touch_state.clone();
                let placement_state = placement_state.clone();
                let scene_ref = scene_ref_setup.clone();
                Rc::new(move || {
                    let sample = touch_state.borrow_mut().sample();
                    let scene_handle = scene_ref.borrow();
                    let rs = (**scene_handle).clone();
                    let cam = camera.borrow();
                    let tester = SceneHitTester {
                        camera: &cam,
                        surfaces: &rs.surfaces,
                        width: canvas.width() as f64,
                        height: canvas.height() as f64,
                    };
                    let mut pl = placement_state.borrow_mut();
                    let action = placement::step(sample, &tester, &rs, &mut pl);
                    drop(pl);
                    drop(cam);
                    if let Some(action) = action {
                        scene_handle.dispatch(action);
                    }
                })
            };

            // Animation frame loop: step the gesture, then repaint.
            let raf_id = Rc::new(RefCell::new(None));
            {
                let raf_id_clone = raf_id.clone();
                let frame_step_loop = frame_step.clone();
                let draw_ref_loop = draw_ref_setup.clone();
                let window_loop = window.clone();
                let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                    Rc::new(RefCell::new(None));
                let closure_cell_clone = closure_cell.clone();
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    (frame_step_loop)();
                    if let Some(f) = &*draw_ref_loop.borrow() {
                        f();
                    }
                    if let Ok(id) = window_loop.request_animation_frame(
                        closure_cell_clone.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                    ) {
                        *raf_id_clone.borrow_mut() = Some(id);
                    }
                }) as Box<dyn FnMut()>));
                if let Ok(id) = window.request_animation_frame(
                    closure_cell.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                ) {
                    *raf_id.borrow_mut() = Some(id);
                }
            }

            // Surface detection refinement tick
            let detect_tick = {
                let scene = scene.clone();
                Closure::wrap(Box::new(move || {
                    scene.dispatch(SceneAction::DetectTick { dt: 0.016 });
                }) as Box<dyn FnMut()>)
            };
            let detect_tick_id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    detect_tick.as_ref().unchecked_ref(),
                    16,
                )
                .unwrap();

            // Wheel: zoom
            let wheel_cb = {
                let camera = camera.clone();
                Closure::wrap(Box::new(move |e: web_sys::WheelEvent| {
                    e.prevent_default();
                    let mut cam = camera.borrow_mut();
                    cam.zoom((e.delta_y() * 0.001).exp());
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref())
                .unwrap();

            // Mouse acts as a synthetic single touch (id -1); secondary
            // buttons orbit the camera instead.
            let mousedown_cb = {
                let camera = camera.clone();
                let touch_state = touch_state.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    if e.button() == 0 {
                        touch_state
                            .borrow_mut()
                            .begin(-1, e.offset_x() as f64, e.offset_y() as f64);
                    } else {
                        let mut cam = camera.borrow_mut();
                        cam.dragging = true;
                        cam.last_x = e.client_x() as f64;
                        cam.last_y = e.client_y() as f64;
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("mousedown", mousedown_cb.as_ref().unchecked_ref())
                .unwrap();

            let mousemove_cb = {
                let camera = camera.clone();
                let touch_state = touch_state.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let mut cam = camera.borrow_mut();
                    if cam.dragging {
                        let x = e.client_x() as f64;
                        let y = e.client_y() as f64;
                        let dx = x - cam.last_x;
                        let dy = y - cam.last_y;
                        cam.last_x = x;
                        cam.last_y = y;
                        cam.orbit(dx * 0.005, -dy * 0.005);
                        return;
                    }
                    drop(cam);
                    touch_state
                        .borrow_mut()
                        .moved(-1, e.offset_x() as f64, e.offset_y() as f64);
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("mousemove", mousemove_cb.as_ref().unchecked_ref())
                .unwrap();

            let mouseup_cb = {
                let camera = camera.clone();
                let touch_state = touch_state.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    if e.button() == 0 {
                        touch_state.borrow_mut().ended(-1);
                    }
                    camera.borrow_mut().dragging = false;
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())
                .unwrap();

            let contextmenu_cb = {
                Closure::wrap(Box::new(move |e: web_sys::Event| {
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "contextmenu",
                    contextmenu_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            let resize_cb = {
                let compute_and_apply_canvas_size = compute_and_apply_canvas_size.clone();
                let draw_ref = draw_ref_setup.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    compute_and_apply_canvas_size();
                    if let Some(f) = &*draw_ref.borrow() {
                        f();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .unwrap();

            // Touch listeners feed the per-frame fold; only the first finger
            // is tracked, so extra touches fall out naturally.
            let touch_start_cb = {
                let canvas_tc = canvas.clone();
                let touch_state_tc = touch_state.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let rect = canvas_tc.get_bounding_client_rect();
                    let changed = e.changed_touches();
                    for i in 0..changed.length() {
                        if let Some(t) = changed.item(i) {
                            touch_state_tc.borrow_mut().begin(
                                t.identifier(),
                                t.client_x() as f64 - rect.left(),
                                t.client_y() as f64 - rect.top(),
                            );
                        }
                    }
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let touch_move_cb = {
                let canvas_tc = canvas.clone();
                let touch_state_tc = touch_state.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let rect = canvas_tc.get_bounding_client_rect();
                    let changed = e.changed_touches();
                    for i in 0..changed.length() {
                        if let Some(t) = changed.item(i) {
                            touch_state_tc.borrow_mut().moved(
                                t.identifier(),
                                t.client_x() as f64 - rect.left(),
                                t.client_y() as f64 - rect.top(),
                            );
                        }
                    }
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let touch_end_cb = {
                let touch_state_tc = touch_state.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let changed = e.changed_touches();
                    for i in 0..changed.length() {
                        if let Some(t) = changed.item(i) {
                            touch_state_tc.borrow_mut().ended(t.identifier());
                        }
                    }
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref())
                .ok();

            let touch_cancel_cb = {
                let touch_state_tc = touch_state.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let changed = e.changed_touches();
                    for i in 0..changed.length() {
                        if let Some(t) = changed.item(i) {
                            touch_state_tc.borrow_mut().cancelled(t.identifier());
                        }
                    }
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "touchcancel",
                    touch_cancel_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let window_clone = window.clone();
            move || {
                let _ = canvas.remove_event_listener_with_callback(
                    "wheel",
                    wheel_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "contextmenu",
                    contextmenu_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "mouseup",
                    mouseup_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchcancel",
                    touch_cancel_cb.as_ref().unchecked_ref(),
                );
                window_clone.clear_interval_with_handle(detect_tick_id);
                if let Some(id) = *raf_id.borrow() {
                    let _ = window_clone.cancel_animation_frame(id);
                }
                let _keep_alive = (
                    &detect_tick,
                    &wheel_cb,
                    &mousedown_cb,
                    &mousemove_cb,
                    &mouseup_cb,
                    &contextmenu_cb,
                    &resize_cb,
                    &touch_start_cb,
                    &touch_move_cb,
                    &touch_end_cb,
                    &touch_cancel_cb,
                );
            }
        });
    }

    let rs_overlay = (*props.scene).clone();
    let held_label = placement_state.borrow().held.and_then(|id| {
        rs_overlay
            .object(id)
            .map(|o| format!("{} #{} {}", o.kind.label(), o.id, format_vec3(o.position)))
    });

    let on_toggle_surfaces = {
        let show_surfaces = show_surfaces.clone();
        Callback::from(move |_| show_surfaces.set(!*show_surfaces))
    };
    let on_clear_objects = {
        let scene = props.scene.clone();
        let placement_state = placement_state.clone();
        Callback::from(move |_| {
            placement_state.borrow_mut().release();
            scene.dispatch(SceneAction::ClearObjects);
        })
    };
    let on_show_help = {
        let show_intro = show_intro.clone();
        Callback::from(move |_| show_intro.set(true))
    };
    let hide_intro = {
        let show_intro = show_intro.clone();
        Callback::from(move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    let _ = store.set_item("ap_intro_seen", "1");
                }
            }
            show_intro.set(false);
        })
    };
    let on_select_prefab = {
        let scene = props.scene.clone();
        Callback::from(move |kind: PrefabKind| {
            scene.dispatch(SceneAction::SelectPrefab { kind });
        })
    };

    let orbit_by = |dyaw: f64, dpitch: f64| {
        let camera = camera.clone();
        Callback::from(move |_| {
            camera.borrow_mut().orbit(dyaw, dpitch);
        })
    };
    let zoom_in = {
        let camera = camera.clone();
        Callback::from(move |_| camera.borrow_mut().zoom(0.8))
    };
    let zoom_out = {
        let camera = camera.clone();
        Callback::from(move |_| camera.borrow_mut().zoom(1.25))
    };
    let reset_camera = {
        let camera = camera.clone();
        Callback::from(move |_| camera.borrow_mut().reset())
    };

    let surfaces_label = if *show_surfaces { "Hide Surfaces" } else { "Show Surfaces" };

    html! {
        <div style="position:relative; width:100vw; height:100vh;">
            <canvas ref={canvas_ref.clone()} id="scene-canvas" style="display:block; width:100%; height:100%; touch-action:none;"></canvas>
            <StatsPanel
                surfaces={rs_overlay.surfaces.len()}
                objects={rs_overlay.objects.len()}
                placed_total={rs_overlay.stats.objects_placed}
                held_label={held_label}
            />
            <ControlsPanel
                surfaces_label={surfaces_label.to_string()}
                on_toggle_surfaces={on_toggle_surfaces}
                on_clear_objects={on_clear_objects}
                on_show_help={on_show_help}
            />
            <PrefabPanel selected={rs_overlay.prefab} on_select={on_select_prefab} />
            <CameraControls
                on_zoom_in={zoom_in}
                on_zoom_out={zoom_out}
                on_orbit_left={orbit_by(-0.25, 0.0)}
                on_orbit_right={orbit_by(0.25, 0.0)}
                on_orbit_up={orbit_by(0.0, 0.12)}
                on_orbit_down={orbit_by(0.0, -0.12)}
                on_reset={reset_camera}
            />
            <IntroOverlay show={*show_intro} hide_intro={hide_intro} />
        </div>
    }
}
