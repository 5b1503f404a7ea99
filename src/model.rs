//! Core data model: tracked surfaces, placed objects and the scene reducer.
//! Interaction state (camera, touch, held handle) lives in `crate::state`;
//! this module only holds what the reducer owns.

use crate::geom::{Pose, Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

/// Object template the user places. Footprint/height drive both drawing and
/// the HUD; the placement contract itself only cares that spawning copies the
/// currently selected kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrefabKind {
    Crate,
    Lamp,
    Plant,
}

impl PrefabKind {
    pub const ALL: [PrefabKind; 3] = [PrefabKind::Crate, PrefabKind::Lamp, PrefabKind::Plant];

    pub fn label(self) -> &'static str {
        match self {
            PrefabKind::Crate => "Crate",
            PrefabKind::Lamp => "Lamp",
            PrefabKind::Plant => "Plant",
        }
    }

    /// Half-width of the base in meters.
    pub fn footprint(self) -> f64 {
        match self {
            PrefabKind::Crate => 0.22,
            PrefabKind::Lamp => 0.12,
            PrefabKind::Plant => 0.16,
        }
    }

    pub fn height(self) -> f64 {
        match self {
            PrefabKind::Crate => 0.44,
            PrefabKind::Lamp => 0.85,
            PrefabKind::Plant => 0.55,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            PrefabKind::Crate => "#f0883e",
            PrefabKind::Lamp => "#d4af37",
            PrefabKind::Plant => "#2ea043",
        }
    }
}

impl Default for PrefabKind {
    fn default() -> Self {
        PrefabKind::Crate
    }
}

/// One spawned instance. Created with identity orientation; movement only
/// ever rewrites `position`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedObject {
    pub id: u32,
    pub kind: PrefabKind,
    pub position: Vec3,
    pub orientation: Quat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceKind {
    Floor,
    Table,
    Wall,
}

impl SurfaceKind {
    pub fn label(self) -> &'static str {
        match self {
            SurfaceKind::Floor => "Floor",
            SurfaceKind::Table => "Table",
            SurfaceKind::Wall => "Wall",
        }
    }
}

/// A tracked planar surface. Local +Y of `pose.orientation` is the surface
/// normal; local X/Z span the plane. `extent` is the current half-extents
/// along local X/Z and grows toward `max_extent` as detection refines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub id: u32,
    pub kind: SurfaceKind,
    pub pose: Pose,
    pub extent: (f64, f64),
    pub max_extent: (f64, f64),
}

impl Surface {
    pub fn normal(&self) -> Vec3 {
        self.pose.orientation.rotate(Vec3::Y)
    }

    pub fn x_axis(&self) -> Vec3 {
        self.pose.orientation.rotate(Vec3::X)
    }

    pub fn z_axis(&self) -> Vec3 {
        self.pose.orientation.rotate(Vec3::Z)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneStats {
    pub objects_placed: u32,
    pub moves_applied: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneState {
    pub surfaces: Vec<Surface>,
    pub objects: Vec<PlacedObject>,
    pub next_object_id: u32,
    pub prefab: PrefabKind,
    pub stats: SceneStats,
}

/// Half-extent growth while a surface is still being "detected", in meters
/// per second along each axis.
const DETECT_GROWTH: f64 = 0.35;

impl SceneState {
    pub fn with_surfaces(surfaces: Vec<Surface>) -> Self {
        Self {
            surfaces,
            objects: Vec::new(),
            next_object_id: 0,
            prefab: PrefabKind::default(),
            stats: SceneStats::default(),
        }
    }

    /// The simulated room: a floor, a table and one wall. The table and wall
    /// get a randomized offset so consecutive sessions don't look identical.
    /// Surfaces start small and grow via `DetectTick`.
    pub fn new_room() -> Self {
        let jitter = |range: f64| (js_sys::Math::random() * 2.0 - 1.0) * range;
        let side = if js_sys::Math::random() < 0.5 { 1.0 } else { -1.0 };

        let floor = Surface {
            id: 0,
            kind: SurfaceKind::Floor,
            pose: Pose::new(Vec3::ZERO, Quat::IDENTITY),
            extent: (0.9, 0.9),
            max_extent: (2.4, 2.4),
        };
        let table = Surface {
            id: 1,
            kind: SurfaceKind::Table,
            pose: Pose::new(
                Vec3::new(side * (0.9 + jitter(0.2)), 0.74, -0.5 + jitter(0.3)),
                Quat::IDENTITY,
            ),
            extent: (0.2, 0.15),
            max_extent: (0.55, 0.35),
        };
        // Wall at the back of the room, normal facing +Z into the room:
        // rotate local +Y (the normal) onto world +Z.
        let wall = Surface {
            id: 2,
            kind: SurfaceKind::Wall,
            pose: Pose::new(
                Vec3::new(jitter(0.4), 1.1, -2.2),
                Quat::from_axis_angle(Vec3::X, std::f64::consts::FRAC_PI_2),
            ),
            extent: (0.7, 0.5),
            max_extent: (2.0, 1.1),
        };
        Self::with_surfaces(vec![floor, table, wall])
    }

    pub fn object(&self, id: u32) -> Option<&PlacedObject> {
        self.objects.iter().find(|o| o.id == id)
    }
}

#[derive(Clone, Debug)]
pub enum SceneAction {
    /// Create one object of the selected prefab at `position` with identity
    /// orientation. The id it will receive is `next_object_id`.
    Spawn { position: Vec3 },
    /// Reposition an existing object in place; unknown ids are ignored.
    MoveObject { id: u32, position: Vec3 },
    SelectPrefab { kind: PrefabKind },
    /// Remove every placed object. The caller owns dropping its held handle.
    ClearObjects,
    /// ~16ms; widens surface extents toward their maximum.
    DetectTick { dt: f64 },
}

impl Reducible for SceneState {
    type Action = SceneAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use SceneAction::*;
        let mut new = (*self).clone();
        match action {
            Spawn { position } => {
                let id = new.next_object_id;
                new.next_object_id += 1;
                new.objects.push(PlacedObject {
                    id,
                    kind: new.prefab,
                    position,
                    orientation: Quat::IDENTITY,
                });
                new.stats.objects_placed = new.stats.objects_placed.saturating_add(1);
            }
            MoveObject { id, position } => {
                if let Some(obj) = new.objects.iter_mut().find(|o| o.id == id) {
                    obj.position = position;
                    new.stats.moves_applied = new.stats.moves_applied.saturating_add(1);
                } else {
                    return self;
                }
            }
            SelectPrefab { kind } => {
                new.prefab = kind;
            }
            ClearObjects => {
                new.objects.clear();
            }
            DetectTick { dt } => {
                if dt <= 0.0 {
                    return self;
                }
                let mut grew = false;
                for s in new.surfaces.iter_mut() {
                    let step = DETECT_GROWTH * dt;
                    if s.extent.0 < s.max_extent.0 {
                        s.extent.0 = (s.extent.0 + step).min(s.max_extent.0);
                        grew = true;
                    }
                    if s.extent.1 < s.max_extent.1 {
                        s.extent.1 = (s.extent.1 + step).min(s.max_extent.1);
                        grew = true;
                    }
                }
                if !grew {
                    return self;
                }
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(id: u32, half: f64) -> Surface {
        Surface {
            id,
            kind: SurfaceKind::Floor,
            pose: Pose::new(Vec3::ZERO, Quat::IDENTITY),
            extent: (half, half),
            max_extent: (half + 1.0, half + 1.0),
        }
    }

    fn apply(state: SceneState, action: SceneAction) -> SceneState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn spawn_assigns_monotonic_ids_and_identity_orientation() {
        let s = SceneState::with_surfaces(vec![flat(0, 1.0)]);
        let s = apply(s, SceneAction::Spawn { position: Vec3::new(0.1, 0.0, 0.2) });
        let s = apply(s, SceneAction::Spawn { position: Vec3::new(0.5, 0.0, 0.5) });
        assert_eq!(s.objects.len(), 2);
        assert_eq!(s.objects[0].id, 0);
        assert_eq!(s.objects[1].id, 1);
        assert_eq!(s.next_object_id, 2);
        assert_eq!(s.objects[0].orientation, Quat::IDENTITY);
        assert_eq!(s.stats.objects_placed, 2);
    }

    #[test]
    fn spawn_copies_the_selected_prefab() {
        let s = SceneState::with_surfaces(vec![flat(0, 1.0)]);
        let s = apply(s, SceneAction::SelectPrefab { kind: PrefabKind::Plant });
        let s = apply(s, SceneAction::Spawn { position: Vec3::ZERO });
        assert_eq!(s.objects[0].kind, PrefabKind::Plant);
    }

    #[test]
    fn move_updates_position_only() {
        let s = SceneState::with_surfaces(vec![flat(0, 1.0)]);
        let s = apply(s, SceneAction::Spawn { position: Vec3::ZERO });
        let target = Vec3::new(0.4, 0.0, -0.3);
        let s = apply(s, SceneAction::MoveObject { id: 0, position: target });
        assert_eq!(s.objects[0].position, target);
        assert_eq!(s.objects[0].orientation, Quat::IDENTITY);
        assert_eq!(s.stats.moves_applied, 1);
    }

    #[test]
    fn move_unknown_id_is_a_no_op() {
        let s = SceneState::with_surfaces(vec![flat(0, 1.0)]);
        let before = s.clone();
        let s = apply(s, SceneAction::MoveObject { id: 7, position: Vec3::new(1.0, 0.0, 0.0) });
        assert_eq!(s, before);
    }

    #[test]
    fn clear_removes_objects_but_keeps_id_counter() {
        let s = SceneState::with_surfaces(vec![flat(0, 1.0)]);
        let s = apply(s, SceneAction::Spawn { position: Vec3::ZERO });
        let s = apply(s, SceneAction::ClearObjects);
        assert!(s.objects.is_empty());
        assert_eq!(s.next_object_id, 1);
        let s = apply(s, SceneAction::Spawn { position: Vec3::ZERO });
        assert_eq!(s.objects[0].id, 1);
    }

    #[test]
    fn detect_tick_grows_extents_and_clamps_at_max() {
        let mut surf = flat(0, 0.5);
        surf.max_extent = (0.6, 0.6);
        let s = SceneState::with_surfaces(vec![surf]);
        let s = apply(s, SceneAction::DetectTick { dt: 0.1 });
        assert!(s.surfaces[0].extent.0 > 0.5);
        let s = apply(s, SceneAction::DetectTick { dt: 10.0 });
        assert_eq!(s.surfaces[0].extent, (0.6, 0.6));
        // fully grown ticks leave the state untouched
        let again = apply(s.clone(), SceneAction::DetectTick { dt: 1.0 });
        assert_eq!(again, s);
    }
}
