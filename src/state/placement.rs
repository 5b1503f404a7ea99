//! The placement controller: one pass per frame from touch sample to scene
//! action.
//!
//! `Placement` is the single-slot handle to the most recently spawned object.
//! It is non-empty only between a Began and the next Ended/Cancelled, and the
//! whole gesture is gated on the hit-test: no surface under the finger means
//! no spawn and no move that frame.

use crate::geom::Pose;
use crate::model::{SceneAction, SceneState};
use crate::raycast::HitTester;
use crate::state::touch::{TouchPhase, TouchSample};

#[derive(Default, Debug, Clone)]
pub struct Placement {
    /// Id of the object the current gesture is dragging, if any.
    pub held: Option<u32>,
    /// Pose of this frame's closest hit while a touch is down; drives the
    /// placement indicator.
    pub reticle: Option<Pose>,
}

impl Placement {
    pub fn release(&mut self) {
        self.held = None;
    }
}

/// One frame of the placement gesture. Returns at most one action for the
/// scene reducer; `placement` is updated in place.
pub fn step(
    touch: Option<TouchSample>,
    tester: &impl HitTester,
    scene: &SceneState,
    placement: &mut Placement,
) -> Option<SceneAction> {
    let Some(touch) = touch else {
        placement.reticle = None;
        return None;
    };

    let hits = tester.hit_test(touch.x, touch.y);
    let pose = hits.first().map(|h| h.pose);
    placement.reticle = pose;

    match touch.phase {
        TouchPhase::Began => {
            // Always spawns, even if a handle is still held; the previous
            // object stays placed but can no longer be moved.
            let pose = pose?;
            placement.held = Some(scene.next_object_id);
            Some(SceneAction::Spawn { position: pose.position })
        }
        TouchPhase::Moved => {
            let id = placement.held?;
            let pose = pose?;
            Some(SceneAction::MoveObject { id, position: pose.position })
        }
        // A cancelled gesture must not leave a dangling movable handle, so
        // both releases share one path. The handle clears hit or no hit.
        TouchPhase::Ended | TouchPhase::Cancelled => {
            placement.release();
            None
        }
        TouchPhase::Stationary => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Quat, Vec3};
    use crate::raycast::RayHit;
    use std::rc::Rc;
    use yew::Reducible;

    /// Canned hit-test: same ordered hits for every screen point.
    struct Fixed(Vec<RayHit>);

    impl HitTester for Fixed {
        fn hit_test(&self, _x: f64, _y: f64) -> Vec<RayHit> {
            self.0.clone()
        }
    }

    fn hit_at(p: Vec3) -> Fixed {
        Fixed(vec![RayHit { surface_id: 0, distance: 1.0, pose: Pose::new(p, Quat::IDENTITY) }])
    }

    fn miss() -> Fixed {
        Fixed(Vec::new())
    }

    fn touch(phase: TouchPhase) -> Option<TouchSample> {
        Some(TouchSample { x: 100.0, y: 100.0, phase })
    }

    fn scene() -> SceneState {
        SceneState::with_surfaces(Vec::new())
    }

    fn dispatch(scene: SceneState, action: Option<SceneAction>) -> SceneState {
        match action {
            Some(a) => (*Rc::new(scene).reduce(a)).clone(),
            None => scene,
        }
    }

    #[test]
    fn no_touch_is_a_no_op() {
        let s = scene();
        let mut pl = Placement::default();
        let action = step(None, &hit_at(Vec3::ZERO), &s, &mut pl);
        assert!(action.is_none());
        assert!(pl.held.is_none());
        assert!(pl.reticle.is_none());
    }

    #[test]
    fn empty_hit_test_suppresses_began_and_moved() {
        let s = scene();
        let mut pl = Placement::default();
        assert!(step(touch(TouchPhase::Began), &miss(), &s, &mut pl).is_none());
        assert!(pl.held.is_none());

        pl.held = Some(3);
        assert!(step(touch(TouchPhase::Moved), &miss(), &s, &mut pl).is_none());
        assert_eq!(pl.held, Some(3));
        assert!(pl.reticle.is_none());
    }

    #[test]
    fn began_spawns_at_the_hit_with_identity_orientation() {
        let x = Vec3::new(0.3, 0.0, -0.2);
        let s = scene();
        let mut pl = Placement::default();
        let action = step(touch(TouchPhase::Began), &hit_at(x), &s, &mut pl);
        assert_eq!(pl.held, Some(s.next_object_id));
        let s = dispatch(s, action);
        assert_eq!(s.objects.len(), 1);
        assert_eq!(s.objects[0].position, x);
        assert_eq!(s.objects[0].orientation, Quat::IDENTITY);
    }

    #[test]
    fn moved_repositions_the_held_object_without_spawning() {
        let x = Vec3::new(0.1, 0.0, 0.1);
        let y = Vec3::new(0.6, 0.0, -0.4);
        let s = scene();
        let mut pl = Placement::default();
        let s = dispatch(s.clone(), step(touch(TouchPhase::Began), &hit_at(x), &s, &mut pl));
        let s = dispatch(s.clone(), step(touch(TouchPhase::Moved), &hit_at(y), &s, &mut pl));
        assert_eq!(s.objects.len(), 1);
        assert_eq!(s.objects[0].position, y);
    }

    #[test]
    fn moved_with_no_handle_is_a_no_op() {
        let s = scene();
        let mut pl = Placement::default();
        let action = step(touch(TouchPhase::Moved), &hit_at(Vec3::ZERO), &s, &mut pl);
        assert!(action.is_none());
        // reticle still tracks the hit even though nothing moves
        assert!(pl.reticle.is_some());
    }

    #[test]
    fn ended_clears_the_handle_regardless_of_hits() {
        let s = scene();
        let mut pl = Placement { held: Some(0), reticle: None };
        assert!(step(touch(TouchPhase::Ended), &miss(), &s, &mut pl).is_none());
        assert!(pl.held.is_none());

        let mut pl = Placement { held: Some(0), reticle: None };
        assert!(step(touch(TouchPhase::Ended), &hit_at(Vec3::ZERO), &s, &mut pl).is_none());
        assert!(pl.held.is_none());
    }

    #[test]
    fn ended_leaves_the_object_in_the_scene() {
        let x = Vec3::new(0.2, 0.0, 0.2);
        let s = scene();
        let mut pl = Placement::default();
        let s = dispatch(s.clone(), step(touch(TouchPhase::Began), &hit_at(x), &s, &mut pl));
        let s = dispatch(s.clone(), step(touch(TouchPhase::Ended), &hit_at(x), &s, &mut pl));
        assert_eq!(s.objects.len(), 1);
        assert_eq!(s.objects[0].position, x);
        assert!(pl.held.is_none());
    }

    #[test]
    fn cancelled_behaves_like_ended() {
        let s = scene();
        let mut pl = Placement { held: Some(2), reticle: None };
        assert!(step(touch(TouchPhase::Cancelled), &miss(), &s, &mut pl).is_none());
        assert!(pl.held.is_none());
    }

    #[test]
    fn stationary_does_nothing_but_keeps_the_reticle() {
        let s = scene();
        let mut pl = Placement { held: Some(1), reticle: None };
        let action = step(touch(TouchPhase::Stationary), &hit_at(Vec3::ZERO), &s, &mut pl);
        assert!(action.is_none());
        assert_eq!(pl.held, Some(1));
        assert!(pl.reticle.is_some());
    }

    #[test]
    fn began_while_held_overwrites_and_orphans_the_previous_object() {
        let x = Vec3::new(0.1, 0.0, 0.0);
        let y = Vec3::new(0.8, 0.0, 0.0);
        let z = Vec3::new(-0.5, 0.0, 0.3);
        let s = scene();
        let mut pl = Placement::default();
        let s = dispatch(s.clone(), step(touch(TouchPhase::Began), &hit_at(x), &s, &mut pl));
        let first = pl.held.unwrap();
        // second gesture begins without the first ever ending
        let s = dispatch(s.clone(), step(touch(TouchPhase::Began), &hit_at(y), &s, &mut pl));
        assert_eq!(s.objects.len(), 2);
        assert_ne!(pl.held, Some(first));
        // dragging now moves only the new object; the orphan stays at x
        let s = dispatch(s.clone(), step(touch(TouchPhase::Moved), &hit_at(z), &s, &mut pl));
        assert_eq!(s.object(first).unwrap().position, x);
        assert_eq!(s.objects[1].position, z);
    }

    #[test]
    fn full_gesture_scenario() {
        // Began(hit=X) -> Moved(hit=Y) -> Moved(hit=Z) -> Ended
        let x = Vec3::new(0.0, 0.0, 0.0);
        let y = Vec3::new(0.3, 0.0, 0.1);
        let z = Vec3::new(0.5, 0.0, -0.2);
        let s = scene();
        let mut pl = Placement::default();
        let s = dispatch(s.clone(), step(touch(TouchPhase::Began), &hit_at(x), &s, &mut pl));
        assert_eq!(s.objects[0].position, x);
        let s = dispatch(s.clone(), step(touch(TouchPhase::Moved), &hit_at(y), &s, &mut pl));
        assert_eq!(s.objects[0].position, y);
        let s = dispatch(s.clone(), step(touch(TouchPhase::Moved), &hit_at(z), &s, &mut pl));
        assert_eq!(s.objects[0].position, z);
        let s = dispatch(s.clone(), step(touch(TouchPhase::Ended), &hit_at(z), &s, &mut pl));
        assert_eq!(s.objects.len(), 1);
        assert_eq!(s.objects[0].position, z);
        assert!(pl.held.is_none());
    }
}
