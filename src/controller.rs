use std::collections::HashMap;

use log::{debug, info};

use crate::constants::*;
use crate::state::{Container, SceneId};
use crate::timeline::Timeline;

#[derive(Debug, PartialEq, Clone, Copy)]
enum Action {
    Hide(SceneId),
    Show(SceneId),
}

/// Single source of truth for which scene is on screen.
pub struct SceneController {
    registry: HashMap<SceneId, Container>,
    current: SceneId,
    timeline: Timeline<Action>,
}

impl SceneController {
    /// Builds the registry from the scenes that have a container. The start
    /// scene is shown immediately, without a fade.
    pub fn new(scenes: impl IntoIterator<Item = SceneId>, start: SceneId) -> Self {
        let mut registry: HashMap<SceneId, Container> =
            scenes.into_iter().map(|id| (id, Container::default())).collect();

        if let Some(container) = registry.get_mut(&start) {
            container.show();
        }

        Self {
            registry,
            current: start,
            timeline: Timeline::new(),
        }
    }

    /// Controller with a container for every scene.
    pub fn with_all_scenes(start: SceneId) -> Self {
        Self::new(SceneId::ALL, start)
    }

    pub fn current(&self) -> SceneId {
        self.current
    }

    /// Fades out the current scene and shows `target` once the transition
    /// delay has elapsed. Returns immediately; earlier transitions still in
    /// flight keep their scheduled actions.
    pub fn transition_to(&mut self, target: SceneId) {
        info!("Transition {} -> {}", self.current, target);

        let outgoing = self.current;
        if let Some(container) = self.registry.get_mut(&outgoing) {
            container.start_fade_out();
            self.timeline.schedule(TRANSITION_DELAY, Action::Hide(outgoing));
        }

        if self.registry.contains_key(&target) {
            self.timeline.schedule(TRANSITION_DELAY, Action::Show(target));
        } else {
            debug!("No container for scene {}, show skipped", target);
        }
    }

    /// Advances fades and deferred actions by `dt` seconds. Returns the
    /// scenes that became visible during this call, in the order shown.
    pub fn advance(&mut self, dt: f32) -> Vec<SceneId> {
        for container in self.registry.values_mut() {
            if container.fading_out {
                container.fade_timer += dt;
            }
        }

        let mut shown = Vec::new();
        for action in self.timeline.advance(dt) {
            match action {
                Action::Hide(id) => {
                    if let Some(container) = self.registry.get_mut(&id) {
                        container.hide();
                    }
                }
                Action::Show(id) => {
                    if let Some(container) = self.registry.get_mut(&id) {
                        container.show();
                        self.current = id;
                        shown.push(id);
                        debug!("Scene {} shown", id);
                    }
                }
            }
        }
        shown
    }

    pub fn is_visible(&self, id: SceneId) -> bool {
        self.registry.get(&id).is_some_and(|c| c.visible)
    }

    pub fn is_fading(&self, id: SceneId) -> bool {
        self.registry.get(&id).is_some_and(|c| c.fading_out)
    }

    pub fn opacity(&self, id: SceneId) -> f32 {
        match self.registry.get(&id) {
            Some(c) if c.visible && c.fading_out => {
                (1.0 - c.fade_timer / TRANSITION_DELAY).clamp(0.0, 1.0)
            }
            Some(c) if c.visible => 1.0,
            _ => 0.0,
        }
    }

    /// Visible scenes back to front: fading scenes first.
    pub fn visible_scenes(&self) -> Vec<SceneId> {
        let mut scenes: Vec<SceneId> = SceneId::ALL
            .into_iter()
            .filter(|id| self.is_visible(*id))
            .collect();
        scenes.sort_by_key(|id| !self.is_fading(*id));
        scenes
    }

    #[cfg(test)]
    pub fn has_pending(&self) -> bool {
        !self.timeline.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_scene_is_active() {
        let c = SceneController::with_all_scenes(SceneId::CatchButton);
        assert_eq!(c.current(), SceneId::CatchButton);
        assert_eq!(c.visible_scenes(), vec![SceneId::CatchButton]);
        assert_eq!(c.opacity(SceneId::CatchButton), 1.0);
        assert!(!c.has_pending());
    }

    #[test]
    fn transition_swaps_scenes_after_delay() {
        let mut c = SceneController::with_all_scenes(SceneId::CatchButton);
        c.transition_to(SceneId::Letter);

        assert!(c.is_fading(SceneId::CatchButton));
        assert!(c.is_visible(SceneId::CatchButton));
        assert!(!c.is_visible(SceneId::Letter));

        assert!(c.advance(0.25).is_empty());
        assert_eq!(c.current(), SceneId::CatchButton);
        assert_eq!(c.opacity(SceneId::CatchButton), 0.5);

        assert_eq!(c.advance(0.25), vec![SceneId::Letter]);
        assert_eq!(c.current(), SceneId::Letter);
        assert!(!c.is_visible(SceneId::CatchButton));
        assert!(!c.is_fading(SceneId::CatchButton));
        assert!(c.is_visible(SceneId::Letter));
        assert_eq!(c.visible_scenes(), vec![SceneId::Letter]);
    }

    #[test]
    fn transition_to_self_ends_visible() {
        let mut c = SceneController::with_all_scenes(SceneId::Navigation);
        c.transition_to(SceneId::Navigation);
        assert_eq!(c.advance(0.5), vec![SceneId::Navigation]);
        assert!(c.is_visible(SceneId::Navigation));
        assert!(!c.is_fading(SceneId::Navigation));
    }

    #[test]
    fn missing_target_container_is_a_no_op_show() {
        let mut c =
            SceneController::new([SceneId::CatchButton, SceneId::Letter], SceneId::CatchButton);
        c.transition_to(SceneId::Garden);
        assert!(c.advance(1.0).is_empty());
        assert_eq!(c.current(), SceneId::CatchButton);
        assert!(!c.is_visible(SceneId::CatchButton));
    }

    #[test]
    fn overlapping_transitions_keep_both_action_sets() {
        let mut c = SceneController::with_all_scenes(SceneId::Navigation);
        c.transition_to(SceneId::BallGame);
        c.advance(0.25);
        c.transition_to(SceneId::Garden);

        assert_eq!(c.advance(0.25), vec![SceneId::BallGame]);
        assert_eq!(c.current(), SceneId::BallGame);

        assert_eq!(c.advance(0.25), vec![SceneId::Garden]);
        assert_eq!(c.current(), SceneId::Garden);
        assert!(c.is_visible(SceneId::BallGame));
        assert!(!c.has_pending());
    }

    #[test]
    fn reports_paint_sky_when_shown() {
        let mut c = SceneController::with_all_scenes(SceneId::WishingJar);
        c.transition_to(SceneId::PaintSky);
        assert_eq!(c.advance(TRANSITION_DELAY), vec![SceneId::PaintSky]);
    }
}
