//! Displayed geometry that moves toward the view model over time
//!
//! The view model only says where things should end up and how to get there
//! ([`Motion`]). This module keeps the in-between values the renderer draws,
//! which are also what gets reported back as measured layout.

use std::time::{Duration, Instant};

use dock_reorder::geometry::Rect;
use dock_reorder::model::Item;
use dock_reorder::reflow::Motion;
use dock_reorder::view_model::DockView;

/// Cubic ease-out: fast start, gentle landing
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// A single animated scalar
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
    eased: bool,
}

impl Tween {
    pub fn settled(value: f32, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            started: now,
            duration: Duration::ZERO,
            eased: false,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn value(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        let t = if self.eased { ease_out_cubic(t) } else { t };
        self.from + (self.to - self.from) * t
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    /// Head toward `to`, starting from wherever the value is right now
    ///
    /// Retargeting to the current target keeps the running transition.
    pub fn retarget(&mut self, to: f32, motion: Motion, now: Instant) {
        if to == self.to {
            return;
        }
        let current = self.value(now);
        *self = match motion {
            Motion::Instant => Self::settled(to, now),
            Motion::Snap { duration_ms } => Self {
                from: current,
                to,
                started: now,
                duration: Duration::from_millis(duration_ms),
                eased: false,
            },
            Motion::Eased { duration_ms } => Self {
                from: current,
                to,
                started: now,
                duration: Duration::from_millis(duration_ms),
                eased: true,
            },
        };
    }
}

#[derive(Debug, Clone)]
struct AvatarTween {
    icon: Item,
    x: Tween,
    y: Tween,
    width: f32,
    height: f32,
}

/// What is currently on screen
#[derive(Debug, Default)]
pub struct DisplayState {
    generation: u32,
    slots: Vec<Tween>,
    gaps: Vec<Tween>,
    avatar: Option<AvatarTween>,
}

impl DisplayState {
    /// Move every displayed value toward `view`
    ///
    /// A new generation means the order was just committed: the committed
    /// row already matches where the eased frame ended, so it snaps.
    pub fn sync(&mut self, view: &DockView, now: Instant) {
        let reset = view.generation != self.generation
            || view.slots.len() != self.slots.len()
            || view.gaps.len() != self.gaps.len();

        if reset {
            self.generation = view.generation;
            self.slots = view
                .slots
                .iter()
                .map(|s| Tween::settled(s.width, now))
                .collect();
            self.gaps = view
                .gaps
                .iter()
                .map(|g| Tween::settled(g.width, now))
                .collect();
        } else {
            for (tween, slot) in self.slots.iter_mut().zip(&view.slots) {
                tween.retarget(slot.width, view.motion.slots, now);
            }
            for (tween, gap) in self.gaps.iter_mut().zip(&view.gaps) {
                tween.retarget(gap.width, view.motion.gaps, now);
            }
        }

        self.avatar = match (&view.avatar, self.avatar.take()) {
            (None, _) => None,
            (Some(target), Some(mut current)) if current.icon == target.icon => {
                let motion = view.motion.avatar.unwrap_or(Motion::Instant);
                current.x.retarget(target.rect.x, motion, now);
                current.y.retarget(target.rect.y, motion, now);
                current.width = target.rect.width;
                current.height = target.rect.height;
                Some(current)
            }
            (Some(target), _) => Some(AvatarTween {
                icon: target.icon.clone(),
                x: Tween::settled(target.rect.x, now),
                y: Tween::settled(target.rect.y, now),
                width: target.rect.width,
                height: target.rect.height,
            }),
        };
    }

    pub fn slot_widths(&self, now: Instant) -> Vec<f32> {
        self.slots.iter().map(|t| t.value(now)).collect()
    }

    pub fn gap_widths(&self, now: Instant) -> Vec<f32> {
        self.gaps.iter().map(|t| t.value(now)).collect()
    }

    pub fn avatar(&self, now: Instant) -> Option<(Rect, &Item)> {
        self.avatar.as_ref().map(|a| {
            (
                Rect::new(a.x.value(now), a.y.value(now), a.width, a.height),
                &a.icon,
            )
        })
    }

    /// True while any value is still moving
    pub fn is_animating(&self, now: Instant) -> bool {
        let avatar = self
            .avatar
            .iter()
            .flat_map(|a| [&a.x, &a.y]);
        !self
            .slots
            .iter()
            .chain(&self.gaps)
            .chain(avatar)
            .all(|t| t.is_done(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn test_instant_motion_jumps() {
        let now = Instant::now();
        let mut tween = Tween::settled(0.0, now);
        tween.retarget(10.0, Motion::Instant, now);
        assert_eq!(tween.value(now), 10.0);
        assert!(tween.is_done(now));
    }

    #[test]
    fn test_eased_motion_reaches_target() {
        let now = Instant::now();
        let mut tween = Tween::settled(0.0, now);
        tween.retarget(100.0, Motion::Eased { duration_ms: 250 }, now);

        let mid = tween.value(now + Duration::from_millis(125));
        assert!(mid > 50.0 && mid < 100.0);
        assert_eq!(tween.value(now + Duration::from_millis(250)), 100.0);
        assert_eq!(tween.target(), 100.0);
    }

    #[test]
    fn test_snap_is_linear() {
        let now = Instant::now();
        let mut tween = Tween::settled(0.0, now);
        tween.retarget(16.0, Motion::Snap { duration_ms: 16 }, now);
        let mid = tween.value(now + Duration::from_millis(8));
        assert!((mid - 8.0).abs() < 0.5);
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let now = Instant::now();
        let mut tween = Tween::settled(0.0, now);
        tween.retarget(100.0, Motion::Snap { duration_ms: 100 }, now);

        let later = now + Duration::from_millis(50);
        tween.retarget(0.0, Motion::Snap { duration_ms: 100 }, later);
        assert!((tween.value(later) - 50.0).abs() < 0.5);
    }
}
