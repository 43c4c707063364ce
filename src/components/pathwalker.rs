//! Path-following component.
//!
//! A [`PathWalker`] moves a cursor along a shared [`Path`] and reports, once
//! per tick, how far its owner should move. It returns *deltas*, not
//! positions: the owner adds them to its own transform, which lets the same
//! walker drive a plain [`MapPosition`](super::mapposition::MapPosition) or
//! the bounding box of a badguy.
//!
//! # Stepping
//!
//! [`PathWalker::advance`] consumes the elapsed time segment by segment. A
//! long tick may cross several short segments in one call; whatever time is
//! left over after reaching a node is spent on the next segment, so nothing
//! is lost or overshot between calls. At the last node the path's
//! [`PathMode`] decides whether to turn back, wrap to node 0 or stop.

use std::sync::Arc;

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::resources::path::{Path, PathMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    Forward,
    Backward,
    Stopped,
}

/// Cursor walking a [`Path`].
///
/// The path is shared read-only; any number of walkers may point at it.
#[derive(Component, Debug, Clone)]
pub struct PathWalker {
    path: Arc<Path>,
    current_node_nr: usize,
    next_node_nr: usize,
    /// Seconds already spent on the current segment.
    node_time: f32,
    /// Speed of the current segment.
    walking_speed: f32,
    segment_duration: f32,
    heading: Heading,
    last_pos: Vec2,
}

impl PathWalker {
    pub fn new(path: Arc<Path>) -> Self {
        let last_pos = path.first().position;
        let mut walker = Self {
            path,
            current_node_nr: 0,
            next_node_nr: 1,
            node_time: 0.0,
            walking_speed: 0.0,
            segment_duration: 0.0,
            heading: Heading::Forward,
            last_pos,
        };
        walker.refresh_segment();
        walker
    }

    pub fn path(&self) -> &Arc<Path> {
        &self.path
    }

    pub fn current_node_nr(&self) -> usize {
        self.current_node_nr
    }

    pub fn next_node_nr(&self) -> usize {
        self.next_node_nr
    }

    pub fn node_time(&self) -> f32 {
        self.node_time
    }

    pub fn walking_speed(&self) -> f32 {
        self.walking_speed
    }

    /// Absolute position reached by the last `advance`.
    pub fn last_pos(&self) -> Vec2 {
        self.last_pos
    }

    /// True once a one-shot path has been walked to its end.
    pub fn is_finished(&self) -> bool {
        self.heading == Heading::Stopped
    }

    /// Walk `elapsed_time` seconds further and return the displacement since
    /// the previous call.
    pub fn advance(&mut self, elapsed_time: f32) -> Vec2 {
        let mut remaining = elapsed_time.max(0.0);

        // A whole cycle leaves the cursor where it started.
        if let Some(cycle) = self.path.cycle_duration() {
            if cycle > 0.0 && remaining > cycle {
                remaining %= cycle;
            }
        }

        while self.heading != Heading::Stopped
            && self.node_time + remaining >= self.segment_duration
        {
            remaining = (remaining - (self.segment_duration - self.node_time)).max(0.0);
            self.node_time = 0.0;
            match self.heading {
                Heading::Forward => self.advance_node(),
                Heading::Backward => self.goback_node(),
                Heading::Stopped => {}
            }
            self.refresh_segment();
        }
        if self.heading != Heading::Stopped {
            self.node_time += remaining;
        }

        let new_pos = self.position();
        let delta = new_pos - self.last_pos;
        self.last_pos = new_pos;
        delta
    }

    fn position(&self) -> Vec2 {
        let nodes = self.path.nodes();
        let from = nodes[self.current_node_nr].position;
        if self.heading == Heading::Stopped || self.segment_duration <= 0.0 {
            return from;
        }
        let to = nodes[self.next_node_nr].position;
        let t = (self.node_time / self.segment_duration).clamp(0.0, 1.0);
        from.lerp(to, t)
    }

    fn advance_node(&mut self) {
        let last = self.path.len() - 1;
        self.current_node_nr = self.next_node_nr;
        if self.next_node_nr < last {
            self.next_node_nr += 1;
            return;
        }
        match self.path.mode() {
            PathMode::OneShot => {
                self.next_node_nr = last;
                self.heading = Heading::Stopped;
            }
            PathMode::PingPong => {
                self.next_node_nr = last - 1;
                self.heading = Heading::Backward;
            }
            PathMode::Circular => {
                self.next_node_nr = 0;
            }
        }
    }

    fn goback_node(&mut self) {
        self.current_node_nr = self.next_node_nr;
        if self.next_node_nr > 0 {
            self.next_node_nr -= 1;
            return;
        }
        // Only ping-pong paths walk backwards; at node 0 they turn around.
        self.next_node_nr = 1;
        self.heading = Heading::Forward;
    }

    fn refresh_segment(&mut self) {
        if self.heading == Heading::Stopped {
            self.walking_speed = 0.0;
            self.segment_duration = 0.0;
            return;
        }
        let owner = match self.heading {
            Heading::Backward => self.next_node_nr,
            _ => self.current_node_nr,
        };
        self.walking_speed = self.path.nodes()[owner].speed;
        self.segment_duration =
            self.path.segment_length(self.current_node_nr, self.next_node_nr) / self.walking_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::path::PathNode;

    const EPSILON: f32 = 1e-3;

    fn vec_approx_eq(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < EPSILON
    }

    fn line(mode: PathMode) -> Arc<Path> {
        Arc::new(
            Path::new(
                vec![PathNode::new(0.0, 0.0, 50.0), PathNode::new(100.0, 0.0, 50.0)],
                mode,
            )
            .unwrap(),
        )
    }

    fn walk(walker: &mut PathWalker, steps: usize, dt: f32) -> Vec2 {
        let mut pos = walker.last_pos();
        for _ in 0..steps {
            pos += walker.advance(dt);
        }
        pos
    }

    #[test]
    fn starts_at_first_node() {
        let walker = PathWalker::new(line(PathMode::PingPong));
        assert_eq!(walker.current_node_nr(), 0);
        assert_eq!(walker.next_node_nr(), 1);
        assert_eq!(walker.last_pos(), Vec2::ZERO);
        assert!((walker.walking_speed() - 50.0).abs() < EPSILON);
    }

    #[test]
    fn zero_elapsed_gives_zero_delta() {
        let mut walker = PathWalker::new(line(PathMode::PingPong));
        assert_eq!(walker.advance(0.0), Vec2::ZERO);
    }

    #[test]
    fn moves_at_segment_speed() {
        let mut walker = PathWalker::new(line(PathMode::PingPong));
        let delta = walker.advance(0.5);
        assert!(vec_approx_eq(delta, Vec2::new(25.0, 0.0)));
    }

    #[test]
    fn ping_pong_reverses_at_end() {
        let mut walker = PathWalker::new(line(PathMode::PingPong));
        let pos = walk(&mut walker, 1, 2.0);
        assert!(vec_approx_eq(pos, Vec2::new(100.0, 0.0)));
        assert_eq!(walker.current_node_nr(), 1);
        assert_eq!(walker.next_node_nr(), 0);

        let delta = walker.advance(0.5);
        assert!(vec_approx_eq(delta, Vec2::new(-25.0, 0.0)));
    }

    #[test]
    fn circular_wraps_to_first_node() {
        let path = Arc::new(
            Path::new(
                vec![
                    PathNode::new(0.0, 0.0, 10.0),
                    PathNode::new(10.0, 0.0, 10.0),
                    PathNode::new(10.0, 10.0, 10.0),
                ],
                PathMode::Circular,
            )
            .unwrap(),
        );
        let mut walker = PathWalker::new(path);
        walk(&mut walker, 2, 1.0);
        assert_eq!(walker.current_node_nr(), 2);
        assert_eq!(walker.next_node_nr(), 0);
    }

    #[test]
    fn one_shot_stops_at_last_node() {
        let mut walker = PathWalker::new(line(PathMode::OneShot));
        let pos = walk(&mut walker, 3, 1.5);
        assert!(walker.is_finished());
        assert!(vec_approx_eq(pos, Vec2::new(100.0, 0.0)));
        assert_eq!(walker.advance(1.0), Vec2::ZERO);
    }

    #[test]
    fn large_step_crosses_several_segments() {
        let path = Arc::new(
            Path::new(
                vec![
                    PathNode::new(0.0, 0.0, 10.0),
                    PathNode::new(10.0, 0.0, 10.0),
                    PathNode::new(20.0, 0.0, 10.0),
                    PathNode::new(30.0, 0.0, 10.0),
                ],
                PathMode::OneShot,
            )
            .unwrap(),
        );
        let mut walker = PathWalker::new(path);
        let delta = walker.advance(2.5);
        assert!(vec_approx_eq(delta, Vec2::new(25.0, 0.0)));
        assert_eq!(walker.current_node_nr(), 2);
        assert!((walker.node_time() - 0.5).abs() < EPSILON);
    }

    #[test]
    fn backward_segment_uses_lower_node_speed() {
        let path = Arc::new(
            Path::new(
                vec![PathNode::new(0.0, 0.0, 10.0), PathNode::new(100.0, 0.0, 100.0)],
                PathMode::PingPong,
            )
            .unwrap(),
        );
        let mut walker = PathWalker::new(path);
        walker.advance(10.0);
        assert!((walker.walking_speed() - 10.0).abs() < EPSILON);
        let delta = walker.advance(1.0);
        assert!(vec_approx_eq(delta, Vec2::new(-10.0, 0.0)));
    }

    #[test]
    fn walkers_share_one_path() {
        let path = line(PathMode::PingPong);
        let mut a = PathWalker::new(Arc::clone(&path));
        let mut b = PathWalker::new(Arc::clone(&path));
        a.advance(1.0);
        assert_eq!(b.advance(0.0), Vec2::ZERO);
        assert_eq!(Arc::strong_count(&path), 3);
    }
}
