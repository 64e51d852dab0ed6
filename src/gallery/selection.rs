use std::time::{Duration, Instant};

use crate::content::ProjectId;

/// Where the detail view is in its open sequence.
///
/// A click moves `Idle` (or `Open`) to `Transitioning`, which carries the
/// deadline of the deferred swap. When the deadline passes the state becomes
/// `Open`. Any new request replaces the state wholesale, so a superseded
/// deadline can never fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenState {
    Idle,
    Transitioning {
        card: ProjectId,
        due: Instant,
        /// Project still on screen until the swap happens.
        showing: Option<ProjectId>,
    },
    Open {
        project: ProjectId,
    },
}

pub struct Selection {
    state: OpenState,
    open_delay: Duration,
}

impl Selection {
    pub fn new(open_delay: Duration) -> Self {
        Self {
            state: OpenState::Idle,
            open_delay,
        }
    }

    pub fn state(&self) -> OpenState {
        self.state
    }

    /// Marks `card` active right away; the project itself is selected once
    /// the open delay has elapsed. A zero delay selects immediately.
    pub fn open(&mut self, card: ProjectId, now: Instant) {
        if self.open_delay.is_zero() {
            self.state = OpenState::Open { project: card };
            return;
        }

        let showing = self.selected_project();
        self.state = OpenState::Transitioning {
            card,
            due: now + self.open_delay,
            showing,
        };
    }

    /// Completes a transition whose deadline has passed. Returns whether the
    /// state changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            OpenState::Transitioning { card, due, .. } if now >= due => {
                self.state = OpenState::Open { project: card };
                true
            }
            _ => false,
        }
    }

    /// Returns whether anything was open or pending.
    pub fn close(&mut self) -> bool {
        let was_idle = self.state == OpenState::Idle;
        self.state = OpenState::Idle;
        !was_idle
    }

    pub fn selected_project(&self) -> Option<ProjectId> {
        match self.state {
            OpenState::Idle => None,
            OpenState::Transitioning { showing, .. } => showing,
            OpenState::Open { project } => Some(project),
        }
    }

    pub fn active_card(&self) -> Option<ProjectId> {
        match self.state {
            OpenState::Idle => None,
            OpenState::Transitioning { card, .. } => Some(card),
            OpenState::Open { project } => Some(project),
        }
    }

    pub fn transitioning_card(&self) -> Option<ProjectId> {
        match self.state {
            OpenState::Transitioning { card, .. } => Some(card),
            _ => None,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match self.state {
            OpenState::Transitioning { due, .. } => Some(due),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(140);

    #[test]
    fn test_open_is_two_phase() {
        let mut selection = Selection::new(DELAY);
        let start = Instant::now();

        selection.open(ProjectId(301), start);
        assert_eq!(selection.active_card(), Some(ProjectId(301)));
        assert_eq!(selection.transitioning_card(), Some(ProjectId(301)));
        assert_eq!(selection.selected_project(), None);

        assert!(!selection.poll(start + Duration::from_millis(139)));
        assert_eq!(selection.selected_project(), None);

        assert!(selection.poll(start + DELAY));
        assert_eq!(selection.selected_project(), Some(ProjectId(301)));
        assert_eq!(selection.active_card(), Some(ProjectId(301)));
        assert_eq!(selection.transitioning_card(), None);
    }

    #[test]
    fn test_second_open_supersedes_pending_one() {
        let mut selection = Selection::new(DELAY);
        let start = Instant::now();

        selection.open(ProjectId(101), start);
        selection.open(ProjectId(201), start + Duration::from_millis(50));

        // A's deadline passes; it must not select A.
        assert!(!selection.poll(start + DELAY));
        assert_eq!(selection.selected_project(), None);
        assert_eq!(selection.active_card(), Some(ProjectId(201)));

        assert!(selection.poll(start + Duration::from_millis(190)));
        assert_eq!(selection.selected_project(), Some(ProjectId(201)));
    }

    #[test]
    fn test_close_discards_pending_open() {
        let mut selection = Selection::new(DELAY);
        let start = Instant::now();

        selection.open(ProjectId(101), start);
        assert!(selection.close());
        assert!(!selection.poll(start + DELAY * 2));
        assert_eq!(selection.state(), OpenState::Idle);
        assert_eq!(selection.next_deadline(), None);
    }

    #[test]
    fn test_close_when_idle_is_noop() {
        let mut selection = Selection::new(DELAY);
        assert!(!selection.close());
        assert_eq!(selection.state(), OpenState::Idle);
    }

    #[test]
    fn test_zero_delay_opens_synchronously() {
        let mut selection = Selection::new(Duration::ZERO);
        selection.open(ProjectId(404), Instant::now());
        assert_eq!(selection.selected_project(), Some(ProjectId(404)));
        assert_eq!(selection.transitioning_card(), None);
    }

    #[test]
    fn test_switching_keeps_current_project_until_swap() {
        let mut selection = Selection::new(DELAY);
        let start = Instant::now();

        selection.open(ProjectId(101), start);
        selection.poll(start + DELAY);

        let switch_at = start + Duration::from_secs(1);
        selection.open(ProjectId(103), switch_at);
        assert_eq!(selection.selected_project(), Some(ProjectId(101)));
        assert_eq!(selection.active_card(), Some(ProjectId(103)));

        selection.poll(switch_at + DELAY);
        assert_eq!(selection.selected_project(), Some(ProjectId(103)));
    }
}
