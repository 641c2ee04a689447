//! Screen navigation state machine: current/previous screen plus the
//! derived slide direction the views use as a transition hint.

/// The six screens, in their fixed forward order. The ordinal position
/// (derivable from the discriminant) is what slide direction is computed
/// from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Screen {
    Welcome,
    Language,
    Dashboard,
    AddOrder,
    OrderDetail,
    SendReminder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Forward,
    Backward,
}

/// Owns the current and previous screen. Legality of transitions is not
/// enforced here; the app context decides which calls are allowed.
#[derive(Debug)]
pub struct Navigator {
    current: Screen,
    previous: Option<Screen>,
}

impl Navigator {
    pub fn new(initial: Screen) -> Self {
        Self {
            current: initial,
            previous: None,
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn previous(&self) -> Option<Screen> {
        self.previous
    }

    /// Record the current screen as previous and move to `target`.
    /// Every screen stays revisitable; there is no terminal state.
    pub fn navigate(&mut self, target: Screen) {
        self.previous = Some(self.current);
        self.current = target;
    }

    /// Presentation hint only: forward when the current screen sits later
    /// in the fixed order than the previous one, backward otherwise.
    /// `None` until the first transition has happened.
    pub fn direction(&self) -> Option<SlideDirection> {
        let previous = self.previous?;
        if self.current > previous {
            Some(SlideDirection::Forward)
        } else {
            Some(SlideDirection::Backward)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_direction_before_first_transition() {
        let nav = Navigator::new(Screen::Welcome);
        assert_eq!(nav.current(), Screen::Welcome);
        assert_eq!(nav.previous(), None);
        assert_eq!(nav.direction(), None);
    }

    #[test]
    fn forward_then_backward() {
        let mut nav = Navigator::new(Screen::Dashboard);

        nav.navigate(Screen::AddOrder);
        assert_eq!(nav.current(), Screen::AddOrder);
        assert_eq!(nav.previous(), Some(Screen::Dashboard));
        assert_eq!(nav.direction(), Some(SlideDirection::Forward));

        nav.navigate(Screen::Dashboard);
        assert_eq!(nav.direction(), Some(SlideDirection::Backward));
    }

    #[test]
    fn every_screen_is_revisitable() {
        let mut nav = Navigator::new(Screen::Welcome);
        nav.navigate(Screen::Language);
        nav.navigate(Screen::Dashboard);
        nav.navigate(Screen::Language);
        nav.navigate(Screen::Welcome);
        assert_eq!(nav.current(), Screen::Welcome);
        assert_eq!(nav.direction(), Some(SlideDirection::Backward));
    }
}
