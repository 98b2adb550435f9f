use std::time::Duration;

pub const ROLES: &[&str] = &["Product Manager", "Quality Engineer", "Problem Solver"];

pub const TYPE_DELAY: Duration = Duration::from_millis(80);
pub const ERASE_DELAY: Duration = Duration::from_millis(50);
pub const PAUSE_DELAY: Duration = Duration::from_millis(1200);
pub const NEXT_ROLE_DELAY: Duration = Duration::from_millis(200);

/// Number of characters of the current role that are visible
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing(usize),
    Pausing,
    Erasing(usize),
}

/// Typewriter effect cycling through a list of roles
///
/// Driven from the outside: show [`TypingTitle::text`], wait [`TypingTitle::delay`], call
/// [`TypingTitle::tick`], repeat.
#[derive(Clone, Debug)]
pub struct TypingTitle<'a> {
    roles: &'a [&'a str],
    role: usize,
    phase: Phase,
}

impl<'a> TypingTitle<'a> {
    /// Returns `None` if there are no roles to cycle through
    #[must_use]
    pub fn new(roles: &'a [&'a str]) -> Option<Self> {
        if roles.is_empty() {
            return None;
        }

        Some(Self {
            roles,
            role: 0,
            phase: Phase::Typing(0),
        })
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn role(&self) -> &'a str {
        self.roles[self.role]
    }

    fn role_len(&self) -> usize {
        self.role().chars().count()
    }

    /// Currently visible prefix of the role
    #[must_use]
    pub fn text(&self) -> &'a str {
        let role = self.role();
        let visible = match self.phase {
            Phase::Typing(count) | Phase::Erasing(count) => count,
            Phase::Pausing => return role,
        };

        role.char_indices()
            .nth(visible)
            .map_or(role, |(idx, _)| &role[..idx])
    }

    /// How long the current state stays on screen
    #[must_use]
    pub fn delay(&self) -> Duration {
        match self.phase {
            Phase::Typing(..) => TYPE_DELAY,
            Phase::Pausing => PAUSE_DELAY,
            Phase::Erasing(0) => NEXT_ROLE_DELAY,
            Phase::Erasing(..) => ERASE_DELAY,
        }
    }

    /// Advance by one step
    pub fn tick(&mut self) {
        let len = self.role_len();

        self.phase = match self.phase {
            Phase::Typing(count) if count + 1 >= len => Phase::Pausing,
            Phase::Typing(count) => Phase::Typing(count + 1),
            Phase::Pausing => Phase::Erasing(len.saturating_sub(1)),
            Phase::Erasing(0) => {
                self.role = (self.role + 1) % self.roles.len();
                Phase::Typing(0)
            }
            Phase::Erasing(count) => Phase::Erasing(count - 1),
        };
    }
}

impl Default for TypingTitle<'static> {
    fn default() -> Self {
        Self {
            roles: ROLES,
            role: 0,
            phase: Phase::Typing(0),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{
        Phase, TypingTitle, ERASE_DELAY, NEXT_ROLE_DELAY, PAUSE_DELAY, ROLES, TYPE_DELAY,
    };
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn types_pauses_and_erases() {
        let mut title = TypingTitle::new(&["Dev"]).unwrap();
        let mut frames = Vec::new();

        for _ in 0..8 {
            frames.push((title.text(), title.delay()));
            title.tick();
        }

        assert_eq!(
            frames,
            [
                ("", TYPE_DELAY),
                ("D", TYPE_DELAY),
                ("De", TYPE_DELAY),
                ("Dev", PAUSE_DELAY),
                ("De", ERASE_DELAY),
                ("D", ERASE_DELAY),
                ("", NEXT_ROLE_DELAY),
                ("", TYPE_DELAY),
            ]
        );
    }

    #[test]
    fn cycles_through_roles() {
        let mut title = TypingTitle::default();
        let mut seen = Vec::new();

        for _ in 0..500 {
            if title.phase() == Phase::Pausing {
                seen.push(title.text());
            }
            title.tick();
        }

        assert_eq!(&seen[..4], &[ROLES[0], ROLES[1], ROLES[2], ROLES[0]]);
    }

    #[test]
    fn one_cycle_duration() {
        let mut title = TypingTitle::new(&["PM"]).unwrap();
        let mut total = Duration::ZERO;

        loop {
            total += title.delay();
            title.tick();
            if title.phase() == Phase::Typing(0) {
                break;
            }
        }

        // two reveals, the pause, one erase, the gap before the next role
        assert_eq!(total, TYPE_DELAY * 2 + PAUSE_DELAY + ERASE_DELAY + NEXT_ROLE_DELAY);
    }

    #[test]
    fn multibyte_roles() {
        let mut title = TypingTitle::new(&["Ünï"]).unwrap();
        title.tick();
        assert_eq!(title.text(), "Ü");
        title.tick();
        assert_eq!(title.text(), "Ün");
    }

    #[test]
    fn empty_role_list() {
        assert!(TypingTitle::new(&[]).is_none());
    }
}
