//! Press ripple tokens
//!
//! Each button surface keeps a list of live ripples. A token is created at
//! the press position and removed by its own expiry task, so overlapping
//! presses animate and die independently.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use iced::Point;

pub type RippleId = u64;

/// One expanding ripple circle
#[derive(Debug, Clone)]
pub struct RippleToken {
    pub id: RippleId,
    /// Press position, local to the button
    pub at: Point,
    pub spawned: Instant,
}

/// Live ripples keyed by button surface
#[derive(Debug, Default)]
pub struct RippleField<K: Eq + Hash + Copy> {
    tokens: HashMap<K, Vec<RippleToken>>,
    last_id: RippleId,
}

impl<K: Eq + Hash + Copy> RippleField<K> {
    pub fn new() -> Self {
        Self {
            tokens: HashMap::new(),
            last_id: 0,
        }
    }

    /// Record a press and return the id of the new token.
    ///
    /// Ids derive from wall-clock millis; two presses in the same
    /// millisecond tie-break by incrementing past the last issued id.
    pub fn press(&mut self, surface: K, at: Point) -> RippleId {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let id = if millis > self.last_id {
            millis
        } else {
            self.last_id + 1
        };
        self.last_id = id;

        self.tokens.entry(surface).or_default().push(RippleToken {
            id,
            at,
            spawned: Instant::now(),
        });
        id
    }

    /// Remove one token; other tokens on the same surface are untouched
    pub fn expire(&mut self, surface: K, id: RippleId) {
        if let Some(list) = self.tokens.get_mut(&surface) {
            list.retain(|token| token.id != id);
            if list.is_empty() {
                self.tokens.remove(&surface);
            }
        }
    }

    /// Live tokens on a surface
    pub fn tokens(&self, surface: K) -> &[RippleToken] {
        self.tokens
            .get(&surface)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True while any token is alive anywhere
    pub fn any_active(&self) -> bool {
        self.tokens.values().any(|list| !list.is_empty())
    }

    /// Drop all tokens, used when the page they belong to goes away
    pub fn clear(&mut self) {
        self.tokens.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Surface {
        Submit,
        Hero,
    }

    #[test]
    fn test_rapid_presses_get_distinct_ids() {
        let mut field = RippleField::new();
        let a = field.press(Surface::Submit, Point::new(1.0, 1.0));
        let b = field.press(Surface::Submit, Point::new(2.0, 2.0));
        assert_ne!(a, b);
        assert!(b > a);
        assert_eq!(field.tokens(Surface::Submit).len(), 2);
    }

    #[test]
    fn test_expiry_removes_only_one_token() {
        let mut field = RippleField::new();
        let a = field.press(Surface::Submit, Point::ORIGIN);
        let b = field.press(Surface::Submit, Point::ORIGIN);

        field.expire(Surface::Submit, a);
        let remaining = field.tokens(Surface::Submit);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, b);
    }

    #[test]
    fn test_surfaces_are_independent() {
        let mut field = RippleField::new();
        let a = field.press(Surface::Submit, Point::ORIGIN);
        field.press(Surface::Hero, Point::ORIGIN);

        field.expire(Surface::Submit, a);
        assert!(field.tokens(Surface::Submit).is_empty());
        assert_eq!(field.tokens(Surface::Hero).len(), 1);
    }

    #[test]
    fn test_any_active() {
        let mut field = RippleField::new();
        assert!(!field.any_active());
        let a = field.press(Surface::Hero, Point::ORIGIN);
        assert!(field.any_active());
        field.expire(Surface::Hero, a);
        assert!(!field.any_active());
    }

    #[test]
    fn test_clear() {
        let mut field = RippleField::new();
        field.press(Surface::Hero, Point::ORIGIN);
        field.press(Surface::Submit, Point::ORIGIN);
        field.clear();
        assert!(!field.any_active());
    }
}
