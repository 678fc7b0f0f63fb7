use std::fmt;

use log::{debug, warn};

use super::ControllerError;

/// Tracks which single panel of a fixed set is expanded.
///
/// Identifiers outside the set passed at construction are rejected and leave
/// the state untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Disclosure<K> {
    items: Vec<K>,
    expanded: Option<K>,
}

impl<K> Disclosure<K>
where
    K: Clone + PartialEq + fmt::Debug,
{
    pub fn new(items: impl IntoIterator<Item = K>) -> Self {
        Self {
            items: items.into_iter().collect(),
            expanded: None,
        }
    }

    pub fn with_expanded(
        items: impl IntoIterator<Item = K>,
        initial: K,
    ) -> Result<Self, ControllerError> {
        let mut disclosure = Self::new(items);
        disclosure.ensure_known(&initial)?;
        disclosure.expanded = Some(initial);
        Ok(disclosure)
    }

    pub fn toggle(&mut self, id: &K) -> Result<(), ControllerError> {
        if let Err(e) = self.ensure_known(id) {
            warn!("Ignoring toggle: {}", e);
            return Err(e);
        }

        if self.expanded.as_ref() == Some(id) {
            debug!("Collapsing {:?}", id);
            self.expanded = None;
        } else {
            debug!("Expanding {:?}", id);
            self.expanded = Some(id.clone());
        }
        Ok(())
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    pub fn is_expanded(&self, id: &K) -> bool {
        self.expanded.as_ref() == Some(id)
    }

    pub fn expanded(&self) -> Option<&K> {
        self.expanded.as_ref()
    }

    pub fn contains(&self, id: &K) -> bool {
        self.items.contains(id)
    }

    fn ensure_known(&self, id: &K) -> Result<(), ControllerError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(ControllerError::UnknownItem(format!("{:?}", id)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<&'static str> {
        vec!["a", "b", "c"]
    }

    #[test]
    fn starts_collapsed() {
        let d = Disclosure::new(abc());
        assert_eq!(d.expanded(), None);
        assert!(abc().iter().all(|id| !d.is_expanded(id)));
    }

    #[test]
    fn preselected_item_then_switch_then_close() {
        let mut d = Disclosure::with_expanded(abc(), "a").unwrap();
        assert!(d.is_expanded(&"a"));

        d.toggle(&"b").unwrap();
        assert!(d.is_expanded(&"b"));
        assert!(!d.is_expanded(&"a"));

        d.toggle(&"b").unwrap();
        assert_eq!(d.expanded(), None);
    }

    #[test]
    fn unknown_preselection_is_rejected() {
        let err = Disclosure::with_expanded(abc(), "z").unwrap_err();
        assert_eq!(err, ControllerError::UnknownItem("\"z\"".into()));
    }

    #[test]
    fn unknown_toggle_keeps_state() {
        let mut d = Disclosure::with_expanded(abc(), "c").unwrap();
        assert!(d.toggle(&"nope").is_err());
        assert!(d.is_expanded(&"c"));
    }

    #[test]
    fn collapse_closes_anything_open() {
        let mut d = Disclosure::new(vec![1u32, 2, 3]);
        d.toggle(&2).unwrap();
        d.collapse();
        assert_eq!(d.expanded(), None);
        d.collapse();
        assert_eq!(d.expanded(), None);
    }

    #[test]
    fn double_toggle_is_an_involution() {
        for start in [None, Some("a"), Some("b"), Some("c")] {
            for id in abc() {
                let mut d = match start {
                    Some(s) => Disclosure::with_expanded(abc(), s).unwrap(),
                    None => Disclosure::new(abc()),
                };
                let before = d.clone();
                d.toggle(&id).unwrap();
                d.toggle(&id).unwrap();
                if start == Some(id) || start.is_none() {
                    assert_eq!(d, before);
                } else {
                    // Toggling a second item replaces the first, so the round
                    // trip lands on "none expanded".
                    assert_eq!(d.expanded(), None);
                }
            }
        }
    }

    #[test]
    fn at_most_one_expanded_under_any_sequence() {
        let ids = ["a", "b", "c", "d"];
        let mut d = Disclosure::new(abc());
        let mut seed: u32 = 17;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let id = ids[(seed >> 16) as usize % ids.len()];
            let _ = d.toggle(&id);
            let open = abc().iter().filter(|k| d.is_expanded(k)).count();
            assert!(open <= 1);
        }
    }
}
