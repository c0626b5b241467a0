use anyhow::{anyhow, Result};
use log::info;

/// The circular list of shirts to choose from. Only names are kept here; whoever
/// renders the shirts keeps the images in the same order.
pub struct Wardrobe {
    names: Vec<String>,
    current: usize,
}

impl Wardrobe {
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            return Err(anyhow!("a wardrobe needs at least one shirt"));
        }
        Ok(Wardrobe { names, current: 0 })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_name(&self) -> &str {
        &self.names[self.current]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Index of the shirt shown in the "previous" preview
    pub fn previous_index(&self) -> usize {
        if self.current == 0 {
            self.names.len() - 1
        } else {
            self.current - 1
        }
    }

    /// Index of the shirt shown in the "next" preview
    pub fn next_index(&self) -> usize {
        (self.current + 1) % self.names.len()
    }

    pub fn select_next(&mut self) -> usize {
        self.current = self.next_index();
        info!("Next shirt: #{} \"{}\"", self.current, self.current_name());
        self.current
    }

    pub fn select_previous(&mut self) -> usize {
        self.current = self.previous_index();
        info!("Previous shirt: #{} \"{}\"", self.current, self.current_name());
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wardrobe(count: usize) -> Wardrobe {
        Wardrobe::new((0..count).map(|i| format!("shirt{}", i)).collect()).unwrap()
    }

    #[test]
    fn test_empty_wardrobe_is_an_error() {
        assert!(Wardrobe::new(Vec::new()).is_err());
    }

    #[test]
    fn test_next_wraps_around() {
        let mut w = wardrobe(3);
        assert_eq!(w.current_index(), 0);
        assert_eq!(w.select_next(), 1);
        assert_eq!(w.select_next(), 2);
        assert_eq!(w.select_next(), 0);
        assert_eq!(w.current_name(), "shirt0");
    }

    #[test]
    fn test_previous_wraps_around() {
        let mut w = wardrobe(3);
        assert_eq!(w.select_previous(), 2);
        assert_eq!(w.select_previous(), 1);
        assert_eq!(w.select_previous(), 0);
        assert_eq!(w.select_previous(), 2);
    }

    #[test]
    fn test_next_then_previous_is_identity() {
        let mut w = wardrobe(5);
        for start in 0..5 {
            while w.current_index() != start {
                w.select_next();
            }
            w.select_next();
            w.select_previous();
            assert_eq!(w.current_index(), start);
        }
    }

    #[test]
    fn test_previews_follow_selection() {
        let mut w = wardrobe(4);
        assert_eq!((w.previous_index(), w.next_index()), (3, 1));
        w.select_previous();
        assert_eq!((w.previous_index(), w.next_index()), (2, 0));
    }

    #[test]
    fn test_single_shirt_always_selected() {
        let mut w = wardrobe(1);
        assert_eq!(w.select_next(), 0);
        assert_eq!(w.select_previous(), 0);
        assert_eq!((w.previous_index(), w.next_index()), (0, 0));
    }
}
