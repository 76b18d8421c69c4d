// src/carousel.rs  —  Showcase image sequence + non-looping pager
use crate::form::FormStore;

/// Tag keys shown under every carousel
pub const TAG_KEYS: [&str; 5] = ["tag.1", "tag.2", "tag.3", "tag.4", "tag.5"];

/// Filled slots in order 1, 2, 3; exactly one placeholder when none is filled
pub fn gallery(form: &FormStore, placeholder: &str) -> Vec<String> {
    let images: Vec<String> = form.images().into_iter().map(str::to_owned).collect();
    if images.is_empty() { vec![placeholder.to_owned()] } else { images }
}

/// Swipeable pages; stops at both ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    items: Vec<String>,
    index: usize,
}

impl Carousel {
    pub fn new(items: Vec<String>) -> Self { Self { items, index: 0 } }

    pub fn items(&self) -> &[String] { &self.items }
    pub fn index(&self) -> usize { self.index }
    pub fn len(&self) -> usize { self.items.len() }

    pub fn current(&self) -> Option<&str> { self.items.get(self.index).map(String::as_str) }

    pub fn next(&mut self) {
        if self.index + 1 < self.items.len() { self.index += 1; }
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ImageSlot;

    const PH: &str = "placeholder://no-image";

    #[test]
    fn empty_form_shows_single_placeholder() {
        let form = FormStore::new();
        assert_eq!(gallery(&form, PH), vec![PH.to_string()]);
    }

    #[test]
    fn filled_slots_in_order_without_placeholder() {
        let mut form = FormStore::new();
        form.set_image(ImageSlot::new(2).unwrap(), "b");
        form.set_image(ImageSlot::new(1).unwrap(), "a");
        assert_eq!(gallery(&form, PH), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn pager_does_not_loop() {
        let mut c = Carousel::new(vec!["a".into(), "b".into()]);
        c.prev();
        assert_eq!(c.current(), Some("a"));
        c.next();
        c.next();
        assert_eq!(c.current(), Some("b"));
        assert_eq!(c.index(), 1);
    }
}
