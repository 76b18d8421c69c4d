// src/screens/home.rs  —  Landing screen after "finish"; re-enters the wizard
use super::{Key, Outcome};
use crate::carousel::{gallery, Carousel};
use crate::form::FormStore;
use crate::nav::Action;

pub struct HomeScreen {
    carousel: Carousel,
}

impl HomeScreen {
    pub fn new(form: &FormStore, placeholder: &str) -> Self {
        Self { carousel: Carousel::new(gallery(form, placeholder)) }
    }

    pub fn carousel(&self) -> &Carousel { &self.carousel }

    pub fn handle_key(&mut self, key: Key) -> Outcome {
        match key {
            Key::Left  => { self.carousel.prev(); Outcome::Handled }
            Key::Right => { self.carousel.next(); Outcome::Handled }
            Key::Char('e') | Key::Char('E') | Key::Enter => Outcome::Navigate(Action::Edit),
            _ => Outcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_when_nothing_selected() {
        let form = FormStore::new();
        let mut h = HomeScreen::new(&form, "ph");
        assert_eq!(h.carousel().items(), &["ph".to_string()]);
        h.handle_key(Key::Right);
        assert_eq!(h.carousel().index(), 0);
        assert_eq!(h.handle_key(Key::Char('e')), Outcome::Navigate(Action::Edit));
    }
}
