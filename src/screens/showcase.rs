// src/screens/showcase.rs  —  Review carousel at the end of the wizard
use super::{Key, Outcome};
use crate::carousel::{gallery, Carousel};
use crate::form::FormStore;
use crate::nav::Action;

pub struct ShowcaseScreen {
    carousel: Carousel,
}

impl ShowcaseScreen {
    pub fn new(form: &FormStore, placeholder: &str) -> Self {
        Self { carousel: Carousel::new(gallery(form, placeholder)) }
    }

    pub fn carousel(&self) -> &Carousel { &self.carousel }

    pub fn handle_key(&mut self, key: Key) -> Outcome {
        match key {
            Key::Left  => { self.carousel.prev(); Outcome::Handled }
            Key::Right => { self.carousel.next(); Outcome::Handled }
            Key::Char('p') | Key::Char('P') => Outcome::Navigate(Action::Previous),
            Key::Char('f') | Key::Char('F') | Key::Enter => Outcome::Navigate(Action::Finish),
            _ => Outcome::Ignored,
        }
    }
}
