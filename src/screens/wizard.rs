// src/screens/wizard.rs  —  Image step 1..3 with language menu and gallery sheet
use super::{Key, Outcome};
use crate::form::FormStore;
use crate::i18n::{LanguageCode, Localization};
use crate::media::{ImageLibrary, Permission, PickOutcome};
use crate::nav::{Action, WizardStep};

/// Gallery candidates plus the highlighted row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySheet {
    pub items:  Vec<String>,
    pub cursor: usize,
}

impl GallerySheet {
    fn handle_key(&mut self, key: Key) -> Option<PickOutcome> {
        match key {
            Key::Up   => { self.cursor = self.cursor.saturating_sub(1); None }
            Key::Down => {
                if self.cursor + 1 < self.items.len() { self.cursor += 1; }
                None
            }
            Key::Enter => Some(match self.items.get(self.cursor) {
                Some(uri) => PickOutcome::Selected(uri.clone()),
                None      => PickOutcome::Cancelled,
            }),
            Key::Esc => Some(PickOutcome::Cancelled),
            _ => None,
        }
    }
}

/// Modal layers; at most one is visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    LanguageMenu { cursor: usize },
    Gallery(GallerySheet),
    /// Blocking permission notice
    PermissionDenied,
}

pub struct WizardScreen {
    step:    WizardStep,
    overlay: Overlay,
}

impl WizardScreen {
    pub fn new(step: WizardStep) -> Self { Self { step, overlay: Overlay::None } }

    pub fn step(&self) -> WizardStep { self.step }
    pub fn overlay(&self) -> &Overlay { &self.overlay }

    pub fn language_menu_open(&self) -> bool {
        matches!(self.overlay, Overlay::LanguageMenu { .. })
    }

    pub fn title_key(&self) -> &'static str {
        match self.step.number() {
            1 => "wizard.image1",
            2 => "wizard.image2",
            _ => "wizard.image3",
        }
    }

    pub fn open_language_menu(&mut self, current: LanguageCode) {
        let cursor = LanguageCode::ALL.iter().position(|l| *l == current).unwrap_or(0);
        self.overlay = Overlay::LanguageMenu { cursor };
    }

    pub fn select_language(&mut self, code: LanguageCode, i18n: &mut Localization) {
        i18n.set_language(code);
        self.overlay = Overlay::None;
    }

    /// Close whatever is open without side effects
    pub fn dismiss_overlay(&mut self) { self.overlay = Overlay::None; }

    /// Start the gallery round trip: permission first, then the sheet
    pub fn request_image(&mut self, library: &mut dyn ImageLibrary) {
        match library.request_permission() {
            Permission::Denied => {
                log::warn!("[wizard] step {}: image library permission denied", self.step.number());
                self.overlay = Overlay::PermissionDenied;
            }
            Permission::Granted => {
                let items = library.list_images().unwrap_or_else(|e| {
                    log::warn!("[wizard] gallery listing failed: {e:#}");
                    Vec::new()
                });
                self.overlay = Overlay::Gallery(GallerySheet { items, cursor: 0 });
            }
        }
    }

    /// Finish the round trip; only a selection writes this step's slot
    pub fn complete_pick(&mut self, outcome: PickOutcome, form: &mut FormStore) {
        self.overlay = Overlay::None;
        if let PickOutcome::Selected(uri) = outcome {
            log::info!("[wizard] image{} ← {}", self.step.number(), uri);
            form.set_image(self.step.slot, uri);
        }
    }

    pub fn handle_key(
        &mut self,
        key:     Key,
        i18n:    &mut Localization,
        form:    &mut FormStore,
        library: &mut dyn ImageLibrary,
    ) -> Outcome {
        match &mut self.overlay {
            Overlay::PermissionDenied => {
                if matches!(key, Key::Enter | Key::Esc) { self.dismiss_overlay(); }
                return Outcome::Handled;
            }
            Overlay::LanguageMenu { cursor } => {
                match key {
                    Key::Up   => *cursor = cursor.saturating_sub(1),
                    Key::Down => *cursor = (*cursor + 1).min(LanguageCode::ALL.len() - 1),
                    Key::Enter => {
                        let code = LanguageCode::ALL[*cursor];
                        self.select_language(code, i18n);
                    }
                    Key::Esc => self.dismiss_overlay(),
                    _ => {}
                }
                return Outcome::Handled;
            }
            Overlay::Gallery(sheet) => {
                if let Some(outcome) = sheet.handle_key(key) {
                    self.complete_pick(outcome, form);
                }
                return Outcome::Handled;
            }
            Overlay::None => {}
        }

        match key {
            Key::Char('l') | Key::Char('L') => {
                self.open_language_menu(i18n.current());
                Outcome::Handled
            }
            Key::Enter | Key::Char('i') | Key::Char('I') => {
                self.request_image(library);
                Outcome::Handled
            }
            Key::Right | Key::Char('n') | Key::Char('N') => Outcome::Navigate(Action::Next),
            Key::Left | Key::Char('p') | Key::Char('P') if self.step.number() > 1 => {
                Outcome::Navigate(Action::Previous)
            }
            _ => Outcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ImageSlot;
    use anyhow::Result;

    struct FakeLibrary {
        permission: Permission,
        images:     Vec<String>,
        asked:      usize,
    }

    impl FakeLibrary {
        fn new(permission: Permission) -> Self {
            Self { permission, images: vec!["file:///a.png".into(), "file:///b.png".into()], asked: 0 }
        }
    }

    impl ImageLibrary for FakeLibrary {
        fn request_permission(&mut self) -> Permission { self.asked += 1; self.permission }
        fn list_images(&mut self) -> Result<Vec<String>> { Ok(self.images.clone()) }
        fn name(&self) -> &str { "Fake" }
    }

    fn fixtures() -> (Localization, FormStore) {
        (Localization::new(LanguageCode::En), FormStore::new())
    }

    fn step(n: u8) -> WizardScreen { WizardScreen::new(WizardStep::new(n).unwrap()) }

    #[test]
    fn denied_permission_shows_notice_and_keeps_slot() {
        let (mut i18n, mut form) = fixtures();
        let mut lib = FakeLibrary::new(Permission::Denied);
        let mut w = step(2);
        assert_eq!(w.handle_key(Key::Char('i'), &mut i18n, &mut form, &mut lib), Outcome::Handled);
        assert_eq!(*w.overlay(), Overlay::PermissionDenied);
        assert_eq!(form.data().image(ImageSlot::new(2).unwrap()), None);

        // the notice swallows navigation until dismissed
        assert_eq!(w.handle_key(Key::Right, &mut i18n, &mut form, &mut lib), Outcome::Handled);
        w.handle_key(Key::Enter, &mut i18n, &mut form, &mut lib);
        assert_eq!(*w.overlay(), Overlay::None);

        // retry asks again
        w.handle_key(Key::Char('i'), &mut i18n, &mut form, &mut lib);
        assert_eq!(lib.asked, 2);
    }

    #[test]
    fn selection_writes_only_this_steps_slot() {
        let (mut i18n, mut form) = fixtures();
        let mut lib = FakeLibrary::new(Permission::Granted);
        let mut w = step(3);
        w.handle_key(Key::Enter, &mut i18n, &mut form, &mut lib);
        assert!(matches!(w.overlay(), Overlay::Gallery(_)));
        assert!(form.images().is_empty());

        w.handle_key(Key::Down, &mut i18n, &mut form, &mut lib);
        w.handle_key(Key::Enter, &mut i18n, &mut form, &mut lib);
        assert_eq!(*w.overlay(), Overlay::None);
        assert_eq!(form.data().images, [None, None, Some("file:///b.png".to_string())]);
    }

    #[test]
    fn cancelled_pick_is_a_no_op() {
        let (mut i18n, mut form) = fixtures();
        form.set_image(ImageSlot::new(1).unwrap(), "file:///old.png");
        let mut lib = FakeLibrary::new(Permission::Granted);
        let mut w = step(1);
        w.handle_key(Key::Enter, &mut i18n, &mut form, &mut lib);
        w.handle_key(Key::Esc, &mut i18n, &mut form, &mut lib);
        assert_eq!(form.data().image(ImageSlot::new(1).unwrap()), Some("file:///old.png"));
    }

    #[test]
    fn empty_gallery_resolves_to_cancel() {
        let (mut i18n, mut form) = fixtures();
        let mut lib = FakeLibrary::new(Permission::Granted);
        lib.images.clear();
        let mut w = step(1);
        w.handle_key(Key::Enter, &mut i18n, &mut form, &mut lib);
        w.handle_key(Key::Enter, &mut i18n, &mut form, &mut lib);
        assert_eq!(*w.overlay(), Overlay::None);
        assert!(form.images().is_empty());
    }

    #[test]
    fn language_menu_selects_and_dismisses() {
        let (mut i18n, mut form) = fixtures();
        let mut lib = FakeLibrary::new(Permission::Granted);
        let mut w = step(1);
        w.handle_key(Key::Char('l'), &mut i18n, &mut form, &mut lib);
        assert!(w.language_menu_open());
        w.handle_key(Key::Down, &mut i18n, &mut form, &mut lib);
        w.handle_key(Key::Enter, &mut i18n, &mut form, &mut lib);
        assert!(!w.language_menu_open());
        assert_eq!(i18n.current(), LanguageCode::Si);

        w.handle_key(Key::Char('l'), &mut i18n, &mut form, &mut lib);
        w.handle_key(Key::Down, &mut i18n, &mut form, &mut lib);
        w.handle_key(Key::Esc, &mut i18n, &mut form, &mut lib);
        assert!(!w.language_menu_open());
        assert_eq!(i18n.current(), LanguageCode::Si);
    }

    #[test]
    fn previous_only_offered_after_step_one() {
        let (mut i18n, mut form) = fixtures();
        let mut lib = FakeLibrary::new(Permission::Granted);
        assert_eq!(step(1).handle_key(Key::Left, &mut i18n, &mut form, &mut lib), Outcome::Ignored);
        assert_eq!(
            step(2).handle_key(Key::Left, &mut i18n, &mut form, &mut lib),
            Outcome::Navigate(Action::Previous)
        );
        assert_eq!(
            step(3).handle_key(Key::Char('n'), &mut i18n, &mut form, &mut lib),
            Outcome::Navigate(Action::Next)
        );
    }
}
