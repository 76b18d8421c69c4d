// src/screens/details.rs  —  Location / description / date form
use super::{Key, Outcome};
use crate::form::FormStore;
use crate::nav::Action;
use chrono::{DateTime, Duration, Local};

/// Display format for the date field
pub const DATE_FORMAT: &str = "%a %b %d %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus { Location, Description, Date }

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Location    => Focus::Description,
            Focus::Description => Focus::Date,
            Focus::Date        => Focus::Location,
        }
    }
    fn prev(self) -> Self {
        match self {
            Focus::Location    => Focus::Date,
            Focus::Description => Focus::Location,
            Focus::Date        => Focus::Description,
        }
    }
}

/// Date picker sheet: starts at the stored date, moves by days/weeks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePicker {
    pub value: DateTime<Local>,
}

impl DatePicker {
    /// `Some(Some(date))` confirmed, `Some(None)` dismissed, `None` still open
    fn handle_key(&mut self, key: Key) -> Option<Option<DateTime<Local>>> {
        let shift = match key {
            Key::Left  => Duration::days(-1),
            Key::Right => Duration::days(1),
            Key::Up    => Duration::days(-7),
            Key::Down  => Duration::days(7),
            Key::Enter => return Some(Some(self.value)),
            Key::Esc   => return Some(None),
            _ => return None,
        };
        if let Some(v) = self.value.checked_add_signed(shift) { self.value = v; }
        None
    }
}

pub struct DetailsScreen {
    focus:  Focus,
    picker: Option<DatePicker>,
}

impl Default for DetailsScreen {
    fn default() -> Self { Self::new() }
}

impl DetailsScreen {
    pub fn new() -> Self { Self { focus: Focus::Location, picker: None } }

    pub fn focus(&self) -> Focus { self.focus }
    pub fn picker(&self) -> Option<&DatePicker> { self.picker.as_ref() }

    pub fn handle_key(&mut self, key: Key, form: &mut FormStore) -> Outcome {
        if let Some(picker) = &mut self.picker {
            if let Some(result) = picker.handle_key(key) {
                self.picker = None;
                // dismissed picker leaves the field untouched
                if let Some(date) = result { form.set_date(date); }
            }
            return Outcome::Handled;
        }

        match key {
            Key::Tab     => { self.focus = self.focus.next(); Outcome::Handled }
            Key::BackTab => { self.focus = self.focus.prev(); Outcome::Handled }
            // arrows belong to the text while a text field has focus
            Key::Left | Key::Right if self.focus != Focus::Date => Outcome::Handled,
            Key::Left    => Outcome::Navigate(Action::Previous),
            Key::Right   => {
                log::info!("[details] final data: {:?}", form.data());
                Outcome::Navigate(Action::Next)
            }
            Key::Enter => {
                if self.focus == Focus::Date {
                    self.picker = Some(DatePicker { value: form.data().date });
                } else {
                    self.focus = self.focus.next();
                }
                Outcome::Handled
            }
            Key::Char(c) => self.edit(form, |s| s.push(c)),
            Key::Backspace => self.edit(form, |s| { s.pop(); }),
            _ => Outcome::Ignored,
        }
    }

    /// Apply `f` to the focused text field; every keystroke is one update
    fn edit(&self, form: &mut FormStore, f: impl FnOnce(&mut String)) -> Outcome {
        match self.focus {
            Focus::Location => {
                let mut v = form.data().location.clone();
                f(&mut v);
                form.set_location(v);
                Outcome::Handled
            }
            Focus::Description => {
                let mut v = form.data().description.clone();
                f(&mut v);
                form.set_description(v);
                Outcome::Handled
            }
            Focus::Date => Outcome::Ignored,
        }
    }
}
