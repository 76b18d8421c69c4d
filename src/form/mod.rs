// src/form/mod.rs  —  Wizard form store (three image slots + metadata)
use chrono::{DateTime, Local};

/// Ordinal image position 1..=3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageSlot(u8);

impl ImageSlot {
    pub const ALL: [ImageSlot; 3] = [ImageSlot(1), ImageSlot(2), ImageSlot(3)];

    pub fn new(n: u8) -> Option<Self> {
        (1..=3).contains(&n).then_some(Self(n))
    }

    pub fn number(self) -> u8 { self.0 }

    fn index(self) -> usize { usize::from(self.0 - 1) }
}

/// The single record every screen reads and writes
#[derive(Debug, Clone, PartialEq)]
pub struct WizardFormData {
    pub images:      [Option<String>; 3],
    pub location:    String,
    pub description: String,
    pub date:        DateTime<Local>,
}

impl WizardFormData {
    pub fn new(created: DateTime<Local>) -> Self {
        Self {
            images:      [None, None, None],
            location:    String::new(),
            description: String::new(),
            date:        created,
        }
    }

    pub fn image(&self, slot: ImageSlot) -> Option<&str> {
        self.images[slot.index()].as_deref()
    }
}

/// One field-typed update; exactly the named field is replaced
#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    Image(ImageSlot, String),
    Location(String),
    Description(String),
    Date(DateTime<Local>),
}

impl FormField {
    pub fn name(&self) -> String {
        match self {
            FormField::Image(slot, _)  => format!("image{}", slot.number()),
            FormField::Location(_)     => "location".into(),
            FormField::Description(_)  => "description".into(),
            FormField::Date(_)         => "date".into(),
        }
    }
}

/// Owned by the App and lent by reference to screens.
/// There is no reset: a field keeps its value until overwritten.
#[derive(Debug)]
pub struct FormStore {
    data: WizardFormData,
}

impl FormStore {
    pub fn new() -> Self { Self::with_date(Local::now()) }

    pub fn with_date(created: DateTime<Local>) -> Self {
        Self { data: WizardFormData::new(created) }
    }

    pub fn data(&self) -> &WizardFormData { &self.data }

    pub fn update(&mut self, field: FormField) {
        log::debug!("[form] update {}", field.name());
        match field {
            FormField::Image(slot, uri)  => self.data.images[slot.index()] = Some(uri),
            FormField::Location(v)       => self.data.location = v,
            FormField::Description(v)    => self.data.description = v,
            FormField::Date(d)           => self.data.date = d,
        }
    }

    pub fn set_image(&mut self, slot: ImageSlot, uri: impl Into<String>) {
        self.update(FormField::Image(slot, uri.into()));
    }
    pub fn set_location(&mut self, v: impl Into<String>)    { self.update(FormField::Location(v.into())); }
    pub fn set_description(&mut self, v: impl Into<String>) { self.update(FormField::Description(v.into())); }
    pub fn set_date(&mut self, d: DateTime<Local>)          { self.update(FormField::Date(d)); }

    /// Filled slots in slot order 1, 2, 3
    pub fn images(&self) -> Vec<&str> {
        ImageSlot::ALL.iter().filter_map(|s| self.data.image(*s)).collect()
    }
}
