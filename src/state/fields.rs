//! Typed field stores for the two forms on the site.

use std::fmt::Debug;
use std::hash::Hash;

use crate::state::stepper::DEFAULT_AGE;

/// Identifies one input of a form. Declaration order is display order.
pub trait FieldName: Copy + Eq + Ord + Hash + Debug + 'static {
    /// Value of the `name`/`id` attribute in the rendered form.
    fn name(&self) -> &'static str;
}

/// What a validator sees when it looks at one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Choice(Option<&'static str>),
}

impl FieldValue<'_> {
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Choice(choice) => choice.is_none(),
        }
    }
}

/// A fixed record of form inputs.
pub trait FormModel: Clone + PartialEq + Default + Debug {
    type Field: FieldName;

    fn value(&self, field: Self::Field) -> FieldValue<'_>;

    /// Choice fields take the option slug; an unknown slug clears the choice.
    fn set(&mut self, field: Self::Field, value: String);
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldStore<M: FormModel> {
    values: M,
}

impl<M: FormModel> Default for FieldStore<M> {
    fn default() -> Self {
        Self { values: M::default() }
    }
}

impl<M: FormModel> FieldStore<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &M {
        &self.values
    }

    pub fn update(&mut self, field: M::Field, value: impl Into<String>) {
        self.values.set(field, value.into());
    }

    pub fn reset(&mut self) {
        self.values = M::default();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn slug(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Uomo",
            Gender::Female => "Donna",
            Gender::Other => "Altro",
        }
    }

    /// Value stored in the `genere` column.
    pub fn column_value(&self) -> &'static str {
        match self {
            Gender::Male => "uomo",
            Gender::Female => "donna",
            Gender::Other => "altro",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.slug() == slug)
    }
}

/// How the visitor heard about the event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Referral {
    Social,
    Friend,
    Search,
    Ad,
    Other,
}

impl Referral {
    pub const ALL: [Referral; 5] = [
        Referral::Social,
        Referral::Friend,
        Referral::Search,
        Referral::Ad,
        Referral::Other,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Referral::Social => "social",
            Referral::Friend => "friend",
            Referral::Search => "search",
            Referral::Ad => "ad",
            Referral::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Referral::Social => "Social Media",
            Referral::Friend => "Amici",
            Referral::Search => "Motore di Ricerca",
            Referral::Ad => "Pubblicità",
            Referral::Other => "Altro",
        }
    }

    /// Value stored in the `conosciuto` column.
    pub fn column_value(&self) -> &'static str {
        match self {
            Referral::Social => "social",
            Referral::Friend => "amici",
            Referral::Search => "ricerca",
            Referral::Ad => "pubblicita",
            Referral::Other => "altro",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.slug() == slug)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookingField {
    FullName,
    Email,
    Phone,
    Age,
    Gender,
    Location,
    Interests,
    Referral,
}

impl FieldName for BookingField {
    fn name(&self) -> &'static str {
        match self {
            BookingField::FullName => "name",
            BookingField::Email => "email",
            BookingField::Phone => "phone",
            BookingField::Age => "age",
            BookingField::Gender => "gender",
            BookingField::Location => "location",
            BookingField::Interests => "interests",
            BookingField::Referral => "referral",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingFields {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub location: String,
    pub interests: String,
    pub referral: Option<Referral>,
}

impl BookingFields {
    pub const REQUIRED: &'static [BookingField] = &[
        BookingField::FullName,
        BookingField::Email,
        BookingField::Phone,
        BookingField::Gender,
        BookingField::Location,
        BookingField::Referral,
    ];
}

impl Default for BookingFields {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            age: DEFAULT_AGE.to_string(),
            gender: None,
            location: String::new(),
            interests: String::new(),
            referral: None,
        }
    }
}

impl FormModel for BookingFields {
    type Field = BookingField;

    fn value(&self, field: BookingField) -> FieldValue<'_> {
        match field {
            BookingField::FullName => FieldValue::Text(&self.full_name),
            BookingField::Email => FieldValue::Text(&self.email),
            BookingField::Phone => FieldValue::Text(&self.phone),
            BookingField::Age => FieldValue::Text(&self.age),
            BookingField::Gender => FieldValue::Choice(self.gender.map(|g| g.slug())),
            BookingField::Location => FieldValue::Text(&self.location),
            BookingField::Interests => FieldValue::Text(&self.interests),
            BookingField::Referral => FieldValue::Choice(self.referral.map(|r| r.slug())),
        }
    }

    fn set(&mut self, field: BookingField, value: String) {
        match field {
            BookingField::FullName => self.full_name = value,
            BookingField::Email => self.email = value,
            BookingField::Phone => self.phone = value,
            BookingField::Age => self.age = value,
            BookingField::Gender => self.gender = Gender::from_slug(&value),
            BookingField::Location => self.location = value,
            BookingField::Interests => self.interests = value,
            BookingField::Referral => self.referral = Referral::from_slug(&value),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldName for ContactField {
    fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub const REQUIRED: &'static [ContactField] = &[
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];
}

impl FormModel for ContactFields {
    type Field = ContactField;

    fn value(&self, field: ContactField) -> FieldValue<'_> {
        match field {
            ContactField::Name => FieldValue::Text(&self.name),
            ContactField::Email => FieldValue::Text(&self.email),
            ContactField::Subject => FieldValue::Text(&self.subject),
            ContactField::Message => FieldValue::Text(&self.message),
        }
    }

    fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_defaults_to_age_25_and_nothing_else() {
        let store: FieldStore<BookingFields> = FieldStore::new();
        let values = store.values();

        assert_eq!(values.age, "25");
        assert!(values.full_name.is_empty());
        assert_eq!(values.gender, None);
        assert_eq!(values.referral, None);
    }

    #[test]
    fn update_then_reset_restores_defaults() {
        let mut store: FieldStore<BookingFields> = FieldStore::new();
        store.update(BookingField::FullName, "Giulia Rossi");
        store.update(BookingField::Age, "31");
        store.update(BookingField::Gender, "female");

        assert_eq!(store.values().full_name, "Giulia Rossi");
        assert_eq!(store.values().gender, Some(Gender::Female));

        store.reset();
        assert_eq!(store.values(), &BookingFields::default());
    }

    #[test]
    fn unknown_choice_slug_leaves_choice_unselected() {
        let mut store: FieldStore<BookingFields> = FieldStore::new();
        store.update(BookingField::Referral, "friend");
        assert_eq!(store.values().referral, Some(Referral::Friend));

        store.update(BookingField::Referral, "carrier-pigeon");
        assert_eq!(store.values().referral, None);
        assert!(store.values().value(BookingField::Referral).is_empty());
    }

    #[test]
    fn whitespace_only_text_counts_as_empty() {
        assert!(FieldValue::Text("").is_empty());
        assert!(FieldValue::Text("   ").is_empty());
        assert!(FieldValue::Text("\t\n").is_empty());
        assert!(!FieldValue::Text(" a ").is_empty());
        assert!(!FieldValue::Choice(Some("male")).is_empty());
    }

    #[test]
    fn field_names_match_rendered_inputs() {
        assert_eq!(BookingField::FullName.name(), "name");
        assert_eq!(BookingField::Referral.name(), "referral");
        assert_eq!(ContactField::Message.name(), "message");
    }
}
