use std::collections::BTreeSet;

use crate::state::fields::FormModel;

/// Fields that failed the last validation pass, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationErrors<F: Ord> {
    invalid: BTreeSet<F>,
}

impl<F: Ord + Copy> Default for ValidationErrors<F> {
    fn default() -> Self {
        Self { invalid: BTreeSet::new() }
    }
}

impl<F: Ord + Copy> ValidationErrors<F> {
    pub fn is_empty(&self) -> bool {
        self.invalid.is_empty()
    }

    pub fn len(&self) -> usize {
        self.invalid.len()
    }

    pub fn contains(&self, field: F) -> bool {
        self.invalid.contains(&field)
    }

    /// Drops one entry. Returns whether it was present.
    pub fn clear(&mut self, field: F) -> bool {
        self.invalid.remove(&field)
    }

    pub fn first(&self) -> Option<F> {
        self.invalid.iter().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        self.invalid.iter().copied()
    }
}

/// Checks every field in `required` and reports all of the empty ones.
pub fn validate<M: FormModel>(model: &M, required: &[M::Field]) -> ValidationErrors<M::Field> {
    let invalid = required
        .iter()
        .copied()
        .filter(|&field| model.value(field).is_empty())
        .collect();
    ValidationErrors { invalid }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fields::{
        BookingField, BookingFields, ContactField, ContactFields, FieldStore, FieldValue, Gender,
        Referral,
    };

    fn complete_booking() -> BookingFields {
        BookingFields {
            full_name: "Marco Bianchi".into(),
            email: "marco@example.it".into(),
            phone: "+39 333 1234567".into(),
            gender: Some(Gender::Male),
            location: "Verona, VR".into(),
            referral: Some(Referral::Social),
            ..BookingFields::default()
        }
    }

    #[test]
    fn complete_booking_passes() {
        let errors = validate(&complete_booking(), BookingFields::REQUIRED);
        assert!(errors.is_empty());
    }

    #[test]
    fn reports_exactly_the_empty_required_subset() {
        let required = BookingFields::REQUIRED;
        // Every subset of the six required booking fields.
        for mask in 0u32..(1 << required.len()) {
            let mut store = FieldStore::<BookingFields>::new();
            let filled = complete_booking();
            for (i, &field) in required.iter().enumerate() {
                if mask & (1 << i) == 0 {
                    let value = match filled.value(field) {
                        FieldValue::Text(t) => t.to_string(),
                        FieldValue::Choice(c) => c.unwrap_or_default().to_string(),
                    };
                    store.update(field, value);
                }
            }
            let expected: Vec<BookingField> = required
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, &f)| f)
                .collect();

            let errors = validate(store.values(), required);
            assert_eq!(errors.iter().collect::<Vec<_>>(), expected, "mask {mask:#b}");
        }
    }

    #[test]
    fn optional_fields_are_never_reported() {
        let mut booking = complete_booking();
        booking.age = String::new();
        booking.interests = "   ".into();

        assert!(validate(&booking, BookingFields::REQUIRED).is_empty());
    }

    #[test]
    fn whitespace_counts_as_empty_for_every_contact_field() {
        for &field in ContactFields::REQUIRED {
            let mut blank = ContactFields {
                name: "Anna".into(),
                email: "anna@example.it".into(),
                subject: "Info".into(),
                message: "Ciao!".into(),
            };
            let mut spaces = blank.clone();
            blank.set(field, String::new());
            spaces.set(field, "   ".into());

            let from_blank = validate(&blank, ContactFields::REQUIRED);
            let from_spaces = validate(&spaces, ContactFields::REQUIRED);
            assert_eq!(from_blank, from_spaces);
            assert_eq!(from_blank.iter().collect::<Vec<_>>(), vec![field]);
        }
    }

    #[test]
    fn first_follows_display_order() {
        let contact = ContactFields {
            name: "Anna".into(),
            ..ContactFields::default()
        };
        let errors = validate(&contact, ContactFields::REQUIRED);

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.first(), Some(ContactField::Email));
    }

    #[test]
    fn clear_removes_a_single_entry() {
        let mut errors = validate(&ContactFields::default(), ContactFields::REQUIRED);
        assert!(errors.clear(ContactField::Subject));
        assert!(!errors.clear(ContactField::Subject));
        assert!(errors.contains(ContactField::Name));
        assert!(errors.contains(ContactField::Email));
        assert!(errors.contains(ContactField::Message));
    }
}
