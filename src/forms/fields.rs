use super::validation::{self, ValidationError};

/// A form whose values live in memory until they are handed to a relay.
pub trait FormFields: Clone + Default + PartialEq + 'static {
    type Field: Copy + PartialEq + 'static;

    fn set(&mut self, field: Self::Field, value: String);
    fn validate(&self) -> Result<(), ValidationError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    ProjectType,
    Budget,
    Timeline,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub budget: String,
    pub timeline: String,
    pub message: String,
}

impl FormFields for ContactForm {
    type Field = ContactField;

    fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::ProjectType => &mut self.project_type,
            ContactField::Budget => &mut self.budget,
            ContactField::Timeline => &mut self.timeline,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validation::validate([&*self.name, &*self.email, &*self.message], &self.email)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NewsletterField {
    Email,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    pub email: String,
}

impl NewsletterForm {
    /// The address as it is sent to the list, surrounding whitespace dropped.
    pub fn address(&self) -> &str {
        self.email.trim()
    }
}

impl FormFields for NewsletterForm {
    type Field = NewsletterField;

    fn set(&mut self, field: NewsletterField, value: String) {
        match field {
            NewsletterField::Email => self.email = value,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validation::validate([self.address()], self.address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    #[test]
    fn contact_optional_fields_are_not_required() {
        assert_eq!(contact("Alice", "alice@example.com", "Hello").validate(), Ok(()));
    }

    #[test]
    fn contact_required_fields() {
        assert_eq!(
            contact("Alice", "alice@example.com", " \n").validate(),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(contact("", "bad", "Hello").validate(), Err(ValidationError::MissingFields));
        assert_eq!(
            contact("Alice", "alice@example", "Hello").validate(),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn contact_email_is_checked_untrimmed() {
        assert_eq!(
            contact("Alice", " alice@example.com", "Hello").validate(),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn set_targets_the_right_field() {
        let mut form = ContactForm::default();
        form.set(ContactField::Budget, "5k".into());
        form.set(ContactField::Timeline, "2 mois".into());
        assert_eq!(form.budget, "5k");
        assert_eq!(form.timeline, "2 mois");
        assert!(form.name.is_empty());
    }

    #[test]
    fn newsletter_trims_before_checking() {
        let mut form = NewsletterForm::default();
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));

        form.set(NewsletterField::Email, "  bob@example.org ".into());
        assert_eq!(form.validate(), Ok(()));
        assert_eq!(form.address(), "bob@example.org");

        form.set(NewsletterField::Email, "bob@example".into());
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
    }
}
