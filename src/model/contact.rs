// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Portfolio contact form.

use crate::error::{GuideError, GuideResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub(crate) const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    pub(crate) fn next(self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Subject,
            ContactField::Subject => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    pub(crate) fn previous(self) -> Self {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Subject => ContactField::Email,
            ContactField::Message => ContactField::Subject,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ContactForm {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) subject: String,
    pub(crate) message: String,
}

impl ContactForm {
    pub(crate) fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub(crate) fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Checks every field is filled in and the email address is plausible.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::InvalidInput`] naming the first offending field.
    pub(crate) fn validate(&self) -> GuideResult<()> {
        for field in ContactField::ALL {
            if self.field(field).trim().is_empty() {
                return Err(GuideError::InvalidInput(format!(
                    "{} is required",
                    field.label()
                )));
            }
        }

        let email = self.email.trim();
        let plausible = email
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'));
        if !plausible {
            return Err(GuideError::InvalidInput(format!(
                "'{}' is not an email address",
                email
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Enjoyed the portfolio".into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn blank_field_is_rejected() {
        let mut form = filled();
        form.set_field(ContactField::Subject, "   ".into());

        let err = form.validate().unwrap_err();
        assert!(err.to_string().contains("Subject"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = filled();
        form.email = "ada-at-example".into();
        assert!(matches!(form.validate(), Err(GuideError::InvalidInput(_))));

        form.email = "@example.com".into();
        assert!(form.validate().is_err());
    }

    #[test]
    fn field_cycle_wraps() {
        assert_eq!(ContactField::Message.next(), ContactField::Name);
    }
}
