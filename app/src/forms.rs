//! Form drafts, typed edits and local validation.
//!
//! Validation runs before any network call. A draft either turns into the
//! request body for the backend, or into a field → message map that blocks
//! submission and is kept in state for inline display.

use crate::types::Category;
use chrono::NaiveDate;
use eventhub_client::{CreateEventRequest, LoginRequest, RegisterRequest, Role};
use std::collections::BTreeMap;

/// Minimum password length accepted by the login form
pub const LOGIN_PASSWORD_MIN: usize = 6;
/// Minimum password length accepted by the registration form
pub const REGISTER_PASSWORD_MIN: usize = 8;

/// Field-level validation failures, keyed by form field
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationErrors<F: Ord> {
    errors: BTreeMap<F, String>,
}

impl<F: Ord> Default for ValidationErrors<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: Ord> ValidationErrors<F> {
    /// Record a message for `field`, replacing any earlier one
    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Message for `field`, if it failed
    #[must_use]
    pub fn get(&self, field: &F) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Returns true if every field passed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Failing fields and messages, in field order
    pub fn iter(&self) -> impl Iterator<Item = (&F, &str)> {
        self.errors.iter().map(|(f, m)| (f, m.as_str()))
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

/// Login form fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    /// Email
    Email,
    /// Password
    Password,
}

/// Registration form fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegisterField {
    /// Full name
    Name,
    /// Email
    Email,
    /// Password
    Password,
}

/// Event form fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventField {
    /// Title
    Title,
}

/// Login modal draft
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginDraft {
    /// Optional display name
    pub name: String,
    /// Email
    pub email: String,
    /// Password
    pub password: String,
}

/// Single-field change to a [`LoginDraft`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginEdit {
    /// Set the name
    Name(String),
    /// Set the email
    Email(String),
    /// Set the password
    Password(String),
}

impl LoginDraft {
    /// Apply one edit
    pub fn apply(&mut self, edit: LoginEdit) {
        match edit {
            LoginEdit::Name(v) => self.name = v,
            LoginEdit::Email(v) => self.email = v,
            LoginEdit::Password(v) => self.password = v,
        }
    }

    /// Validate and build the login request
    ///
    /// # Errors
    ///
    /// Returns every failing field at once.
    pub fn validate(&self) -> Result<LoginRequest, ValidationErrors<LoginField>> {
        let mut errors = ValidationErrors::default();
        if let Some(message) = email_error(&self.email) {
            errors.insert(LoginField::Email, message);
        }
        if let Some(message) = password_error(&self.password, LOGIN_PASSWORD_MIN) {
            errors.insert(LoginField::Password, message);
        }

        errors.into_result(LoginRequest {
            name: non_blank(&self.name),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Registration modal draft
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterDraft {
    /// Full name
    pub name: String,
    /// Email
    pub email: String,
    /// Password
    pub password: String,
    /// Requested role
    pub role: Role,
    /// Tax id, organizers only
    pub nit: String,
    /// Phone, organizers only
    pub phone: String,
    /// Document reference, organizers only
    pub document: String,
}

/// Single-field change to a [`RegisterDraft`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterEdit {
    /// Set the name
    Name(String),
    /// Set the email
    Email(String),
    /// Set the password
    Password(String),
    /// Set the role
    Role(Role),
    /// Set the tax id
    Nit(String),
    /// Set the phone
    Phone(String),
    /// Set the document reference
    Document(String),
}

impl RegisterDraft {
    /// Apply one edit
    pub fn apply(&mut self, edit: RegisterEdit) {
        match edit {
            RegisterEdit::Name(v) => self.name = v,
            RegisterEdit::Email(v) => self.email = v,
            RegisterEdit::Password(v) => self.password = v,
            RegisterEdit::Role(role) => self.role = role,
            RegisterEdit::Nit(v) => self.nit = v,
            RegisterEdit::Phone(v) => self.phone = v,
            RegisterEdit::Document(v) => self.document = v,
        }
    }

    /// Validate and build the registration request
    ///
    /// Organizer fields are sent only for the organizer role, and only when
    /// filled in.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once.
    pub fn validate(&self) -> Result<RegisterRequest, ValidationErrors<RegisterField>> {
        let mut errors = ValidationErrors::default();
        if self.name.trim().is_empty() {
            errors.insert(RegisterField::Name, "Name is required");
        }
        if let Some(message) = email_error(&self.email) {
            errors.insert(RegisterField::Email, message);
        }
        if let Some(message) = password_error(&self.password, REGISTER_PASSWORD_MIN) {
            errors.insert(RegisterField::Password, message);
        }

        let organizer = self.role == Role::Organizer;
        let extra = |value: &str| if organizer { non_blank(value) } else { None };

        errors.into_result(RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: self.role,
            nit: extra(&self.nit),
            phone: extra(&self.phone),
            document: extra(&self.document),
        })
    }
}

/// Organizer event form draft
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventDraft {
    /// Title, the only required field
    pub title: String,
    /// Description
    pub description: String,
    /// Category
    pub category: Category,
    /// Date, if chosen
    pub date: Option<NaiveDate>,
    /// Venue
    pub location: String,
    /// Maximum attendees
    pub max_capacity: u32,
    /// Image URL
    pub image: String,
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: Category::Technology,
            date: None,
            location: String::new(),
            max_capacity: 100,
            image: String::new(),
        }
    }
}

/// Single-field change to an [`EventDraft`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventEdit {
    /// Set the title
    Title(String),
    /// Set the description
    Description(String),
    /// Set the category
    Category(Category),
    /// Set or clear the date
    Date(Option<NaiveDate>),
    /// Set the venue
    Location(String),
    /// Set the capacity
    MaxCapacity(u32),
    /// Set the image URL
    Image(String),
}

impl EventDraft {
    /// Apply one edit
    pub fn apply(&mut self, edit: EventEdit) {
        match edit {
            EventEdit::Title(v) => self.title = v,
            EventEdit::Description(v) => self.description = v,
            EventEdit::Category(c) => self.category = c,
            EventEdit::Date(d) => self.date = d,
            EventEdit::Location(v) => self.location = v,
            EventEdit::MaxCapacity(n) => self.max_capacity = n,
            EventEdit::Image(v) => self.image = v,
        }
    }

    /// Validate and build the creation request
    ///
    /// # Errors
    ///
    /// Returns an error for a blank title.
    pub fn validate(&self) -> Result<CreateEventRequest, ValidationErrors<EventField>> {
        let mut errors = ValidationErrors::default();
        if self.title.trim().is_empty() {
            errors.insert(EventField::Title, "Title is required");
        }

        errors.into_result(CreateEventRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.label().to_string(),
            date: self.date,
            location: self.location.clone(),
            max_capacity: self.max_capacity,
            image: self.image.clone(),
        })
    }
}

fn email_error(email: &str) -> Option<&'static str> {
    if email.trim().is_empty() {
        Some("Email is required")
    } else if !email.contains('@') {
        Some("Email must contain @")
    } else {
        None
    }
}

fn password_error(password: &str, min: usize) -> Option<String> {
    if password.is_empty() {
        Some("Password is required".to_string())
    } else if password.chars().count() < min {
        Some(format!("Password must be at least {min} characters"))
    } else {
        None
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
