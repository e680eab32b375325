use gloo_net::http::Request;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::config;

pub const NAME_MAX_LEN: usize = 100;
pub const MESSAGE_MAX_LEN: usize = 2000;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern compiles")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required.")]
    Required,
    #[error("Max length is {max} char.")]
    TooLong { max: usize },
    #[error("Invalid email address.")]
    InvalidEmail,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<(Field, FieldError)>);

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, err)| err)
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("The message was not accepted (status {0}). Please try again later.")]
    Rejected(u16),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Body posted to the contact endpoint.
#[derive(Debug, Serialize)]
pub struct ContactPayload<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    #[serde(rename = "_subject")]
    pub subject: &'static str,
}

fn check_text(value: &str, max: usize) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FieldError::Required)
    } else if value.chars().count() > max {
        Err(FieldError::TooLong { max })
    } else {
        Ok(())
    }
}

fn check_email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FieldError::Required)
    } else if !EMAIL_PATTERN.is_match(value) {
        Err(FieldError::InvalidEmail)
    } else {
        Ok(())
    }
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Collects an error for every invalid field, in form order.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let errors: Vec<(Field, FieldError)> = [
            (Field::Name, check_text(&self.name, NAME_MAX_LEN)),
            (Field::Email, check_email(&self.email)),
            (Field::Message, check_text(&self.message, MESSAGE_MAX_LEN)),
        ]
        .into_iter()
        .filter_map(|(field, result)| result.err().map(|err| (field, err)))
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    pub fn payload(&self) -> ContactPayload<'_> {
        ContactPayload {
            name: self.name.trim(),
            email: self.email.trim(),
            message: self.message.trim(),
            subject: "New EVOGYM enquiry",
        }
    }
}

pub async fn submit(form: &ContactForm) -> Result<(), SubmitError> {
    let response = Request::post(config::contact_endpoint())
        .header("Accept", "application/json")
        .json(&form.payload())?
        .send()
        .await?;

    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Rejected(response.status()))
    }
}
