use thiserror::Error;

/// Validation failures. `Display` is the message shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please enter your name")]
    MissingName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
}

impl ContactSubmission {
    pub fn confirmation(&self) -> String {
        format!("Thanks {}! We'll reply shortly.", self.name)
    }
}

pub fn validate(raw_name: &str) -> Result<ContactSubmission, ContactError> {
    let name = raw_name.trim();
    if name.is_empty() {
        return Err(ContactError::MissingName);
    }
    Ok(ContactSubmission {
        name: name.to_owned(),
    })
}

/// The visible effect of one submit: a message, and whether the form clears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOutcome {
    pub message: String,
    pub reset: bool,
}

pub fn handle_submission(raw_name: &str) -> FormOutcome {
    match validate(raw_name) {
        Ok(submission) => FormOutcome {
            message: submission.confirmation(),
            reset: true,
        },
        Err(err) => FormOutcome {
            message: err.to_string(),
            reset: false,
        },
    }
}
