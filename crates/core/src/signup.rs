//! Three-step sign-up form: name, then contact details, then payout account.

use serde::{Deserialize, Serialize};

use crate::errors::{BetError, BetResult};
use crate::input::is_valid_email;
use crate::models::auth::SignupRequest;
use crate::models::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignupStep {
    Name,
    Contact,
    Payment,
}

impl SignupStep {
    pub const ALL: [SignupStep; 3] = [SignupStep::Name, SignupStep::Contact, SignupStep::Payment];

    pub fn next(self) -> Option<Self> {
        match self {
            SignupStep::Name => Some(SignupStep::Contact),
            SignupStep::Contact => Some(SignupStep::Payment),
            SignupStep::Payment => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            SignupStep::Name => None,
            SignupStep::Contact => Some(SignupStep::Name),
            SignupStep::Payment => Some(SignupStep::Contact),
        }
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub code: String,
    pub password: String,
    pub password_confirm: String,
    pub bank: String,
    pub account_number: String,
    /// Set once the server has accepted the emailed code.
    pub email_verified: bool,
}

impl SignupForm {
    pub fn step_complete(&self, step: SignupStep) -> bool {
        match step {
            SignupStep::Name => !self.name.trim().is_empty(),
            SignupStep::Contact => {
                is_valid_email(&self.email)
                    && !self.code.trim().is_empty()
                    && !self.password.trim().is_empty()
                    && self.password == self.password_confirm
                    && self.email_verified
            }
            SignupStep::Payment => {
                !self.bank.trim().is_empty() && !self.account_number.trim().is_empty()
            }
        }
    }

    /// First step that still needs input, if any.
    pub fn first_incomplete(&self) -> Option<SignupStep> {
        SignupStep::ALL
            .into_iter()
            .find(|step| !self.step_complete(*step))
    }

    /// Changing the email invalidates an earlier verification.
    pub fn set_email(&mut self, email: impl Into<String>) {
        let email = email.into();
        if email != self.email {
            self.email_verified = false;
        }
        self.email = email;
    }

    pub fn to_request(&self) -> BetResult<SignupRequest> {
        if let Some(step) = self.first_incomplete() {
            return Err(BetError::Validation(format!(
                "Sign-up step {:?} is incomplete",
                step
            )));
        }

        Ok(SignupRequest {
            email: self.email.clone(),
            name: self.name.clone(),
            password: self.password.clone(),
            account_number: self.account_number.clone(),
            bank: self.bank.clone(),
        })
    }

    /// Profile built from the form, used where the server omits fields.
    pub fn as_user(&self) -> User {
        User {
            name: self.name.clone(),
            email: self.email.clone(),
            bank: self.bank.clone(),
            account_number: self.account_number.clone(),
            coin: 0,
        }
    }
}
