//! Validators for user-entered form values.
//!
//! Each validator reports the first rule a value breaks as a typed
//! violation and logs the rejected input at `info` level.

pub mod digits;
pub mod email_length;
pub mod name;

pub use digits::{DigitLimitViolation, MaxDigitsValidator};
pub use email_length::{DomainRule, DomainRuleViolation, EmailUserNameLengthValidator};
pub use name::{
    IdentityNormalizer, NameField, NameNormalizer, NameRule, NameViolation,
    RealFullNameValidator, RealFullNameValidatorBuilder, RepeatedTokenNormalizer,
};
