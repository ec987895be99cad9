// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::messages::user_register::NewUser;

pub const PASSWORD_MIN_LENGTH: usize = 8;

pub const USERNAME_REQUIRED_MESSAGE: &str = "Username is required";
pub const EMAIL_INVALID_MESSAGE: &str = "Enter a valid email";
pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "Password should be of minimum 8 characters length";

/// The message for each sign-up field whose current value fails its rule
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FieldErrors {
	pub username: Option<&'static str>,
	pub email: Option<&'static str>,
	pub password: Option<&'static str>,
}

impl FieldErrors {
	pub fn is_empty(&self) -> bool {
		self.username.is_none() && self.email.is_none() && self.password.is_none()
	}
}

/// Checks sign-up form values against the field rules. Pure; the result
/// covers every field for the values as given.
pub fn validate_new_user(new_user: &NewUser) -> FieldErrors {
	let username = if new_user.username.is_empty() {
		Some(USERNAME_REQUIRED_MESSAGE)
	} else {
		None
	};
	let email = if email_is_valid(&new_user.email) {
		None
	} else {
		Some(EMAIL_INVALID_MESSAGE)
	};
	let password = if new_user.password.chars().count() >= PASSWORD_MIN_LENGTH {
		None
	} else {
		Some(PASSWORD_TOO_SHORT_MESSAGE)
	};

	FieldErrors {
		username,
		email,
		password,
	}
}

/// Checks an address against the conventional grammar: a local part of the
/// usual atom characters and a domain of dot-separated labels.
fn email_is_valid(email: &str) -> bool {
	let Some((local, domain)) = email.split_once('@') else {
		return false;
	};
	if local.is_empty() || domain.is_empty() {
		return false;
	}
	if !local.chars().all(is_local_part_char) {
		return false;
	}
	domain.split('.').all(domain_label_is_valid)
}

fn is_local_part_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn domain_label_is_valid(label: &str) -> bool {
	!label.is_empty()
		&& !label.starts_with('-')
		&& !label.ends_with('-')
		&& label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn new_user(username: &str, email: &str, password: &str) -> NewUser {
		NewUser {
			username: String::from(username),
			email: String::from(email),
			password: String::from(password),
		}
	}

	#[rstest]
	#[case("not-an-email")]
	#[case("missing-domain@")]
	#[case("@missing-local.example.com")]
	#[case("two@ats@example.com")]
	#[case("spaces in@example.com")]
	#[case("trailing-dot@example.com.")]
	#[case("hyphen-label@-example.com")]
	fn invalid_emails_are_rejected(#[case] email: &str) {
		let errors = validate_new_user(&new_user("alice", email, "password123"));
		assert_eq!(errors.email, Some(EMAIL_INVALID_MESSAGE));
	}

	#[rstest]
	#[case("alice@example.com")]
	#[case("a@b")]
	#[case("first.last+tag@sub.example.co")]
	#[case("UPPER.case@Example.COM")]
	fn valid_emails_are_accepted(#[case] email: &str) {
		let errors = validate_new_user(&new_user("alice", email, "password123"));
		assert_eq!(errors.email, None);
	}

	#[rstest]
	#[case("")]
	#[case("123")]
	#[case("seven77")]
	fn short_passwords_are_rejected(#[case] password: &str) {
		let errors = validate_new_user(&new_user("alice", "alice@example.com", password));
		assert_eq!(errors.password, Some(PASSWORD_TOO_SHORT_MESSAGE));
	}

	#[test]
	fn eight_character_password_is_accepted() {
		let errors = validate_new_user(&new_user("alice", "alice@example.com", "eight888"));
		assert_eq!(errors.password, None);
	}

	#[test]
	fn empty_username_is_rejected() {
		let errors = validate_new_user(&new_user("", "alice@example.com", "password123"));
		assert_eq!(errors.username, Some(USERNAME_REQUIRED_MESSAGE));
	}

	#[test]
	fn complete_valid_form_has_no_errors() {
		let errors = validate_new_user(&new_user("carol", "carol@example.com", "validpassword"));
		assert!(errors.is_empty());
	}

	#[test]
	fn empty_form_reports_every_field() {
		let errors = validate_new_user(&new_user("", "", ""));
		assert_eq!(errors.username, Some(USERNAME_REQUIRED_MESSAGE));
		assert_eq!(errors.email, Some(EMAIL_INVALID_MESSAGE));
		assert_eq!(errors.password, Some(PASSWORD_TOO_SHORT_MESSAGE));
	}
}
