//! Contact form and account placeholder handlers

use course_fees::core::about::ABOUT;
use course_fees::core::forms::{ContactForm, FormError, LoginForm, SignupForm};
use course_fees::{info, warn};

/// Validate and acknowledge a contact message
pub fn run_contact(form: &ContactForm) {
    match form.check() {
        Ok(()) => {
            info!("contact message accepted from {}", form.email);
            println!(
                "✓ Thanks, {}. {} will reply to {} soon.",
                form.name, ABOUT.name, form.email
            );
        }
        Err(e) => report_invalid("contact", &e),
    }
}

/// Validate login details; accounts are not available yet
pub fn run_login(form: &LoginForm) {
    match form.check() {
        Ok(()) => println!("ℹ Online accounts are coming soon. Please contact us at {}.", ABOUT.email),
        Err(e) => report_invalid("login", &e),
    }
}

/// Validate sign-up details; accounts are not available yet
pub fn run_signup(form: &SignupForm) {
    match form.check() {
        Ok(()) => println!(
            "ℹ Thanks, {}. Online sign-up is coming soon; we have not created an account.",
            form.name
        ),
        Err(e) => report_invalid("signup", &e),
    }
}

/// Print every problem and exit with status 1
fn report_invalid(form_name: &str, err: &FormError) -> ! {
    warn!("{form_name} form rejected: {}", err.fields().join(", "));
    eprintln!("✗ Please fix the following:");
    for line in describe(err) {
        eprintln!("  - {line}");
    }
    std::process::exit(1);
}

/// One human-readable line per problem
fn describe(err: &FormError) -> Vec<String> {
    match err {
        FormError::Invalid(errors) => {
            let mut lines: Vec<String> = errors
                .field_errors()
                .iter()
                .flat_map(|(field, problems)| {
                    problems.iter().map(move |p| {
                        p.message
                            .as_ref()
                            .map_or_else(|| format!("{field} is invalid"), ToString::to_string)
                    })
                })
                .collect();
            lines.sort();
            lines
        }
        FormError::PasswordMismatch => vec![err.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_uses_messages() {
        let form = ContactForm {
            name: String::new(),
            email: "x@y.com".to_string(),
            phone: "bad".to_string(),
            message: "hi".to_string(),
        };
        let lines = describe(&form.check().unwrap_err());
        assert_eq!(lines, vec!["Name is required", "phone is invalid"]);
    }

    #[test]
    fn test_describe_mismatch() {
        assert_eq!(
            describe(&FormError::PasswordMismatch),
            vec!["Passwords do not match"]
        );
    }
}
