//! Form validation
//!
//! Each form has an ordered rule list per field. A field reports the message of
//! its first failing rule; only `Required` fires on an empty value. Values are
//! checked trimmed, as they are submitted, except for secret fields.

use crate::state::{AppState, EntityKind, FieldKey, FormId, FormState};
use regex::Regex;
use std::sync::OnceLock;

const PASSWORD_SPECIALS: &str = "@$!%*?&";

#[derive(Debug, Clone)]
pub enum Rule {
    /// Value must contain something other than whitespace
    Required(String),
    MinLen(usize, String),
    MaxLen(usize, String),
    Pattern(fn() -> &'static Regex, String),
    Email(String),
    StrongPassword(String),
    /// Value must equal another field of the same form
    MatchesField(FieldKey, String),
}

impl Rule {
    fn check(&self, value: &str, form: &FormState) -> Result<(), String> {
        let passed = match self {
            Rule::Required(_) => !value.trim().is_empty(),
            _ if value.is_empty() => true,
            Rule::MinLen(min, _) => value.chars().count() >= *min,
            Rule::MaxLen(max, _) => value.chars().count() <= *max,
            Rule::Pattern(regex, _) => regex().is_match(value),
            Rule::Email(_) => email_regex().is_match(value),
            Rule::StrongPassword(_) => is_strong_password(value),
            Rule::MatchesField(other, _) => form.value(*other) == value,
        };
        if passed {
            Ok(())
        } else {
            Err(self.message().to_string())
        }
    }

    fn message(&self) -> &str {
        match self {
            Rule::Required(m)
            | Rule::MinLen(_, m)
            | Rule::MaxLen(_, m)
            | Rule::Pattern(_, m)
            | Rule::Email(m)
            | Rule::StrongPassword(m)
            | Rule::MatchesField(_, m) => m,
        }
    }
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// English letters plus lower case Vietnamese letters and `đĐ`
const NAME_LETTERS: &str = "a-zA-ZàáảãạâầấẩẫậăằắẳẵặèéẻẽẹêềếểễệìíỉĩịòóỏõọôồốổỗộơờớởỡợùúủũụưừứửữựỳýỷỹỵđĐ";

fn entity_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(r"^[{NAME_LETTERS}0-9\s]+$")).unwrap())
}

fn full_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(r"^[{NAME_LETTERS}\s]+$")).unwrap())
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\+84|84|0)[1-9][0-9]{8,9}$").unwrap())
}

/// Lower, upper, digit and special character present; must start with one of
/// the allowed characters
fn is_strong_password(value: &str) -> bool {
    let allowed = |c: char| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c);
    value.chars().next().is_some_and(allowed)
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

fn msg(s: &str) -> String {
    s.to_string()
}

/// Rule set for a form, in field order
pub fn rules_for(form: FormId, kind: Option<EntityKind>) -> Vec<(FieldKey, Vec<Rule>)> {
    match form {
        FormId::Login => vec![
            (
                FieldKey::Email,
                vec![
                    Rule::Required(msg("Please input your email!")),
                    Rule::Email(msg("Please enter a valid email address!")),
                ],
            ),
            (
                FieldKey::Password,
                vec![
                    Rule::Required(msg("Please input your password!")),
                    Rule::MinLen(6, msg("Password must be at least 6 characters long!")),
                ],
            ),
        ],
        FormId::Register => vec![
            (
                FieldKey::FullName,
                vec![
                    Rule::Required(msg("Please input your full name!")),
                    Rule::MinLen(2, msg("Full name must be at least 2 characters long!")),
                    Rule::MaxLen(50, msg("Full name must not exceed 50 characters!")),
                    Rule::Pattern(
                        full_name_regex,
                        msg("Full name can only contain Vietnamese/English letters and spaces!"),
                    ),
                ],
            ),
            (
                FieldKey::Email,
                vec![
                    Rule::Required(msg("Please input your email!")),
                    Rule::Email(msg("Please enter a valid email address!")),
                ],
            ),
            (
                FieldKey::Phone,
                vec![
                    Rule::Required(msg("Please input your phone number!")),
                    Rule::Pattern(phone_regex, msg("Please enter a valid Vietnamese phone number!")),
                ],
            ),
            (
                FieldKey::Password,
                vec![
                    Rule::Required(msg("Please input your password!")),
                    Rule::MinLen(8, msg("Password must be at least 8 characters long!")),
                    Rule::StrongPassword(msg(
                        "Password must contain at least one uppercase letter, one lowercase letter, one number, and one special character!",
                    )),
                ],
            ),
            (
                FieldKey::ConfirmPassword,
                vec![
                    Rule::Required(msg("Please confirm your password!")),
                    Rule::MatchesField(FieldKey::Password, msg("Passwords do not match!")),
                ],
            ),
        ],
        FormId::Entity => {
            let label = kind.unwrap_or(EntityKind::Category).label();
            vec![
                (
                    FieldKey::Name,
                    vec![
                        Rule::Required(format!("Please input the {label} name!")),
                        Rule::MinLen(2, msg("Name must be at least 2 characters long!")),
                        Rule::MaxLen(50, msg("Name must not exceed 50 characters!")),
                        Rule::Pattern(
                            entity_name_regex,
                            msg("Name can only contain Vietnamese/English letters, numbers, and spaces!"),
                        ),
                    ],
                ),
                (
                    FieldKey::Description,
                    vec![
                        Rule::Required(msg("Please input the description!")),
                        Rule::MinLen(10, msg("Description must be at least 10 characters long!")),
                        Rule::MaxLen(200, msg("Description must not exceed 200 characters!")),
                    ],
                ),
            ]
        }
    }
}

/// First failing rule per field; empty when the form is valid
pub fn validate(form: &FormState, rules: &[(FieldKey, Vec<Rule>)]) -> Vec<(FieldKey, String)> {
    rules
        .iter()
        .filter_map(|(key, rules)| {
            let raw = form.value(*key);
            let value = if key.is_secret() { raw } else { raw.trim() };
            rules
                .iter()
                .find_map(|rule| rule.check(value, form).err())
                .map(|message| (*key, message))
        })
        .collect()
}

/// Validate one of the application's forms. `None` when the form is not open.
pub fn validate_form(id: FormId, state: &AppState) -> Option<Vec<(FieldKey, String)>> {
    let form = state.form(id)?;
    let kind = state.entity_form.as_ref().map(|f| f.kind);
    Some(validate(form, &rules_for(id, kind)))
}
