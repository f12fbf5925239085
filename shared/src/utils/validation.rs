//! Account field validation

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static EMAIL_NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]{6,}$").unwrap());

static PASSWORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]{6,}$").unwrap());

// Vietnamese mobile prefixes followed by eight digits
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(03|05|07|08|09)[0-9]{8}$").unwrap());

/// Domain customer accounts must be registered under
pub const USER_EMAIL_DOMAIN: &str = "@gmail.com";

/// Domain admin accounts must be registered under
pub const ADMIN_EMAIL_DOMAIN: &str = "@admin.com";

/// Trim and lowercase an email address
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check the overall `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check the part before `@`: at least six letters or digits
pub fn is_valid_email_name(email: &str) -> bool {
    email
        .split('@')
        .next()
        .map(|name| EMAIL_NAME_REGEX.is_match(name))
        .unwrap_or(false)
}

/// Passwords are at least six letters or digits
pub fn is_valid_password(password: &str) -> bool {
    PASSWORD_REGEX.is_match(password)
}

/// Ten digit mobile number with a 03/05/07/08/09 prefix
pub fn is_valid_phone_number(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Check that an email ends with the given domain suffix
pub fn has_email_domain(email: &str, domain: &str) -> bool {
    email.ends_with(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Diner01@Gmail.COM "), "diner01@gmail.com");
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("diner01@gmail.com"));
        assert!(!is_valid_email("diner01gmail.com"));
        assert!(!is_valid_email("diner 01@gmail.com"));
        assert!(!is_valid_email("diner01@gmail"));
    }

    #[test]
    fn test_email_name() {
        assert!(is_valid_email_name("diner01@gmail.com"));
        assert!(!is_valid_email_name("abc@gmail.com"));
        assert!(!is_valid_email_name("diner.01@gmail.com"));
    }

    #[test]
    fn test_password_rules() {
        assert!(is_valid_password("secret1"));
        assert!(!is_valid_password("short"));
        assert!(!is_valid_password("has space"));
        assert!(!is_valid_password("symbol!!"));
    }

    #[test]
    fn test_phone_prefixes() {
        assert!(is_valid_phone_number("0912345678"));
        assert!(is_valid_phone_number("0312345678"));
        assert!(!is_valid_phone_number("0412345678"));
        assert!(!is_valid_phone_number("091234567"));
        assert!(!is_valid_phone_number("09123456789"));
    }

    #[test]
    fn test_email_domains() {
        assert!(has_email_domain("diner01@gmail.com", USER_EMAIL_DOMAIN));
        assert!(!has_email_domain("diner01@yahoo.com", USER_EMAIL_DOMAIN));
        assert!(has_email_domain("boss@admin.com", ADMIN_EMAIL_DOMAIN));
    }
}
