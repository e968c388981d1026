//! Log sanitization utilities for masking sensitive data.
//!
//! Emails are PII; they are masked before appearing in any log line.

/// Mask an email address for safe logging.
///
/// Shows only the first 3 characters (or fewer if the local part is shorter)
/// followed by asterisks and the domain.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_email("user@example.com"), "use***@example.com");
/// assert_eq!(mask_email("ab@test.org"), "ab***@test.org");
/// ```
pub fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let local_part = &email[..at_pos];
        let domain = &email[at_pos..];

        let visible_chars = local_part.len().min(3);
        let masked_local = format!("{}***", &local_part[..visible_chars]);

        format!("{}{}", masked_local, domain)
    } else {
        // Not a valid email format, just mask most of it
        let visible_chars = email.len().min(3);
        format!("{}***", &email[..visible_chars])
    }
}
