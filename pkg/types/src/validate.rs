use anyhow::{Result, bail};
use pkg_constants::console::MAX_NAMESPACE_LEN;

/// Check that `value` can name a namespace: a DNS label of lowercase
/// letters, digits and `-`, starting and ending with a letter or digit.
/// `label` names the field in the message.
pub fn validate_dns_label(label: &str, value: &str) -> Result<()> {
    let Some(first) = value.chars().next() else {
        bail!("{} must not be empty", label);
    };
    if value.len() > MAX_NAMESPACE_LEN {
        bail!("{} is limited to {} characters", label, MAX_NAMESPACE_LEN);
    }
    if let Some(bad) = value
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        bail!(
            "{} may not contain '{}' (use lowercase letters, digits and '-')",
            label,
            bad
        );
    }
    if first == '-' || value.ends_with('-') {
        bail!("{} must start and end with a letter or digit", label);
    }
    Ok(())
}

/// Validate a required display name. Anything but blank text is accepted.
pub fn validate_required_text(label: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        bail!("{} is required", label);
    }
    Ok(())
}

/// Validate a required amount: present, finite, and not negative.
pub fn validate_amount(label: &str, value: Option<f64>) -> Result<f64> {
    let Some(v) = value else {
        bail!("{} is required", label);
    };
    if !v.is_finite() {
        bail!("{} must be a number", label);
    }
    if v < 0.0 {
        bail!("{} must be at least 0 (got {})", label, v);
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dns_labels_accepted() {
        for ns in ["default", "custom", "team-a", "ns-123", "a"] {
            assert!(validate_dns_label("Namespace", ns).is_ok(), "{}", ns);
        }
        assert!(validate_dns_label("Namespace", &"a".repeat(MAX_NAMESPACE_LEN)).is_ok());
    }

    #[test]
    fn dns_labels_rejected() {
        for ns in ["", "Custom", "my_ns", "-leading", "trailing-", "a.b"] {
            assert!(validate_dns_label("Namespace", ns).is_err(), "{}", ns);
        }
        assert!(validate_dns_label("Namespace", &"a".repeat(MAX_NAMESPACE_LEN + 1)).is_err());
    }

    #[test]
    fn dns_label_message_names_offending_char() {
        let err = validate_dns_label("Namespace", "my_ns").unwrap_err();
        assert!(err.to_string().contains("'_'"), "{}", err);
    }

    #[test]
    fn required_text() {
        assert!(validate_required_text("Cluster name", "Public Cluster 1").is_ok());
        assert!(validate_required_text("Cluster name", "").is_err());
        assert!(validate_required_text("Cluster name", "   ").is_err());
    }

    #[test]
    fn amounts() {
        assert_eq!(validate_amount("CPU", Some(0.0)).unwrap(), 0.0);
        assert_eq!(validate_amount("CPU", Some(2.5)).unwrap(), 2.5);
        assert!(validate_amount("CPU", None).is_err());
        assert!(validate_amount("CPU", Some(-0.5)).is_err());
        assert!(validate_amount("CPU", Some(f64::NAN)).is_err());
    }
}
