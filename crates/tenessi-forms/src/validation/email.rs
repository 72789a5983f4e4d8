#![forbid(unsafe_code)]

//! E-mail address shape check.
//!
//! Accepted shape is `local@domain` where:
//!
//! - `local` is either a quoted string (`"..."` with at least one character
//!   inside) or one or more dot-separated atoms. Atoms are non-empty and
//!   contain no whitespace and none of `<>()[]\.,;:@"`.
//! - `domain` is either an IPv4 literal in brackets (`[192.168.0.1]`) or two
//!   or more dot-separated labels made of ASCII letters, digits, and `-`.
//!   The last label is ASCII letters only, of any length. Leading, trailing,
//!   and consecutive dots are rejected.
//!
//! The value is checked as given: surrounding whitespace makes it invalid.

const ATOM_FORBIDDEN: &[char] = &['<', '>', '(', ')', '[', ']', '\\', '.', ',', ';', ':', '@', '"'];

/// Returns `true` if `value` has the `local@domain` shape described above.
#[must_use]
pub fn is_email_shape(value: &str) -> bool {
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    is_local_part(local) && is_domain(domain)
}

fn is_local_part(local: &str) -> bool {
    if let Some(inner) = local
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        return !inner.is_empty() && !inner.chars().any(is_line_terminator);
    }
    !local.is_empty() && local.split('.').all(is_atom)
}

fn is_atom(atom: &str) -> bool {
    !atom.is_empty()
        && atom
            .chars()
            .all(|c| !c.is_whitespace() && !ATOM_FORBIDDEN.contains(&c))
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn is_domain(domain: &str) -> bool {
    if let Some(inner) = domain
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        return is_ipv4_literal(inner);
    }
    let Some((hosts, top)) = domain.rsplit_once('.') else {
        return false;
    };
    !top.is_empty()
        && top.chars().all(|c| c.is_ascii_alphabetic())
        && hosts.split('.').all(is_host_label)
}

fn is_host_label(label: &str) -> bool {
    !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn is_ipv4_literal(inner: &str) -> bool {
    let octets: Vec<&str> = inner.split('.').collect();
    octets.len() == 4
        && octets
            .iter()
            .all(|o| (1..=3).contains(&o.len()) && o.bytes().all(|b| b.is_ascii_digit()))
}
