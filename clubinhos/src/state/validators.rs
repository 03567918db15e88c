use super::LoginState;

/// Per-field login problems; `None` means the field is fine
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Informe o e-mail");
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err("E-mail inválido");
    };
    let domain_ok = domain
        .split_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'));
    if local.is_empty() || !domain_ok || domain.contains('@') || email.contains(char::is_whitespace)
    {
        return Err("E-mail inválido");
    }

    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Informe a senha");
    }
    Ok(())
}

/// Check the whole form before any request is made
pub fn validate_login(form: &LoginState) -> LoginErrors {
    LoginErrors {
        email: validate_email(&form.email).err(),
        password: validate_password(&form.password).err(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str) -> LoginState {
        LoginState {
            email: email.to_string(),
            password: password.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(validate_login(&form("ana@clubinhos.org", "segredo")).is_empty());
        assert!(validate_login(&form("  ana@clubinhos.org ", "x")).is_empty());
    }

    #[test]
    fn empty_fields_are_flagged_separately() {
        let errors = validate_login(&form("", ""));
        assert_eq!(errors.email, Some("Informe o e-mail"));
        assert_eq!(errors.password, Some("Informe a senha"));

        let errors = validate_login(&form("ana@clubinhos.org", ""));
        assert_eq!(errors.email, None);
        assert_eq!(errors.password, Some("Informe a senha"));
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in [
            "ana",
            "ana@",
            "@clubinhos.org",
            "ana@clubinhos",
            "ana@.org",
            "ana@clubinhos.",
            "ana@@clubinhos.org",
            "ana maria@clubinhos.org",
        ] {
            assert_eq!(validate_email(email), Err("E-mail inválido"), "{}", email);
        }
    }
}
