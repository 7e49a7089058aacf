//! `${VAR}` expansion for path-like configuration values.

use std::borrow::Cow;

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Values without `${` are returned as is, so a bare `$` in a path is never
/// interpreted. `field` names the config key in error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |name| std::env::var(name).map(Some))
        .map(Cow::into_owned)
        .map_err(|err| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}}: {}", err.var_name, err.cause),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_expand_source_dir_from_env() {
        // SAFETY: each test uses its own variable name
        unsafe {
            std::env::set_var("KILN_TEST_SITE_ROOT", "/srv/site");
        }
        let result = expand_env("${KILN_TEST_SITE_ROOT}/src", "source.dir").unwrap();
        assert_eq!(result, "/srv/site/src");
        unsafe {
            std::env::remove_var("KILN_TEST_SITE_ROOT");
        }
    }

    #[test]
    fn test_expand_falls_back_to_default() {
        // SAFETY: each test uses its own variable name
        unsafe {
            std::env::remove_var("KILN_TEST_CONTENTS");
        }
        let result = expand_env("${KILN_TEST_CONTENTS:-contents}", "source.contents").unwrap();
        assert_eq!(result, "contents");
    }

    #[test]
    fn test_unset_variable_names_field() {
        // SAFETY: each test uses its own variable name
        unsafe {
            std::env::remove_var("KILN_TEST_UNSET_DIR");
        }
        let err = expand_env("${KILN_TEST_UNSET_DIR}", "source.dir").unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(message.contains("KILN_TEST_UNSET_DIR"));
        assert!(message.contains("source.dir"));
    }

    #[test]
    fn test_bare_dollar_is_literal() {
        assert_eq!(expand_env("site$1", "source.dir").unwrap(), "site$1");
        assert_eq!(expand_env("src", "source.dir").unwrap(), "src");
    }
}
