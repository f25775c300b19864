//! Localized message catalog.
//!
//! Every human-readable line the store emits goes through [`Locale`]:
//! success notifications, error descriptions and the demo's failure notices.
//! Russian is the default and reproduces the original wording.

use std::fmt;
use std::str::FromStr;

use crate::constants::{LOCALE_EN, LOCALE_RU};
use crate::error::{DomainError, DomainResult};
use crate::user::{User, UserId};

/// Output language for status lines and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    /// Locale code as accepted by [`FromStr`]
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ru => LOCALE_RU,
            Locale::En => LOCALE_EN,
        }
    }

    // =========================================================================
    // Success notifications
    // =========================================================================

    pub fn user_created(&self, name: &str) -> String {
        match self {
            Locale::Ru => format!("Пользователь создан: {}", name),
            Locale::En => format!("User created: {}", name),
        }
    }

    pub fn user_found(&self, name: &str) -> String {
        match self {
            Locale::Ru => format!("Пользователь {}", name),
            Locale::En => format!("User {}", name),
        }
    }

    pub fn user_updated(&self, name: &str) -> String {
        match self {
            Locale::Ru => format!("Пользователь обновлен: {}", name),
            Locale::En => format!("User updated: {}", name),
        }
    }

    pub fn user_deleted(&self, name: &str) -> String {
        match self {
            Locale::Ru => format!("Пользователь {} удален", name),
            Locale::En => format!("User {} deleted", name),
        }
    }

    // =========================================================================
    // Errors
    // =========================================================================

    pub fn user_not_found(&self) -> String {
        match self {
            Locale::Ru => "Пользователь не найден".to_string(),
            Locale::En => "User not found".to_string(),
        }
    }

    pub fn create_failed(&self, name: &str) -> String {
        match self {
            Locale::Ru => format!("Не удалось создать пользователя {}", name),
            Locale::En => format!("Failed to create user {}", name),
        }
    }

    pub fn lookup_failed(&self, id: UserId) -> String {
        match self {
            Locale::Ru => format!("Не удалось найти пользователя {}", id),
            Locale::En => format!("Failed to find user {}", id),
        }
    }

    pub fn update_failed(&self, user: &User) -> String {
        match self {
            Locale::Ru => format!("Невозможно обновить пользователя {}", user),
            Locale::En => format!("Unable to update user {}", user),
        }
    }

    pub fn delete_failed(&self, name: &str) -> String {
        match self {
            Locale::Ru => format!("Не удалось удалить пользователя {}", name),
            Locale::En => format!("Failed to delete user {}", name),
        }
    }

    // =========================================================================
    // Demo sequence
    // =========================================================================

    /// Name the demo creates the user with
    pub fn demo_initial_name(&self) -> &'static str {
        match self {
            Locale::Ru => "Иван",
            Locale::En => "Ivan",
        }
    }

    /// Name the demo renames the user to
    pub fn demo_updated_name(&self) -> &'static str {
        match self {
            Locale::Ru => "Антон",
            Locale::En => "Anton",
        }
    }

    pub fn create_step_failed(&self) -> &'static str {
        match self {
            Locale::Ru => "Не удалось создать пользователя",
            Locale::En => "Could not create the user",
        }
    }

    pub fn lookup_step_failed(&self) -> &'static str {
        match self {
            Locale::Ru => "Не удалось опознать ID",
            Locale::En => "Could not resolve the ID",
        }
    }

    pub fn update_step_failed(&self) -> &'static str {
        match self {
            Locale::Ru => "Не удалось обновить пользователя",
            Locale::En => "Could not update the user",
        }
    }

    pub fn delete_step_failed(&self) -> &'static str {
        match self {
            Locale::Ru => "Не удалось удалить пользователя",
            Locale::En => "Could not delete the user",
        }
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            LOCALE_RU => Ok(Locale::Ru),
            LOCALE_EN => Ok(Locale::En),
            other => Err(DomainError::unsupported_locale(other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale_codes() {
        assert_eq!("ru".parse::<Locale>(), Ok(Locale::Ru));
        assert_eq!(" EN ".parse::<Locale>(), Ok(Locale::En));
    }

    #[test]
    fn test_parse_unknown_locale() {
        let result = "de".parse::<Locale>();
        assert_eq!(result, Err(DomainError::UnsupportedLocale("de".to_string())));
    }

    #[test]
    fn test_default_is_russian() {
        assert_eq!(Locale::default(), Locale::Ru);
        assert_eq!(Locale::default().to_string(), "ru");
    }

    #[test]
    fn test_russian_wording() {
        let ru = Locale::Ru;
        assert_eq!(ru.user_created("Иван"), "Пользователь создан: Иван");
        assert_eq!(ru.user_deleted("Антон"), "Пользователь Антон удален");
        assert_eq!(ru.lookup_failed(1), "Не удалось найти пользователя 1");
        assert_eq!(ru.user_not_found(), "Пользователь не найден");
    }

    #[test]
    fn test_update_failed_names_record() {
        let user = User::new(3, "Anton");
        assert_eq!(Locale::En.update_failed(&user), "Unable to update user Anton [3]");
    }
}
