use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, ReplyMarkup};

use crate::{callback::HelpCallback, help::HelpSection};

#[derive(Debug)]
pub(crate) struct KeyboardBuilder {
    keys: Vec<InlineKeyboardButton>,
    columns: usize,
}

impl KeyboardBuilder {
    fn with_layout(rows_capacity: usize, columns: usize) -> Self {
        Self {
            keys: Vec::with_capacity(rows_capacity * columns),
            columns,
        }
    }
    fn callback<T, D>(mut self, text: T, data: D) -> Self
    where
        T: Into<String>,
        D: Into<String>,
    {
        self.keys.push(InlineKeyboardButton::callback(text, data));
        self
    }
}

impl From<KeyboardBuilder> for ReplyMarkup {
    fn from(value: KeyboardBuilder) -> Self {
        Self::InlineKeyboard(value.into())
    }
}

impl From<KeyboardBuilder> for InlineKeyboardMarkup {
    fn from(value: KeyboardBuilder) -> Self {
        Self::new(value.keys.chunks(value.columns.max(1)).map(|row| row.to_owned()))
    }
}

pub(crate) struct Keyboards;

impl Keyboards {
    /// One section per row
    pub(crate) fn help_menu() -> KeyboardBuilder {
        HelpSection::ALL
            .iter()
            .fold(KeyboardBuilder::with_layout(HelpSection::ALL.len(), 1), |keyboard, section| {
                keyboard.callback(section.title(), HelpCallback::section(section.name()))
            })
    }
}

#[cfg(test)]
mod tests {
    use teloxide::types::{InlineKeyboardButton as Btn, InlineKeyboardMarkup as Markup};

    use super::*;

    #[test]
    fn test_help_menu_keyboard() {
        let res: Markup = Keyboards::help_menu().into();
        let expected = Markup::new(vec![
            vec![Btn::callback("General", "help_general")],
            vec![Btn::callback("Commands", "help_commands")],
            vec![Btn::callback("FAQ", "help_faq")],
        ]);
        assert_eq!(res, expected);
    }

    #[test]
    fn test_keyboard_layout() {
        let res: Markup = KeyboardBuilder::with_layout(2, 2)
            .callback("1", "1")
            .callback("2", "2")
            .callback("3", "3")
            .into();
        let expected = Markup::new(vec![
            vec![Btn::callback("1", "1"), Btn::callback("2", "2")],
            vec![Btn::callback("3", "3")],
        ]);
        assert_eq!(res, expected);
    }
}
