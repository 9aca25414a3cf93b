use teloxide::types::UserId as TgUserId;

/// Integer key as it's stored in db
pub type Id = i64;

/// Telegram user id
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub u64);

macro_rules! cast {
    ($($from:ty => $to:ty : $value:ident => $convert:expr),* $(,)?) => {
        $(impl From<$from> for $to {
            fn from($value: $from) -> Self {
                $convert
            }
        })*
    };
}

cast!(
    TgUserId => UserId: v => Self(v.0),
    UserId => Id: v => v.0 as _,
    Id => UserId: v => Self(v as _),
);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_casts() {
        let user_id = UserId::from(TgUserId(42));
        let id: Id = user_id.into();
        assert_eq!(id, 42);
        assert_eq!(UserId::from(id), user_id);
        assert_eq!(user_id.to_string(), "42");
    }
}
