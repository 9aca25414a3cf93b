use std::fmt::Display;

/// Log the error of a `Result` and keep going with an `Option`
pub trait LogError<T> {
    fn log_error_msg(self, msg: &str) -> Option<T>;
}

impl<T, E> LogError<T> for Result<T, E>
where
    E: Display,
{
    fn log_error_msg(self, msg: &str) -> Option<T> {
        self.inspect_err(|e| log::error!("{msg}: {e}")).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_error_keeps_value() {
        let ok: Result<u8, String> = Ok(1);
        let err: Result<u8, String> = Err("boom".to_string());

        assert_eq!(ok.log_error_msg("unused"), Some(1));
        assert_eq!(err.log_error_msg("failed"), None);
    }
}
