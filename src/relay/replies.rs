//! Fixed texts the relay bot sends.

use super::RelayError;

pub const START_REPLY: &str =
    "Привет! Я бот-ассистент. Отправьте мне ваш вопрос, и я постараюсь помочь.";
pub const HELP_REPLY: &str = "Отправьте мне текстовое сообщение с вашим вопросом.";

/// Successful response without a `text` field.
pub const NO_ANSWER: &str = "Извините, не удалось получить ответ.";

pub const TIMEOUT_REPLY: &str =
    "Извините, время ожидания ответа истекло. Попробуйте повторить запрос.";
pub const STATUS_ERROR_REPLY: &str =
    "Извините, произошла ошибка при обработке вашего запроса. Попробуйте позже.";
pub const GENERIC_ERROR_REPLY: &str =
    "Произошла ошибка при обработке вашего сообщения. Попробуйте позже.";

pub fn reply_for(outcome: Result<String, RelayError>) -> String {
    match outcome {
        Ok(answer) => answer,
        Err(err) => err.user_reply().to_string(),
    }
}
