use std::borrow::Cow;

use neighbors_core::model::{GeminiModel, Model};

pub const GEMINI_1_5_FLASH_002: &str = "gemini-1.5-flash-002";
pub const GEMINI_1_5_PRO_002: &str = "gemini-1.5-pro-002";
pub const GEMINI_2_0_FLASH: &str = "gemini-2.0-flash-001";
pub const GEMINI_2_5_FLASH: &str = "gemini-2.5-flash";

pub(crate) fn map_model(model: &Model) -> Cow<'static, str> {
    match model {
        Model::Custom(custom) => Cow::Borrowed(*custom),
        Model::Gemini(gemini) => Cow::Borrowed(match gemini {
            GeminiModel::Gemini15Flash002 => GEMINI_1_5_FLASH_002,
            GeminiModel::Gemini15Pro002 => GEMINI_1_5_PRO_002,
            GeminiModel::Gemini20Flash => GEMINI_2_0_FLASH,
            GeminiModel::Gemini25Flash => GEMINI_2_5_FLASH,
        }),
    }
}
