//! Errors raised while wiring effects into the page

/// Failure to attach an effect
///
/// None of these reach the user: the effects host logs them and carries on
/// with the remaining effects.
#[derive(Debug, thiserror::Error)]
pub enum EffectError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("{context} failed: {message}")]
    Js {
        context: &'static str,
        message: String,
    },

    #[error("invalid effects config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type EffectResult<T> = Result<T, EffectError>;

#[cfg(not(feature = "ssr"))]
impl EffectError {
    /// Wrap a thrown JS value
    pub fn js(context: &'static str, value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &"message".into())
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        EffectError::Js { context, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(EffectError::NoWindow.to_string(), "no global window");
        let err = EffectError::Js {
            context: "IntersectionObserver",
            message: "not supported".to_string(),
        };
        assert_eq!(err.to_string(), "IntersectionObserver failed: not supported");
    }

    #[test]
    fn test_config_error_converts() {
        let err: EffectError = serde_json::from_str::<u32>("x").unwrap_err().into();
        assert!(err.to_string().starts_with("invalid effects config"));
    }
}
