pub mod errors;
pub mod transcript;

pub mod settings {
    use serde::{Deserialize, Serialize};

    /// File name of the configuration record inside the application root.
    pub const CONFIG_FILE_NAME: &str = "config.json";

    fn default_app_name() -> String {
        "Venalla AI Agent".into()
    }

    fn default_version() -> String {
        "1.0.0".into()
    }

    fn default_llm() -> String {
        "ollama".into()
    }

    fn default_ollama_url() -> String {
        "http://localhost:11434".into()
    }

    fn default_max_workers() -> u32 {
        10
    }

    fn default_true() -> bool {
        true
    }

    fn default_theme() -> String {
        "dark".into()
    }

    /// Persisted application configuration.
    ///
    /// Written once by the provisioner when `config.json` is missing. Keys that
    /// are absent from an existing file fall back to their defaults.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct AppConfig {
        #[serde(default = "default_app_name")]
        pub app_name: String,
        #[serde(default = "default_version")]
        pub version: String,
        /// Provider used when nothing else is selected, e.g. "ollama"
        #[serde(default = "default_llm")]
        pub default_llm: String,
        /// Local model endpoint
        #[serde(default = "default_ollama_url")]
        pub ollama_url: String,
        #[serde(default)]
        pub openai_api_key: String,
        #[serde(default)]
        pub anthropic_api_key: String,
        #[serde(default = "default_max_workers")]
        pub max_workers: u32,
        #[serde(default = "default_true")]
        pub auto_update: bool,
        #[serde(default)]
        pub voice_enabled: bool,
        #[serde(default = "default_theme")]
        pub theme: String,
    }

    impl Default for AppConfig {
        fn default() -> Self {
            Self {
                app_name: default_app_name(),
                version: default_version(),
                default_llm: default_llm(),
                ollama_url: default_ollama_url(),
                openai_api_key: String::new(),
                anthropic_api_key: String::new(),
                max_workers: default_max_workers(),
                auto_update: true,
                voice_enabled: false,
                theme: default_theme(),
            }
        }
    }

    /// Visual theme selected by the `theme` key.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Theme {
        Dark,
        Light,
    }

    impl AppConfig {
        /// Anything other than "light" renders dark.
        pub fn theme(&self) -> Theme {
            if self.theme.trim().eq_ignore_ascii_case("light") {
                Theme::Light
            } else {
                Theme::Dark
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_default_config_values() {
            let config = AppConfig::default();
            assert_eq!(config.app_name, "Venalla AI Agent");
            assert_eq!(config.default_llm, "ollama");
            assert_eq!(config.ollama_url, "http://localhost:11434");
            assert!(config.openai_api_key.is_empty());
            assert!(config.anthropic_api_key.is_empty());
            assert_eq!(config.max_workers, 10);
            assert!(config.auto_update);
            assert!(!config.voice_enabled);
            assert_eq!(config.theme(), Theme::Dark);
        }

        #[test]
        fn test_default_config_json_keys() {
            let value = serde_json::to_value(AppConfig::default()).unwrap();
            let obj = value.as_object().unwrap();
            for key in [
                "app_name",
                "version",
                "default_llm",
                "ollama_url",
                "openai_api_key",
                "anthropic_api_key",
                "max_workers",
                "auto_update",
                "voice_enabled",
                "theme",
            ] {
                assert!(obj.contains_key(key), "missing key {key}");
            }
            assert_eq!(obj.len(), 10);
        }

        #[test]
        fn test_partial_config_uses_defaults() {
            let config: AppConfig =
                serde_json::from_str(r#"{"app_name": "Custom", "theme": "Light"}"#).unwrap();
            assert_eq!(config.app_name, "Custom");
            assert_eq!(config.theme(), Theme::Light);
            assert_eq!(config.max_workers, 10);
        }
    }
}
