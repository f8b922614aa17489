/// Runtime configuration, loaded once at startup from the environment
/// (a `.env` file is honored via dotenvy). Provider credentials are
/// injected secrets, never source literals.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub jwt_secret: String,
    pub providers: ProvidersConfig,
}

/// The ordered generation backends: a primary flat-envelope endpoint,
/// then a Gemini-style endpoint tried when the primary fails.
#[derive(Debug, Clone)]
pub struct ProvidersConfig {
    pub primary_url: String,
    pub primary_api_key: String,
    pub primary_model: String,
    pub gemini_url: String,
    pub gemini_api_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:3000"),
            jwt_secret: require("JWT_SECRET"),
            providers: ProvidersConfig {
                primary_url: require("GENERATION_API_URL"),
                primary_api_key: require("GENERATION_API_KEY"),
                primary_model: env_or("GENERATION_MODEL", "gemini-1.5-flash"),
                gemini_url: env_or(
                    "GEMINI_API_URL",
                    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest:generateContent",
                ),
                gemini_api_key: require("GEMINI_API_KEY"),
            },
        }
    }
}

fn require(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| panic!("{name} must be set!"))
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
