pub struct Config {
    pub port: u16,
    pub database_url: String,
}

impl Config {
    /// Reads `DATABASE_URL` (required) and `PORT` (default 3000) from the
    /// environment. Call after `dotenvy::dotenv()`.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set.");
        let port = match std::env::var("PORT") {
            Ok(port) => port.parse::<u16>().expect("PORT must be a valid number."),
            Err(_) => 3000,
        };
        Config { port, database_url }
    }
}
