use clap::Parser;

#[derive(Parser, Clone, Debug)]
pub struct Config {
    /// Upstream permit feed, a public JSON array of vendor records
    #[clap(env, long, default_value = "https://data.sfgov.org/resource/rqzj-sfat.json")]
    pub dataset_url: String,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,

    /// Comma-separated list of allowed CORS origins
    #[clap(env, long, default_value = "http://localhost:8080")]
    pub origin_urls: String,

    #[clap(env, long, default_value_t = 10)]
    pub upstream_timeout_secs: u64,
}
