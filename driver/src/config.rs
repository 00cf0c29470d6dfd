use std::time::Duration;

use anyhow::{bail, Context};

pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 60;
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(33);
pub const DEFAULT_GENERATIONS: u64 = 200;

pub const MIN_SIDE: usize = 3;
pub const MAX_SIDE: usize = 1000;
pub const MIN_INTERVAL: Duration = Duration::from_millis(10);
pub const MAX_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub interval: Duration,
    pub seed: Option<u64>,
    pub generations: u64,
    /// Print a frame every N generations; 0 prints only the final frame.
    pub print_every: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            interval: DEFAULT_INTERVAL,
            seed: None,
            generations: DEFAULT_GENERATIONS,
            print_every: 0,
        }
    }
}

impl Config {
    /// Parses `--flag value` pairs. Sizes and interval are clamped to the
    /// same ranges the interactive front end allows.
    pub fn from_args<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            let value = args
                .next()
                .with_context(|| format!("missing value for {flag}"))?;
            match flag.as_str() {
                "--width" => config.width = clamp_side(parse(&flag, &value)?),
                "--height" => config.height = clamp_side(parse(&flag, &value)?),
                "--interval-ms" => {
                    let millis = parse(&flag, &value)?;
                    config.interval = clamp_interval(Duration::from_millis(millis));
                }
                "--seed" => config.seed = Some(parse(&flag, &value)?),
                "--generations" => config.generations = parse(&flag, &value)?,
                "--print-every" => config.print_every = parse(&flag, &value)?,
                _ => bail!("unknown option {flag}"),
            }
        }

        Ok(config)
    }
}

pub fn clamp_side(side: usize) -> usize {
    side.clamp(MIN_SIDE, MAX_SIDE)
}

pub fn clamp_interval(interval: Duration) -> Duration {
    interval.clamp(MIN_INTERVAL, MAX_INTERVAL)
}

fn parse<T>(flag: &str, value: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse()
        .with_context(|| format!("invalid value {value:?} for {flag}"))
}
