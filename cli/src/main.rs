mod error;
mod report;
mod statistics;

use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use job_scraper::{headhunter, superjob, VacancySource};

use crate::error::{Error, Result};
use crate::statistics::{collect_statistics, Settings, DEFAULT_LANGUAGES};

#[derive(Parser, Debug)]
#[command(author, version, about = "Average programmer salaries per language on hh.ru and superjob.ru", long_about = None)]
struct Cli {
    /// Programming languages to collect statistics for
    #[arg(long = "language", default_values = DEFAULT_LANGUAGES)]
    languages: Vec<String>,

    /// Job boards to query
    #[arg(long = "source", value_enum, default_values = ["hh", "sj"])]
    sources: Vec<Source>,

    /// Text put in front of every language in the search query
    #[arg(long, default_value = "программист")]
    query_prefix: String,

    /// Region label used in the report titles
    #[arg(long, default_value = "Moscow")]
    region: String,

    /// Languages fetched at the same time per job board
    #[arg(long, default_value_t = 4)]
    concurrency: usize,

    /// Abort on the first failed request instead of skipping the language
    #[arg(long)]
    fail_fast: bool,

    /// Output format of the statistics
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// hh.ru area id
    #[arg(long, default_value_t = 1)]
    hh_area: u32,

    /// Only consider hh.ru vacancies published within this many days
    #[arg(long, default_value_t = 30)]
    hh_period: u32,

    /// Vacancies requested per hh.ru result page
    #[arg(long, default_value_t = 100)]
    hh_per_page: u32,

    /// Currency code hh.ru salaries are estimated in
    #[arg(long, default_value = "RUR")]
    hh_currency: String,

    /// Base URL of the hh.ru API
    #[arg(long, default_value = "https://api.hh.ru")]
    hh_url: String,

    /// Secret key of a superjob.ru application
    #[arg(long, env = "SJ_KEY", hide_env_values = true)]
    sj_key: Option<String>,

    /// Town filter of superjob.ru searches
    #[arg(long, default_value = "москва")]
    sj_town: String,

    /// Vacancies requested per superjob.ru result page
    #[arg(long, default_value_t = 100)]
    sj_count: u32,

    /// Currency code superjob.ru salaries are estimated in
    #[arg(long, default_value = "rub")]
    sj_currency: String,

    /// Base URL of the superjob.ru API
    #[arg(long, default_value = "https://api.superjob.ru")]
    sj_url: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Source {
    /// hh.ru
    Hh,
    /// superjob.ru
    Sj,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Table,
    Json,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            languages: self.languages.clone(),
            query_prefix: self.query_prefix.clone(),
            region: self.region.clone(),
            concurrency: self.concurrency,
            fail_fast: self.fail_fast,
        }
    }

    fn source(&self, source: Source) -> Result<Box<dyn VacancySource>> {
        match source {
            Source::Hh => {
                let config = headhunter::Config {
                    base_url: self.hh_url.clone(),
                    area: self.hh_area,
                    period: self.hh_period,
                    per_page: self.hh_per_page,
                    currency: self.hh_currency.clone(),
                };
                Ok(Box::new(headhunter::HeadHunter::new(config)?))
            }
            Source::Sj => {
                let api_key = self.sj_key.clone().ok_or(Error::MissingApiKey)?;
                let config = superjob::Config {
                    base_url: self.sj_url.clone(),
                    town: self.sj_town.clone(),
                    count: self.sj_count,
                    currency: self.sj_currency.clone(),
                    ..superjob::Config::new(api_key)
                };
                Ok(Box::new(superjob::SuperJob::new(config)?))
            }
        }
    }
}

async fn run(args: Cli) -> Result<()> {
    let mut sources: Vec<(Source, Box<dyn VacancySource>)> = Vec::with_capacity(args.sources.len());
    for source in &args.sources {
        if !sources.iter().any(|(s, _)| s == source) {
            sources.push((*source, args.source(*source)?));
        }
    }
    let settings = args.settings();
    log::info!(
        "collecting statistics for {} languages from {} sources",
        settings.languages.len(),
        sources.len()
    );
    let reports = futures::future::try_join_all(
        sources
            .iter()
            .map(|(_, source)| collect_statistics(source.as_ref(), &settings)),
    )
    .await?;
    let output = match args.format {
        Format::Table => report::render_tables(&reports),
        Format::Json => report::render_json(&reports)?,
    };
    println!("{}", output);
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    if let Err(e) = run(args).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
