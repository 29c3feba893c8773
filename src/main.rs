use clap::Parser;
use qiita_publish::application::PublishArticlesService;
use qiita_publish::cli::{format_summary, Cli};
use qiita_publish::error::QiitaError;
use qiita_publish::infrastructure::{PublisherConfig, QiitaClient};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), QiitaError> {
    let access_token = PublisherConfig::access_token_from_env()?;
    let config = cli.into_config(access_token);

    let client = QiitaClient::new(&config)?;
    let service = PublishArticlesService::new(client).with_options(config.private, config.tweet);

    let summary = service.execute(&config.articles_dir)?;
    if summary.total() > 0 {
        println!("{}", format_summary(&summary));
    }
    Ok(())
}
