use clap::Parser;
use trendle::application::FeedAnalysisService;
use trendle::cli::{format_fastest, format_hashtag_list, format_post_list, Cli, Commands};
use trendle::error::TrendleError;

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TrendleError> {
    match cli.command {
        Commands::Fastest { feed } => {
            let service = FeedAnalysisService::from_file(&feed)?;
            print!("{}", format_fastest(service.fastest_growing()?));
            Ok(())
        }
        Commands::Rank { feed } => {
            let service = FeedAnalysisService::from_file(&feed)?;
            print!("{}", format_post_list(&service.rank_by_popularity()));
            Ok(())
        }
        Commands::Filter { feed, pattern } => {
            let service = FeedAnalysisService::from_file(&feed)?;
            print!("{}", format_post_list(&service.filter(&pattern)?));
            Ok(())
        }
        Commands::Hashtags { feed } => {
            let service = FeedAnalysisService::from_file(&feed)?;
            print!("{}", format_hashtag_list(&service.hashtag_ranking()));
            Ok(())
        }
    }
}
