use colored::*;
use compat_filter::bootstrap::initial_phrase;
use compat_filter::config::Config;
use compat_filter::report::FilterReport;
use compat_filter::table::HtmlDocument;
use compat_filter::{logging, tui, Cli, FilterError, Query, Result, RowFilter};
use std::fs;
use std::io::IsTerminal;
use std::path::Path;

fn main() {
    let cli = Cli::parse_args();

    if let Err(err) = run(cli) {
        logging::error_log(&format!("{:?}", err));
        eprintln!("{}", err);
        if let Some(suggestion) = err.get_recovery_suggestion() {
            eprintln!("{}", suggestion.yellow());
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.debug {
        let log_path = logging::init_debug_logging()?;
        eprintln!("Debug log: {}", log_path.display());
    }

    let config = Config::resolve(cli.config.as_deref())?;
    if !cli.validate_with_limit(config.query.max_phrase_length) {
        return Err(FilterError::InvalidArguments(
            "see the messages above".to_string(),
        ));
    }

    let table_id = cli.table_id(&config);
    let mut document = HtmlDocument::load(&cli.file, &table_id)?;
    let phrase = initial_phrase(
        &cli.phrase_source(),
        &config.query.tracking_params,
        config.query.max_phrase_length,
    )?;
    let filter = RowFilter::new()?;

    if cli.interactive {
        let app = tui::App::new(document, filter, phrase)
            .with_max_phrase_length(config.query.max_phrase_length);
        let app = tui::run(app)?;
        if let Some(output) = &cli.output {
            write_output(output, &app.document, &config)?;
        }
        let label = app.count_label();
        if !label.is_empty() {
            println!("{}", label);
        }
        return Ok(());
    }

    let report = FilterReport::build(&mut document, &filter, &Query::parse(&phrase));
    match &cli.output {
        Some(output) => write_output(output, &document, &config)?,
        None => {
            let color = std::io::stdout().is_terminal();
            for line in report.lines(color) {
                println!("{}", line);
            }
        }
    }

    if !report.label.is_empty() {
        if report.match_count == 0 {
            logging::warn_log(&format!("No games match '{}'", phrase));
        }
        eprintln!("{}", report.label.green().bold());
    }

    Ok(())
}

fn write_output(path: &Path, document: &HtmlDocument, config: &Config) -> Result<()> {
    fs::write(path, document.render(&config.output.hidden_style)).map_err(|e| {
        FilterError::file_access_error(&path.display().to_string(), &e.to_string())
    })?;
    logging::info_log(&format!("Wrote filtered document to {}", path.display()));
    Ok(())
}
