use clap::Parser;
use gift_matcher::config::Command;
use gift_matcher::core::CatalogSource;
use gift_matcher::utils::error::ErrorSeverity;
use gift_matcher::utils::{logger, validation::Validate};
use gift_matcher::{
    AppConfig, CatalogMatcher, CliConfig, DummyPaymentGateway, FileCatalogSource, GiftError,
    GiftShop, OrderOutcome, TerminalConsole,
};

fn main() {
    let cli = CliConfig::parse();

    // 載入配置（未指定時使用預設值）
    let config = match &cli.config {
        Some(path) => match AppConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => AppConfig::default(),
    };

    if cli.log_json {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli, config) {
        tracing::error!(
            "❌ gift-matcher failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(cli: &CliConfig, mut config: AppConfig) -> Result<(), GiftError> {
    if let Some(path) = &cli.catalog {
        config.catalog.path = path.clone();
    }
    config.validate()?;

    let source = FileCatalogSource::new(&config.catalog.path);
    let catalog = CatalogMatcher::load(source.read_catalog()?)?;
    tracing::info!(
        "📦 Loaded {} gifts from {}",
        catalog.len(),
        source.path().display()
    );

    if let Some(Command::Search {
        occasion,
        age,
        gender,
        json,
    }) = &cli.command
    {
        let matches = catalog.find_matches(occasion, *age, gender);
        if *json {
            println!("{}", serde_json::to_string_pretty(&matches)?);
        } else if matches.is_empty() {
            println!("No gift suggestions match your criteria.");
        } else {
            let currency = &config.display.currency_symbol;
            for item in matches {
                println!(
                    "[{}] {} - {}{:.2} -> {}",
                    item.id(),
                    item.name(),
                    currency,
                    item.price(),
                    item.description()
                );
            }
        }
        return Ok(());
    }

    let mut shop = GiftShop::new(
        &catalog,
        TerminalConsole::stdio(),
        DummyPaymentGateway::new(),
        config.shop_settings(),
    );

    match shop.run()? {
        OrderOutcome::Completed(order) => {
            tracing::info!("✅ Order placed for gift #{}", order.gift.id());
            if cli.receipt_json {
                println!("{}", serde_json::to_string_pretty(&order)?);
            }
        }
        outcome => tracing::info!("Order not placed: {:?}", outcome),
    }

    Ok(())
}
