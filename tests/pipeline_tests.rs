//! End-to-end pipeline tests over tables loaded from disk.

mod support;

use rust_decimal_macros::dec;

use freebet::config::Config;
use freebet::domain::{ConversionMode, JoinKind, Selection, SuspectReason};
use freebet::error::{Error, InputError};
use freebet::input::load_table;
use freebet::pipeline::{self, ExchangeTable, RunReport};
use freebet::report::{save_ranked, save_suspects};

use support::{read, Fixtures, BOOKIE_HEADER, EXCHANGE_HEADER};

fn run_config(config: &Config) -> freebet::error::Result<RunReport> {
    let bookmaker = load_table(&config.bookmaker_path())?;
    let mut exchanges = Vec::new();
    for (name, path) in config.exchange_paths() {
        exchanges.push(ExchangeTable {
            name,
            rows: load_table(&path)?,
        });
    }
    pipeline::run(&bookmaker, &exchanges, &config.pipeline_options())
}

fn config_for(fx: &Fixtures) -> Config {
    let mut config = Config::default();
    config.inputs.dir = fx.path().to_path_buf();
    config
}

#[test]
fn test_standard_run_counts() {
    let fx = Fixtures::standard();
    let report = run_config(&config_for(&fx)).unwrap();
    let s = &report.summary;

    assert_eq!(s.bookmaker_rows, 4);
    assert_eq!(s.exchange_rows, 3);
    assert_eq!(s.bookmaker_quotes, 12);
    assert_eq!(s.exchange_quotes, 9);
    assert_eq!(s.joined, 9);
    assert_eq!(s.joined_exact, 6);
    assert_eq!(s.joined_swapped, 3);
    assert_eq!(s.joined_fuzzy, 0);
    assert_eq!(s.unmatched, 3);
    assert_eq!(s.plausible, 8);
    assert_eq!(s.suspect, 1);
    assert_eq!(s.evaluated, 8);
    assert_eq!(s.reported, 8);
}

#[test]
fn test_reversed_fixture_is_ranked_first() {
    let fx = Fixtures::standard();
    let report = run_config(&config_for(&fx)).unwrap();

    // Everton at 4.50 laid at 4.60 on Smarkets (2%) extracts ~74.9%
    let top = &report.ranked[0];
    assert_eq!(top.pair.match_label, "Leeds United vs Everton");
    assert_eq!(top.pair.selection, Selection::Away);
    assert_eq!(top.pair.exchange_name, "Smarkets");
    assert_eq!(top.pair.lay_price, dec!(4.60));
    assert_eq!(top.pair.join, JoinKind::Swapped);
    assert_eq!(top.extraction_pct.round_dp(1), dec!(74.9));

    let sorted = report
        .ranked
        .windows(2)
        .all(|w| w[0].extraction_pct >= w[1].extraction_pct);
    assert!(sorted);
}

#[test]
fn test_reference_pair_matches_hand_calculation() {
    let fx = Fixtures::standard();
    let report = run_config(&config_for(&fx)).unwrap();

    let arsenal_home = report
        .ranked
        .iter()
        .find(|e| e.pair.match_label == "Arsenal vs Chelsea" && e.pair.selection == Selection::Home)
        .expect("reference pair ranked");
    assert_eq!(arsenal_home.pair.commission_pct, dec!(5));
    assert_eq!(arsenal_home.lay_stake.round_dp(3), dec!(6.383));
    assert_eq!(arsenal_home.liability.round_dp(3), dec!(8.936));
    assert_eq!(arsenal_home.guaranteed_profit.round_dp(3), dec!(6.064));
    assert_eq!(arsenal_home.extraction_pct.round_dp(1), dec!(60.6));
}

#[test]
fn test_implausible_lay_goes_to_suspects() {
    let fx = Fixtures::standard();
    let report = run_config(&config_for(&fx)).unwrap();

    assert_eq!(report.suspects.len(), 1);
    let suspect = &report.suspects[0];
    assert_eq!(suspect.pair.match_label, "Spurs vs Fulham");
    assert_eq!(suspect.pair.selection, Selection::Away);
    assert!(matches!(suspect.reason, SuspectReason::PriceRatio { .. }));
    assert!(report
        .ranked
        .iter()
        .all(|e| !(e.pair.match_label == "Spurs vs Fulham" && e.pair.selection == Selection::Away)));
}

#[test]
fn test_swapping_exchange_orientation_gives_same_ranking() {
    let straight = Fixtures::new();
    straight.write("skybet_scraper.csv", BOOKIE_HEADER, &["Arsenal,Chelsea,2.50,3.40,2.90"]);
    straight.write("smarkets_exchange_scraper.csv", EXCHANGE_HEADER, &[]);
    straight.write(
        "betfair_exchange_scraper.csv",
        EXCHANGE_HEADER,
        &["Arsenal,Chelsea,,,,2.40,3.45,2.94"],
    );

    let reversed = Fixtures::new();
    reversed.write("skybet_scraper.csv", BOOKIE_HEADER, &["Arsenal,Chelsea,2.50,3.40,2.90"]);
    reversed.write("smarkets_exchange_scraper.csv", EXCHANGE_HEADER, &[]);
    reversed.write(
        "betfair_exchange_scraper.csv",
        EXCHANGE_HEADER,
        &["Chelsea,Arsenal,,,,2.94,3.45,2.40"],
    );

    let a = run_config(&config_for(&straight)).unwrap();
    let b = run_config(&config_for(&reversed)).unwrap();

    assert_eq!(a.ranked.len(), 3);
    assert_eq!(a.ranked.len(), b.ranked.len());
    for (x, y) in a.ranked.iter().zip(&b.ranked) {
        assert_eq!(x.pair.selection, y.pair.selection);
        assert_eq!(x.pair.lay_price, y.pair.lay_price);
        assert_eq!(x.guaranteed_profit, y.guaranteed_profit);
    }
}

#[test]
fn test_best_lay_across_exchanges_wins() {
    let fx = Fixtures::new();
    fx.write("skybet_scraper.csv", BOOKIE_HEADER, &["Arsenal,Chelsea,2.50,,"]);
    fx.write(
        "smarkets_exchange_scraper.csv",
        EXCHANGE_HEADER,
        &["Arsenal,Chelsea,,,,2.36,,"],
    );
    fx.write(
        "betfair_exchange_scraper.csv",
        EXCHANGE_HEADER,
        &["Arsenal,Chelsea,,,,2.40,,"],
    );

    let report = run_config(&config_for(&fx)).unwrap();
    assert_eq!(report.ranked.len(), 1);
    assert_eq!(report.ranked[0].pair.exchange_name, "Smarkets");
    assert_eq!(report.ranked[0].pair.lay_price, dec!(2.36));
}

#[test]
fn test_unparseable_cells_are_dropped() {
    let fx = Fixtures::new();
    fx.write(
        "skybet_scraper.csv",
        BOOKIE_HEADER,
        &["Arsenal,Chelsea,13/8,SUSP,2.90", ",Chelsea,2.0,3.0,4.0"],
    );
    fx.write("smarkets_exchange_scraper.csv", EXCHANGE_HEADER, &[]);
    fx.write(
        "betfair_exchange_scraper.csv",
        EXCHANGE_HEADER,
        &["Arsenal,Chelsea,,,,2.40,3.45,2.94"],
    );

    let report = run_config(&config_for(&fx)).unwrap();
    assert_eq!(report.summary.bookmaker_quotes, 1);
    assert_eq!(report.ranked.len(), 1);
    assert_eq!(report.ranked[0].pair.selection, Selection::Away);
}

#[test]
fn test_cash_bet_mode_ranks_qualifying_losses() {
    let fx = Fixtures::standard();
    let mut config = config_for(&fx);
    config.ranking.mode = ConversionMode::CashBet;
    config.ranking.min_extraction_pct = dec!(-100);

    let report = run_config(&config).unwrap();
    assert_eq!(report.ranked.len(), 8);
    // only the back price above its lay price turns a profit
    let top = &report.ranked[0];
    assert_eq!(top.pair.match_label, "Arsenal vs Chelsea");
    assert_eq!(top.pair.selection, Selection::Home);
    assert_eq!(top.guaranteed_profit.round_dp(2), dec!(0.11));
    assert!(report.ranked[1..].iter().all(|e| e.guaranteed_profit < dec!(0)));
}

#[test]
fn test_reports_written_and_suspects_skipped_when_empty() {
    let fx = Fixtures::new();
    fx.write("skybet_scraper.csv", BOOKIE_HEADER, &["Arsenal,Chelsea,2.50,3.40,2.90"]);
    fx.write("smarkets_exchange_scraper.csv", EXCHANGE_HEADER, &[]);
    fx.write(
        "betfair_exchange_scraper.csv",
        EXCHANGE_HEADER,
        &["Arsenal,Chelsea,,,,2.40,3.45,2.94"],
    );
    let config = config_for(&fx);
    let report = run_config(&config).unwrap();

    save_ranked(&config.ranked_path(), &report.ranked).unwrap();
    let wrote = save_suspects(&config.suspects_path(), &report.suspects).unwrap();

    assert!(!wrote);
    assert!(!config.suspects_path().exists());
    let text = read(&config.ranked_path());
    assert!(text.contains("Arsenal vs Chelsea,Home,Betfair,2.5,2.4,5,6.383,8.9362,6.0638,60.6383"));
}

#[test]
fn test_missing_bookmaker_table_lists_siblings() {
    let fx = Fixtures::new();
    fx.write("other.csv", BOOKIE_HEADER, &[]);

    let err = run_config(&config_for(&fx)).unwrap_err();
    match err {
        Error::Input(InputError::Missing { path, available, .. }) => {
            assert!(path.ends_with("skybet_scraper.csv"));
            assert_eq!(available.len(), 1);
            assert!(available[0].ends_with("other.csv"));
        }
        other => panic!("expected missing input, got {other:?}"),
    }
}

#[test]
fn test_unknown_exchange_rejected_when_configured() {
    let fx = Fixtures::new();
    fx.write("skybet_scraper.csv", BOOKIE_HEADER, &["Arsenal,Chelsea,2.50,3.40,2.90"]);
    fx.write("mb.csv", EXCHANGE_HEADER, &["Arsenal,Chelsea,,,,2.40,3.45,2.94"]);

    let toml = format!(
        "[inputs]\ndir = {:?}\n\n[[inputs.exchanges]]\nname = \"Matchbook\"\nfile = \"mb.csv\"\n\n[commission]\nunknown = \"reject\"\n",
        fx.path().display().to_string()
    );
    let config = Config::parse_toml(&toml).unwrap();

    assert!(matches!(
        run_config(&config),
        Err(Error::Input(InputError::UnknownExchange { .. }))
    ));
}
