//! Router and menu-loop behaviour, driven end to end with recording views
//! and scripted input.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use etf_research_cli::dispatch::{Resolution, Router};
use etf_research_cli::menu;
use etf_research_cli::prompt::ScriptedLineSource;
use etf_research_core::commands::MenuSignal;
use etf_research_core::error::{Error, Result};
use etf_research_core::views::{EtfViews, ExportFormat, FdsQuery, MoverCategory};

#[derive(Debug, Clone, PartialEq)]
enum ViewCall {
    Search {
        query: String,
        export: Option<ExportFormat>,
    },
    Overview {
        symbol: String,
        export: Option<ExportFormat>,
    },
    Holdings {
        symbol: String,
        limit: usize,
        export: Option<ExportFormat>,
    },
    Compare {
        symbols: Vec<String>,
        export: Option<ExportFormat>,
    },
    Screener {
        limit: usize,
        preset: String,
        export: Option<ExportFormat>,
    },
    TopMovers {
        category: MoverCategory,
        raw_args: Vec<String>,
    },
    Report {
        symbols: Vec<String>,
        filename: String,
        folder: PathBuf,
    },
    DatabaseSearch(FdsQuery),
}

/// Records every call; optionally fails each one to exercise containment.
#[derive(Default)]
struct RecordingViews {
    calls: RefCell<Vec<ViewCall>>,
    fail: bool,
}

impl RecordingViews {
    fn failing() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    fn calls(&self) -> Vec<ViewCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: ViewCall) -> Result<()> {
        self.calls.borrow_mut().push(call);
        if self.fail {
            return Err(Error::DataSource("scripted failure".to_string()));
        }
        Ok(())
    }
}

impl EtfViews for RecordingViews {
    fn search_by_name(&self, query: &str, export: Option<ExportFormat>) -> Result<()> {
        self.record(ViewCall::Search {
            query: query.to_string(),
            export,
        })
    }

    fn overview_by_symbol(&self, symbol: &str, export: Option<ExportFormat>) -> Result<()> {
        self.record(ViewCall::Overview {
            symbol: symbol.to_string(),
            export,
        })
    }

    fn holdings_by_symbol(
        &self,
        symbol: &str,
        limit: usize,
        export: Option<ExportFormat>,
    ) -> Result<()> {
        self.record(ViewCall::Holdings {
            symbol: symbol.to_string(),
            limit,
            export,
        })
    }

    fn compare_symbols(&self, symbols: &[String], export: Option<ExportFormat>) -> Result<()> {
        self.record(ViewCall::Compare {
            symbols: symbols.to_vec(),
            export,
        })
    }

    fn screen_by_preset(
        &self,
        limit: usize,
        preset: &str,
        export: Option<ExportFormat>,
    ) -> Result<()> {
        self.record(ViewCall::Screener {
            limit,
            preset: preset.to_string(),
            export,
        })
    }

    fn top_movers_by_category(&self, category: MoverCategory, raw_args: &[String]) -> Result<()> {
        self.record(ViewCall::TopMovers {
            category,
            raw_args: raw_args.to_vec(),
        })
    }

    fn generate_report(&self, symbols: &[String], filename: &str, folder: &Path) -> Result<()> {
        self.record(ViewCall::Report {
            symbols: symbols.to_vec(),
            filename: filename.to_string(),
            folder: folder.to_path_buf(),
        })
    }

    fn finance_database_search(&self, query: &FdsQuery) -> Result<()> {
        self.record(ViewCall::DatabaseSearch(query.clone()))
    }
}

fn router(views: &RecordingViews) -> Router<'_> {
    Router::new(
        views,
        vec!["etf_config".to_string(), "short_squeeze".to_string()],
        PathBuf::from("exports"),
    )
}

#[test]
fn test_empty_line_is_a_no_op_cycle() {
    let views = RecordingViews::default();
    let router = router(&views);

    for line in ["", "   ", "\t"] {
        assert_eq!(
            router.resolve_and_dispatch(line),
            Resolution::Recognized(None)
        );
    }
    assert!(views.calls().is_empty());
}

#[test]
fn test_local_commands_never_reach_the_views() {
    let views = RecordingViews::default();
    let router = router(&views);

    assert_eq!(
        router.resolve_and_dispatch("?"),
        Resolution::Recognized(None)
    );
    assert_eq!(
        router.resolve_and_dispatch("help"),
        Resolution::Recognized(None)
    );
    assert_eq!(
        router.resolve_and_dispatch("cls"),
        Resolution::Recognized(None)
    );
    assert_eq!(
        router.resolve_and_dispatch("q"),
        Resolution::Recognized(Some(MenuSignal::Back))
    );
    assert_eq!(
        router.resolve_and_dispatch("quit"),
        Resolution::Recognized(Some(MenuSignal::Quit))
    );
    assert_eq!(
        router.resolve_and_dispatch("reset"),
        Resolution::Recognized(Some(MenuSignal::Reset))
    );

    assert!(views.calls().is_empty());
}

#[test]
fn test_unknown_command_is_reported_not_dispatched() {
    let views = RecordingViews::default();
    let router = router(&views);

    assert_eq!(
        router.resolve_and_dispatch("zzz -e SPY"),
        Resolution::Unrecognized("zzz".to_string())
    );
    assert!(views.calls().is_empty());
}

#[test]
fn test_positional_shorthand_matches_explicit_flag() {
    let views = RecordingViews::default();
    let router = router(&views);

    router.resolve_and_dispatch("overview SPY");
    router.resolve_and_dispatch("overview -e SPY");

    let calls = views.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
    assert_eq!(
        calls[0],
        ViewCall::Overview {
            symbol: "SPY".to_string(),
            export: None,
        }
    );
}

#[test]
fn test_search_joins_words_and_parses_export() {
    let views = RecordingViews::default();
    let router = router(&views);

    router.resolve_and_dispatch("search -e vanguard growth --export csv");
    router.resolve_and_dispatch("search BlackRock");

    assert_eq!(
        views.calls(),
        vec![
            ViewCall::Search {
                query: "vanguard growth".to_string(),
                export: Some(ExportFormat::Csv),
            },
            ViewCall::Search {
                query: "BlackRock".to_string(),
                export: None,
            },
        ]
    );
}

#[test]
fn test_compare_list_is_uppercased_and_split() {
    let views = RecordingViews::default();
    let router = router(&views);

    router.resolve_and_dispatch("compare -e spy,qqq");

    assert_eq!(
        views.calls(),
        vec![ViewCall::Compare {
            symbols: vec!["SPY".to_string(), "QQQ".to_string()],
            export: None,
        }]
    );
}

#[test]
fn test_holdings_defaults_and_overrides() {
    let views = RecordingViews::default();
    let router = router(&views);

    router.resolve_and_dispatch("holdings SPY");
    router.resolve_and_dispatch("holdings -e SPY -l 5 --export xlsx");

    assert_eq!(
        views.calls(),
        vec![
            ViewCall::Holdings {
                symbol: "SPY".to_string(),
                limit: 20,
                export: None,
            },
            ViewCall::Holdings {
                symbol: "SPY".to_string(),
                limit: 5,
                export: Some(ExportFormat::Xlsx),
            },
        ]
    );
}

#[test]
fn test_missing_required_option_is_diagnosed_without_dispatch() {
    let views = RecordingViews::default();
    let router = router(&views);

    assert_eq!(
        router.resolve_and_dispatch("overview"),
        Resolution::Recognized(None)
    );
    assert_eq!(
        router.resolve_and_dispatch("compare --export csv"),
        Resolution::Recognized(None)
    );
    assert!(views.calls().is_empty());
}

#[test]
fn test_invalid_export_choice_is_diagnosed_without_dispatch() {
    let views = RecordingViews::default();
    let router = router(&views);

    assert_eq!(
        router.resolve_and_dispatch("overview -e SPY --export pdf"),
        Resolution::Recognized(None)
    );
    assert!(views.calls().is_empty());
}

#[test]
fn test_help_request_suppresses_validation() {
    let views = RecordingViews::default();
    let router = router(&views);

    // Required options are missing in every one of these
    assert_eq!(
        router.resolve_and_dispatch("search -h"),
        Resolution::Recognized(None)
    );
    assert_eq!(
        router.resolve_and_dispatch("compare --export csv -h"),
        Resolution::Recognized(None)
    );
    // A help request after an unknown flag still wins
    assert_eq!(
        router.resolve_and_dispatch("holdings --bogus -h"),
        Resolution::Recognized(None)
    );
    assert_eq!(
        router.resolve_and_dispatch("fds --help"),
        Resolution::Recognized(None)
    );

    assert!(views.calls().is_empty());
}

#[test]
fn test_screener_defaults_and_preset_restriction() {
    let views = RecordingViews::default();
    let router = router(&views);

    router.resolve_and_dispatch("screener");
    router.resolve_and_dispatch("screener --preset short_squeeze -n 5");
    // Outside the discovered set
    router.resolve_and_dispatch("screener --preset momentum");

    assert_eq!(
        views.calls(),
        vec![
            ViewCall::Screener {
                limit: 20,
                preset: "etf_config".to_string(),
                export: None,
            },
            ViewCall::Screener {
                limit: 5,
                preset: "short_squeeze".to_string(),
                export: None,
            },
        ]
    );
}

#[test]
fn test_movers_forward_raw_residual_tokens() {
    let views = RecordingViews::default();
    let router = router(&views);

    router.resolve_and_dispatch("gainers -n 7");
    router.resolve_and_dispatch("decliners");
    router.resolve_and_dispatch("active --whatever works");

    assert_eq!(
        views.calls(),
        vec![
            ViewCall::TopMovers {
                category: MoverCategory::Gainers,
                raw_args: vec!["-n".to_string(), "7".to_string()],
            },
            ViewCall::TopMovers {
                category: MoverCategory::Decliners,
                raw_args: vec![],
            },
            ViewCall::TopMovers {
                category: MoverCategory::Active,
                raw_args: vec!["--whatever".to_string(), "works".to_string()],
            },
        ]
    );
}

#[test]
fn test_pir_parses_symbols_filename_and_folder() {
    let views = RecordingViews::default();
    let router = router(&views);

    router.resolve_and_dispatch("pir -e spy,qqq --filename weekly --folder out");

    assert_eq!(
        views.calls(),
        vec![ViewCall::Report {
            symbols: vec!["SPY".to_string(), "QQQ".to_string()],
            filename: "weekly".to_string(),
            folder: PathBuf::from("out"),
        }]
    );
}

#[test]
fn test_pir_defaults_filename_and_folder() {
    let views = RecordingViews::default();
    let router = router(&views);

    router.resolve_and_dispatch("pir voo");

    let calls = views.calls();
    assert_eq!(calls.len(), 1);
    match &calls[0] {
        ViewCall::Report {
            symbols,
            filename,
            folder,
        } => {
            assert_eq!(symbols, &vec!["VOO".to_string()]);
            assert!(filename.starts_with("ETF_report_"));
            assert_eq!(folder, &PathBuf::from("exports"));
        }
        other => panic!("expected a report call, got {other:?}"),
    }
}

#[test]
fn test_fds_category_and_amount() {
    let views = RecordingViews::default();
    let router = router(&views);

    router.resolve_and_dispatch("fds -c ETF -a 5");

    assert_eq!(
        views.calls(),
        vec![ViewCall::DatabaseSearch(FdsQuery {
            category: Some(vec!["ETF".to_string()]),
            amount: 5,
            ..FdsQuery::default()
        })]
    );
}

#[test]
fn test_fds_multi_word_filters_and_flags() {
    let views = RecordingViews::default();
    let router = router(&views);

    router.resolve_and_dispatch("fds -c Equity Growth -x -o");

    assert_eq!(
        views.calls(),
        vec![ViewCall::DatabaseSearch(FdsQuery {
            category: Some(vec!["Equity".to_string(), "Growth".to_string()]),
            include_exchanges: false,
            options_only: true,
            ..FdsQuery::default()
        })]
    );
}

#[test]
fn test_view_failure_stays_in_the_menu() {
    let views = RecordingViews::failing();
    let router = router(&views);

    assert_eq!(
        router.resolve_and_dispatch("overview SPY"),
        Resolution::Recognized(None)
    );
    // The menu loop keeps going after the failure
    let mut source = ScriptedLineSource::new(["overview SPY", "holdings -e VTI", "q"]);
    let signal = menu::run(&mut source, &router, "").unwrap();

    assert_eq!(signal, MenuSignal::Back);
    assert_eq!(views.calls().len(), 3);
}

#[test]
fn test_menu_returns_back_on_q() {
    let views = RecordingViews::default();
    let router = router(&views);

    let mut source = ScriptedLineSource::new(["q"]);
    let signal = menu::run(&mut source, &router, "").unwrap();

    assert_eq!(signal, MenuSignal::Back);
    assert!(views.calls().is_empty());
}

#[test]
fn test_menu_treats_end_of_input_as_quit() {
    let views = RecordingViews::default();
    let router = router(&views);

    let mut source = ScriptedLineSource::new(Vec::<String>::new());
    let signal = menu::run(&mut source, &router, "").unwrap();

    assert_eq!(signal, MenuSignal::Quit);
}

#[test]
fn test_menu_skips_blank_lines_and_unknown_commands() {
    let views = RecordingViews::default();
    let router = router(&views);

    let mut source = ScriptedLineSource::new(["", "   ", "screner", "quit"]);
    let signal = menu::run(&mut source, &router, "").unwrap();

    assert_eq!(signal, MenuSignal::Quit);
    assert!(views.calls().is_empty());
}

#[test]
fn test_menu_propagates_reset() {
    let views = RecordingViews::default();
    let router = router(&views);

    let mut source = ScriptedLineSource::new(["overview SPY", "reset"]);
    let signal = menu::run(&mut source, &router, "").unwrap();

    assert_eq!(signal, MenuSignal::Reset);
    assert_eq!(views.calls().len(), 1);
}
