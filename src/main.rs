use anyhow::Context;
use relfind::cli::{CliOptions, USAGE};
use relfind::config::FinderConfig;
use relfind::logging::{self, Logger};
use relfind::{App, EditorHost, TextDocument, TuiApplication};

fn main() -> anyhow::Result<()> {
    let options = CliOptions::parse(std::env::args().skip(1))?;

    if options.show_help {
        println!("{}", USAGE);
        return Ok(());
    }
    if options.show_version {
        println!("relfind {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = FinderConfig::load(options.config_path.as_deref())
        .context("failed to load configuration")?
        .merged_with(&options.overrides);

    // TUI 実行中は stderr へ出すと画面が崩れるため、ファイル指定時のみ記録する
    let mut logger = Logger::new(config.log_level).with_stderr(false);
    if let Some(path) = config.log_path()? {
        logger = logger.with_file_output(path);
    }
    logging::init(logger).map_err(|err| anyhow::anyhow!("failed to install logger: {}", err))?;

    let mut document = match &options.file {
        Some(path) => {
            let path = relfind::config::expand_path(path)?;
            TextDocument::open(&path).with_context(|| format!("cannot open {}", path.display()))?
        }
        None => TextDocument::new(),
    };
    document.set_cursor(options.cursor);

    let mut app = App::new(document, &config);
    if let Some(query) = options.find.as_deref() {
        app.start_search(config.default_mode, Some(query));
    }

    let mut tui = TuiApplication::new(app);
    tui.run()?;

    let app = tui.into_app();
    let cursor = app.document().cursor();
    println!("{}:{}", cursor.line + 1, cursor.ch + 1);
    Ok(())
}
